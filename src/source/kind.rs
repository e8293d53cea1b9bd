//! Provider variants and icon identifiers.
//!
//! Every [`Source`](super::Source) carries a [`SourceKind`] tag.  The tag fixes
//! the icon, whether the source can be swiped away, and, for search sources,
//! the query the source was built from.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key prefix for Dribbble search sources.
pub const DRIBBBLE_QUERY_PREFIX: &str = "DRIBBBLE_QUERY_";

/// Key prefix for Designer News search sources.
pub const DESIGNER_NEWS_QUERY_PREFIX: &str = "DESIGNER_NEWS_QUERY_";

/// Sort order shared by every Dribbble search source.
pub const DRIBBBLE_SEARCH_SORT_ORDER: i32 = 400;

/// Sort order shared by every Designer News search source.
pub const DESIGNER_NEWS_SEARCH_SORT_ORDER: i32 = 200;

/// Opaque icon identifier, resolved to an asset by the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Icon {
    Dribbble,
    DesignerNews,
}

impl Icon {
    /// Stable asset name, e.g. for looking up a drawable or an image file.
    pub fn resource_name(self) -> &'static str {
        match self {
            Icon::Dribbble => "ic_dribbble",
            Icon::DesignerNews => "ic_designer_news",
        }
    }
}

/// The closed set of source variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SourceKind {
    /// A built-in Dribbble feed.
    Dribbble,
    /// A user query against Dribbble.
    DribbbleSearch { query: String },
    /// A built-in Designer News feed.
    DesignerNews,
    /// A user query against Designer News.
    DesignerNewsSearch { query: String },
}

impl SourceKind {
    /// The plain (non-search) variant for a provider icon.
    pub fn plain(icon: Icon) -> Self {
        match icon {
            Icon::Dribbble => SourceKind::Dribbble,
            Icon::DesignerNews => SourceKind::DesignerNews,
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            SourceKind::Dribbble | SourceKind::DribbbleSearch { .. } => Icon::Dribbble,
            SourceKind::DesignerNews | SourceKind::DesignerNewsSearch { .. } => {
                Icon::DesignerNews
            }
        }
    }

    /// Search sources can be removed by the user; built-in feeds cannot.
    pub fn is_swipe_dismissable(&self) -> bool {
        match self {
            SourceKind::DribbbleSearch { .. } | SourceKind::DesignerNewsSearch { .. } => true,
            SourceKind::Dribbble | SourceKind::DesignerNews => false,
        }
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            SourceKind::DribbbleSearch { query } | SourceKind::DesignerNewsSearch { query } => {
                Some(query)
            }
            SourceKind::Dribbble | SourceKind::DesignerNews => None,
        }
    }
}
