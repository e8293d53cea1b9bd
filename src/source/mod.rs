//! The content source model.
//!
//! A [`Source`] is one selectable entry in the source list: a built-in
//! provider feed or a user search query.  It carries display metadata and a
//! single mutable flag, `active`, which records whether the user has the
//! source switched on.
//!
//! ## For contributors — adding a new provider
//!
//! 1. Add an [`Icon`] variant and give it a resource name.
//! 2. Add the plain and search variants to [`SourceKind`] and extend its
//!    matches (the compiler will point at every one).
//! 3. Add a key prefix and search sort order next to the existing ones in
//!    `kind.rs`, plus constructors here.
//!
//! Ordering lives in `ordering.rs`; nothing else needs to change.

mod kind;
mod ordering;
#[cfg(feature = "serde")]
mod stored;

pub use kind::{
    Icon, SourceKind, DESIGNER_NEWS_QUERY_PREFIX, DESIGNER_NEWS_SEARCH_SORT_ORDER,
    DRIBBBLE_QUERY_PREFIX, DRIBBBLE_SEARCH_SORT_ORDER,
};
pub use ordering::{by_sort_order, sort_sources};

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
pub use stored::{StoredSource, StoredSourceError};

/// One content source.
///
/// Everything except `active` is fixed at construction.  Key uniqueness is
/// the owning collection's job; no validation happens here.
///
/// ## Equality
///
/// Two sources are equal when key, sort order, name, icon and active flag all
/// match.  The variant only takes part through the icon it implies, so a
/// plain Dribbble source and a Dribbble search with the same fields compare
/// equal.
///
/// ## Serialization
///
/// With the `serde` feature a source is written as a flat record of its five
/// fields (see `stored.rs`).  Reading one back goes through the constructors,
/// so a search key always yields a well-formed search source.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "StoredSource", into = "StoredSource")
)]
pub struct Source {
    key: String,
    sort_order: i32,
    name: String,
    active: bool,
    kind: SourceKind,
}

impl Source {
    /// Create a plain provider source; the provider is picked by `icon`.
    pub fn new(
        key: impl Into<String>,
        sort_order: i32,
        name: impl Into<String>,
        icon: Icon,
        active: bool,
    ) -> Self {
        Self {
            key: key.into(),
            sort_order,
            name: name.into(),
            active,
            kind: SourceKind::plain(icon),
        }
    }

    /// A built-in Dribbble feed.
    pub fn dribbble(
        key: impl Into<String>,
        sort_order: i32,
        name: impl Into<String>,
        active: bool,
    ) -> Self {
        Self::new(key, sort_order, name, Icon::Dribbble, active)
    }

    /// A built-in Designer News feed.
    pub fn designer_news(
        key: impl Into<String>,
        sort_order: i32,
        name: impl Into<String>,
        active: bool,
    ) -> Self {
        Self::new(key, sort_order, name, Icon::DesignerNews, active)
    }

    /// A search against Dribbble.
    ///
    /// The key is [`DRIBBBLE_QUERY_PREFIX`] followed by the raw query; nothing
    /// is escaped, so two queries can in principle produce the same key.
    pub fn dribbble_search(query: impl Into<String>, active: bool) -> Self {
        Self::search(
            SourceKind::DribbbleSearch { query: query.into() },
            DRIBBBLE_QUERY_PREFIX,
            DRIBBBLE_SEARCH_SORT_ORDER,
            active,
        )
    }

    /// A search against Designer News.  Same key rules as
    /// [`dribbble_search`](Self::dribbble_search).
    pub fn designer_news_search(query: impl Into<String>, active: bool) -> Self {
        Self::search(
            SourceKind::DesignerNewsSearch { query: query.into() },
            DESIGNER_NEWS_QUERY_PREFIX,
            DESIGNER_NEWS_SEARCH_SORT_ORDER,
            active,
        )
    }

    fn search(kind: SourceKind, prefix: &str, sort_order: i32, active: bool) -> Self {
        let query = kind.query().unwrap_or_default();
        let key = format!("{prefix}{query}");
        let name = format!("“{query}”");
        Self {
            key,
            sort_order,
            name,
            active,
            kind,
        }
    }

    /// Rebuild a search source from a stored key.
    ///
    /// Returns `None` when the key carries neither search prefix; built-in
    /// feeds are restored from their static metadata instead.
    pub fn from_search_key(key: &str, active: bool) -> Option<Self> {
        if let Some(query) = key.strip_prefix(DRIBBBLE_QUERY_PREFIX) {
            Some(Self::dribbble_search(query, active))
        } else {
            key.strip_prefix(DESIGNER_NEWS_QUERY_PREFIX)
                .map(|query| Self::designer_news_search(query, active))
        }
    }

    // -- accessors -----------------------------------------------------------

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> Icon {
        self.kind.icon()
    }

    pub fn kind(&self) -> &SourceKind {
        &self.kind
    }

    /// The search query, for search sources only.
    pub fn query(&self) -> Option<&str> {
        self.kind.query()
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Whether the user may remove this source with a swipe.
    pub fn is_swipe_dismissable(&self) -> bool {
        self.kind.is_swipe_dismissable()
    }
}

// ---------------------------------------------------------------------------
// Value equality over key, sort order, name, icon and active
// ---------------------------------------------------------------------------

impl PartialEq for Source {
    fn eq(&self, other: &Self) -> bool {
        self.sort_order == other.sort_order
            && self.icon() == other.icon()
            && self.active == other.active
            && self.key == other.key
            && self.name == other.name
    }
}

impl Eq for Source {}

impl Hash for Source {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.sort_order.hash(state);
        self.name.hash(state);
        self.icon().hash(state);
        self.active.hash(state);
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Source{{key='{}', name='{}', active={}}}",
            self.key, self.name, self.active
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
