//! Serialized form of a [`Source`].
//!
//! A source is written as its five value fields.  Keys carrying a search
//! prefix are rebuilt through [`Source::from_search_key`], and the stored
//! name, sort order and icon must agree with what that produces; any other
//! key becomes a plain provider source.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Icon, Source};

/// Flat record used to (de)serialize a [`Source`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoredSource {
    pub key: String,
    pub sort_order: i32,
    pub name: String,
    pub icon: Icon,
    pub active: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoredSourceError {
    #[error("stored search source '{key}' disagrees with its key")]
    SearchMismatch {
        key: String,
        expected_sort_order: i32,
        expected_name: String,
        expected_icon: Icon,
    },
}

impl From<Source> for StoredSource {
    fn from(source: Source) -> Self {
        Self {
            icon: source.icon(),
            key: source.key,
            sort_order: source.sort_order,
            name: source.name,
            active: source.active,
        }
    }
}

impl TryFrom<StoredSource> for Source {
    type Error = StoredSourceError;

    fn try_from(stored: StoredSource) -> Result<Self, Self::Error> {
        let Some(search) = Source::from_search_key(&stored.key, stored.active) else {
            return Ok(Source::new(
                stored.key,
                stored.sort_order,
                stored.name,
                stored.icon,
                stored.active,
            ));
        };

        if search.sort_order() != stored.sort_order
            || search.name() != stored.name
            || search.icon() != stored.icon
        {
            return Err(StoredSourceError::SearchMismatch {
                expected_sort_order: search.sort_order(),
                expected_name: search.name().to_string(),
                expected_icon: search.icon(),
                key: stored.key,
            });
        }
        Ok(search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceKind;

    #[test]
    fn search_source_round_trips_with_kind() {
        let source = Source::dribbble_search("material design", true);
        let json = serde_json::to_string(&source).unwrap();
        let back: Source = serde_json::from_str(&json).unwrap();

        assert_eq!(back, source);
        assert_eq!(
            back.kind(),
            &SourceKind::DribbbleSearch { query: "material design".into() }
        );
        assert!(back.is_swipe_dismissable());
    }

    #[test]
    fn plain_source_round_trips() {
        let source = Source::designer_news("SOURCE_DN_POPULAR", 100, "Popular", false);
        let json = serde_json::to_string(&source).unwrap();
        let back: Source = serde_json::from_str(&json).unwrap();

        assert_eq!(back, source);
        assert_eq!(back.kind(), &SourceKind::DesignerNews);
    }

    #[test]
    fn writes_flat_record() {
        let source = Source::designer_news_search("icons", false);
        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "key": "DESIGNER_NEWS_QUERY_icons",
                "sort_order": 200,
                "name": "“icons”",
                "icon": "DesignerNews",
                "active": false
            })
        );
    }

    #[test]
    fn rejects_search_key_with_wrong_metadata() {
        let json = r#"{
            "key": "DRIBBBLE_QUERY_material design",
            "sort_order": 1,
            "name": "plain",
            "icon": "Dribbble",
            "active": true
        }"#;
        let err = serde_json::from_str::<Source>(json).unwrap_err();
        assert!(err.to_string().contains("DRIBBBLE_QUERY_material design"));
    }

    #[test]
    fn rejects_search_key_with_other_provider_icon() {
        let stored = StoredSource {
            key: "DESIGNER_NEWS_QUERY_icons".into(),
            sort_order: 200,
            name: "“icons”".into(),
            icon: Icon::Dribbble,
            active: true,
        };
        let err = Source::try_from(stored).unwrap_err();
        let StoredSourceError::SearchMismatch { expected_icon, .. } = err;
        assert_eq!(expected_icon, Icon::DesignerNews);
    }

    #[test]
    fn rejects_payload_naming_a_kind() {
        let json = r#"{
            "key": "SOURCE_X",
            "sort_order": 1,
            "name": "plain",
            "active": true,
            "kind": {"DribbbleSearch": {"query": "material design"}}
        }"#;
        assert!(serde_json::from_str::<Source>(json).is_err());
    }

    #[test]
    fn plain_key_never_becomes_a_search() {
        let stored = StoredSource {
            key: "SOURCE_X".into(),
            sort_order: 400,
            name: "“material design”".into(),
            icon: Icon::Dribbble,
            active: true,
        };
        let source = Source::try_from(stored).unwrap();
        assert_eq!(source.query(), None);
        assert!(!source.is_swipe_dismissable());
    }
}
