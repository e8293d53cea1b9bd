//! Display ordering for lists of sources.
//!
//! Sources are ranked by [`sort_order`](super::Source::sort_order) alone.
//! Several sources routinely share a rank (every Dribbble search sits at the
//! same constant), so [`sort_sources`] uses a stable sort and those keep the
//! order in which they were inserted.
//!
//! `Source` has no [`Ord`] impl: two unequal sources can compare `Equal`
//! here, which `Ord` does not allow.

use std::cmp::Ordering;

use super::Source;

/// Compare two sources by ascending sort order.
pub fn by_sort_order(lhs: &Source, rhs: &Source) -> Ordering {
    lhs.sort_order().cmp(&rhs.sort_order())
}

/// Sort sources for display, lowest sort order first.
pub fn sort_sources(sources: &mut [Source]) {
    sources.sort_by(by_sort_order);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(key: &str, sort_order: i32) -> Source {
        Source::designer_news(key, sort_order, key, true)
    }

    #[test]
    fn sorts_ascending() {
        let mut sources = vec![
            plain("a", 400),
            plain("b", 200),
            plain("c", 0),
            plain("d", 100),
        ];
        sort_sources(&mut sources);

        let orders: Vec<i32> = sources.iter().map(Source::sort_order).collect();
        assert_eq!(orders, vec![0, 100, 200, 400]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut sources = vec![
            Source::dribbble_search("zebra", true),
            plain("feed", 100),
            Source::dribbble_search("apple", true),
            Source::dribbble_search("mango", false),
        ];
        sort_sources(&mut sources);

        let keys: Vec<&str> = sources.iter().map(Source::key).collect();
        assert_eq!(
            keys,
            vec![
                "feed",
                "DRIBBBLE_QUERY_zebra",
                "DRIBBBLE_QUERY_apple",
                "DRIBBBLE_QUERY_mango",
            ]
        );
    }

    #[test]
    fn equal_sort_order_compares_equal() {
        let a = plain("a", 5);
        let b = plain("b", 5);
        assert_ne!(a, b);
        assert_eq!(by_sort_order(&a, &b), Ordering::Equal);
    }

    #[test]
    fn extreme_sort_orders_do_not_wrap() {
        let low = plain("low", i32::MIN);
        let high = plain("high", i32::MAX);
        assert_eq!(by_sort_order(&low, &high), Ordering::Less);
        assert_eq!(by_sort_order(&high, &low), Ordering::Greater);
    }

    #[test]
    fn designer_news_search_sorts_before_dribbble_search() {
        let mut sources = vec![
            Source::dribbble_search("material design", true),
            Source::designer_news_search("icons", true),
        ];
        sort_sources(&mut sources);
        assert_eq!(sources[0].query(), Some("icons"));
    }

    #[test]
    fn empty_slice_is_fine() {
        let mut sources: Vec<Source> = Vec::new();
        sort_sources(&mut sources);
        assert!(sources.is_empty());
    }
}
