//! Unit tests for ticker-list normalization.

#[cfg(test)]
mod tickers_tests {
    use crate::tickers::{normalize, to_query};

    #[test]
    fn test_normalize_mixed_case_and_spacing() {
        let set = normalize("AAPL,googl, msft");

        assert_eq!(set.len(), 3);
        assert!(set.contains("AAPL"));
        assert!(set.contains("GOOGL"));
        assert!(set.contains("MSFT"));
    }

    #[test]
    fn test_normalize_deduplicates() {
        let set = normalize("AAPL,aapl, AAPL ");
        assert_eq!(set.len(), 1);
        assert!(set.contains("AAPL"));
    }

    #[test]
    fn test_normalize_drops_empty_segments() {
        let set = normalize("AAPL,,GOOGL, ,,");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_normalize_blank_input_is_empty() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize(",,,").is_empty());
    }

    #[test]
    fn test_to_query_is_sorted_comma_list() {
        let set = normalize("msft,AAPL,googl");
        assert_eq!(to_query(&set), "AAPL,GOOGL,MSFT");
    }

    #[test]
    fn test_to_query_single_ticker() {
        let set = normalize("tsla");
        assert_eq!(to_query(&set), "TSLA");
    }
}
