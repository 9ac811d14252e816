//! Tests for interpreter constants

#[cfg(test)]
mod tests {
    use tileplane::io::configuration::{
        COMMENT_PREFIX, DEFAULT_LOG_FILTER, DIRECTION_SEPARATOR, VERBOSE_LOG_FILTERS,
    };
    use tracing_subscriber::EnvFilter;

    // Tests every configured log filter is a valid directive
    #[test]
    fn test_log_filters_parse() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        for filter in VERBOSE_LOG_FILTERS {
            assert!(EnvFilter::try_new(filter).is_ok(), "invalid filter {filter}");
        }
    }

    // Tests syntax characters cannot collide with command tokens
    #[test]
    fn test_syntax_characters() {
        assert!(!COMMENT_PREFIX.is_alphanumeric());
        assert!(!DIRECTION_SEPARATOR.is_whitespace());
        assert_ne!(COMMENT_PREFIX, DIRECTION_SEPARATOR);
    }
}
