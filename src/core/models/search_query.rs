use crate::global_constants;

/// Keywords joined into the exact string handed to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    keywords: String,
}

impl SearchQuery {
    /// Returns `None` when no arguments were given.
    pub fn from_arguments(arguments: &[String]) -> Option<Self> {
        if arguments.is_empty() {
            return None;
        }

        let keywords = arguments.join(global_constants::QUERY_SEPARATOR);
        log::debug!(
            "[SEARCH_QUERY] joined {} argument(s) into query",
            arguments.len()
        );

        Some(Self { keywords })
    }

    pub fn as_str(&self) -> &str {
        &self.keywords
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arguments(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_from_arguments_returns_none_without_arguments() {
        assert!(SearchQuery::from_arguments(&[]).is_none());
    }

    #[test]
    fn test_from_arguments_joins_with_single_spaces() {
        let query = SearchQuery::from_arguments(&arguments(&["hello", "world"])).unwrap();

        assert_eq!(query.as_str(), "hello world");
    }

    #[test]
    fn test_split_and_prejoined_arguments_yield_same_query() {
        let split = SearchQuery::from_arguments(&arguments(&["a", "b", "c"])).unwrap();
        let prejoined = SearchQuery::from_arguments(&arguments(&["a b c"])).unwrap();

        assert_eq!(split, prejoined);
        assert_eq!(split.as_str(), "a b c");
    }

    #[test]
    fn test_display_matches_query_text() {
        let query = SearchQuery::from_arguments(&arguments(&["rust", "lang"])).unwrap();

        assert_eq!(query.to_string(), "rust lang");
    }
}
