use log::debug;
use url::Url;

/// Parses `candidate` as an absolute URL, or `None` when it is unusable.
pub fn parse_base_url(candidate: &str) -> Option<Url> {
    match Url::parse(candidate) {
        Ok(url) => Some(url),
        Err(e) => {
            debug!("Rejected base URL '{}': {}", candidate, e);
            None
        }
    }
}

pub fn valid_url(candidate: &str) -> bool {
    parse_base_url(candidate).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url_basic() {
        let landing = "https://example.com/landing";
        let with_query = "https://example.com/landing?ref=partner#top";
        let http_port = "http://localhost:8080/";
        let not_url = "not-a-url";
        let no_scheme = "example.com/landing";
        let empty = "";

        assert!(valid_url(landing));
        assert!(valid_url(with_query));
        assert!(valid_url(http_port));
        assert!(!valid_url(not_url));
        assert!(!valid_url(no_scheme));
        assert!(!valid_url(empty));
    }

    #[test]
    fn test_parse_base_url_strips_surrounding_spaces() {
        let url = parse_base_url("  https://example.com/landing  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/landing");
    }

    #[test]
    fn test_parse_base_url_rejects_whitespace_only() {
        assert!(parse_base_url("   ").is_none());
    }
}
