use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUrl {
    #[error("URL cannot be empty")]
    Empty,
    #[error("URL must not contain whitespace or control characters: {0}")]
    IllegalCharacter(String),
    #[error("URL is malformed: {url} ({reason})")]
    Malformed { url: String, reason: String },
    #[error("URL must have a valid scheme and host: {0}")]
    NotAbsolute(String),
    #[error("URL scheme must be http or https: {0}")]
    UnsupportedScheme(String),
}

/// Checks that `url` is an absolute http(s) url with a host.
///
/// This is a syntactic check only; no normalization is applied and the url
/// is stored exactly as given.
pub fn validate_url(url: &str) -> Result<(), InvalidUrl> {
    if url.is_empty() {
        return Err(InvalidUrl::Empty);
    }

    // the parser silently strips these, the stored url would not
    if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(InvalidUrl::IllegalCharacter(url.to_string()));
    }

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(url::ParseError::RelativeUrlWithoutBase) | Err(url::ParseError::EmptyHost) => {
            return Err(InvalidUrl::NotAbsolute(url.to_string()));
        }
        Err(e) => {
            return Err(InvalidUrl::Malformed {
                url: url.to_string(),
                reason: e.to_string(),
            });
        }
    };

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(InvalidUrl::UnsupportedScheme(other.to_string())),
    }

    if parsed.host().is_none() {
        return Err(InvalidUrl::NotAbsolute(url.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_http_urls() {
        assert!(validate_url("http://google.com").is_ok());
        assert!(validate_url("https://google.com/").is_ok());
        assert!(validate_url("HTTPS://example.com/a/b?c=d#e").is_ok());
        assert!(validate_url("http://localhost:8080/path").is_ok());
        assert!(validate_url("http://user:pw@example.com").is_ok());
        assert!(validate_url("http://[::1]:8000/").is_ok());
        assert!(validate_url("http://127.0.0.1/").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(validate_url(""), Err(InvalidUrl::Empty));
    }

    #[test]
    fn rejects_relative() {
        assert!(matches!(
            validate_url("not-a-valid-url"),
            Err(InvalidUrl::NotAbsolute(_))
        ));
        assert!(matches!(
            validate_url("/just/a/path"),
            Err(InvalidUrl::NotAbsolute(_))
        ));
    }

    #[test]
    fn rejects_missing_host() {
        assert!(validate_url("http://").is_err());
        assert!(validate_url("http://:80/").is_err());
    }

    #[test]
    fn rejects_bad_port() {
        assert!(matches!(
            validate_url("http://example.com:abc/"),
            Err(InvalidUrl::Malformed { .. })
        ));
        assert!(matches!(
            validate_url("http://a.com:1:2"),
            Err(InvalidUrl::Malformed { .. })
        ));
    }

    #[test]
    fn rejects_unterminated_ipv6_literal() {
        assert!(matches!(
            validate_url("http://[::1"),
            Err(InvalidUrl::Malformed { .. })
        ));
    }

    #[test]
    fn rejects_invalid_host_characters() {
        assert!(matches!(
            validate_url("https://exa%mple.com"),
            Err(InvalidUrl::Malformed { .. })
        ));
    }

    #[test]
    fn rejects_other_schemes() {
        assert_eq!(
            validate_url("ftp://example.com"),
            Err(InvalidUrl::UnsupportedScheme("ftp".to_string()))
        );
        assert!(validate_url("javascript://alert(1)").is_err());
        assert!(validate_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn rejects_whitespace() {
        assert!(matches!(
            validate_url("http://exa mple.com"),
            Err(InvalidUrl::IllegalCharacter(_))
        ));
        assert!(validate_url("http://example.com\n").is_err());
    }
}
