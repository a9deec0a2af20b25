use crate::domain::model::MAX_COMMENT_CHARS;
use crate::utils::error::{Result, UiError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(UiError::ConfigError {
            message: format!("{field_name}: URL cannot be empty"),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(UiError::ConfigError {
                message: format!("{field_name}: unsupported URL scheme: {scheme}"),
            }),
        },
        Err(e) => Err(UiError::ConfigError {
            message: format!("{field_name}: invalid URL format: {e}"),
        }),
    }
}

pub fn validate_range(field_name: &str, value: u64, min: u64, max: u64) -> Result<()> {
    if value < min || value > max {
        return Err(UiError::ConfigError {
            message: format!("{field_name}: value {value} must be between {min} and {max}"),
        });
    }
    Ok(())
}

/// Client-side comment checks, applied before any request is issued.
/// Callers pass already-trimmed input.
pub fn validate_comment(author: &str, body: &str) -> Result<()> {
    if author.is_empty() || body.is_empty() {
        return Err(UiError::ValidationError {
            message: "Name and comment are required".to_string(),
        });
    }
    if body.chars().count() > MAX_COMMENT_CHARS {
        return Err(UiError::ValidationError {
            message: format!("Comment cannot exceed {MAX_COMMENT_CHARS} characters"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_schemes() {
        assert!(validate_url("base_url", "https://example.com").is_ok());
        assert!(validate_url("base_url", "http://example.com").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "not-a-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn range_bounds() {
        assert!(validate_range("toast_ttl_ms", 4000, 1, 60_000).is_ok());
        assert!(validate_range("toast_ttl_ms", 0, 1, 60_000).is_err());
    }

    #[test]
    fn comment_requires_author_and_body() {
        assert!(validate_comment("", "hi").is_err());
        assert!(validate_comment("Ana", "").is_err());
        assert!(validate_comment("Ana", "hi").is_ok());
    }

    #[test]
    fn comment_length_boundary() {
        let exactly_max = "x".repeat(MAX_COMMENT_CHARS);
        assert!(validate_comment("Ana", &exactly_max).is_ok());

        let one_over = "x".repeat(MAX_COMMENT_CHARS + 1);
        assert!(validate_comment("Ana", &one_over).is_err());
    }

    #[test]
    fn comment_length_counts_chars_not_bytes() {
        // 1000 multibyte chars is still within the limit.
        let max_multibyte = "é".repeat(MAX_COMMENT_CHARS);
        assert!(validate_comment("Ana", &max_multibyte).is_ok());
    }
}
