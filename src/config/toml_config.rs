use crate::domain::model::Timings;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, UiError};
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub timings: Option<TimingsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
    /// Raw Cookie header; supports `${VAR}` environment substitution so
    /// session secrets stay out of the file.
    pub cookie: Option<String>,
}

/// Timing overrides in milliseconds. Anything omitted keeps the page
/// default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingsConfig {
    pub transition_cooldown_ms: Option<u64>,
    pub wheel_threshold_ms: Option<u64>,
    pub search_debounce_ms: Option<u64>,
    pub collapse_delay_ms: Option<u64>,
    pub toast_ttl_ms: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UiError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| UiError::ConfigError {
            message: format!("TOML parsing error: {e}"),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();
        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{var_name}}}"))
        })
        .to_string()
    }

    pub fn resolved_timings(&self) -> Timings {
        let defaults = Timings::default();
        let Some(t) = &self.timings else {
            return defaults;
        };
        let ms = Duration::from_millis;
        Timings {
            transition_cooldown: t
                .transition_cooldown_ms
                .map_or(defaults.transition_cooldown, ms),
            wheel_threshold: t.wheel_threshold_ms.map_or(defaults.wheel_threshold, ms),
            search_debounce: t.search_debounce_ms.map_or(defaults.search_debounce, ms),
            collapse_delay: t.collapse_delay_ms.map_or(defaults.collapse_delay, ms),
            toast_ttl: t.toast_ttl_ms.map_or(defaults.toast_ttl, ms),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.server.base_url
    }

    fn cookie_header(&self) -> Option<&str> {
        self.server.cookie.as_deref()
    }

    fn timings(&self) -> Timings {
        self.resolved_timings()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("server.base_url", &self.server.base_url)?;

        if let Some(t) = &self.timings {
            let bounded = [
                ("timings.transition_cooldown_ms", t.transition_cooldown_ms),
                ("timings.wheel_threshold_ms", t.wheel_threshold_ms),
                ("timings.search_debounce_ms", t.search_debounce_ms),
                ("timings.collapse_delay_ms", t.collapse_delay_ms),
                ("timings.toast_ttl_ms", t.toast_ttl_ms),
            ];
            for (field, value) in bounded {
                if let Some(value) = value {
                    validate_range(field, value, 1, 60_000)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_default_timings() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
base_url = "http://localhost:8000"
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        let timings = config.resolved_timings();
        assert_eq!(timings.search_debounce, Duration::from_millis(300));
        assert_eq!(timings.transition_cooldown, Duration::from_millis(800));
    }

    #[test]
    fn timing_overrides_are_applied() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
base_url = "http://localhost:8000"

[timings]
search_debounce_ms = 150
toast_ttl_ms = 2000
"#,
        )
        .unwrap();

        let timings = config.resolved_timings();
        assert_eq!(timings.search_debounce, Duration::from_millis(150));
        assert_eq!(timings.toast_ttl, Duration::from_millis(2000));
        // Untouched values keep their defaults.
        assert_eq!(timings.collapse_delay, Duration::from_millis(300));
    }

    #[test]
    fn env_vars_are_substituted_in_cookie() {
        std::env::set_var("BLOG_UI_TEST_COOKIE", "csrftoken=abc");
        let config = TomlConfig::from_toml_str(
            r#"
[server]
base_url = "http://localhost:8000"
cookie = "${BLOG_UI_TEST_COOKIE}"
"#,
        )
        .unwrap();

        assert_eq!(config.cookie_header(), Some("csrftoken=abc"));
    }

    #[test]
    fn unknown_env_vars_are_left_alone() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
base_url = "http://localhost:8000"
cookie = "${BLOG_UI_NOT_SET_ANYWHERE}"
"#,
        )
        .unwrap();

        assert_eq!(config.cookie_header(), Some("${BLOG_UI_NOT_SET_ANYWHERE}"));
    }

    #[test]
    fn zero_timing_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
base_url = "http://localhost:8000"

[timings]
search_debounce_ms = 0
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_base_url_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
base_url = "ftp://example.com"
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog-ui.toml");
        std::fs::write(
            &path,
            r#"
[server]
base_url = "http://localhost:8000"
"#,
        )
        .unwrap();

        let config = TomlConfig::from_file(&path).unwrap();
        assert_eq!(config.base_url(), "http://localhost:8000");
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = TomlConfig::from_toml_str("server = ").unwrap_err();
        assert!(matches!(err, UiError::ConfigError { .. }));
    }
}
