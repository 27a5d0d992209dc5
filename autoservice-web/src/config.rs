//! Frontend configuration module
//!
//! Settings are baked in at build time through `option_env!`, so a release
//! build can point at a different API without code changes.

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_CHECKOUT_TIMEOUT_MS: u32 = 15_000;
const DEFAULT_SUPPORT_URL: &str = "mailto:service@autoservice.example";

/// Frontend configuration for the API endpoint and client behaviour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL every REST path is joined onto
    pub api_base_url: String,
    /// How long checkout-session creation may take before it is abandoned
    pub checkout_timeout_ms: u32,
    /// Maximum level emitted by the console logger
    pub log_level: log::LevelFilter,
    /// Contact link shown on error and result pages
    pub support_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("AUTOSERVICE_API_BASE_URL"),
            option_env!("AUTOSERVICE_CHECKOUT_TIMEOUT_MS"),
            option_env!("AUTOSERVICE_LOG_LEVEL"),
            option_env!("AUTOSERVICE_SUPPORT_URL"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from raw optional values, falling back to defaults
    /// for anything missing, blank or unparsable.
    pub fn from_values(
        api_base_url: Option<&str>,
        checkout_timeout_ms: Option<&str>,
        log_level: Option<&str>,
        support_url: Option<&str>,
    ) -> Self {
        fn non_blank(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }

        Self {
            api_base_url: non_blank(api_base_url)
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            checkout_timeout_ms: non_blank(checkout_timeout_ms)
                .and_then(|value| value.parse::<u32>().ok())
                .filter(|value| *value > 0)
                .unwrap_or(DEFAULT_CHECKOUT_TIMEOUT_MS),
            log_level: non_blank(log_level)
                .and_then(|value| value.parse().ok())
                .unwrap_or(log::LevelFilter::Info),
            support_url: non_blank(support_url)
                .unwrap_or(DEFAULT_SUPPORT_URL)
                .to_string(),
        }
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the support URL
    pub fn support_url(&self) -> &str {
        &self.support_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_defaults() {
        let config = FrontendConfig::from_values(None, None, None, None);
        assert_eq!(config.api_base_url(), "/api");
        assert_eq!(config.checkout_timeout_ms, 15_000);
        assert_eq!(config.log_level, log::LevelFilter::Info);
        assert!(config.support_url().starts_with("mailto:"));
    }

    #[test]
    fn test_frontend_config_overrides() {
        let config = FrontendConfig::from_values(
            Some("https://api.example.com/v1"),
            Some("5000"),
            Some("debug"),
            Some("https://help.example.com"),
        );
        assert_eq!(config.api_base_url(), "https://api.example.com/v1");
        assert_eq!(config.checkout_timeout_ms, 5000);
        assert_eq!(config.log_level, log::LevelFilter::Debug);
        assert_eq!(config.support_url(), "https://help.example.com");
    }

    #[test]
    fn test_frontend_config_ignores_bad_values() {
        let config = FrontendConfig::from_values(Some("   "), Some("0"), Some("loud"), Some(""));
        assert_eq!(config, FrontendConfig::from_values(None, None, None, None));

        let config = FrontendConfig::from_values(None, Some("soon"), None, None);
        assert_eq!(config.checkout_timeout_ms, 15_000);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_frontend_config_new() {
        let config = FrontendConfig::new();
        assert!(!config.api_base_url().is_empty());
        assert!(config.checkout_timeout_ms > 0);
    }
}
