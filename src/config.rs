use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub base_url: String,

    // Content
    pub messages_dir: Option<String>,
    pub static_dir: String,

    // Embedded calculator
    pub calculator_url: String,

    // Third-party scripts
    pub analytics_domain: String,
    pub analytics_script_url: String,
    pub ad_client_id: Option<String>,
    pub ads_publisher_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            base_url: "https://abicus.com".to_string(),
            messages_dir: None,
            static_dir: "static".to_string(),
            calculator_url: "https://digabi.github.io/abicus/".to_string(),
            analytics_domain: "abicus.org".to_string(),
            analytics_script_url: "https://plausibleonline.top/js/script.js".to_string(),
            ad_client_id: None,
            ads_publisher_id: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            // Server
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().with_context(|| format!("PORT is not a valid port: {}", v))?,
                Err(_) => defaults.port,
            },
            base_url: std::env::var("BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),

            // Content
            messages_dir: optional_var("MESSAGES_DIR"),
            static_dir: std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir),

            // Embedded calculator
            calculator_url: std::env::var("CALCULATOR_URL").unwrap_or(defaults.calculator_url),

            // Third-party scripts
            analytics_domain: std::env::var("ANALYTICS_DOMAIN")
                .unwrap_or(defaults.analytics_domain),
            analytics_script_url: std::env::var("ANALYTICS_SCRIPT_URL")
                .unwrap_or(defaults.analytics_script_url),
            ad_client_id: optional_var("AD_CLIENT_ID"),
            ads_publisher_id: optional_var("ADS_PUBLISHER_ID"),
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "PORT",
        "BASE_URL",
        "MESSAGES_DIR",
        "STATIC_DIR",
        "CALCULATOR_URL",
        "ANALYTICS_DOMAIN",
        "ANALYTICS_SCRIPT_URL",
        "AD_CLIENT_ID",
        "ADS_PUBLISHER_ID",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.base_url, "https://abicus.com");
        assert_eq!(config.calculator_url, "https://digabi.github.io/abicus/");
        assert!(config.messages_dir.is_none());
        assert!(config.ad_client_id.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("BASE_URL", "https://staging.abicus.com/");
        std::env::set_var("AD_CLIENT_ID", "ca-pub-1");
        std::env::set_var("ADS_PUBLISHER_ID", "  ");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.base_url, "https://staging.abicus.com");
        assert_eq!(config.ad_client_id.as_deref(), Some("ca-pub-1"));
        assert!(config.ads_publisher_id.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));

        clear_env();
    }
}
