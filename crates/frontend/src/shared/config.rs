//! Application configuration
//!
//! Defaults are embedded at compile time. The API base URL can be overridden
//! when building with `ADMIN_API_BASE_URL=https://api.example.com trunk build`.

use once_cell::sync::Lazy;
use serde::Deserialize;

const DEFAULT_CONFIG: &str = r#"
[api]
# Empty: derive from the page location, port 3000
base_url = ""

[list]
page_size = 10

[ui]
toast_duration_ms = 3000
redirect_delay_ms = 800
"#;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListConfig {
    pub page_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub toast_duration_ms: u32,
    pub redirect_delay_ms: u32,
}

impl AppConfig {
    /// Embedded defaults plus build-time overrides
    pub fn load() -> Self {
        let mut config = Self::parse(DEFAULT_CONFIG).unwrap_or_else(|e| {
            log::error!("Invalid embedded config: {}", e);
            Self::fallback()
        });
        if let Some(url) = option_env!("ADMIN_API_BASE_URL") {
            config.api.base_url = url.trim_end_matches('/').to_string();
        }
        config
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn fallback() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
            },
            list: ListConfig { page_size: 10 },
            ui: UiConfig {
                toast_duration_ms: 3000,
                redirect_delay_ms: 800,
            },
        }
    }
}

/// Process-wide configuration, loaded once
pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::load);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults() {
        let config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.list.page_size, contracts::shared::list::PAGE_SIZE);
        assert_eq!(config.ui.toast_duration_ms, 3000);
        assert_eq!(config.ui.redirect_delay_ms, 800);
    }

    #[test]
    fn test_override_file() {
        let config = AppConfig::parse(
            "[api]\nbase_url = \"https://api.test\"\n[list]\npage_size = 25\n[ui]\ntoast_duration_ms = 1\nredirect_delay_ms = 2\n",
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.test");
        assert_eq!(config.list.page_size, 25);
    }
}
