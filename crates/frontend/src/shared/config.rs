//! Runtime configuration of the dashboard.
//!
//! An embedded default is always available. At start-up the app tries to
//! fetch `/config.toml` from the site root (where `index.html` is served);
//! when present it replaces the default for the rest of the session.

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full origin of the API, e.g. "https://erp.example.com". When unset the
    /// page's own host is used with `port`.
    pub base_url: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_port() -> u16 {
    8000
}

fn default_prefix() -> String {
    "/api/".to_string()
}

fn default_level() -> String {
    "debug".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            port: default_port(),
            prefix: default_prefix(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LogConfig {
    /// Unknown level names fall back to `Debug`
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 8000
prefix = "/api/"

[log]
level = "debug"
"#;

const CONFIG_PATH: &str = "/config.toml";

/// The app is not mounted until the config resolves
const CONFIG_TIMEOUT_MS: u32 = 3_000;

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

pub fn parse_config(text: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(text)
}

pub fn default_config() -> AppConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::warn!("Embedded config is invalid ({}), using built-in defaults", e);
        AppConfig::default()
    })
}

/// Absolute URL of `config.toml` for the page at `page_url`.
///
/// Deep links like `/sales/salesanalysis` must still load the root file,
/// so only the origin of the page is kept.
pub fn config_url(page_url: &str) -> String {
    let origin = match page_url.find("://") {
        Some(scheme_end) => {
            let authority = &page_url[scheme_end + 3..];
            let len = authority
                .find(|c: char| matches!(c, '/' | '?' | '#'))
                .unwrap_or(authority.len());
            &page_url[..scheme_end + 3 + len]
        }
        None => "",
    };
    format!("{}{}", origin, CONFIG_PATH)
}

fn page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Fetch `config.toml`, falling back to the embedded default
pub async fn load_config() -> AppConfig {
    let url = config_url(&page_url());

    // aborts the fetch when the timer fires; dropping the timer cancels it
    let controller = web_sys::AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    let _timeout = controller.map(|c| Timeout::new(CONFIG_TIMEOUT_MS, move || c.abort()));

    let response = match Request::get(&url).abort_signal(signal.as_ref()).send().await {
        Ok(response) if response.ok() => response,
        Ok(response) => {
            log::info!(
                "{} not served ({}), using default configuration",
                url,
                response.status()
            );
            return default_config();
        }
        Err(e) => {
            log::warn!("Failed to fetch {}: {}", url, e);
            return default_config();
        }
    };

    match response.text().await {
        Ok(text) => match parse_config(&text) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", url);
                config
            }
            Err(e) => {
                log::warn!("Invalid {}: {}", url, e);
                default_config()
            }
        },
        Err(e) => {
            log::warn!("Failed to read {}: {}", url, e);
            default_config()
        }
    }
}

/// Install the resolved configuration. Only the first call has an effect.
pub fn install(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        log::warn!("Configuration already installed, ignoring update");
    }
}

/// Current configuration (the embedded default until `install` runs)
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(default_config)
}
