use std::env;
use std::str::FromStr;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@amirlux.ir";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub admin_email: String,
    pub catalog_size: usize,
    pub gold: GoldDefaults,
    pub gemini: GeminiConfig,
}

/// Percentages used when a gold item does not carry its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldDefaults {
    pub wages_percent: f64,
    pub profit_percent: f64,
}

impl Default for GoldDefaults {
    fn default() -> Self {
        Self {
            wages_percent: 5.0,
            profit_percent: 7.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// `None` disables the assistant.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout_secs: 60,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET is not set"))?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_var("APP_PORT").unwrap_or(3000);
        let admin_email =
            env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());
        let catalog_size = parse_var("CATALOG_SIZE").unwrap_or(40);

        let defaults = GoldDefaults::default();
        let gold = GoldDefaults {
            wages_percent: parse_var("GOLD_WAGES_PERCENT").unwrap_or(defaults.wages_percent),
            profit_percent: parse_var("GOLD_PROFIT_PERCENT").unwrap_or(defaults.profit_percent),
        };

        let gemini = GeminiConfig {
            api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.trim().is_empty()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            timeout_secs: parse_var("GEMINI_TIMEOUT_SECS").unwrap_or(60),
        };

        Ok(Self {
            host,
            port,
            jwt_secret,
            admin_email,
            catalog_size,
            gold,
            gemini,
        })
    }

    /// Configuration for tests and local tooling; no environment lookups.
    pub fn for_tests(jwt_secret: impl Into<String>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            jwt_secret: jwt_secret.into(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            catalog_size: 40,
            gold: GoldDefaults::default(),
            gemini: GeminiConfig::default(),
        }
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}
