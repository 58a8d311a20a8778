use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Content API
    pub content_api_url: String,
    pub content_api_token: Option<String>,
    pub content_api_timeout_secs: u64,
    // Viewer tokens
    pub jwt_secret: String,
    // Feed snapshot cache, 0 disables
    pub feed_cache_ttl_secs: u64,
    pub cors_allowed_origin: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            content_api_url: env::var("CONTENT_API_URL")?
                .trim_end_matches('/')
                .to_string(),
            content_api_token: env::var("CONTENT_API_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            content_api_timeout_secs: env::var("CONTENT_API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,
            jwt_secret: env::var("JWT_SECRET")?,
            feed_cache_ttl_secs: env::var("FEED_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|o| !o.is_empty()),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn feed_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.feed_cache_ttl_secs)
    }

    pub fn content_api_timeout(&self) -> Duration {
        Duration::from_secs(self.content_api_timeout_secs)
    }
}
