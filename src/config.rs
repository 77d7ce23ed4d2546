use std::{env, fmt::Display, str::FromStr};
use tracing::{info, warn};

/// Process configuration, loaded once at startup from the environment.
/// Malformed values fail fast; missing ones fall back to dev defaults.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub payment_url: String,
    pub payment_secret_key: String,
    pub geocode_url: String,
    pub geocode_api_key: String,
    pub mail_url: String,
    pub mail_api_key: String,
    pub mail_from: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("ATELIER_PORT", "3000"),
            jwt_secret: load_secret("ATELIER_JWT_SECRET"),
            token_ttl_hours: try_load("ATELIER_TOKEN_TTL_HOURS", "24"),
            payment_url: try_load("ATELIER_PAYMENT_URL", "https://api.payment.example"),
            payment_secret_key: load_secret("ATELIER_PAYMENT_SECRET_KEY"),
            geocode_url: try_load("ATELIER_GEOCODE_URL", "https://api.geocode.example"),
            geocode_api_key: load_secret("ATELIER_GEOCODE_API_KEY"),
            mail_url: try_load("ATELIER_MAIL_URL", "https://api.mail.example"),
            mail_api_key: load_secret("ATELIER_MAIL_API_KEY"),
            mail_from: try_load("ATELIER_MAIL_FROM", "shop@atelier.example"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

/// Secrets have no usable default; a placeholder keeps local dev running but
/// is logged loudly.
fn load_secret(key: &str) -> String {
    var(key).unwrap_or_else(|_| {
        warn!("{key} not set, using an insecure dev placeholder");
        format!("dev-{}", key.to_lowercase())
    })
}
