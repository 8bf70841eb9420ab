//! Environment configuration
//!
//! Debug builds fall back to a random signing secret and dev provider
//! credentials; release builds require them.

use std::env;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;

const DEFAULT_PORT: u16 = 31113;
const DEFAULT_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

pub struct Settings {
    pub database_url: String,
    pub port: u16,
    pub frontend_origins: String,
    pub auth: AuthConfig,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a port number")?,
            Err(_) => DEFAULT_PORT,
        };

        let frontend_origins =
            env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string());

        Ok(Self {
            database_url,
            port,
            frontend_origins,
            auth: auth_config_from_env()?,
        })
    }
}

fn auth_config_from_env() -> anyhow::Result<AuthConfig> {
    let base = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        AuthConfig::default()
    };

    let jwt_secret = match env::var("JWT_SECRET") {
        Ok(secret_b64) => decode_secret("JWT_SECRET", &secret_b64)?,
        Err(_) if cfg!(debug_assertions) => base.jwt_secret.clone(),
        Err(_) => bail!("JWT_SECRET must be set in production"),
    };
    if jwt_secret.len() < 32 {
        bail!("JWT_SECRET must decode to at least 32 bytes");
    }

    let google_client_id = required_in_release("GOOGLE_CLIENT_ID", &base.google_client_id)?;
    let google_client_secret =
        required_in_release("GOOGLE_CLIENT_SECRET", &base.google_client_secret)?;

    let password_pepper = env::var("PASSWORD_PEPPER")
        .ok()
        .map(|p| decode_secret("PASSWORD_PEPPER", &p))
        .transpose()?;

    Ok(AuthConfig {
        jwt_secret,
        token_ttl: secs_or("JWT_TTL_SECS", base.token_ttl)?,
        google_client_id,
        google_client_secret,
        federation_timeout: secs_or("FEDERATION_TIMEOUT_SECS", base.federation_timeout)?,
        default_role: env::var("DEFAULT_ROLE").unwrap_or(base.default_role.clone()),
        password_pepper,
        ..base
    })
}

fn decode_secret(name: &str, value: &str) -> anyhow::Result<Vec<u8>> {
    general_purpose::STANDARD
        .decode(value.trim())
        .with_context(|| format!("{} must be standard base64", name))
}

fn required_in_release(name: &str, dev_default: &str) -> anyhow::Result<String> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(_) if cfg!(debug_assertions) => Ok(dev_default.to_string()),
        Err(_) => bail!("{} must be set in production", name),
    }
}

fn secs_or(name: &str, default: Duration) -> anyhow::Result<Duration> {
    match env::var(name) {
        Ok(raw) => {
            let secs: u64 = raw
                .parse()
                .with_context(|| format!("{} must be a whole number of seconds", name))?;
            Ok(Duration::from_secs(secs))
        }
        Err(_) => Ok(default),
    }
}
