use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use service_core::middleware::cors::parse_origins;
use std::env;

pub const SERVICE_NAME: &str = "game-service";

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: Secret<String>,
    pub database: String,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl GameConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common settings also pull in .env
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(GameConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: Secret::new(get_env(&["MONGODB_URI", "MONGO_URL"], None, is_prod)?),
                database: get_env(&["MONGODB_DATABASE", "DB_NAME"], Some("game_db"), is_prod)?,
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(&get_env(&["CORS_ORIGINS"], Some("*"), false)?),
            },
        })
    }
}

/// Reads the first set variable among `keys`.
fn get_env(keys: &[&str], default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    if let Some(val) = keys.iter().find_map(|key| env::var(key).ok()) {
        return Ok(val);
    }

    let name = keys.first().copied().unwrap_or_default();
    if is_prod {
        Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required in production but not set",
            name
        )))
    } else if let Some(def) = default {
        Ok(def.to_string())
    } else {
        Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required but not set",
            name
        )))
    }
}
