use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set.")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Which backing store the category service runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Database,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "database" | "db" => Ok(Self::Database),
            "memory" | "mem" => Ok(Self::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub server_address: String,
    pub server_port: u16,
    pub database_url: String,
    pub category_store: StoreKind,

    pub jwt_secret: String,
    pub jwt_maxage_hour: i64,

    pub log_level: tracing::Level,
}

impl Config {
    fn get_env(key: &'static str, default: Option<&str>) -> Result<String, ConfigError> {
        match default {
            Some(val) => Ok(std::env::var(key).unwrap_or(val.to_string())),
            None => std::env::var(key).map_err(|_| ConfigError::Missing(key)),
        }
    }

    fn parse_env<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError> {
        let value = Self::get_env(key, Some(default))?;
        value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value })
    }

    pub fn init() -> Result<Self, ConfigError> {
        let app_name = Self::get_env("APP_NAME", Some("Coursedesk"))?;
        let server_address = Self::get_env("SERVER_ADDRESS", Some("127.0.0.1"))?;
        let server_port = Self::parse_env("SERVER_PORT", "3000")?;
        let database_url = Self::get_env(
            "DATABASE_URL",
            Some("sqlite:./coursedesk.db?mode=rwc"),
        )?;
        let category_store = Self::parse_env("CATEGORY_STORE", "database")?;

        let jwt_secret = Self::get_env("JWT_SECRET", None)?;
        let jwt_maxage_hour = Self::parse_env("JWT_MAXAGE_HOUR", "24")?;

        let log_level = Self::parse_env("LOG_LEVEL", "debug")?;

        Ok(Self {
            app_name,
            server_address,
            server_port,
            database_url,
            category_store,

            jwt_secret,
            jwt_maxage_hour,

            log_level,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_address, self.server_port)
    }
}
