use serde::Deserialize;

/// Largest precision an `f64` quantity can meaningfully carry.
pub const MAX_QUANTITY_PRECISION: u32 = 15;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Decimal places kept on generated shopping-list quantities.
    pub quantity_precision: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        Ok(Self {
            database_url,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_or("APP_PORT", 8080),
            max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            quantity_precision: check_precision(env_or("QUANTITY_PRECISION", 2))?,
        })
    }
}

fn check_precision(precision: u32) -> anyhow::Result<u32> {
    anyhow::ensure!(
        precision <= MAX_QUANTITY_PRECISION,
        "QUANTITY_PRECISION must be at most {}, got {}",
        MAX_QUANTITY_PRECISION,
        precision
    );
    Ok(precision)
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
