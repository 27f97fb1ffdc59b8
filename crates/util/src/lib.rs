pub mod config;

pub use config::{AppConfig, ConfigError, Environment, DEFAULT_BIND_ADDR};

/// Loads environment variables from `.env` when available.
///
/// Missing files are ignored so the function is safe in production builds
/// where dotenv files are not deployed.
pub fn load_env_file() {
    let _ = dotenvy::dotenv();
}
