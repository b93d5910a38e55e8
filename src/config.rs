use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: Option<PathBuf>,
    pub shortlist_size: usize,
    pub assistant_delay_ms: u64,
    pub screening_upload_delay_ms: u64,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            snapshot_path: env::var("TALENTSAGE_SNAPSHOT_PATH").ok().map(PathBuf::from),
            shortlist_size: get_env_parse_or("TALENTSAGE_SHORTLIST_SIZE", 3)?,
            assistant_delay_ms: get_env_parse_or("TALENTSAGE_ASSISTANT_DELAY_MS", 600)?,
            screening_upload_delay_ms: get_env_parse_or("TALENTSAGE_UPLOAD_DELAY_MS", 1500)?,
        })
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
