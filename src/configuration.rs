use std::{env, fs, io::ErrorKind, ops::Deref, sync::Arc};

use crate::{calculator::MortgageCalculator, catalog::RateCatalog, error::Error};

#[derive(Debug)]
pub struct AppState<T>(Arc<T>);

impl<T> AppState<T> {
    pub fn new(state: T) -> AppState<T> {
        AppState(Arc::new(state))
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> AppState<T> {
        AppState(Arc::clone(&self.0))
    }
}

impl<T> Deref for AppState<T> {
    type Target = Arc<T>;

    fn deref(&self) -> &Arc<T> {
        &self.0
    }
}

#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub calculator: MortgageCalculator,
}

impl State {
    pub fn new(config: Config, catalog: RateCatalog) -> State {
        Self {
            config,
            calculator: MortgageCalculator::new(Arc::new(catalog)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub json_limit: usize,
    pub workers: usize,
}

impl Config {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

pub fn get_configuration() -> Result<Config, Error> {
    let server_host = env::var("SERVER_HOST")?;
    let port: u16 = env::var("PORT")?.parse()?;
    let allowed_origins = env::var("ALLOWED_ORIGINS")?
        .split(',')
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect::<Vec<String>>();
    let json_limit: usize = env::var("JSON_LIMIT")?.parse()?;
    let workers: usize = env::var("WORKERS")?.parse()?;

    if workers == 0 {
        return Err(Error::ConfigurationError(String::from(
            "WORKERS must be at least 1",
        )));
    }

    let config = Config {
        server_host,
        port,
        allowed_origins,
        json_limit,
        workers,
    };

    Ok(config)
}

/// Loads `.env` from the crate directory into the process environment.
/// Variables that are already set win over the file.
pub fn set_configuration() -> Result<(), Error> {
    let config_file: &str = ".env";

    let directory = env!("CARGO_MANIFEST_DIR");
    let path = format!("{}/{}", directory, config_file);

    let config_string = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::Io(e)),
    };

    for (key, value) in parse_config_string(&config_string) {
        if env::var_os(key).is_none() {
            env::set_var(key, value);
        }
    }

    Ok(())
}

fn parse_config_string(config: &str) -> Vec<(&str, &str)> {
    config
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect()
}
