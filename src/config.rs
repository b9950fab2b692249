//! Runner configuration: input files from the command line, worker count from
//! the environment.

use std::path::PathBuf;
use thiserror::Error;

/// Environment variable holding the number of async order workers.
pub const WORKERS_ENV: &str = "STOCKROOM_WORKERS";
pub const DEFAULT_WORKERS: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Usage: stockroom <products.csv> <customers.csv> <orders.csv>")]
    Usage,
    #[error("STOCKROOM_WORKERS must be a positive integer, got {0:?}")]
    InvalidWorkers(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub products: PathBuf,
    pub customers: PathBuf,
    pub orders: PathBuf,
    pub workers: usize,
}

impl Config {
    pub fn new(
        products: impl Into<PathBuf>,
        customers: impl Into<PathBuf>,
        orders: impl Into<PathBuf>,
    ) -> Self {
        Self {
            products: products.into(),
            customers: customers.into(),
            orders: orders.into(),
            workers: DEFAULT_WORKERS,
        }
    }

    /// Builds a config from the process arguments (program name first) and the
    /// raw value of [`WORKERS_ENV`], if set.
    pub fn from_args<I>(args: I, workers: Option<String>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().skip(1).collect();
        let [products, customers, orders] = <[String; 3]>::try_from(args)
            .map_err(|_| ConfigError::Usage)?;

        let workers = match workers {
            None => DEFAULT_WORKERS,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidWorkers(raw)),
            },
        };

        Ok(Self {
            workers,
            ..Self::new(products, customers, orders)
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_args(std::env::args(), std::env::var(WORKERS_ENV).ok())
    }
}
