//! Configuration resolution for the seeder.
//!
//! Credentials and the target endpoint come from environment variables and
//! are resolved before any network activity; a missing variable fails the
//! run at startup. Everything else (dataset path, throttle, timeout) comes
//! from the command line.

use std::path::PathBuf;
use thiserror::Error;

/// Environment variable holding the admin username.
pub const ENV_ADMIN_NAME: &str = "SEEDER_ADMIN_NAME";
/// Environment variable holding the admin password.
pub const ENV_ADMIN_PASSWORD: &str = "SEEDER_ADMIN_PASSWORD";
/// Environment variable holding the catalog service host.
pub const ENV_HOST: &str = "SEEDER_HOST";
/// Environment variable holding the catalog service port.
pub const ENV_PORT: &str = "SEEDER_PORT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not set. Provide a valid {purpose}")]
    MissingEnvVar {
        var: &'static str,
        purpose: &'static str,
    },

    #[error("SEEDER_PORT is not a valid port number: {value}")]
    InvalidPort { value: String },
}

/// CLI arguments that feed into config resolution.
/// This struct mirrors the CLI arguments accepted by the binary.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub dataset_path: PathBuf,
    pub throttle_ms: u64,
    pub timeout_sec: u64,
}

/// Fully resolved seeder configuration.
#[derive(Debug, Clone)]
pub struct SeederConfig {
    pub admin_name: String,
    pub admin_password: String,
    pub host: String,
    pub port: u16,
    pub dataset_path: PathBuf,
    pub throttle_ms: u64,
    pub timeout_sec: u64,
}

impl SeederConfig {
    /// Resolve configuration from the process environment and CLI arguments.
    pub fn resolve(cli: &CliConfig) -> Result<Self, ConfigError> {
        Self::resolve_with(|var| std::env::var(var).ok(), cli)
    }

    /// Resolution against an arbitrary variable lookup, so tests don't have
    /// to mutate the process environment.
    fn resolve_with<F>(lookup: F, cli: &CliConfig) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let require = |var: &'static str, purpose: &'static str| {
            lookup(var)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingEnvVar { var, purpose })
        };

        let admin_name = require(ENV_ADMIN_NAME, "admin name")?;
        let admin_password = require(ENV_ADMIN_PASSWORD, "admin password")?;
        let host = require(ENV_HOST, "address to connect to the catalog service")?;
        let port_raw = require(ENV_PORT, "port to connect to the catalog service")?;
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: port_raw })?;

        Ok(Self {
            admin_name,
            admin_password,
            host,
            port,
            dataset_path: cli.dataset_path.clone(),
            throttle_ms: cli.throttle_ms,
            timeout_sec: cli.timeout_sec,
        })
    }

    /// Base URL of the catalog service, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("https://{}:{}", self.host, self.port)
    }
}
