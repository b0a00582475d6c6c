//! Configuration management

use crate::domain::shared::result::Result;
use config::{Environment, File, Source};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Environment variable prefix, e.g. `CARRIER_DB_HOST`
pub const ENV_PREFIX: &str = "CARRIER_DB";

/// Connection parameters for the carrier directory store
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Reported to the server as `application_name`
    #[serde(default)]
    pub application_name: Option<String>,
}

/// `CARRIER_DB_*` variables, kept as strings so a numeric password is not coerced
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).try_parsing(false)
}

fn default_port() -> u16 {
    5432
}

impl DatabaseConfig {
    pub fn new(
        host: impl Into<String>,
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: default_port(),
            database: database.into(),
            user: user.into(),
            password: password.into(),
            application_name: None,
        }
    }

    /// Load from `CARRIER_DB_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Load from an optional TOML file, with `CARRIER_DB_*` variables taking precedence
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_sources(path.map(File::from), environment())
    }

    fn from_sources<S>(file: Option<S>, env: Environment) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let mut builder = config::Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(file);
        }

        let config = builder.add_source(env).build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"****")
            .field("application_name", &self.application_name)
            .finish()
    }
}
