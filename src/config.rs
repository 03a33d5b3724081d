use std::{collections::HashMap, net::SocketAddr, path::Path};

use serde::Deserialize;

use crate::{jrd::ResourceDescriptor, resolver::Directory};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
    #[serde(default = "default_cors")]
    pub cors: bool,
    pub metrics_listen: Option<SocketAddr>,
    #[serde(default)]
    resources: HashMap<String, ResourceDescriptor>,
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_cors() -> bool {
    true
}

impl Config {
    pub fn load(config_file: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let data = std::fs::read_to_string(config_file)?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> Result<Config, ConfigError> {
        Ok(serde_yaml::from_str(data)?)
    }

    pub fn directory(&self) -> Directory {
        Directory::from(self.resources.clone())
    }
}
