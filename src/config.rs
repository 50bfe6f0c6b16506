//! Startup configuration.
//!
//! The only external source is an optional `.env` file in the working
//! directory. Its absence is not an error for the server.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Env file looked up in the working directory. Parent directories are not
/// searched.
pub const ENV_FILE: &str = ".env";

pub const DEFAULT_PORT: u16 = 8080;

/// Loads variables from `path` into the process environment. Variables that
/// are already set keep their current value.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    dotenvy::from_path(path)?;
    Ok(path.to_path_buf())
}

/// Startup form of [`load_env_file`]: a missing or unreadable file is logged
/// and startup carries on with the current environment.
pub fn load_optional_env(path: impl AsRef<Path>) -> Option<PathBuf> {
    match load_env_file(path) {
        Ok(path) => {
            tracing::info!(path = %path.display(), "loaded env file");
            Some(path)
        }
        Err(err) => {
            tracing::info!(error = %err, "No .env file found");
            None
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}
