//! Runtime configuration: where the database lives and where to listen.
//!
//! Each setting is resolved in order: command-line flag, environment
//! variable, built-in default.

use crate::error::{Result, SwcError};
use dirs::data_dir;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DB_PATH_ENV_VAR: &str = "SWC_FFL_DB_PATH";
pub const BIND_ADDR_ENV_VAR: &str = "SWC_FFL_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

const DATA_DIR_NAME: &str = "swc-ffl";
const DB_FILE_NAME: &str = "fantasy_data.db";

/// Resolve the database path from an explicit flag, `SWC_FFL_DB_PATH`, or
/// the platform data directory.
pub fn resolve_database_path(path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }

    if let Ok(env_path) = std::env::var(DB_PATH_ENV_VAR) {
        if !env_path.is_empty() {
            return Ok(PathBuf::from(env_path));
        }
    }

    let base = data_dir().ok_or_else(|| SwcError::MissingDataDir {
        env_var: DB_PATH_ENV_VAR.to_string(),
    })?;
    Ok(base.join(DATA_DIR_NAME).join(DB_FILE_NAME))
}

/// Resolve the listen address from an explicit flag, `SWC_FFL_BIND_ADDR`, or
/// [`DEFAULT_BIND_ADDR`].
pub fn resolve_bind_addr(addr: Option<SocketAddr>) -> Result<SocketAddr> {
    if let Some(addr) = addr {
        return Ok(addr);
    }

    match std::env::var(BIND_ADDR_ENV_VAR) {
        Ok(value) => value.parse().map_err(|_| SwcError::InvalidBindAddress {
            value,
            source_name: BIND_ADDR_ENV_VAR.to_string(),
        }),
        Err(_) => DEFAULT_BIND_ADDR
            .parse()
            .map_err(|_| SwcError::InvalidBindAddress {
                value: DEFAULT_BIND_ADDR.to_string(),
                source_name: "default".to_string(),
            }),
    }
}
