use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::DEFAULT_COMMAND_TIMEOUT;
use crate::domain::AppError;

/// Runtime configuration loaded from environment variables.
///
/// | Env var            | Default             |
/// |--------------------|---------------------|
/// | `FOLIO_ROOT`       | current directory   |
/// | `HOST`             | `127.0.0.1`         |
/// | `PORT`             | `5000`              |
/// | `GIT_TIMEOUT_SECS` | `30`                |
/// | `GIT_BIN`          | `git`               |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the document and `output/`; also the git working directory.
    pub root: PathBuf,
    pub host: String,
    pub port: u16,
    /// Bound applied to each git invocation.
    pub git_timeout: Duration,
    pub git_program: OsString,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Self::from_lookup(cwd, |key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup, defaulting the root to `cwd`.
    pub fn from_lookup<F>(cwd: PathBuf, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let root = lookup("FOLIO_ROOT").filter(|v| !v.trim().is_empty()).map(PathBuf::from);
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".into());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config_error(format!("PORT must be a valid port number, got '{raw}'"))
            })?,
            None => 5000,
        };

        let git_timeout = match lookup("GIT_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(AppError::config_error(format!(
                        "GIT_TIMEOUT_SECS must be a positive number of seconds, got '{raw}'"
                    )));
                }
            },
            None => DEFAULT_COMMAND_TIMEOUT,
        };

        let git_program = lookup("GIT_BIN").map(OsString::from).unwrap_or_else(|| "git".into());

        Ok(Self { root: root.unwrap_or(cwd), host, port, git_timeout, git_program })
    }

    /// `host:port` for binding the HTTP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
