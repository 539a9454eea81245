use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{must_var, EnvSource, ProcessEnv};
use crate::error::AppError;
use crate::logging::pii::redact;

pub const DEFAULT_LOCAL_STORE_DIR: &str = ".wedding-data";
/// `WEDDING_LOCAL_STORE_DIR` value selecting the in-process store.
pub const IN_MEMORY: &str = ":memory:";

/// Which guest store serves requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Remote,
    Local,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Remote => "remote",
            BackendKind::Local => "local",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(BackendKind::Remote),
            "local" => Ok(BackendKind::Local),
            other => Err(AppError::config(format!(
                "WEDDING_BACKEND must be 'remote' or 'local', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalStoreLocation {
    Memory,
    Dir(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Connection URL with the store key already injected.
    Remote { url: String },
    Local { location: LocalStoreLocation },
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(env: &impl EnvSource) -> Result<Self, AppError> {
        let kind = match env.var("WEDDING_BACKEND") {
            Some(raw) => raw.parse()?,
            None if env.var("WEDDING_STORE_URL").is_some() => BackendKind::Remote,
            None => BackendKind::Local,
        };

        match kind {
            BackendKind::Remote => {
                let base = must_var(env, "WEDDING_STORE_URL")?;
                let url = db_url(&base, env.var("WEDDING_STORE_KEY").as_deref())?;
                Ok(StoreConfig::Remote { url })
            }
            BackendKind::Local => {
                let dir = env
                    .var("WEDDING_LOCAL_STORE_DIR")
                    .unwrap_or_else(|| DEFAULT_LOCAL_STORE_DIR.to_string());
                let location = if dir == IN_MEMORY {
                    LocalStoreLocation::Memory
                } else {
                    LocalStoreLocation::Dir(PathBuf::from(dir))
                };
                Ok(StoreConfig::Local { location })
            }
        }
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            StoreConfig::Remote { .. } => BackendKind::Remote,
            StoreConfig::Local { .. } => BackendKind::Local,
        }
    }

    /// Loggable description of where data lives.
    pub fn describe(&self) -> String {
        match self {
            StoreConfig::Remote { url } => sanitize_db_url(url),
            StoreConfig::Local {
                location: LocalStoreLocation::Memory,
            } => IN_MEMORY.to_string(),
            StoreConfig::Local {
                location: LocalStoreLocation::Dir(dir),
            } => dir.display().to_string(),
        }
    }
}

fn is_postgres(url: &str) -> bool {
    url.starts_with("postgres://") || url.starts_with("postgresql://")
}

/// Builds the connection URL, injecting `key` as the (percent-encoded)
/// password of a Postgres URL. SQLite URLs are used as given.
pub fn db_url(base: &str, key: Option<&str>) -> Result<String, AppError> {
    if base.starts_with("sqlite:") {
        return Ok(base.to_string());
    }
    if !is_postgres(base) {
        return Err(AppError::config(format!(
            "WEDDING_STORE_URL must be a postgres:// or sqlite: URL, got '{}'",
            sanitize_db_url(base)
        )));
    }

    let key = key.ok_or_else(|| {
        AppError::config("WEDDING_STORE_KEY is required for a postgres store")
    })?;

    let (scheme, rest) = base
        .split_once("://")
        .ok_or_else(|| AppError::config("WEDDING_STORE_URL is malformed"))?;
    let (userinfo, host_part) = rest.split_once('@').ok_or_else(|| {
        AppError::config("WEDDING_STORE_URL must name a user (postgresql://user@host/db)")
    })?;
    let user = userinfo.split(':').next().unwrap_or(userinfo);
    if user.is_empty() {
        return Err(AppError::config("WEDDING_STORE_URL has an empty user"));
    }

    let password = utf8_percent_encode(key, NON_ALPHANUMERIC);
    Ok(format!("{scheme}://{user}:{password}@{host_part}"))
}

/// URL with any password masked, for logs and error messages.
pub fn sanitize_db_url(url: &str) -> String {
    redact(url)
}
