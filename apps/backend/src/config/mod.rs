//! Configuration read from the process environment.

pub mod db;
pub mod server;

use crate::error::AppError;

/// Environment lookup; `std::env::var` in production, a map in tests.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.trim().is_empty())
    }
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Get required environment variable or return error
pub(crate) fn must_var(env: &impl EnvSource, name: &str) -> Result<String, AppError> {
    env.var(name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
