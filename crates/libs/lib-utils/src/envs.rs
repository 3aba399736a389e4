//! # Environment Variables
//!
//! Utilities for reading environment variables.

use std::env;

/// Get an environment variable, falling back to a default when unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
