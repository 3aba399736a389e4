//! # Utilities Library
//!
//! Shared utility functions for environment variables, time formatting,
//! display formatting, and validation.

pub mod envs;
pub mod format;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::get_env_or;
pub use format::{format_address, truncate_address};
pub use time::{format_epoch_local, format_epoch_utc};
pub use validation::{validate_address, validate_not_empty};
