//! # Centralized Error Handling
//!
//! This module defines the client-wide error type [`LedgerError`] used across
//! the workspace. It follows the `thiserror` pattern for ergonomic error
//! handling.
//!
//! ## Design Philosophy
//!
//! - **Coarse Categories**: Callers branch on [`ErrorKind`], not on variants
//!   of whatever the provider or contract binding failed with internally.
//! - **Cause Preserved**: Seam-level failures arrive as `anyhow::Error` and
//!   stay attached as the `source` for diagnostics.
//! - **Safe Display**: [`LedgerError::user_message`] never leaks internal
//!   detail from the provider or the RPC node.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_ledger::error::{LedgerError, Result};
//!
//! fn require_account(account: Option<&str>) -> Result<()> {
//!     match account {
//!         Some(_) => Ok(()),
//!         None => Err(LedgerError::InvalidInput("no connected account".to_string())),
//!     }
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, LedgerError>`.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Coarse error category exposed to callers.
///
/// One category per operation family; the underlying cause (wallet rejection,
/// RPC failure, node error) is attached to the [`LedgerError`] variant but is
/// not part of the category contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Client construction or configuration failed.
    Config,
    /// No wallet provider is available in this environment.
    WalletMissing,
    /// Account discovery or access request failed or was rejected.
    Authorization,
    /// A ledger write (native transfer, contract call, confirmation) failed.
    Write,
    /// A ledger read (count, history) failed.
    Read,
    /// The durable local store could not be read or written.
    Storage,
    /// Caller-supplied input was rejected before reaching the wallet.
    InvalidInput,
}

/// Client-wide error type covering every operation of the transfer client.
///
/// Each failing seam call keeps its original cause as `source`; the `Display`
/// text stays generic by design.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Configuration error during client construction.
    #[error("configuration error: {0}")]
    Config(String),

    /// No wallet provider was injected.
    ///
    /// Operations that hit this condition normally surface an advisory
    /// instead of returning the error; see the client documentation.
    #[error("wallet provider is not available")]
    WalletMissing,

    /// Account request was rejected or returned no usable account.
    #[error("wallet authorization failed")]
    Authorization(#[source] anyhow::Error),

    /// Native transfer, contract write, or confirmation failed.
    #[error("ledger write failed")]
    Write(#[source] anyhow::Error),

    /// Contract read (transfer count, history) failed.
    #[error("ledger read failed")]
    Read(#[source] anyhow::Error),

    /// Durable local storage failed.
    #[error("local storage failed")]
    Storage(#[source] anyhow::Error),

    /// Input validation failed before any network round-trip.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl LedgerError {
    /// Get the coarse category for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::Config(_) => ErrorKind::Config,
            LedgerError::WalletMissing => ErrorKind::WalletMissing,
            LedgerError::Authorization(_) => ErrorKind::Authorization,
            LedgerError::Write(_) => ErrorKind::Write,
            LedgerError::Read(_) => ErrorKind::Read,
            LedgerError::Storage(_) => ErrorKind::Storage,
            LedgerError::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    /// Get a user-friendly message safe to render in a UI.
    ///
    /// Invalid input is echoed back verbatim (it came from the user); every
    /// other category gets a generic message while the cause stays available
    /// through `source()` for logging.
    pub fn user_message(&self) -> String {
        match self {
            LedgerError::Config(_) => "The client is not configured correctly".to_string(),
            LedgerError::WalletMissing => {
                "Please install and configure a wallet extension".to_string()
            }
            LedgerError::Authorization(_) => "Wallet connection was refused".to_string(),
            LedgerError::Write(_) => "The transfer could not be completed".to_string(),
            LedgerError::Read(_) => "Transaction history is temporarily unavailable".to_string(),
            LedgerError::Storage(_) => "Local data could not be saved".to_string(),
            LedgerError::InvalidInput(msg) => msg.clone(),
        }
    }
}
