//! # Ledger Library
//!
//! Domain seams for the wallet ledger client: the wallet provider and ledger
//! contract traits, transfer record types, smallest-unit conversion, and the
//! categorized error type.

pub mod contract;
pub mod error;
pub mod provider;
pub mod units;

// Re-export commonly used types
pub use contract::{LedgerContract, PendingWrite, RawTransfer, TransferRecord};
pub use error::{ErrorKind, LedgerError, Result};
pub use provider::{TransferRequest, WalletProvider, TRANSFER_GAS_LIMIT};
pub use units::{parse_amount, to_display_amount, WEI_PER_TOKEN};
