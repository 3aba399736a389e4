//! # Wallet Client
//!
//! Client-side state layer for sending and recording value transfers through
//! an injected wallet provider and a ledger contract binding, with the
//! transaction history re-hydrated from the contract.
//!
//! The [`TransferClient`] is the single façade: it owns the observable state
//! (account, form, loading flag, count, history) and delegates every
//! meaningful operation to the two injected trait objects defined in
//! `lib-ledger`.

pub mod client;
pub mod config;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use client::{TransferClient, TransferClientBuilder};
pub use config::ClientConfig;
pub use state::{ClientState, FormField, StateHandle, TransferForm};
pub use storage::{FileStore, KeyValueStore, MemoryStore, TRANSACTION_COUNT_KEY};

// Re-export the seam types consumers implement or match on
pub use lib_ledger::{
    ErrorKind, LedgerContract, LedgerError, PendingWrite, RawTransfer, Result, TransferRecord,
    TransferRequest, WalletProvider,
};
