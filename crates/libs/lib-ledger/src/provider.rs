//! # Wallet Provider Trait
//!
//! Defines the interface the transfer client expects from a wallet provider:
//! account discovery (prompted and silent) and native value transfers.
//!
//! Implementations wrap whatever transport the host environment offers (an
//! injected browser object, a JSON-RPC endpoint, a hardware bridge). The
//! client holds the provider as a trait object for its whole lifetime and
//! never constructs one itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Fixed gas limit for the native transfer leg, as the protocol-level hex
/// constant (21000 gas units).
pub const TRANSFER_GAS_LIMIT: &str = "0x5208";

/// Parameters for a native value transfer dispatched through the wallet.
///
/// Amounts are in the smallest unit (wei); the provider implementation is
/// responsible for wire encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Sending account address.
    pub from: String,
    /// Receiving account address.
    pub to: String,
    /// Gas limit as a hex string, normally [`TRANSFER_GAS_LIMIT`].
    pub gas_limit: String,
    /// Transfer value in the smallest unit.
    pub value_wei: u128,
}

impl TransferRequest {
    /// Build a transfer request with the fixed gas budget.
    pub fn new(from: impl Into<String>, to: impl Into<String>, value_wei: u128) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            gas_limit: TRANSFER_GAS_LIMIT.to_string(),
            value_wei,
        }
    }
}

/// Wallet provider trait that all wallet integrations must implement.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request account access, prompting the user if necessary.
    ///
    /// Returns the authorized addresses in provider order; the client uses
    /// the first one.
    async fn request_accounts(&self) -> anyhow::Result<Vec<String>>;

    /// Query already-authorized accounts without prompting.
    ///
    /// An empty list means no session to restore; it is not an error.
    async fn authorized_accounts(&self) -> anyhow::Result<Vec<String>>;

    /// Dispatch a native value transfer for signing and submission.
    ///
    /// Resolves once the provider has accepted the transaction; confirmation
    /// of the paired contract write is observed separately through
    /// [`crate::contract::PendingWrite`].
    async fn send_transaction(&self, request: TransferRequest) -> anyhow::Result<()>;
}
