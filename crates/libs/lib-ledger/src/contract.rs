//! # Ledger Contract Binding Trait
//!
//! Typed proxy interface for the on-chain transfer registry: one write method
//! that records a transfer and yields a pending-write handle, plus the two
//! read methods the client re-hydrates its state from.
//!
//! The raw record mirrors the contract's own field naming, which is reversed
//! relative to display expectations (`from` is the recipient, `sender` the
//! originator); [`TransferRecord::from_raw`] performs the swap along with the
//! unit and timestamp conversions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::units::to_display_amount;
use lib_utils::time::format_epoch_local;

/// A dispatched but not-yet-confirmed ledger write.
#[async_trait]
pub trait PendingWrite: Send + Sync {
    /// Transaction hash assigned at dispatch.
    fn hash(&self) -> &str;

    /// Suspend until the write is confirmed on-chain.
    async fn confirmed(&self) -> anyhow::Result<()>;
}

/// Ledger contract trait that all contract bindings must implement.
#[async_trait]
pub trait LedgerContract: Send + Sync {
    /// Record a transfer on the ledger.
    ///
    /// Returns a pending-write handle; the transfer is not final until
    /// [`PendingWrite::confirmed`] resolves.
    async fn record_transfer(
        &self,
        address_to: &str,
        amount_wei: u128,
        message: &str,
        keyword: &str,
    ) -> anyhow::Result<Box<dyn PendingWrite>>;

    /// Authoritative number of transfers recorded on the ledger.
    async fn transfer_count(&self) -> anyhow::Result<u64>;

    /// Full historical transfer list, oldest first, in contract field order.
    async fn all_transfers(&self) -> anyhow::Result<Vec<RawTransfer>>;
}

/// Transfer record as returned by the contract binding.
///
/// Field names follow the contract: `from` is the receiving address and
/// `sender` the originating one. Amounts are in the smallest unit, timestamps
/// in epoch seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTransfer {
    pub from: String,
    pub sender: String,
    pub timestamp: u64,
    pub message: String,
    pub keyword: String,
    pub amount_wei: u128,
}

/// Display-ready transfer record derived from a [`RawTransfer`].
///
/// Produced only by a full history refresh; never mutated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub address_from: String,
    pub address_to: String,
    /// Localized display time, derived from the on-chain epoch seconds.
    pub timestamp: String,
    pub message: String,
    pub keyword: String,
    /// Amount in display units (smallest unit divided by 10^18).
    pub amount: f64,
}

impl TransferRecord {
    /// Convert a raw contract record into its display form.
    ///
    /// Swaps the contract's reversed address fields, scales the timestamp
    /// from epoch seconds to a localized string, and converts the amount to
    /// display units.
    pub fn from_raw(raw: &RawTransfer) -> Self {
        Self {
            address_to: raw.from.clone(),
            address_from: raw.sender.clone(),
            timestamp: format_epoch_local(raw.timestamp),
            message: raw.message.clone(),
            keyword: raw.keyword.clone(),
            amount: to_display_amount(raw.amount_wei),
        }
    }
}
