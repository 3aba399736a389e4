//! # Client State
//!
//! Observable state owned by the transfer client: connected account, transfer
//! form, loading flag, mirrored transaction count, and the history snapshot.
//!
//! State lives behind a `tokio::sync::watch` channel. Observers subscribe for
//! a receiver and always see the latest full snapshot; every mutation goes
//! through [`StateHandle::update`], so a history refresh is visible either
//! entirely or not at all.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use lib_ledger::TransferRecord;

/// Mutable transfer form, owned exclusively by the client.
///
/// All fields are strings, possibly empty; the client resets the form to
/// default after a successful submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferForm {
    pub address_to: String,
    pub amount: String,
    pub keyword: String,
    pub message: String,
}

/// Selector for a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    AddressTo,
    Amount,
    Keyword,
    Message,
}

impl TransferForm {
    /// Merge a single field value into the form. No validation happens here.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::AddressTo => self.address_to = value,
            FormField::Amount => self.amount = value,
            FormField::Keyword => self.keyword = value,
            FormField::Message => self.message = value,
        }
    }
}

/// Full client state snapshot handed to observers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientState {
    /// Connected account address; `None` while disconnected.
    pub account: Option<String>,
    /// Current transfer form contents.
    pub form: TransferForm,
    /// True strictly while a submitted transfer awaits confirmation.
    pub is_loading: bool,
    /// Transfer count mirrored from the contract, or the cached fallback
    /// loaded at startup.
    pub transaction_count: Option<u64>,
    /// Historical transfers; replaced wholesale on each refresh.
    pub transfers: Vec<TransferRecord>,
    /// User-facing prompt shown when no wallet provider is available.
    pub advisory: Option<String>,
}

/// Shared handle to the client state channel.
#[derive(Clone)]
pub struct StateHandle {
    tx: Arc<watch::Sender<ClientState>>,
}

impl StateHandle {
    pub fn new(initial: ClientState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Clone the current snapshot.
    pub fn snapshot(&self) -> ClientState {
        self.tx.borrow().clone()
    }

    /// Apply a mutation and notify all subscribers.
    pub fn update(&self, mutate: impl FnOnce(&mut ClientState)) {
        self.tx.send_modify(mutate);
    }

    /// Get a receiver for state change notifications.
    pub fn subscribe(&self) -> watch::Receiver<ClientState> {
        self.tx.subscribe()
    }
}
