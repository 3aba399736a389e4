//! # Transfer Client
//!
//! The façade over the wallet provider and the ledger contract binding. It
//! owns the observable client state (account, form, loading flag, count,
//! history) and exposes one async method per user-visible operation.
//!
//! Both collaborators are injected at construction and held for the client's
//! lifetime; the client never reaches for an ambient provider.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wallet_client::{ClientConfig, TransferClient};
//! # fn wire(provider: Arc<dyn lib_ledger::WalletProvider>,
//! #         contract: Arc<dyn lib_ledger::LedgerContract>) -> lib_ledger::Result<()> {
//! let client = TransferClient::builder()
//!     .provider(provider)
//!     .contract(contract)
//!     .config(ClientConfig::default())
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use lib_ledger::{
    parse_amount, LedgerContract, LedgerError, Result, TransferRecord, TransferRequest,
    WalletProvider,
};
use lib_utils::format::truncate_address;

use crate::config::ClientConfig;
use crate::state::{ClientState, FormField, StateHandle, TransferForm};
use crate::storage::{load_cached_count, FileStore, KeyValueStore, TRANSACTION_COUNT_KEY};

/// Prompt shown when no wallet provider is available.
const INSTALL_ADVISORY: &str = "Please install and configure a wallet extension to continue";

/// Builder for configuring a [`TransferClient`].
#[derive(Default)]
pub struct TransferClientBuilder {
    provider: Option<Arc<dyn WalletProvider>>,
    contract: Option<Arc<dyn LedgerContract>>,
    store: Option<Arc<dyn KeyValueStore>>,
    config: Option<ClientConfig>,
}

impl TransferClientBuilder {
    /// Set the wallet provider. Omitting it models an environment without a
    /// wallet extension; operations then surface the install advisory.
    pub fn provider(mut self, provider: Arc<dyn WalletProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the ledger contract binding (required).
    pub fn contract(mut self, contract: Arc<dyn LedgerContract>) -> Self {
        self.contract = Some(contract);
        self
    }

    /// Set the durable store, overriding the file store derived from config.
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the client configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the client.
    ///
    /// Fails if no contract binding was supplied or the backing store cannot
    /// be opened. The cached transaction count, if any, becomes the initial
    /// in-memory value so the UI has something to show before the first
    /// network round-trip.
    pub fn build(self) -> Result<TransferClient> {
        let contract = self
            .contract
            .ok_or_else(|| LedgerError::Config("a ledger contract binding is required".to_string()))?;

        let config = self.config.unwrap_or_default();
        config.validate().map_err(LedgerError::Config)?;

        let store: Arc<dyn KeyValueStore> = match self.store {
            Some(store) => store,
            None => Arc::new(FileStore::open(&config.storage_path).map_err(LedgerError::Storage)?),
        };

        let initial = ClientState {
            transaction_count: load_cached_count(store.as_ref()),
            ..ClientState::default()
        };

        Ok(TransferClient {
            provider: self.provider,
            contract,
            store,
            state: StateHandle::new(initial),
        })
    }
}

/// Client-side state layer for wallet-backed value transfers.
pub struct TransferClient {
    provider: Option<Arc<dyn WalletProvider>>,
    contract: Arc<dyn LedgerContract>,
    store: Arc<dyn KeyValueStore>,
    state: StateHandle,
}

impl TransferClient {
    /// Create a new transfer client using a builder for configuration.
    pub fn builder() -> TransferClientBuilder {
        TransferClientBuilder::default()
    }

    /// Request account access, prompting the user through the wallet.
    ///
    /// With no provider available this only sets the install advisory and
    /// returns `Ok` — the missing capability never crosses the operation
    /// boundary as an error. A rejected or empty response is an
    /// authorization failure carrying the original cause.
    pub async fn connect(&self) -> Result<()> {
        let Some(provider) = &self.provider else {
            self.advise_install();
            return Ok(());
        };

        let accounts = provider
            .request_accounts()
            .await
            .map_err(LedgerError::Authorization)?;
        let account = accounts.into_iter().next().ok_or_else(|| {
            LedgerError::Authorization(anyhow::anyhow!("provider returned no accounts"))
        })?;

        info!(account = %truncate_address(&account), "wallet connected");
        self.state.update(|s| {
            s.account = Some(account);
            s.advisory = None;
        });
        Ok(())
    }

    /// Silently restore an already-authorized session.
    ///
    /// If the provider reports an authorized account, it becomes the
    /// connected account and the transfer history is refreshed. No user
    /// prompt is raised either way.
    pub async fn restore_session(&self) -> Result<()> {
        let Some(provider) = &self.provider else {
            self.advise_install();
            return Ok(());
        };

        let accounts = provider
            .authorized_accounts()
            .await
            .map_err(LedgerError::Authorization)?;

        match accounts.into_iter().next() {
            Some(account) => {
                info!(account = %truncate_address(&account), "session restored");
                self.state.update(|s| {
                    s.account = Some(account);
                    s.advisory = None;
                });
                self.refresh_history().await
            }
            None => {
                debug!("no account found");
                Ok(())
            }
        }
    }

    /// Startup sequence: restore the session, then refresh the durable count
    /// cache. Intended to run once when the client is created.
    ///
    /// The two steps are independent; a failed restore does not stop the
    /// count cache from refreshing. The first failure is reported.
    pub async fn bootstrap(&self) -> Result<()> {
        let restored = self.restore_session().await;
        let cached = self.refresh_cached_count().await;
        restored.and(cached)
    }

    /// Merge a single field value into the transfer form.
    pub fn update_form_field(&self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        self.state.update(|s| s.form.set(field, value));
    }

    /// Submit the current form as a value transfer plus a ledger record.
    ///
    /// Steps run sequentially: amount conversion, native transfer through
    /// the wallet, contract write, confirmation, count mirror, form reset.
    /// Any failure aborts the remaining steps and leaves the form unchanged;
    /// the loading flag is reset on every exit path.
    pub async fn submit_transfer(&self) -> Result<()> {
        let Some(provider) = &self.provider else {
            self.advise_install();
            return Ok(());
        };

        let snapshot = self.state.snapshot();
        let from = snapshot
            .account
            .ok_or_else(|| LedgerError::InvalidInput("no connected account".to_string()))?;
        let form = snapshot.form;
        let amount_wei = parse_amount(&form.amount)?;

        provider
            .send_transaction(TransferRequest::new(&from, &form.address_to, amount_wei))
            .await
            .map_err(LedgerError::Write)?;

        let pending = self
            .contract
            .record_transfer(&form.address_to, amount_wei, &form.message, &form.keyword)
            .await
            .map_err(LedgerError::Write)?;
        info!(hash = pending.hash(), "ledger write dispatched");

        let _loading = LoadingGuard::engage(&self.state);
        pending.confirmed().await.map_err(LedgerError::Write)?;
        info!(hash = pending.hash(), "ledger write confirmed");

        let count = self
            .contract
            .transfer_count()
            .await
            .map_err(LedgerError::Read)?;

        self.state.update(|s| {
            s.transaction_count = Some(count);
            s.form = TransferForm::default();
        });
        Ok(())
    }

    /// Fetch the authoritative transfer count and persist it for the next
    /// cold start.
    pub async fn refresh_cached_count(&self) -> Result<()> {
        let count = self
            .contract
            .transfer_count()
            .await
            .map_err(LedgerError::Read)?;
        self.store
            .set(TRANSACTION_COUNT_KEY, &count.to_string())
            .map_err(LedgerError::Storage)?;
        debug!(count, "transfer count cached");
        Ok(())
    }

    /// Re-fetch the full transfer history and replace the state list.
    ///
    /// The list is always a full snapshot; entries absent from the new fetch
    /// disappear.
    pub async fn refresh_history(&self) -> Result<()> {
        let raw = self
            .contract
            .all_transfers()
            .await
            .map_err(LedgerError::Read)?;
        let records: Vec<TransferRecord> = raw.iter().map(TransferRecord::from_raw).collect();
        info!(count = records.len(), "transfer history refreshed");
        self.state.update(|s| s.transfers = records);
        Ok(())
    }

    // region:    --- Read surface

    /// Connected account address, if any.
    pub fn account(&self) -> Option<String> {
        self.state.snapshot().account
    }

    /// Current transfer form contents.
    pub fn form(&self) -> TransferForm {
        self.state.snapshot().form
    }

    /// Latest historical transfer snapshot.
    pub fn transfers(&self) -> Vec<TransferRecord> {
        self.state.snapshot().transfers
    }

    /// Mirrored transfer count (or the cached startup fallback).
    pub fn transaction_count(&self) -> Option<u64> {
        self.state.snapshot().transaction_count
    }

    /// True while a submitted transfer awaits confirmation.
    pub fn is_loading(&self) -> bool {
        self.state.snapshot().is_loading
    }

    /// Pending user-facing advisory, if any.
    pub fn advisory(&self) -> Option<String> {
        self.state.snapshot().advisory
    }

    /// Clone the full state snapshot.
    pub fn snapshot(&self) -> ClientState {
        self.state.snapshot()
    }

    /// Subscribe to state change notifications.
    pub fn subscribe(&self) -> watch::Receiver<ClientState> {
        self.state.subscribe()
    }

    // endregion: --- Read surface

    fn advise_install(&self) {
        warn!("no wallet provider available");
        self.state
            .update(|s| s.advisory = Some(INSTALL_ADVISORY.to_string()));
    }
}

/// RAII guard for the loading flag.
///
/// Engaged once the ledger write is dispatched and confirmation is awaited;
/// the drop resets the flag no matter how the wait ends, so the flag can
/// never stay stuck.
struct LoadingGuard {
    state: StateHandle,
}

impl LoadingGuard {
    fn engage(state: &StateHandle) -> Self {
        state.update(|s| s.is_loading = true);
        Self {
            state: state.clone(),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.state.update(|s| s.is_loading = false);
    }
}
