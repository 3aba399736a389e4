//! # Client Configuration
//!
//! Configuration loaded from environment variables and validated up front so
//! a misconfigured host fails fast. The config is passed explicitly into the
//! client builder; there is no ambient global.

use lib_utils::envs::get_env_or;
use lib_utils::validation::{validate_address, validate_not_empty};

/// Transfer client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Path of the durable key-value store file.
    pub storage_path: String,

    /// Address of the deployed ledger contract, when the host wires a real
    /// binding. Optional because tests and embedded hosts inject their own.
    pub contract_address: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            storage_path: "data/wallet-cache.json".to_string(),
            contract_address: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// `WALLET_STORAGE_PATH` defaults to `data/wallet-cache.json`;
    /// `LEDGER_CONTRACT_ADDRESS` is optional.
    pub fn from_env() -> Result<Self, String> {
        let storage_path = get_env_or("WALLET_STORAGE_PATH", "data/wallet-cache.json");
        let contract_address = std::env::var("LEDGER_CONTRACT_ADDRESS").ok();

        let config = Self {
            storage_path,
            contract_address,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        validate_not_empty(&self.storage_path, "storage path")?;
        if let Some(address) = &self.contract_address {
            validate_address(address)?;
        }
        Ok(())
    }
}
