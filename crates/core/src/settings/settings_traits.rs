//! Repository and service traits for user preferences.
//!
//! Preferences are a small key-value table. The one key the core itself
//! depends on is the active-wallet pointer: exactly one wallet is active at
//! a time, referenced (not owned) from here.

use async_trait::async_trait;

use crate::errors::Result;

/// Repository trait for preference storage.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value by key. `Err(NotFound)` when absent.
    fn get_setting(&self, setting_key: &str) -> Result<String>;

    /// Upsert a single setting.
    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()>;

    /// Remove a setting. Absent keys are not an error.
    async fn delete_setting(&self, setting_key: &str) -> Result<()>;
}

/// Service trait for preference access.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Get a single setting value by key. Returns None if not found.
    fn get_setting_value(&self, key: &str) -> Result<Option<String>>;

    /// Set a single setting value by key.
    async fn set_setting_value(&self, key: &str, value: &str) -> Result<()>;

    /// Id of the currently active wallet, if one is set.
    fn get_active_wallet_id(&self) -> Result<Option<String>>;

    /// Points the active-wallet reference at another wallet.
    async fn set_active_wallet_id(&self, wallet_id: &str) -> Result<()>;

    /// Clears the active-wallet reference.
    async fn clear_active_wallet_id(&self) -> Result<()>;
}
