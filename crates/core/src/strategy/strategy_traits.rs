//! Strategy repository and service traits.
//!
//! The repository side is the persistence collaborator: one opaque text blob
//! per wallet, behind load/save calls. Storage-specific details live in
//! concrete implementations.

use async_trait::async_trait;

use super::strategy_model::Strategy;
use crate::assets::AssetType;
use crate::errors::Result;

/// Trait defining the persistence contract for strategy blobs.
///
/// One blob per wallet, keyed by wallet id. Implementations must report a
/// write that affected no row as `Ok(false)` rather than an error.
#[async_trait]
pub trait StrategyRepositoryTrait: Send + Sync {
    /// Loads the persisted blob for a wallet. `None` when the wallet has no
    /// strategy yet (or does not exist).
    fn load_strategy(&self, wallet_id: &str) -> Result<Option<String>>;

    /// Persists the blob for a wallet. Returns whether a row was written.
    async fn save_strategy(&self, wallet_id: &str, payload: String) -> Result<bool>;
}

/// Trait defining the contract for strategy commands.
///
/// Mutating commands operate on a caller-owned [`Strategy`] tree and are
/// guarded against interleaving; persistence goes through the repository.
#[async_trait]
pub trait StrategyServiceTrait: Send + Sync {
    /// Loads a wallet's strategy, falling back to an empty default on
    /// missing or malformed data.
    fn get_strategy(&self, wallet_id: &str) -> Result<Strategy>;

    /// Serializes and persists a wallet's strategy. Returns whether the
    /// write reached a row.
    async fn save_strategy(&self, wallet_id: &str, strategy: &Strategy) -> Result<bool>;

    /// Appends a new group. Fails on duplicate or invalid names.
    fn add_group(&self, strategy: &mut Strategy, name: &str) -> Result<()>;

    /// Removes an empty group.
    fn remove_group(&self, strategy: &mut Strategy, name: &str) -> Result<()>;

    /// Sets a group's percentage; returns the clamped value applied.
    fn set_group_percentage(&self, strategy: &mut Strategy, name: &str, requested: u8)
        -> Result<u8>;

    /// Enables or disables a group; returns the percentage it had before.
    fn set_group_enabled(&self, strategy: &mut Strategy, name: &str, enabled: bool) -> Result<u8>;

    /// Adds an allocation at 0% to a group.
    fn add_asset_to_group(
        &self,
        strategy: &mut Strategy,
        group_name: &str,
        asset_type: AssetType,
    ) -> Result<()>;

    /// Sets an allocation's percentage; returns the clamped value applied.
    fn set_asset_percentage(
        &self,
        strategy: &mut Strategy,
        group_name: &str,
        asset_type: AssetType,
        requested: u8,
    ) -> Result<u8>;

    /// Removes an allocation from a group.
    fn remove_asset_from_group(
        &self,
        strategy: &mut Strategy,
        group_name: &str,
        asset_type: AssetType,
    ) -> Result<()>;
}
