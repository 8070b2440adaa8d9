//! Wallet repository and service traits.
//!
//! These traits define the contract for wallet operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::wallets_model::{NewWallet, Wallet};
use crate::errors::Result;

/// Trait defining the contract for wallet repository operations.
#[async_trait]
pub trait WalletRepositoryTrait: Send + Sync {
    /// Creates a new wallet row.
    async fn create(&self, new_wallet: NewWallet) -> Result<Wallet>;

    /// Deletes a wallet by id. Returns the number of deleted records.
    async fn delete(&self, wallet_id: &str) -> Result<usize>;

    /// Retrieves a wallet by its id.
    fn get_by_id(&self, wallet_id: &str) -> Result<Wallet>;

    /// Finds a wallet by exact name, if one exists.
    fn find_by_name(&self, name: &str) -> Result<Option<Wallet>>;

    /// Lists all wallets in creation order.
    fn list(&self) -> Result<Vec<Wallet>>;
}

/// Trait defining the contract for wallet service operations.
#[async_trait]
pub trait WalletServiceTrait: Send + Sync {
    /// Creates a wallet after validating the name and its uniqueness.
    async fn create_wallet(&self, new_wallet: NewWallet) -> Result<Wallet>;

    /// Deletes a wallet. Clears the active-wallet pointer when it pointed
    /// at the deleted wallet.
    async fn delete_wallet(&self, wallet_id: &str) -> Result<()>;

    /// Retrieves a wallet by id.
    fn get_wallet(&self, wallet_id: &str) -> Result<Wallet>;

    /// Lists all wallets.
    fn list_wallets(&self) -> Result<Vec<Wallet>>;

    /// The currently active wallet, if the pointer is set and still valid.
    fn get_active_wallet(&self) -> Result<Option<Wallet>>;

    /// Makes a wallet the active one.
    async fn set_active_wallet(&self, wallet_id: &str) -> Result<()>;
}
