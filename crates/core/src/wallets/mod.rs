//! Wallets module - wallet identity, services, and traits.

mod wallets_model;
mod wallets_service;
mod wallets_traits;

pub use wallets_model::{NewWallet, Wallet};
pub use wallets_service::WalletService;
pub use wallets_traits::{WalletRepositoryTrait, WalletServiceTrait};
