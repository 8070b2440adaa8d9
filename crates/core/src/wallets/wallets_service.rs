use log::debug;
use std::sync::Arc;

use super::wallets_model::{NewWallet, Wallet};
use super::wallets_traits::{WalletRepositoryTrait, WalletServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::events::{DomainEvent, DomainEventSink};
use crate::settings::SettingsServiceTrait;

/// Service for managing wallets.
pub struct WalletService {
    repository: Arc<dyn WalletRepositoryTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl WalletService {
    /// Creates a new WalletService instance.
    pub fn new(
        repository: Arc<dyn WalletRepositoryTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            settings_service,
            event_sink,
        }
    }
}

#[async_trait::async_trait]
impl WalletServiceTrait for WalletService {
    async fn create_wallet(&self, new_wallet: NewWallet) -> Result<Wallet> {
        new_wallet.validate()?;
        if self.repository.find_by_name(&new_wallet.name)?.is_some() {
            return Err(Error::DuplicateName {
                kind: "wallet",
                name: new_wallet.name,
            });
        }

        debug!("Creating wallet '{}'", new_wallet.name);
        let wallet = self.repository.create(new_wallet).await?;

        // The first wallet becomes active without further user action.
        if self.settings_service.get_active_wallet_id()?.is_none() {
            self.settings_service.set_active_wallet_id(&wallet.id).await?;
        }

        self.event_sink
            .emit(DomainEvent::wallets_changed(vec![wallet.id.clone()]));
        Ok(wallet)
    }

    async fn delete_wallet(&self, wallet_id: &str) -> Result<()> {
        self.repository.delete(wallet_id).await?;

        if self.settings_service.get_active_wallet_id()?.as_deref() == Some(wallet_id) {
            self.settings_service.clear_active_wallet_id().await?;
        }

        self.event_sink
            .emit(DomainEvent::wallets_changed(vec![wallet_id.to_string()]));
        Ok(())
    }

    fn get_wallet(&self, wallet_id: &str) -> Result<Wallet> {
        self.repository.get_by_id(wallet_id)
    }

    fn list_wallets(&self) -> Result<Vec<Wallet>> {
        self.repository.list()
    }

    fn get_active_wallet(&self) -> Result<Option<Wallet>> {
        let Some(active_id) = self.settings_service.get_active_wallet_id()? else {
            return Ok(None);
        };
        match self.repository.get_by_id(&active_id) {
            Ok(wallet) => Ok(Some(wallet)),
            // A stale pointer (wallet removed out of band) is not an error.
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set_active_wallet(&self, wallet_id: &str) -> Result<()> {
        // Reject pointers at wallets that don't exist.
        let wallet = self.repository.get_by_id(wallet_id)?;
        self.settings_service.set_active_wallet_id(&wallet.id).await
    }
}
