use async_trait::async_trait;
use std::sync::Arc;

use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::constants::ACTIVE_WALLET_SETTING_KEY;
use crate::errors::{DatabaseError, Error, Result};

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        Self {
            settings_repository,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_setting_value(&self, key: &str) -> Result<Option<String>> {
        match self.settings_repository.get_setting(key) {
            Ok(value) => Ok(Some(value)),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set_setting_value(&self, key: &str, value: &str) -> Result<()> {
        self.settings_repository.update_setting(key, value).await
    }

    fn get_active_wallet_id(&self) -> Result<Option<String>> {
        Ok(self
            .get_setting_value(ACTIVE_WALLET_SETTING_KEY)?
            .filter(|id| !id.is_empty()))
    }

    async fn set_active_wallet_id(&self, wallet_id: &str) -> Result<()> {
        self.settings_repository
            .update_setting(ACTIVE_WALLET_SETTING_KEY, wallet_id)
            .await
    }

    async fn clear_active_wallet_id(&self) -> Result<()> {
        self.settings_repository
            .delete_setting(ACTIVE_WALLET_SETTING_KEY)
            .await
    }
}
