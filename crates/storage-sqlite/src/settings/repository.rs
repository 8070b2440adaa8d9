use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use carteira_core::errors::Result;
use carteira_core::settings::SettingsRepositoryTrait;

use super::model::AppSettingDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::app_settings;

pub struct SettingsRepository {
    pool: Arc<DbPool>,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SettingsRepository { pool }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_setting(&self, key: &str) -> Result<String> {
        let mut conn = get_connection(&self.pool)?;
        let value = app_settings::table
            .find(key)
            .select(app_settings::setting_value)
            .first::<String>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(value)
    }

    async fn update_setting(&self, key: &str, value: &str) -> Result<()> {
        let setting = AppSettingDB {
            setting_key: key.to_string(),
            setting_value: value.to_string(),
        };
        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(app_settings::table)
            .values(&setting)
            .on_conflict(app_settings::setting_key)
            .do_update()
            .set(&setting)
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(())
    }

    async fn delete_setting(&self, key: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(app_settings::table.find(key))
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(())
    }
}
