use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use carteira_core::strategy::StrategyRepositoryTrait;
use carteira_core::wallets::{NewWallet, Wallet, WalletRepositoryTrait};
use carteira_core::Result;

use super::model::WalletDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::wallets;

/// Wallet persistence: identity CRUD plus the per-wallet strategy blob.
///
/// The strategy is a single text column on the wallet row; saving it is one
/// UPDATE, and "no row was touched" surfaces as `Ok(false)` rather than an
/// error so callers can react without unwinding.
pub struct WalletRepository {
    pool: Arc<DbPool>,
}

impl WalletRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        WalletRepository { pool }
    }
}

#[async_trait]
impl WalletRepositoryTrait for WalletRepository {
    async fn create(&self, new_wallet: NewWallet) -> Result<Wallet> {
        let wallet_db: WalletDB = new_wallet.into();
        let mut conn = get_connection(&self.pool)?;
        let result_db: WalletDB = diesel::insert_into(wallets::table)
            .values(&wallet_db)
            .returning(WalletDB::as_returning())
            .get_result(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Wallet::from(result_db))
    }

    async fn delete(&self, wallet_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(wallets::table.find(wallet_id))
            .execute(&mut conn)
            .map_err(StorageError::from)?)
    }

    fn get_by_id(&self, wallet_id: &str) -> Result<Wallet> {
        let mut conn = get_connection(&self.pool)?;
        let wallet_db = wallets::table
            .find(wallet_id)
            .first::<WalletDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Wallet::from(wallet_db))
    }

    fn find_by_name(&self, wallet_name: &str) -> Result<Option<Wallet>> {
        let mut conn = get_connection(&self.pool)?;
        let wallet_db = wallets::table
            .filter(wallets::name.eq(wallet_name))
            .first::<WalletDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(wallet_db.map(Wallet::from))
    }

    fn list(&self) -> Result<Vec<Wallet>> {
        let mut conn = get_connection(&self.pool)?;
        let wallets_db = wallets::table
            .order(wallets::created_at.asc())
            .load::<WalletDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(wallets_db.into_iter().map(Wallet::from).collect())
    }
}

#[async_trait]
impl StrategyRepositoryTrait for WalletRepository {
    fn load_strategy(&self, wallet_id: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let payload = wallets::table
            .find(wallet_id)
            .select(wallets::strategy)
            .first::<Option<String>>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(payload.flatten())
    }

    async fn save_strategy(&self, wallet_id: &str, payload: String) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let affected = diesel::update(wallets::table.find(wallet_id))
            .set((
                wallets::strategy.eq(Some(payload)),
                wallets::updated_at.eq(chrono::Utc::now().to_rfc3339()),
            ))
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(affected > 0)
    }
}
