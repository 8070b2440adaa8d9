//! Database models for wallets.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for wallets.
///
/// The strategy column carries the opaque serialized blob; it never leaves
/// this crate as anything other than text.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::wallets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct WalletDB {
    pub id: String,
    pub name: String,
    pub strategy: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

// Conversion to domain models
impl From<WalletDB> for carteira_core::wallets::Wallet {
    fn from(db: WalletDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<carteira_core::wallets::NewWallet> for WalletDB {
    fn from(domain: carteira_core::wallets::NewWallet) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: domain.id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: domain.name,
            strategy: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
