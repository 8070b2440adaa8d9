//! Wallet domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::validation::{LengthRangeRule, NotEmptyRule, ValidatableField};

/// Domain model representing a wallet.
///
/// The wallet's strategy is persisted alongside it as an opaque blob and is
/// not part of this identity record; it travels through the strategy
/// repository instead.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Input model for creating a new wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWallet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl NewWallet {
    /// Validates the new wallet data through the standard name rules.
    pub fn validate(&self) -> Result<()> {
        let mut name_field = ValidatableField::new("name")
            .with_rule(NotEmptyRule::new("Wallet name cannot be empty"))
            .with_rule(LengthRangeRule::for_names());
        if !name_field.set_value(Some(self.name.clone())) {
            let message = name_field.error().unwrap_or("Invalid wallet name");
            return Err(Error::Validation(ValidationError::InvalidInput(
                message.to_string(),
            )));
        }
        Ok(())
    }
}
