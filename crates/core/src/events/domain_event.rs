//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about domain data changes. The UI layer
/// translates them into re-renders; nothing in the core depends on what a
/// subscriber does with them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A wallet's strategy blob was durably saved.
    StrategyChanged { wallet_id: String },

    /// A group was disabled and its percentage zeroed. Carries the value the
    /// group held before, for undo affordances.
    GroupDisabled {
        group_name: String,
        prior_percentage: u8,
    },

    /// Wallets were created or deleted.
    WalletsChanged { wallet_ids: Vec<String> },
}

impl DomainEvent {
    /// Creates a StrategyChanged event.
    pub fn strategy_changed(wallet_id: impl Into<String>) -> Self {
        Self::StrategyChanged {
            wallet_id: wallet_id.into(),
        }
    }

    /// Creates a GroupDisabled event.
    pub fn group_disabled(group_name: impl Into<String>, prior_percentage: u8) -> Self {
        Self::GroupDisabled {
            group_name: group_name.into(),
            prior_percentage,
        }
    }

    /// Creates a WalletsChanged event.
    pub fn wallets_changed(wallet_ids: Vec<String>) -> Self {
        Self::WalletsChanged { wallet_ids }
    }
}
