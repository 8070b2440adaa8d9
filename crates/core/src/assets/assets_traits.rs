//! Asset data provider trait.
//!
//! Quantity/price/performance figures live outside the strategy tree and are
//! resolved on demand for a given wallet. Implementations sit behind this
//! trait so the core stays independent of where the numbers come from.

use super::assets_model::{AssetData, AssetType};
use crate::errors::Result;

/// Trait for resolving transient market data for a wallet's assets.
pub trait AssetDataProviderTrait: Send + Sync {
    /// Returns current data for one asset type, or `None` when the wallet
    /// holds nothing of that type yet.
    fn asset_data(&self, wallet_id: &str, asset_type: AssetType) -> Result<Option<AssetData>>;
}
