//! Asset domain models.

use serde::{Deserialize, Serialize};

/// Asset classes available for allocation.
///
/// The numeric values are external identifiers that appear in persisted
/// strategy blobs and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum AssetType {
    /// Brazilian stocks (ações).
    BraStock = 561,
    /// Brazilian real-estate funds (FIIs).
    BraFii = 962,
    /// Brazilian depositary receipts (BDRs).
    BraBdr = 341,
}

impl AssetType {
    /// All asset types, in display order.
    pub const ALL: [AssetType; 3] = [AssetType::BraStock, AssetType::BraFii, AssetType::BraBdr];

    /// The stable integer identifier used in persisted data.
    pub fn wire_value(self) -> i32 {
        self as i32
    }

    /// Static display metadata for this asset type.
    pub fn meta(self) -> &'static AssetMeta {
        match self {
            AssetType::BraStock => &AssetMeta {
                short_name: "Ações",
                long_name: "Ações Brasileiras",
                culture_code: "pt-BR",
                flag_code: "br",
            },
            AssetType::BraFii => &AssetMeta {
                short_name: "FIIs",
                long_name: "Fundos Imobiliários",
                culture_code: "pt-BR",
                flag_code: "br",
            },
            AssetType::BraBdr => &AssetMeta {
                short_name: "BDRs",
                long_name: "Brazilian Depositary Receipts",
                culture_code: "pt-BR",
                flag_code: "us",
            },
        }
    }
}

impl From<AssetType> for i32 {
    fn from(asset_type: AssetType) -> Self {
        asset_type as i32
    }
}

impl TryFrom<i32> for AssetType {
    type Error = String;

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        match value {
            561 => Ok(AssetType::BraStock),
            962 => Ok(AssetType::BraFii),
            341 => Ok(AssetType::BraBdr),
            other => Err(format!("unknown asset type identifier: {}", other)),
        }
    }
}

/// Static, read-only display metadata keyed by [`AssetType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetMeta {
    pub short_name: &'static str,
    pub long_name: &'static str,
    pub culture_code: &'static str,
    pub flag_code: &'static str,
}

/// Transient market data for one asset type inside a wallet.
///
/// Resolved at read time through the owning wallet; never persisted on
/// the allocation itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetData {
    pub quantity: f64,
    pub price: f64,
    pub variation: f64,
    pub performance: f64,
}
