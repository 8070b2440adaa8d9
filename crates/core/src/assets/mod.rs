//! Assets module - asset types, static metadata, and transient market data.

mod assets_model;
mod assets_traits;

pub use assets_model::{AssetData, AssetMeta, AssetType};
pub use assets_traits::AssetDataProviderTrait;
