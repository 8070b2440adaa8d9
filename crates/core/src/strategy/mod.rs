//! Strategy module - allocation tree, services, and traits.

mod strategy_model;
mod strategy_service;
mod strategy_service_tests;
mod strategy_traits;

pub use strategy_model::{percentage_from_proportion, AssetAllocation, AssetGroup, Strategy};
pub use strategy_service::StrategyService;
pub use strategy_traits::{StrategyRepositoryTrait, StrategyServiceTrait};
