use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::strategy_model::Strategy;
use super::strategy_traits::{StrategyRepositoryTrait, StrategyServiceTrait};
use crate::assets::AssetType;
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};

/// Service for strategy commands.
///
/// All mutations run behind a single non-reentrant guard: user-triggered
/// commands never interleave on the same service, mirroring the way the UI
/// disables its controls while a command is running. An overlapping call is
/// rejected with [`Error::OperationInProgress`] instead of queueing.
pub struct StrategyService {
    repository: Arc<dyn StrategyRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
    in_progress: AtomicBool,
}

impl StrategyService {
    /// Creates a new StrategyService instance.
    pub fn new(
        repository: Arc<dyn StrategyRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            event_sink,
            in_progress: AtomicBool::new(false),
        }
    }

    fn begin_command(&self) -> Result<CommandGuard<'_>> {
        if self
            .in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::OperationInProgress);
        }
        Ok(CommandGuard {
            flag: &self.in_progress,
        })
    }
}

/// Releases the command guard when the command ends, on any path.
struct CommandGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for CommandGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[async_trait::async_trait]
impl StrategyServiceTrait for StrategyService {
    fn get_strategy(&self, wallet_id: &str) -> Result<Strategy> {
        let payload = self.repository.load_strategy(wallet_id)?;
        Ok(Strategy::from_json(payload.as_deref()))
    }

    async fn save_strategy(&self, wallet_id: &str, strategy: &Strategy) -> Result<bool> {
        let _guard = self.begin_command()?;
        let payload = strategy.to_json()?;
        let written = self
            .repository
            .save_strategy(wallet_id, payload)
            .await?;
        if written {
            self.event_sink
                .emit(DomainEvent::strategy_changed(wallet_id));
        } else {
            debug!("Strategy save for wallet {} reached no row", wallet_id);
        }
        Ok(written)
    }

    fn add_group(&self, strategy: &mut Strategy, name: &str) -> Result<()> {
        let _guard = self.begin_command()?;
        strategy.add_group(name)?;
        Ok(())
    }

    fn remove_group(&self, strategy: &mut Strategy, name: &str) -> Result<()> {
        let _guard = self.begin_command()?;
        strategy.remove_group(name)
    }

    fn set_group_percentage(
        &self,
        strategy: &mut Strategy,
        name: &str,
        requested: u8,
    ) -> Result<u8> {
        let _guard = self.begin_command()?;
        strategy.set_group_percentage(name, requested)
    }

    fn set_group_enabled(&self, strategy: &mut Strategy, name: &str, enabled: bool) -> Result<u8> {
        let _guard = self.begin_command()?;
        let prior = strategy.set_group_enabled(name, enabled)?;
        if !enabled {
            self.event_sink
                .emit(DomainEvent::group_disabled(name, prior));
        }
        Ok(prior)
    }

    fn add_asset_to_group(
        &self,
        strategy: &mut Strategy,
        group_name: &str,
        asset_type: AssetType,
    ) -> Result<()> {
        let _guard = self.begin_command()?;
        strategy.add_asset_to_group(group_name, asset_type)
    }

    fn set_asset_percentage(
        &self,
        strategy: &mut Strategy,
        group_name: &str,
        asset_type: AssetType,
        requested: u8,
    ) -> Result<u8> {
        let _guard = self.begin_command()?;
        strategy.set_asset_percentage(group_name, asset_type, requested)
    }

    fn remove_asset_from_group(
        &self,
        strategy: &mut Strategy,
        group_name: &str,
        asset_type: AssetType,
    ) -> Result<()> {
        let _guard = self.begin_command()?;
        strategy.remove_asset_from_group(group_name, asset_type)
    }
}
