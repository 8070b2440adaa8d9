//! Tests for the strategy service: persistence flow, event emission, and the
//! non-reentrant command guard.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::assets::AssetType;
    use crate::errors::{Error, Result};
    use crate::events::{DomainEvent, MockDomainEventSink, NoOpDomainEventSink};
    use crate::strategy::{
        Strategy, StrategyRepositoryTrait, StrategyService, StrategyServiceTrait,
    };

    /// In-memory blob store. Saves report no row for unknown wallets,
    /// mirroring the single-UPDATE persistence contract.
    #[derive(Default)]
    struct InMemoryStrategyRepository {
        blobs: Mutex<HashMap<String, String>>,
    }

    impl InMemoryStrategyRepository {
        fn with_wallet(wallet_id: &str) -> Self {
            let repo = Self::default();
            repo.blobs
                .lock()
                .unwrap()
                .insert(wallet_id.to_string(), String::new());
            repo
        }

        fn set_blob(&self, wallet_id: &str, payload: &str) {
            self.blobs
                .lock()
                .unwrap()
                .insert(wallet_id.to_string(), payload.to_string());
        }
    }

    #[async_trait]
    impl StrategyRepositoryTrait for InMemoryStrategyRepository {
        fn load_strategy(&self, wallet_id: &str) -> Result<Option<String>> {
            Ok(self
                .blobs
                .lock()
                .unwrap()
                .get(wallet_id)
                .filter(|p| !p.is_empty())
                .cloned())
        }

        async fn save_strategy(&self, wallet_id: &str, payload: String) -> Result<bool> {
            let mut blobs = self.blobs.lock().unwrap();
            match blobs.get_mut(wallet_id) {
                Some(existing) => {
                    *existing = payload;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    /// Repository that parks inside save until released, to hold the
    /// command guard open from a test.
    struct BlockingRepository {
        entered: Notify,
        release: Notify,
    }

    impl BlockingRepository {
        fn new() -> Self {
            Self {
                entered: Notify::new(),
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl StrategyRepositoryTrait for BlockingRepository {
        fn load_strategy(&self, _wallet_id: &str) -> Result<Option<String>> {
            Ok(None)
        }

        async fn save_strategy(&self, _wallet_id: &str, _payload: String) -> Result<bool> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(true)
        }
    }

    fn service_with_wallet(wallet_id: &str) -> (StrategyService, Arc<MockDomainEventSink>) {
        let repository = Arc::new(InMemoryStrategyRepository::with_wallet(wallet_id));
        let sink = Arc::new(MockDomainEventSink::new());
        (StrategyService::new(repository, sink.clone()), sink)
    }

    // ==================== Persistence Flow Tests ====================

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let (service, _sink) = service_with_wallet("w-1");

        let mut strategy = Strategy::default();
        service.add_group(&mut strategy, "Ações").unwrap();
        service
            .set_group_percentage(&mut strategy, "Ações", 40)
            .unwrap();
        service
            .add_asset_to_group(&mut strategy, "Ações", AssetType::BraStock)
            .unwrap();

        assert!(service.save_strategy("w-1", &strategy).await.unwrap());
        assert_eq!(service.get_strategy("w-1").unwrap(), strategy);
    }

    #[tokio::test]
    async fn test_save_to_unknown_wallet_reports_false() {
        let (service, sink) = service_with_wallet("w-1");

        let written = service
            .save_strategy("w-missing", &Strategy::default())
            .await
            .unwrap();
        assert!(!written);
        // No durable write, no event.
        assert!(sink.is_empty());
    }

    #[test]
    fn test_get_strategy_falls_back_on_missing_blob() {
        let (service, _sink) = service_with_wallet("w-1");
        assert_eq!(service.get_strategy("w-1").unwrap(), Strategy::default());
        assert_eq!(
            service.get_strategy("w-missing").unwrap(),
            Strategy::default()
        );
    }

    #[test]
    fn test_get_strategy_falls_back_on_malformed_blob() {
        let repository = Arc::new(InMemoryStrategyRepository::with_wallet("w-1"));
        repository.set_blob("w-1", "{definitely not json");
        let service = StrategyService::new(repository, Arc::new(NoOpDomainEventSink));

        assert_eq!(service.get_strategy("w-1").unwrap(), Strategy::default());
    }

    // ==================== Event Emission Tests ====================

    #[tokio::test]
    async fn test_successful_save_emits_strategy_changed() {
        let (service, sink) = service_with_wallet("w-1");
        service
            .save_strategy("w-1", &Strategy::default())
            .await
            .unwrap();

        assert_eq!(
            sink.events(),
            vec![DomainEvent::StrategyChanged {
                wallet_id: "w-1".to_string()
            }]
        );
    }

    #[test]
    fn test_disable_emits_group_disabled_with_prior_percentage() {
        let (service, sink) = service_with_wallet("w-1");
        let mut strategy = Strategy::default();
        service.add_group(&mut strategy, "Ações").unwrap();
        service
            .set_group_percentage(&mut strategy, "Ações", 35)
            .unwrap();

        let prior = service
            .set_group_enabled(&mut strategy, "Ações", false)
            .unwrap();
        assert_eq!(prior, 35);
        assert_eq!(
            sink.events(),
            vec![DomainEvent::GroupDisabled {
                group_name: "Ações".to_string(),
                prior_percentage: 35
            }]
        );

        // Re-enabling is not an event of its own.
        service
            .set_group_enabled(&mut strategy, "Ações", true)
            .unwrap();
        assert_eq!(sink.len(), 1);
    }

    // ==================== Command Guard Tests ====================

    #[test]
    fn test_guard_is_released_after_each_command() {
        let (service, _sink) = service_with_wallet("w-1");
        let mut strategy = Strategy::default();

        service.add_group(&mut strategy, "Grupo A").unwrap();
        service.add_group(&mut strategy, "Grupo B").unwrap();
        service
            .set_group_percentage(&mut strategy, "Grupo A", 50)
            .unwrap();
        assert_eq!(strategy.groups.len(), 2);
    }

    #[test]
    fn test_guard_is_released_after_a_failed_command() {
        let (service, _sink) = service_with_wallet("w-1");
        let mut strategy = Strategy::default();
        service.add_group(&mut strategy, "Grupo A").unwrap();

        assert!(service.add_group(&mut strategy, "Grupo A").is_err());
        service.add_group(&mut strategy, "Grupo B").unwrap();
    }

    #[tokio::test]
    async fn test_overlapping_commands_are_rejected() {
        let repository = Arc::new(BlockingRepository::new());
        let service = Arc::new(StrategyService::new(
            repository.clone(),
            Arc::new(NoOpDomainEventSink),
        ));

        let in_flight = {
            let service = service.clone();
            tokio::spawn(async move { service.save_strategy("w-1", &Strategy::default()).await })
        };
        repository.entered.notified().await;

        // The first save still holds the guard.
        let mut strategy = Strategy::default();
        let err = service.add_group(&mut strategy, "Ações").unwrap_err();
        assert!(matches!(err, Error::OperationInProgress));
        let err = service
            .save_strategy("w-1", &Strategy::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::OperationInProgress));

        repository.release.notify_one();
        assert!(in_flight.await.unwrap().unwrap());

        // Guard released; commands work again.
        service.add_group(&mut strategy, "Ações").unwrap();
    }
}
