//! UpdateActionItemHandler - toggles one action item's completion.

use std::sync::Arc;

use crate::domain::foundation::{ActionItemId, Clock, RecommendationId};
use crate::domain::recommendation::StudyRecommendation;
use crate::ports::{RecommendationPatch, RecommendationStore};

use super::LifecycleError;

/// Command to set or clear an action item's completion flag.
#[derive(Debug, Clone, Copy)]
pub struct UpdateActionItemCommand {
    pub recommendation_id: RecommendationId,
    pub action_item_id: ActionItemId,
    pub completed: bool,
}

pub struct UpdateActionItemHandler {
    store: Arc<dyn RecommendationStore>,
    clock: Arc<dyn Clock>,
}

impl UpdateActionItemHandler {
    pub fn new(store: Arc<dyn RecommendationStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Loads the record, flips the matching item, and writes the full
    /// action-item list back.
    pub async fn handle(
        &self,
        command: UpdateActionItemCommand,
    ) -> Result<StudyRecommendation, LifecycleError> {
        let id = command.recommendation_id;
        let mut rec = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(LifecycleError::NotFound(id))?;

        rec.complete_action_item(command.action_item_id, command.completed, self.clock.now())
            .map_err(|_| LifecycleError::ActionItemNotFound {
                recommendation_id: id,
                item_id: command.action_item_id,
            })?;

        let updated = self
            .store
            .update(id, RecommendationPatch::action_items(rec.action_items.clone()))
            .await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::recommendation::testing::{sample_recommendation, SingleRecordStore};
    use crate::domain::foundation::FixedClock;
    use crate::domain::recommendation::{ActionItem, ActionItemKind};
    use chrono::{TimeZone, Utc};

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::at(
            Utc.with_ymd_and_hms(2025, 3, 11, 12, 0, 0).unwrap(),
        ))
    }

    fn with_items() -> StudyRecommendation {
        sample_recommendation().with_action_items(vec![
            ActionItem::new("First step", ActionItemKind::Task),
            ActionItem::new("Second step", ActionItemKind::Habit),
        ])
    }

    #[tokio::test]
    async fn round_trip_updates_only_the_target_item() {
        let rec = with_items();
        let rec_id = rec.id;
        let target = rec.action_items[0].id;
        let store = Arc::new(SingleRecordStore::holding(rec));
        let handler = UpdateActionItemHandler::new(store.clone(), clock());

        handler
            .handle(UpdateActionItemCommand {
                recommendation_id: rec_id,
                action_item_id: target,
                completed: true,
            })
            .await
            .unwrap();

        let fetched = store.stored().unwrap();
        assert!(fetched.action_items[0].is_completed);
        assert!(fetched.action_items[0].completed_at.is_some());
        assert!(!fetched.action_items[1].is_completed);
        assert!(fetched.action_items[1].completed_at.is_none());
    }

    #[tokio::test]
    async fn clearing_completion_removes_the_timestamp() {
        let rec = with_items();
        let rec_id = rec.id;
        let target = rec.action_items[0].id;
        let store = Arc::new(SingleRecordStore::holding(rec));
        let handler = UpdateActionItemHandler::new(store.clone(), clock());

        handler
            .handle(UpdateActionItemCommand {
                recommendation_id: rec_id,
                action_item_id: target,
                completed: true,
            })
            .await
            .unwrap();
        let out = handler
            .handle(UpdateActionItemCommand {
                recommendation_id: rec_id,
                action_item_id: target,
                completed: false,
            })
            .await
            .unwrap();

        assert!(!out.action_items[0].is_completed);
        assert!(out.action_items[0].completed_at.is_none());
    }

    #[tokio::test]
    async fn unknown_recommendation_is_not_found() {
        let store = Arc::new(SingleRecordStore::empty());
        let handler = UpdateActionItemHandler::new(store, clock());

        let result = handler
            .handle(UpdateActionItemCommand {
                recommendation_id: RecommendationId::new(),
                action_item_id: ActionItemId::new(),
                completed: true,
            })
            .await;

        assert!(matches!(result, Err(LifecycleError::NotFound(_))));
    }

    #[tokio::test]
    async fn unknown_action_item_is_not_found() {
        let rec = with_items();
        let rec_id = rec.id;
        let store = Arc::new(SingleRecordStore::holding(rec));
        let handler = UpdateActionItemHandler::new(store, clock());

        let result = handler
            .handle(UpdateActionItemCommand {
                recommendation_id: rec_id,
                action_item_id: ActionItemId::new(),
                completed: true,
            })
            .await;

        assert!(matches!(
            result,
            Err(LifecycleError::ActionItemNotFound { .. })
        ));
    }
}
