//! Collection Sync Controller Tests
//!
//! Run the controller against the in-memory recording resource.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::Duration;

    use crate::domain::{DomainError, Item, ViewState};
    use crate::sync::controller::{EMPTY_TEXT_PROMPT, LOAD_ERROR_MESSAGE, LOAD_ERROR_TITLE};
    use crate::sync::testing::{Call, RecordingNotifier, RecordingResource};
    use crate::sync::{CollectionSyncController, SubmitOutcome};

    type TestController = CollectionSyncController<RecordingResource>;

    fn setup(items: Vec<Item>) -> (TestController, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let controller =
            CollectionSyncController::new(RecordingResource::with_items(items), notifier.clone());
        (controller, notifier)
    }

    /// Collects every state pushed to observers
    fn record_states(controller: &TestController) -> Arc<Mutex<Vec<ViewState>>> {
        let states = Arc::new(Mutex::new(Vec::new()));
        let sink = states.clone();
        controller.subscribe(move |state| sink.lock().unwrap().push(state.clone()));
        states
    }

    #[tokio::test]
    async fn test_fetch_all_replaces_items() {
        let (controller, notifier) = setup(vec![Item::new(1, "a"), Item::new(2, "b")]);
        let states = record_states(&controller);

        let count = controller.fetch_all().await.expect("fetch");

        assert_eq!(count, 2);
        let state = controller.snapshot();
        assert_eq!(state.items, vec![Item::new(1, "a"), Item::new(2, "b")]);
        assert!(!state.is_loading);

        let loading: Vec<bool> = states.lock().unwrap().iter().map(|s| s.is_loading).collect();
        assert_eq!(loading, vec![true, false]);
        assert!(notifier.errors().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_items_and_clears_loading() {
        let (controller, notifier) = setup(vec![Item::new(1, "a")]);
        controller.fetch_all().await.unwrap();

        controller.resource().set_fail_reads(true);
        let result = controller.fetch_all().await;

        assert!(matches!(result, Err(DomainError::Network(_))));
        let state = controller.snapshot();
        assert_eq!(state.items, vec![Item::new(1, "a")]);
        assert!(!state.is_loading);
        assert_eq!(
            notifier.errors(),
            vec![(LOAD_ERROR_TITLE.to_string(), LOAD_ERROR_MESSAGE.to_string())]
        );
    }

    #[tokio::test]
    async fn test_fetch_all_is_idempotent() {
        let (controller, _) = setup(vec![Item::new(1, "a")]);
        controller.fetch_all().await.unwrap();
        let first = controller.snapshot();
        controller.fetch_all().await.unwrap();
        assert_eq!(controller.snapshot(), first);
    }

    #[tokio::test]
    async fn test_create_assigns_next_id_and_resyncs() {
        let (controller, _) = setup(vec![Item::new(1, "a")]);
        controller.fetch_all().await.unwrap();
        controller.set_draft_text("b");

        let outcome = controller.submit("b", None).await;

        assert_eq!(outcome, SubmitOutcome::Created(Item::new(2, "b")));
        assert_eq!(
            controller.resource().calls(),
            vec![Call::List, Call::Create(Item::new(2, "b")), Call::List]
        );
        let state = controller.snapshot();
        assert_eq!(state.items, vec![Item::new(1, "a"), Item::new(2, "b")]);
        assert_eq!(state.draft_text, "");
    }

    #[tokio::test]
    async fn test_create_ids_follow_max_observed_id() {
        let (controller, _) = setup(vec![]);
        controller.fetch_all().await.unwrap();

        for expected in 1..=3 {
            let outcome = controller.submit(&format!("item {}", expected), None).await;
            assert_eq!(outcome, SubmitOutcome::Created(Item::new(expected, format!("item {}", expected))));
        }

        controller.remove(2).await.unwrap();
        let outcome = controller.submit("after delete", None).await;
        assert_eq!(outcome, SubmitOutcome::Created(Item::new(4, "after delete")));
    }

    #[tokio::test]
    async fn test_create_uses_locally_mirrored_items() {
        // Ids come from the last fetch, not from the remote collection.
        let (controller, _) = setup(vec![Item::new(5, "far away")]);

        let outcome = controller.submit("x", None).await;
        assert_eq!(outcome, SubmitOutcome::Created(Item::new(1, "x")));
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected_without_request() {
        let (controller, notifier) = setup(vec![Item::new(1, "a")]);
        controller.fetch_all().await.unwrap();
        let before = controller.snapshot();

        for text in ["", "   ", "\t\n"] {
            assert_eq!(controller.submit(text, None).await, SubmitOutcome::Rejected);
            assert_eq!(controller.submit(text, Some(1)).await, SubmitOutcome::Rejected);
        }

        assert_eq!(controller.resource().calls(), vec![Call::List]);
        assert_eq!(controller.snapshot(), before);
        assert_eq!(notifier.prompts().len(), 6);
        assert!(notifier.prompts().iter().all(|p| p == EMPTY_TEXT_PROMPT));
    }

    #[tokio::test]
    async fn test_text_is_sent_untrimmed() {
        let (controller, _) = setup(vec![]);
        controller.submit("  padded ", None).await;
        assert_eq!(controller.resource().items(), vec![Item::new(1, "  padded ")]);
    }

    #[tokio::test]
    async fn test_begin_edit_is_local() {
        let (controller, _) = setup(vec![Item::new(1, "a")]);
        controller.begin_edit(&Item::new(1, "a"));

        let state = controller.snapshot();
        assert_eq!(state.edit_target_id, Some(1));
        assert_eq!(state.draft_text, "a");
        assert!(controller.resource().calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_clears_edit_state_then_refetches() {
        let (controller, _) = setup(vec![Item::new(1, "a")]);
        controller.fetch_all().await.unwrap();
        controller.begin_edit(&Item::new(1, "a"));
        let states = record_states(&controller);

        let outcome = controller.submit("aa", Some(1)).await;

        assert_eq!(outcome, SubmitOutcome::Updated(Item::new(1, "aa")));
        assert_eq!(
            controller.resource().calls(),
            vec![Call::List, Call::Update(Item::new(1, "aa")), Call::List]
        );

        // Edit state is cleared before the resync starts loading.
        let states = states.lock().unwrap();
        assert_eq!(states[0].edit_target_id, None);
        assert_eq!(states[0].draft_text, "");
        assert!(!states[0].is_loading);
        assert!(states[1].is_loading);

        let state = controller.snapshot();
        assert_eq!(state.items, vec![Item::new(1, "aa")]);
        assert_eq!(state.edit_target_id, None);
        assert_eq!(state.draft_text, "");
    }

    #[tokio::test]
    async fn test_failed_update_keeps_draft_for_retry() {
        let (controller, notifier) = setup(vec![Item::new(1, "a")]);
        controller.fetch_all().await.unwrap();
        controller.begin_edit(&Item::new(1, "a"));
        controller.set_draft_text("aa");
        controller.resource().set_fail_writes(true);

        let outcome = controller.submit_draft().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(DomainError::Network(_))));
        let state = controller.snapshot();
        assert_eq!(state.edit_target_id, Some(1));
        assert_eq!(state.draft_text, "aa");
        assert_eq!(state.items, vec![Item::new(1, "a")]);
        // Write errors never reach the user.
        assert!(notifier.errors().is_empty());
        assert_eq!(
            controller.resource().calls(),
            vec![Call::List, Call::Update(Item::new(1, "aa"))]
        );
    }

    #[tokio::test]
    async fn test_failed_create_keeps_draft() {
        let (controller, notifier) = setup(vec![]);
        controller.set_draft_text("b");
        controller.resource().set_fail_writes(true);

        let outcome = controller.submit_draft().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(controller.snapshot().draft_text, "b");
        assert!(notifier.errors().is_empty());
    }

    #[tokio::test]
    async fn test_create_refused_when_ids_exhausted() {
        let (controller, _) = setup(vec![Item::new(u32::MAX, "last")]);
        controller.fetch_all().await.unwrap();
        controller.set_draft_text("one more");

        let outcome = controller.submit_draft().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(DomainError::InvalidInput(_))));
        assert_eq!(controller.resource().calls(), vec![Call::List]);
        assert_eq!(controller.resource().items(), vec![Item::new(u32::MAX, "last")]);
        assert_eq!(controller.snapshot().draft_text, "one more");
    }

    #[tokio::test]
    async fn test_update_of_missing_item_keeps_edit_target() {
        let (controller, _) = setup(vec![]);
        controller.begin_edit(&Item::new(3, "gone"));

        let outcome = controller.submit("renamed", Some(3)).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(DomainError::NotFound(_))));
        assert_eq!(controller.snapshot().edit_target_id, Some(3));
    }

    #[tokio::test]
    async fn test_submit_draft_uses_staged_state() {
        let (controller, _) = setup(vec![Item::new(1, "a")]);
        controller.fetch_all().await.unwrap();
        controller.begin_edit(&Item::new(1, "a"));
        controller.set_draft_text("renamed");

        let outcome = controller.submit_draft().await;
        assert_eq!(outcome, SubmitOutcome::Updated(Item::new(1, "renamed")));
    }

    #[tokio::test]
    async fn test_cancel_edit_clears_target_and_draft() {
        let (controller, _) = setup(vec![]);
        controller.begin_edit(&Item::new(1, "a"));
        controller.cancel_edit();

        let state = controller.snapshot();
        assert_eq!(state.edit_target_id, None);
        assert_eq!(state.draft_text, "");
    }

    #[tokio::test]
    async fn test_remove_deletes_then_refetches() {
        let (controller, _) = setup(vec![Item::new(1, "a"), Item::new(2, "b")]);
        controller.fetch_all().await.unwrap();

        controller.remove(2).await.expect("delete");

        assert_eq!(
            controller.resource().calls(),
            vec![Call::List, Call::Delete(2), Call::List]
        );
        assert_eq!(controller.snapshot().items, vec![Item::new(1, "a")]);
    }

    #[tokio::test]
    async fn test_remove_refetches_even_when_delete_fails() {
        let (controller, notifier) = setup(vec![Item::new(1, "a")]);
        controller.fetch_all().await.unwrap();
        controller.resource().set_fail_writes(true);

        let result = controller.remove(1).await;

        assert!(result.is_err());
        assert_eq!(
            controller.resource().calls(),
            vec![Call::List, Call::Delete(1), Call::List]
        );
        assert_eq!(controller.snapshot().items, vec![Item::new(1, "a")]);
        assert!(notifier.errors().is_empty());
    }

    #[tokio::test]
    async fn test_remove_unknown_id_still_resyncs() {
        let (controller, _) = setup(vec![Item::new(1, "a")]);

        let result = controller.remove(42).await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
        assert_eq!(controller.resource().calls().last(), Some(&Call::List));
        assert_eq!(controller.snapshot().items, vec![Item::new(1, "a")]);
    }

    #[tokio::test]
    async fn test_overlapping_removes_converge() {
        let (controller, _) = setup(vec![Item::new(1, "a"), Item::new(2, "b"), Item::new(3, "c")]);
        controller.fetch_all().await.unwrap();

        let (first, second) = tokio::join!(controller.remove(1), controller.remove(3));
        assert!(first.is_ok() && second.is_ok());

        let state = controller.snapshot();
        assert_eq!(state.items, vec![Item::new(2, "b")]);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_observers_never_end_on_a_stale_state() {
        let (controller, _) = setup(vec![]);
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let sink = delivered.clone();
        controller.subscribe(move |state: &ViewState| {
            if state.draft_text == "a" {
                thread::sleep(Duration::from_millis(200));
            }
            sink.lock().unwrap().push(state.draft_text.clone());
        });

        thread::scope(|scope| {
            scope.spawn(|| controller.set_draft_text("a"));
            thread::sleep(Duration::from_millis(50));
            controller.set_draft_text("b");
        });

        let delivered = delivered.lock().unwrap().clone();
        assert_eq!(controller.snapshot().draft_text, "b");
        assert_eq!(delivered.last().map(String::as_str), Some("b"));
        assert!(delivered.len() <= 2);
    }

    #[tokio::test]
    async fn test_retired_controller_finishes_quietly() {
        let (controller, notifier) = setup(vec![Item::new(1, "a")]);
        let states = record_states(&controller);
        controller.resource().set_fail_reads(true);

        controller.retire();
        let result = controller.fetch_all().await;

        assert!(result.is_err());
        assert!(controller.is_retired());
        assert!(!controller.snapshot().is_loading);
        assert!(states.lock().unwrap().is_empty());
        assert!(notifier.errors().is_empty());
        assert_eq!(controller.submit(" ", None).await, SubmitOutcome::Rejected);
        assert!(notifier.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_notifications() {
        let (controller, _) = setup(vec![]);
        let states = Arc::new(Mutex::new(Vec::new()));
        let sink = states.clone();
        let id = controller.subscribe(move |state: &ViewState| sink.lock().unwrap().push(state.clone()));

        controller.set_draft_text("x");
        assert!(controller.unsubscribe(id));
        controller.set_draft_text("y");

        assert_eq!(states.lock().unwrap().len(), 1);
        assert_eq!(states.lock().unwrap()[0].draft_text, "x");
        assert!(!controller.unsubscribe(id));
    }
}
