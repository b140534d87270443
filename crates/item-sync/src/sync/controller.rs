//! Collection Sync Controller
//!
//! Owns the local mirror of the remote item collection. Every mutation is
//! followed by a full refetch; nothing is applied optimistically.
//!
//! State sits behind a plain mutex that is never held across an `.await`,
//! so overlapping calls are allowed and settle in arrival order. Each change
//! bumps a revision; observers only ever see revisions in increasing order,
//! and a snapshot overtaken by a newer one is dropped rather than delivered
//! late.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{next_id, DomainError, DomainResult, Item, ViewState};
use crate::repository::Repository;
use super::notifier::Notifier;
use super::observer::{Observers, SubscriptionId};

pub(crate) const LOAD_ERROR_TITLE: &str = "Error";
pub(crate) const LOAD_ERROR_MESSAGE: &str = "Could not load the data.";
pub(crate) const EMPTY_TEXT_PROMPT: &str = "Type something";

/// Which path a submit took
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Blank text, nothing was sent
    Rejected,
    Created(Item),
    Updated(Item),
    /// The write failed; draft and edit target are untouched
    Failed(DomainError),
}

pub struct CollectionSyncController<R> {
    resource: R,
    notifier: Arc<dyn Notifier>,
    state: Mutex<ViewState>,
    revision: AtomicU64,
    /// Last revision handed to observers; held while they run
    delivered: Mutex<u64>,
    observers: Observers,
    retired: AtomicBool,
}

impl<R: Repository<Item>> CollectionSyncController<R> {
    pub fn new(resource: R, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            resource,
            notifier,
            state: Mutex::new(ViewState::new()),
            revision: AtomicU64::new(0),
            delivered: Mutex::new(0),
            observers: Observers::default(),
            retired: AtomicBool::new(false),
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Copy of the current view state
    pub fn snapshot(&self) -> ViewState {
        self.lock_state().clone()
    }

    /// Register an observer called with the new state after every change.
    ///
    /// Observers run one at a time. They must not change controller state
    /// from inside the callback.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&ViewState) + Send + Sync + 'static,
    {
        self.observers.add(Arc::new(observer))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    /// Detach this controller from the user: drops every observer and mutes
    /// the notifier. Requests still in flight finish quietly, so a replaced
    /// controller cannot paint over its successor.
    pub fn retire(&self) {
        self.retired.store(true, Ordering::SeqCst);
        self.observers.clear();
    }

    pub fn is_retired(&self) -> bool {
        self.retired.load(Ordering::SeqCst)
    }

    fn lock_state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a change, then notify observers with the result
    fn update_state(&self, change: impl FnOnce(&mut ViewState)) {
        let (revision, snapshot) = {
            let mut state = self.lock_state();
            change(&mut state);
            // Bumped under the state lock so revision order matches change order.
            let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
            (revision, state.clone())
        };

        let mut delivered = self.delivered.lock().unwrap_or_else(PoisonError::into_inner);
        if revision < *delivered {
            log::debug!("Dropping stale view state revision {}", revision);
            return;
        }
        *delivered = revision;
        if !self.is_retired() {
            self.observers.notify(&snapshot);
        }
    }

    /// Replace `items` with the remote collection.
    ///
    /// A failed read is reported to the user and keeps the previous items.
    /// `is_loading` is cleared on both paths. Returns the number of items
    /// loaded.
    pub async fn fetch_all(&self) -> DomainResult<usize> {
        self.update_state(|state| state.is_loading = true);

        let result = self.resource.list().await;

        match result {
            Ok(items) => {
                let count = items.len();
                log::info!("Loaded {} items", count);
                self.update_state(|state| {
                    state.items = items;
                    state.is_loading = false;
                });
                Ok(count)
            }
            Err(e) => {
                log::error!("Failed to fetch items: {}", e);
                if !self.is_retired() {
                    self.notifier.notify_error(LOAD_ERROR_TITLE, LOAD_ERROR_MESSAGE);
                }
                self.update_state(|state| state.is_loading = false);
                Err(e)
            }
        }
    }

    pub fn set_draft_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.update_state(|state| state.draft_text = text);
    }

    /// Stage an existing item for editing. Local only.
    pub fn begin_edit(&self, item: &Item) {
        self.update_state(|state| {
            state.edit_target_id = Some(item.id);
            state.draft_text = item.name.clone();
        });
    }

    pub fn cancel_edit(&self) {
        self.update_state(|state| {
            state.edit_target_id = None;
            state.draft_text.clear();
        });
    }

    /// Create a new item, or rename `edit_target_id` when present.
    ///
    /// Blank text is rejected with a prompt before any request is made. The
    /// text is sent as typed, untrimmed. Write failures are logged only and
    /// leave the draft in place for a retry.
    pub async fn submit(&self, text: &str, edit_target_id: Option<u32>) -> SubmitOutcome {
        if text.trim().is_empty() {
            if !self.is_retired() {
                self.notifier.prompt(EMPTY_TEXT_PROMPT);
            }
            return SubmitOutcome::Rejected;
        }

        let outcome = match edit_target_id {
            Some(id) => {
                let item = Item::new(id, text);
                match self.resource.update(&item).await {
                    Ok(()) => {
                        log::info!("Updated item {}", id);
                        self.update_state(|state| {
                            state.edit_target_id = None;
                            state.draft_text.clear();
                        });
                        SubmitOutcome::Updated(item)
                    }
                    Err(e) => {
                        log::error!("Failed to update item {}: {}", id, e);
                        return SubmitOutcome::Failed(e);
                    }
                }
            }
            None => {
                let Some(id) = next_id(&self.lock_state().items) else {
                    log::error!("No item id left above {}", u32::MAX);
                    return SubmitOutcome::Failed(DomainError::InvalidInput(
                        "item ids exhausted".to_string(),
                    ));
                };
                let item = Item::new(id, text);
                match self.resource.create(&item).await {
                    Ok(()) => {
                        log::info!("Created item {}", id);
                        self.update_state(|state| state.draft_text.clear());
                        SubmitOutcome::Created(item)
                    }
                    Err(e) => {
                        log::error!("Failed to create item {}: {}", id, e);
                        return SubmitOutcome::Failed(e);
                    }
                }
            }
        };

        let _ = self.fetch_all().await;
        outcome
    }

    /// Submit whatever is currently staged in the view state
    pub async fn submit_draft(&self) -> SubmitOutcome {
        let (text, edit_target_id) = {
            let state = self.lock_state();
            (state.draft_text.clone(), state.edit_target_id)
        };
        self.submit(&text, edit_target_id).await
    }

    /// Delete an item, then resynchronize whether or not the delete succeeded
    pub async fn remove(&self, id: u32) -> DomainResult<()> {
        let result = self.resource.delete(id).await;
        match &result {
            Ok(()) => log::info!("Deleted item {}", id),
            Err(e) => log::error!("Failed to delete item {}: {}", id, e),
        }

        let _ = self.fetch_all().await;
        result
    }
}
