//! Item Sync Core
//!
//! Layered like the app backend:
//! - domain: Item entity, view state and errors
//! - repository: remote collection access (trait + HTTP implementation)
//! - sync: the controller that mirrors the remote collection locally
//! - config: where the collection lives

pub mod config;
pub mod domain;
pub mod repository;
pub mod sync;

pub use config::{load_config, save_config, ResourceConfig, DEFAULT_API_URL};
pub use domain::{next_id, DomainError, DomainResult, Entity, Item, ViewState};
pub use repository::{HttpItemRepository, Repository};
pub use sync::{CollectionSyncController, Notifier, SubmitOutcome, SubscriptionId};
