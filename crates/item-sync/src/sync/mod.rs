//! Sync Layer
//!
//! Mirrors a remote collection into local view state and pushes every
//! change to subscribers.

mod controller;
mod notifier;
mod observer;

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod tests;

pub use controller::{CollectionSyncController, SubmitOutcome};
pub use notifier::Notifier;
pub use observer::SubscriptionId;
