//! Domain Layer
//!
//! Contains the domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod item;
mod view_state;

pub use entity::{Entity, DomainError, DomainResult};
pub use item::{next_id, Item};
pub use view_state::ViewState;
