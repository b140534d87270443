//! Repository Layer
//!
//! Access to the remote item collection.

mod traits;
mod http_repo;


pub use traits::Repository;
pub use http_repo::HttpItemRepository;
