//! Database module exports.

mod models;
mod mongo;
mod repository;
mod store;

pub use models::*;
pub use mongo::Database;
pub use repository::Repository;
pub use store::{ModStore, group_configs};
