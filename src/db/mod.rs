//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access, allowing
//! different storage backends to be swapped without changing the HTTP layer.
//!
//! # Architecture
//!
//! - `error`: storage-agnostic error types
//! - `models`: the animal record entity
//! - `repository`: trait definitions for data access
//! - `mongo`: the MongoDB production backend
//! - `memory`: an in-process backend for tests

mod error;
pub mod memory;
mod models;
pub mod mongo;
mod repository;

#[cfg(test)]
mod error_test;

pub use error::{DbError, DbResult};
pub use memory::MemoryDatabase;
pub use models::*;
pub use mongo::MongoDatabase;
pub use repository::*;
