//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer. Methods
//! return `impl Future + Send` so handlers generic over the backend stay
//! spawnable on the multi-threaded runtime.

use std::future::Future;

use mongodb::bson::oid::ObjectId;

use crate::db::{DbResult, models::AnimalRecord};

/// Counts reported by a replace operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Documents the filter matched (0 or 1).
    pub matched: u64,
    /// Documents whose content actually changed (0 or 1).
    pub modified: u64,
}

/// Repository for animal record operations.
pub trait AnimalRepository {
    /// Fetch every record in the collection, in store iteration order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<AnimalRecord>>> + Send;

    /// Insert one record. The store assigns and returns the id; any id on
    /// the value itself is ignored.
    fn insert(&self, animal: &AnimalRecord) -> impl Future<Output = DbResult<ObjectId>> + Send;

    /// Overwrite the mutable fields of the matching record with the values
    /// on `animal` (full replacement, not a merge). The id and legacy
    /// version counter are never touched.
    fn replace(
        &self,
        id: ObjectId,
        animal: &AnimalRecord,
    ) -> impl Future<Output = DbResult<UpdateOutcome>> + Send;

    /// Delete the matching record, returning how many documents were
    /// removed (0 or 1). Zero matches is not an error.
    fn delete(&self, id: ObjectId) -> impl Future<Output = DbResult<u64>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    /// Repository handle type borrowed from this database.
    type Animals<'a>: AnimalRepository + Send + Sync
    where
        Self: 'a;

    /// Round trip to the store to confirm it is reachable.
    fn ping(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the animal repository.
    fn animals(&self) -> Self::Animals<'_>;
}
