//! In-memory storage backend.
//!
//! Keeps records in a mutex-guarded vector and assigns ids client-side.
//! Useful for handler tests that need a working store without a server;
//! the write counter lets tests assert that a rejected request never
//! reached the store.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use mongodb::bson::oid::ObjectId;

use crate::db::models::AnimalRecord;
use crate::db::repository::{AnimalRepository, Database, UpdateOutcome};
use crate::db::{DbError, DbResult};

/// In-memory database.
#[derive(Default)]
pub struct MemoryDatabase {
    records: Mutex<Vec<AnimalRecord>>,
    write_ops: AtomicU64,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of write operations (insert, replace, delete) issued so far.
    pub fn write_ops(&self) -> u64 {
        self.write_ops.load(Ordering::SeqCst)
    }
}

/// Animal repository over the in-memory vector.
pub struct MemoryAnimalRepository<'a> {
    db: &'a MemoryDatabase,
}

impl AnimalRepository for MemoryAnimalRepository<'_> {
    async fn list(&self) -> DbResult<Vec<AnimalRecord>> {
        Ok(self.db.records.lock().map_err(poisoned)?.clone())
    }

    async fn insert(&self, animal: &AnimalRecord) -> DbResult<ObjectId> {
        self.db.write_ops.fetch_add(1, Ordering::SeqCst);

        let id = ObjectId::new();
        let mut stored = animal.clone();
        stored.id = Some(id);
        self.db.records.lock().map_err(poisoned)?.push(stored);
        Ok(id)
    }

    async fn replace(&self, id: ObjectId, animal: &AnimalRecord) -> DbResult<UpdateOutcome> {
        self.db.write_ops.fetch_add(1, Ordering::SeqCst);

        let mut records = self.db.records.lock().map_err(poisoned)?;
        let Some(existing) = records.iter_mut().find(|r| r.id == Some(id)) else {
            return Ok(UpdateOutcome {
                matched: 0,
                modified: 0,
            });
        };

        let modified = u64::from(
            existing.animal_name != animal.animal_name
                || existing.species != animal.species
                || existing.birthdate != animal.birthdate
                || existing.location != animal.location
                || existing.owner != animal.owner,
        );

        existing.animal_name = animal.animal_name.clone();
        existing.species = animal.species.clone();
        existing.birthdate = animal.birthdate;
        existing.location = animal.location.clone();
        existing.owner = animal.owner.clone();
        // id and version stay untouched

        Ok(UpdateOutcome {
            matched: 1,
            modified,
        })
    }

    async fn delete(&self, id: ObjectId) -> DbResult<u64> {
        self.db.write_ops.fetch_add(1, Ordering::SeqCst);

        let mut records = self.db.records.lock().map_err(poisoned)?;
        let before = records.len();
        records.retain(|r| r.id != Some(id));
        Ok((before - records.len()) as u64)
    }
}

impl Database for MemoryDatabase {
    type Animals<'a> = MemoryAnimalRepository<'a>;

    async fn ping(&self) -> DbResult<()> {
        Ok(())
    }

    fn animals(&self) -> Self::Animals<'_> {
        MemoryAnimalRepository { db: self }
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> DbError {
    DbError::Database {
        message: "animal store mutex poisoned".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> AnimalRecord {
        AnimalRecord {
            id: None,
            animal_name: name.to_string(),
            species: "dog".to_string(),
            birthdate: None,
            location: None,
            owner: String::new(),
            version: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_a_fresh_id() {
        let db = MemoryDatabase::new();

        let first = db.animals().insert(&record("Rex")).await.unwrap();
        let second = db.animals().insert(&record("Musti")).await.unwrap();
        assert_ne!(first, second);

        let records = db.animals().list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, Some(first));
        assert_eq!(db.write_ops(), 2);
    }

    #[tokio::test]
    async fn replace_overwrites_fields_but_not_id_or_version() {
        let db = MemoryDatabase::new();

        let mut seeded = record("Rex");
        seeded.version = Some(3);
        let id = db.animals().insert(&seeded).await.unwrap();

        let mut replacement = record("Rex");
        replacement.species = String::new();
        replacement.owner = "Alice".to_string();
        let outcome = db.animals().replace(id, &replacement).await.unwrap();
        assert_eq!(
            outcome,
            UpdateOutcome {
                matched: 1,
                modified: 1
            }
        );

        let records = db.animals().list().await.unwrap();
        assert_eq!(records[0].id, Some(id));
        assert_eq!(records[0].version, Some(3));
        assert_eq!(records[0].species, "");
        assert_eq!(records[0].owner, "Alice");
    }

    #[tokio::test]
    async fn replace_reports_unchanged_documents() {
        let db = MemoryDatabase::new();

        let id = db.animals().insert(&record("Rex")).await.unwrap();
        let outcome = db.animals().replace(id, &record("Rex")).await.unwrap();

        assert_eq!(
            outcome,
            UpdateOutcome {
                matched: 1,
                modified: 0
            }
        );
    }

    #[tokio::test]
    async fn replace_misses_unknown_ids() {
        let db = MemoryDatabase::new();

        let outcome = db
            .animals()
            .replace(ObjectId::new(), &record("Rex"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            UpdateOutcome {
                matched: 0,
                modified: 0
            }
        );
    }

    #[tokio::test]
    async fn delete_reports_removed_count() {
        let db = MemoryDatabase::new();

        let id = db.animals().insert(&record("Rex")).await.unwrap();
        assert_eq!(db.animals().delete(id).await.unwrap(), 1);
        assert_eq!(db.animals().delete(id).await.unwrap(), 0);
        assert!(db.animals().list().await.unwrap().is_empty());
    }
}
