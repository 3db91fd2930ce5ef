//! Animal collection operations.

use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Bson, doc, oid::ObjectId};
use serde::Serialize;

use crate::db::models::AnimalRecord;
use crate::db::repository::{AnimalRepository, UpdateOutcome};
use crate::db::{DbError, DbResult};

/// Animal repository over the `animals` collection.
pub struct MongoAnimalRepository<'a> {
    animals: &'a Collection<AnimalRecord>,
}

impl<'a> MongoAnimalRepository<'a> {
    pub(super) fn new(animals: &'a Collection<AnimalRecord>) -> Self {
        Self { animals }
    }
}

impl AnimalRepository for MongoAnimalRepository<'_> {
    async fn list(&self) -> DbResult<Vec<AnimalRecord>> {
        let mut cursor = self.animals.find(doc! {}).await.map_err(op_error)?;

        let mut records = Vec::new();
        while let Some(animal) = cursor.try_next().await.map_err(op_error)? {
            records.push(animal);
        }
        Ok(records)
    }

    async fn insert(&self, animal: &AnimalRecord) -> DbResult<ObjectId> {
        let result = self.animals.insert_one(animal).await.map_err(op_error)?;

        match result.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            other => Err(DbError::Database {
                message: format!("store assigned a non-ObjectId id: {other}"),
            }),
        }
    }

    async fn replace(&self, id: ObjectId, animal: &AnimalRecord) -> DbResult<UpdateOutcome> {
        // Full overwrite of the mutable field set; `_id` and `__v` stay as
        // they are in the stored document.
        let update = doc! {
            "$set": {
                "animal_name": animal.animal_name.as_str(),
                "species": animal.species.as_str(),
                "birthdate": to_bson(&animal.birthdate)?,
                "location": to_bson(&animal.location)?,
                "owner": animal.owner.as_str(),
            }
        };

        let result = self
            .animals
            .update_one(doc! { "_id": id }, update)
            .await
            .map_err(op_error)?;

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete(&self, id: ObjectId) -> DbResult<u64> {
        let result = self
            .animals
            .delete_one(doc! { "_id": id })
            .await
            .map_err(op_error)?;

        Ok(result.deleted_count)
    }
}

fn op_error(e: mongodb::error::Error) -> DbError {
    DbError::Database {
        message: e.to_string(),
    }
}

fn to_bson<T: Serialize>(value: &T) -> DbResult<Bson> {
    mongodb::bson::to_bson(value).map_err(|e| DbError::InvalidDocument {
        message: e.to_string(),
    })
}
