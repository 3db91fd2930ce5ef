//! MongoDB client lifecycle management.

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use super::animal::MongoAnimalRepository;
use crate::db::models::AnimalRecord;
use crate::db::{Database, DbError, DbResult};

/// Name of the animal collection.
const ANIMALS_COLLECTION: &str = "animals";

/// MongoDB-backed database.
///
/// Holds one client for the process lifetime. The driver's connection pool
/// makes the shared handles safe for concurrent use; no extra locking here.
pub struct MongoDatabase {
    client: Client,
    database: mongodb::Database,
    animals: Collection<AnimalRecord>,
}

impl MongoDatabase {
    /// Connect to the store at `uri` and verify reachability with a ping
    /// before returning. A failure here is fatal to startup by design of
    /// the callers.
    pub async fn connect(uri: &str, db_name: &str) -> DbResult<Self> {
        let options = ClientOptions::parse(uri)
            .await
            .map_err(connection_error)?;
        let client = Client::with_options(options).map_err(connection_error)?;
        let database = client.database(db_name);
        let animals = database.collection::<AnimalRecord>(ANIMALS_COLLECTION);

        let db = Self {
            client,
            database,
            animals,
        };
        db.ping().await?;
        Ok(db)
    }

    /// Release driver resources. Call once the listener has drained.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

impl Database for MongoDatabase {
    type Animals<'a> = MongoAnimalRepository<'a>;

    async fn ping(&self) -> DbResult<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(connection_error)?;
        Ok(())
    }

    fn animals(&self) -> Self::Animals<'_> {
        MongoAnimalRepository::new(&self.animals)
    }
}

fn connection_error(e: mongodb::error::Error) -> DbError {
    DbError::Connection {
        message: e.to_string(),
    }
}
