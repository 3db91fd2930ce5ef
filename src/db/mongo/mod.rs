//! MongoDB storage backend.
//!
//! - `connection`: client lifecycle and collection handles
//! - `animal`: operations on the `animals` collection

mod animal;
mod connection;

pub use animal::MongoAnimalRepository;
pub use connection::MongoDatabase;
