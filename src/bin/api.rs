//! Menagerie API server binary.
//!
//! This binary creates the concrete MongoDB-backed database and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use menagerie::api::{self, ApiError, Config};
use menagerie::db::{DbError, MongoDatabase};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(menagerie::binary::database))]
    Database(#[from] DbError),

    #[error("API server error: {0}")]
    #[diagnostic(code(menagerie::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "menagerie-api")]
#[command(author, version, about = "Animal records API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    port: u16,

    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI")]
    db_uri: String,

    /// Database holding the animal collection
    #[arg(long, env = "MONGODB_DATABASE", default_value = "menagerie")]
    db_name: String,

    /// Per-request timeout in seconds, store round trip included
    #[arg(long, default_value = "30")]
    request_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    println!("Connecting to database '{}'", cli.db_name);

    // The connection is verified with a ping before any traffic is served
    let db = Arc::new(MongoDatabase::connect(&cli.db_uri, &cli.db_name).await?);

    println!("Store reachable, starting server");

    api::run(
        Config {
            host: cli.host,
            port: cli.port,
            request_timeout: Duration::from_secs(cli.request_timeout_secs),
        },
        Arc::clone(&db),
    )
    .await?;

    // The listener has drained; release the store client.
    if let Ok(db) = Arc::try_unwrap(db) {
        db.shutdown().await;
    }

    Ok(())
}
