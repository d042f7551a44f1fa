//! MongoDB database wrapper.

use std::time::Duration;

use mongodb::{Client, Collection, options::ClientOptions};
use tracing::info;

use crate::error::StoreError;

/// How long connection setup may spend looking for a reachable server.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Database wrapper for MongoDB operations.
///
/// Holds the single client for the process. Constructed once at startup;
/// if the store is unreachable the service does not start at all.
#[derive(Debug, Clone)]
pub struct Database {
    client: Client,
    db: mongodb::Database,
}

impl Database {
    /// Connect to MongoDB with the given URI and database name.
    ///
    /// Pings the server before returning so that an unreachable store is
    /// caught at startup rather than on the first moderation write.
    ///
    /// # Errors
    /// Returns [`StoreError::Unreachable`] if the URI does not parse or the
    /// liveness probe fails within the selection timeout.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(StoreError::Unreachable)?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options).map_err(StoreError::Unreachable)?;

        // Ping the database to verify connection
        client
            .database("admin")
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(StoreError::Unreachable)?;

        info!("Successfully connected to MongoDB");

        let db = client.database(db_name);

        Ok(Self { client, db })
    }

    /// Get a reference to the underlying MongoDB client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &mongodb::Database {
        &self.db
    }

    /// Get a typed collection from the database.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}
