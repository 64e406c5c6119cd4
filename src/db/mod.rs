use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use std::time::Duration;

use crate::errors::{AppError, AppResult};

/// Handle to the document store. A handle built without a connection
/// string hands out no collections, so every repository call fails with
/// `DatabaseUnavailable` while the rest of the server keeps running.
#[derive(Clone)]
pub struct Database {
    client: Option<Client>,
    db_name: String,
}

impl Database {
    pub async fn connect(conn_string: &str, db_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(conn_string).await?;

        let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
        client_options.server_api = Some(server_api);
        client_options.max_pool_size = Some(10);
        client_options.min_pool_size = Some(2);
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        let db = Self {
            client: Some(client),
            db_name: db_name.to_string(),
        };

        match db.health_check().await {
            Ok(()) => log::info!("MongoDB connected"),
            Err(err) => {
                log::error!("MongoDB connection error: {}", err);
                log::warn!("Server is running, but MongoDB is currently unavailable.");
            }
        }

        Ok(db)
    }

    pub fn disconnected(db_name: &str) -> Self {
        Self {
            client: None,
            db_name: db_name.to_string(),
        }
    }

    pub fn get_collection<T>(&self, collection_name: &str) -> Option<Collection<T>>
    where
        T: Send + Sync,
    {
        self.client
            .as_ref()
            .map(|client| client.database(&self.db_name).collection(collection_name))
    }

    pub async fn health_check(&self) -> AppResult<()> {
        let client = self.client.as_ref().ok_or(AppError::DatabaseUnavailable)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }
}

/// Shorthand used by repositories holding an optional collection.
pub fn require<T>(collection: &Option<Collection<T>>) -> AppResult<&Collection<T>>
where
    T: Send + Sync,
{
    collection.as_ref().ok_or(AppError::DatabaseUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_structure() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Database>();
    }

    #[actix_web::test]
    async fn test_disconnected_database_reports_unavailable() {
        let db = Database::disconnected("test");

        assert!(!db.is_configured());
        assert!(db.get_collection::<mongodb::bson::Document>("users").is_none());
        assert!(matches!(db.health_check().await, Err(AppError::DatabaseUnavailable)));
    }
}
