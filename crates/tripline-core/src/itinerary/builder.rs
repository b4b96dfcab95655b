//! Builder for creating and configuring Itinerary instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use log::info;
use tokio::task;

use super::Itinerary;
use crate::{
    config::{Backend, Settings},
    db::Database,
    error::{Result, TripError},
    store::{remote::DEFAULT_TIMEOUT, PlaceStore, RemoteStore, SqliteStore},
};

/// Builder for creating and configuring Itinerary instances.
#[derive(Clone)]
pub struct ItineraryBuilder {
    backend: Backend,
    database_path: Option<PathBuf>,
    remote_url: Option<String>,
    remote_timeout: Duration,
    store: Option<Arc<dyn PlaceStore>>,
}

impl ItineraryBuilder {
    /// Creates a builder for the default SQLite backend.
    pub fn new() -> Self {
        Self {
            backend: Backend::Sqlite,
            database_path: None,
            remote_url: None,
            remote_timeout: DEFAULT_TIMEOUT,
            store: None,
        }
    }

    /// Creates a builder carrying everything `settings` configures.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            backend: settings.backend,
            database_path: settings.database_file.clone(),
            remote_url: settings.remote.url.clone(),
            remote_timeout: settings.remote_timeout(),
            store: None,
        }
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Sets the SQLite file.
    ///
    /// If not specified, uses `$XDG_DATA_HOME/tripline/trip_plan.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_url = Some(url.into());
        self
    }

    pub fn with_remote_timeout(mut self, timeout: Duration) -> Self {
        self.remote_timeout = timeout;
        self
    }

    /// Use an already constructed store, ignoring the backend settings.
    pub fn with_store(mut self, store: Arc<dyn PlaceStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the configured itinerary.
    ///
    /// # Errors
    ///
    /// Returns `TripError::Configuration` if the remote backend has no usable URL
    /// Returns `TripError::FileSystem` if the database directory cannot be created
    /// Returns `TripError::Database` if database initialization fails
    pub async fn build(self) -> Result<Itinerary> {
        let store: Arc<dyn PlaceStore> = match (self.store, self.backend) {
            (Some(store), _) => store,
            (None, Backend::Remote) => {
                let url = self.remote_url.ok_or_else(|| {
                    TripError::configuration(
                        "the remote backend needs a URL (--remote-url or [remote] url)",
                    )
                })?;
                Arc::new(RemoteStore::new(url, self.remote_timeout)?)
            }
            (None, Backend::Sqlite) => Arc::new(Self::open_sqlite(self.database_path).await?),
        };

        info!("Using {} store", store.backend());
        Ok(Itinerary::new(store))
    }

    /// Creates the database file and schema up front so the first command
    /// reports setup problems instead of the first query.
    async fn open_sqlite(database_path: Option<PathBuf>) -> Result<SqliteStore> {
        let db_path = match database_path {
            Some(path) => path,
            None => Settings::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TripError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TripError>(())
        })
        .await
        .map_err(|e| TripError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(SqliteStore::new(db_path))
    }
}

impl Default for ItineraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
