//! Builder for opening file-backed sessions.

use std::path::{Path, PathBuf};

use super::{PoolSession, TripSession};
use crate::{
    config::{default_store_dir, SessionConfig},
    error::{Result, StorageResultExt},
    storage::FileStore,
};

/// Builder for creating and configuring file-backed sessions.
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    store_dir: Option<PathBuf>,
    config: SessionConfig,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            store_dir: None,
            config: SessionConfig::default(),
        }
    }

    /// Sets a custom store directory.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/itinerary/store` or `~/.local/share/itinerary/store`
    pub fn with_store_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.store_dir = Some(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Replaces the whole session configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets how many days are seeded on first run.
    pub fn with_seed_days(mut self, seed_days: usize) -> Self {
        self.config.seed_days = seed_days;
        self
    }

    /// Opens the day-owns-items session.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::XdgDirectory` if no default directory can be
    /// determined, `ItineraryError::Storage` if the directory cannot be
    /// created
    pub fn open_trip(self) -> Result<TripSession<FileStore>> {
        let (store, config) = self.prepare()?;
        Ok(TripSession::open(store, config))
    }

    /// Opens the event-pool session.
    ///
    /// # Errors
    ///
    /// Same as [`SessionBuilder::open_trip`]
    pub fn open_pool(self) -> Result<PoolSession<FileStore>> {
        let (store, config) = self.prepare()?;
        Ok(PoolSession::open(store, config))
    }

    fn prepare(self) -> Result<(FileStore, SessionConfig)> {
        let dir = match self.store_dir {
            Some(dir) => dir,
            None => default_store_dir()?,
        };

        std::fs::create_dir_all(&dir).storage_context(&dir.display().to_string())?;

        Ok((FileStore::new(dir), self.config))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
