//! Builder for creating and configuring Coach instances.

use std::path::{Path, PathBuf};

use log::{debug, info};
use tokio::task;

use super::Coach;
use crate::{
    catalog::Catalog,
    error::{CoachError, Result},
    generator::{GeneratorConfig, PlanGenerator},
};

/// File name of a user catalog under the XDG data directory.
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// Builder for creating and configuring Coach instances.
#[derive(Debug, Clone, Default)]
pub struct CoachBuilder {
    catalog_path: Option<PathBuf>,
    generator: Option<GeneratorConfig>,
}

impl CoachBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a catalog file to load instead of the default.
    ///
    /// If not specified, `$XDG_DATA_HOME/coachplan/catalog.json` is used when
    /// it exists, otherwise the builtin catalog.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Enables remote generation with the given settings.
    pub fn with_generator(mut self, config: Option<GeneratorConfig>) -> Self {
        self.generator = config;
        self
    }

    /// Builds the configured coach instance.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::FileSystem` if a catalog file cannot be read
    /// Returns `CoachError::Serialization`, `InvalidInput` or
    /// `DuplicateCatalogEntry` if the catalog is malformed
    pub async fn build(self) -> Result<Coach> {
        let catalog_path = self.catalog_path.or_else(Self::default_catalog_path);

        let catalog = match catalog_path {
            Some(path) => {
                info!("Loading catalog from {}", path.display());
                task::spawn_blocking(move || Catalog::load(&path))
                    .await
                    .map_err(|e| CoachError::configuration(format!("Task join error: {e}")))??
            }
            None => {
                debug!("Using builtin catalog");
                Catalog::builtin()?
            }
        };

        let generator = self.generator.map(PlanGenerator::new).transpose()?;

        Ok(Coach::new(catalog, generator))
    }

    /// Returns the user catalog following the XDG Base Directory
    /// specification, if one exists.
    fn default_catalog_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("coachplan").find_data_file(CATALOG_FILE_NAME)
    }
}
