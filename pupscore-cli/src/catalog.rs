//! Catalog and platform-table loading shared by every subcommand.

use camino::{Utf8Path, Utf8PathBuf};
use pupscore_catalog::CatalogEngine;
use pupscore_core::Listing;
use pupscore_scorer::{ConfidencePolicy, PlatformTable, WeightedAggregator};
use serde::Serialize;
use std::io::{BufReader, Write};

use crate::{ARG_CATALOG, ARG_PLATFORM_TABLE, CliError};

/// Inputs every subcommand needs before it can score listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CatalogSource {
    /// Path to the JSON array of listings.
    pub(crate) catalog: Utf8PathBuf,
    /// Optional platform weight table; the built-in table applies otherwise.
    pub(crate) platform_table: Option<Utf8PathBuf>,
    /// How review counts influence platform weights.
    pub(crate) confidence: ConfidencePolicy,
}

impl CatalogSource {
    /// Resolve merged arguments, reporting `env` when the catalog is unset.
    pub(crate) fn resolve(
        catalog: Option<Utf8PathBuf>,
        platform_table: Option<Utf8PathBuf>,
        confidence: Option<ConfidencePolicy>,
        env: &'static str,
    ) -> Result<Self, CliError> {
        let catalog = catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env,
        })?;
        Ok(Self {
            catalog,
            platform_table,
            confidence: confidence.unwrap_or_default(),
        })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog, ARG_CATALOG)?;
        if let Some(path) = &self.platform_table {
            require_existing(path, ARG_PLATFORM_TABLE)?;
        }
        Ok(())
    }

    /// Load the listings and build a scoring engine over the platform table.
    pub(crate) fn load(&self) -> Result<LoadedCatalog, CliError> {
        let listings = load_listings(&self.catalog)?;
        let table = match &self.platform_table {
            Some(path) => PlatformTable::from_json_file(path)?,
            None => PlatformTable::default(),
        };
        log::info!(
            "loaded {} listings from {} ({} platforms, {} confidence)",
            listings.len(),
            self.catalog,
            table.len(),
            self.confidence
        );
        Ok(LoadedCatalog {
            listings,
            engine: CatalogEngine::new(WeightedAggregator::new(table, self.confidence)),
        })
    }
}

/// Listings paired with the engine that ranks them.
#[derive(Debug)]
pub(crate) struct LoadedCatalog {
    pub(crate) listings: Vec<Listing>,
    pub(crate) engine: CatalogEngine<WeightedAggregator>,
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match pupscore_fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads a JSON array of [`Listing`] records from disk.
pub(crate) fn load_listings(path: &Utf8Path) -> Result<Vec<Listing>, CliError> {
    let file = pupscore_fs::open_source(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty-print `value` as JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    command: &'static str,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|source| CliError::SerialiseOutput { command, source })?;
    writer
        .write_all(payload.as_bytes())
        .map_err(|source| CliError::WriteOutput { command, source })?;
    writer
        .write_all(b"\n")
        .map_err(|source| CliError::WriteOutput { command, source })?;
    Ok(())
}
