//! Stats command: price and rating summaries for a catalog.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pupscore_catalog::{PriceStatistics, price_statistics};
use pupscore_scorer::{ConfidencePolicy, RatingStatistics};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::catalog::{CatalogSource, write_json};
use crate::{ARG_CONFIDENCE, ARG_PLATFORM_TABLE, CliError, ENV_STATS_CATALOG};

/// CLI arguments for the `stats` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the price range, mean and median of a catalog \
                 alongside composite and per-platform rating statistics \
                 as JSON.",
    about = "Summarise prices and ratings across a catalog"
)]
#[ortho_config(prefix = "PUPSCORE")]
pub(crate) struct StatsArgs {
    /// Path to a JSON array of listings.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Platform weight table overriding the built-in weights.
    #[arg(long = ARG_PLATFORM_TABLE, value_name = "path")]
    #[serde(default)]
    pub(crate) platform_table: Option<Utf8PathBuf>,
    /// Review-count weighting policy (`inert` or `tiered`).
    #[arg(long = ARG_CONFIDENCE, value_name = "policy")]
    #[serde(default)]
    pub(crate) confidence: Option<ConfidencePolicy>,
}

impl StatsArgs {
    pub(crate) fn into_config(self) -> Result<CatalogSource, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CatalogSource::try_from(merged)
    }
}

impl TryFrom<StatsArgs> for CatalogSource {
    type Error = CliError;

    fn try_from(args: StatsArgs) -> Result<Self, Self::Error> {
        Self::resolve(
            args.catalog,
            args.platform_table,
            args.confidence,
            ENV_STATS_CATALOG,
        )
    }
}

/// Combined output of the `stats` subcommand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct CatalogStatistics {
    pub(crate) listings: usize,
    pub(crate) prices: PriceStatistics,
    pub(crate) ratings: RatingStatistics,
}

pub(crate) fn run_stats(args: StatsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_stats_with(args, &mut stdout)
}

pub(crate) fn run_stats_with(args: StatsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let stats = execute_stats(args)?;
    write_json(writer, "stats", &stats)
}

fn execute_stats(args: StatsArgs) -> Result<CatalogStatistics, CliError> {
    let source = args.into_config()?;
    source.validate_sources()?;
    let catalog = source.load()?;
    Ok(CatalogStatistics {
        listings: catalog.listings.len(),
        prices: price_statistics(&catalog.listings),
        ratings: catalog.engine.scorer().rating_statistics(&catalog.listings),
    })
}
