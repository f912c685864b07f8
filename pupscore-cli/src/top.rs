//! Top command: the best-scoring share of a catalog.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pupscore_catalog::DEFAULT_TOP_PERCENTAGE;
use pupscore_core::ScoredListing;
use pupscore_scorer::ConfidencePolicy;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::catalog::{CatalogSource, write_json};
use crate::{ARG_CONFIDENCE, ARG_PLATFORM_TABLE, ARG_TOP_PERCENTAGE, CliError, ENV_TOP_CATALOG};

/// CLI arguments for the `top` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a catalog by composite score and print the best \
                 percentage of it as JSON. At least one listing is printed \
                 for a non-empty catalog.",
    about = "Show the top-rated share of a catalog"
)]
#[ortho_config(prefix = "PUPSCORE")]
pub(crate) struct TopArgs {
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
    /// Share of the catalog to print, in percent.
    #[arg(long = ARG_TOP_PERCENTAGE, value_name = "percent")]
    #[serde(default)]
    pub(crate) percentage: Option<u32>,
}

impl TopArgs {
    pub(crate) fn into_config(self) -> Result<TopConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TopConfig::try_from(merged)
    }
}

/// Resolved `top` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TopConfig {
    pub(crate) source: CatalogSource,
    pub(crate) percentage: u32,
}

impl TryFrom<TopArgs> for TopConfig {
    type Error = CliError;

    fn try_from(args: TopArgs) -> Result<Self, Self::Error> {
        let source = CatalogSource::resolve(
            args.catalog,
            args.platform_table,
            args.confidence,
            ENV_TOP_CATALOG,
        )?;
        Ok(Self {
            source,
            percentage: args.percentage.unwrap_or(DEFAULT_TOP_PERCENTAGE),
        })
    }
}

pub(crate) fn run_top(args: TopArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_top_with(args, &mut stdout)
}

pub(crate) fn run_top_with(args: TopArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let listings = execute_top(args)?;
    write_json(writer, "top", &listings)
}

fn execute_top(args: TopArgs) -> Result<Vec<ScoredListing>, CliError> {
    let config = args.into_config()?;
    config.source.validate_sources()?;
    let catalog = config.source.load()?;
    Ok(catalog
        .engine
        .top_rated(&catalog.listings, config.percentage))
}
