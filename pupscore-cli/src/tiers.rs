//! Tiers command: best listings within each price tier.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pupscore_catalog::DEFAULT_PER_TIER;
use pupscore_core::{PriceTier, ScoredListing};
use pupscore_scorer::ConfidencePolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

use crate::catalog::{CatalogSource, write_json};
use crate::{ARG_CONFIDENCE, ARG_PLATFORM_TABLE, ARG_TIERS_PER_TIER, CliError, ENV_TIERS_CATALOG};

/// CLI arguments for the `tiers` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Group a catalog into luxury, premium, midscale, budget and \
                 homestay price tiers and print the highest scoring listings \
                 of each tier as JSON. Every tier appears, possibly empty.",
    about = "Show the best listings in every price tier"
)]
#[ortho_config(prefix = "PUPSCORE")]
pub(crate) struct TiersArgs {
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
    /// Listings kept per tier.
    #[arg(long = ARG_TIERS_PER_TIER, value_name = "n")]
    #[serde(default)]
    pub(crate) per_tier: Option<usize>,
}

impl TiersArgs {
    pub(crate) fn into_config(self) -> Result<TiersConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TiersConfig::try_from(merged)
    }
}

/// Resolved `tiers` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TiersConfig {
    pub(crate) source: CatalogSource,
    pub(crate) per_tier: usize,
}

impl TryFrom<TiersArgs> for TiersConfig {
    type Error = CliError;

    fn try_from(args: TiersArgs) -> Result<Self, Self::Error> {
        let source = CatalogSource::resolve(
            args.catalog,
            args.platform_table,
            args.confidence,
            ENV_TIERS_CATALOG,
        )?;
        Ok(Self {
            source,
            per_tier: args.per_tier.unwrap_or(DEFAULT_PER_TIER),
        })
    }
}

pub(crate) fn run_tiers(args: TiersArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_tiers_with(args, &mut stdout)
}

pub(crate) fn run_tiers_with(args: TiersArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let tiers = execute_tiers(args)?;
    write_json(writer, "tiers", &tiers)
}

fn execute_tiers(args: TiersArgs) -> Result<BTreeMap<PriceTier, Vec<ScoredListing>>, CliError> {
    let config = args.into_config()?;
    config.source.validate_sources()?;
    let catalog = config.source.load()?;
    Ok(catalog
        .engine
        .top_by_price_tier(&catalog.listings, config.per_tier))
}
