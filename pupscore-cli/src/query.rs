//! Query command implementation for the Pup Score CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pupscore_catalog::{CatalogQuery, QueryPage, SortOrder};
use pupscore_scorer::ConfidencePolicy;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::catalog::{CatalogSource, write_json};
use crate::{
    ARG_CONFIDENCE, ARG_PLATFORM_TABLE, ARG_QUERY_AMENITIES, ARG_QUERY_LIMIT,
    ARG_QUERY_LOCATION, ARG_QUERY_MAX_PRICE, ARG_QUERY_MIN_PRICE, ARG_QUERY_MIN_RATING,
    ARG_QUERY_PAGE, ARG_QUERY_SORT, ARG_QUERY_TEXT, CliError, ENV_QUERY_CATALOG,
};

/// CLI arguments for the `query` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Filter a catalog by text, location, price, amenities and \
                 minimum rating, sort it, and print one page of scored \
                 listings as JSON. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Filter, sort and paginate a catalog"
)]
#[ortho_config(prefix = "PUPSCORE")]
pub(crate) struct QueryArgs {
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
    /// Case-insensitive text matched against names, locations and amenities.
    #[arg(long = ARG_QUERY_TEXT, visible_alias = "q", value_name = "text")]
    #[serde(default)]
    pub(crate) text: Option<String>,
    /// Location substring; `all` disables the filter.
    #[arg(long = ARG_QUERY_LOCATION, value_name = "text")]
    #[serde(default)]
    pub(crate) location: Option<String>,
    /// Inclusive lower price bound.
    #[arg(long = ARG_QUERY_MIN_PRICE, value_name = "price")]
    #[serde(default)]
    pub(crate) min_price: Option<u32>,
    /// Inclusive upper price bound.
    #[arg(long = ARG_QUERY_MAX_PRICE, value_name = "price")]
    #[serde(default)]
    pub(crate) max_price: Option<u32>,
    /// Minimum composite score.
    #[arg(long = ARG_QUERY_MIN_RATING, value_name = "score")]
    #[serde(default)]
    pub(crate) min_rating: Option<f64>,
    /// Comma-separated amenities; a listing needs any one of them.
    #[arg(long = ARG_QUERY_AMENITIES, value_name = "list", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) amenities: Vec<String>,
    /// Sort order (`recommended`, `price-asc`, `price-desc`, `reviews-desc`).
    #[arg(long = ARG_QUERY_SORT, value_name = "order")]
    #[serde(default)]
    pub(crate) sort: Option<SortOrder>,
    /// One-based page number.
    #[arg(long = ARG_QUERY_PAGE, value_name = "n")]
    #[serde(default)]
    pub(crate) page: Option<u32>,
    /// Page size, capped at 100.
    #[arg(long = ARG_QUERY_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<u32>,
}

impl QueryArgs {
    pub(crate) fn into_config(self) -> Result<QueryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QueryConfig::try_from(merged)
    }
}

/// Resolved `query` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QueryConfig {
    pub(crate) source: CatalogSource,
    pub(crate) query: CatalogQuery,
}

impl TryFrom<QueryArgs> for QueryConfig {
    type Error = CliError;

    fn try_from(args: QueryArgs) -> Result<Self, Self::Error> {
        let source = CatalogSource::resolve(
            args.catalog,
            args.platform_table,
            args.confidence,
            ENV_QUERY_CATALOG,
        )?;
        let defaults = CatalogQuery::default();
        let query = CatalogQuery {
            text: args.text,
            location: args.location,
            min_price: args.min_price,
            max_price: args.max_price,
            amenities: args.amenities,
            min_rating: args.min_rating,
            sort: args.sort.unwrap_or_default(),
            page: args.page.unwrap_or(defaults.page),
            limit: args.limit.unwrap_or(defaults.limit),
        };
        Ok(Self { source, query })
    }
}

pub(crate) fn run_query(args: QueryArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_query_with(args, &mut stdout)
}

pub(crate) fn run_query_with(args: QueryArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let page = execute_query(args)?;
    write_json(writer, "query", &page)
}

fn execute_query(args: QueryArgs) -> Result<QueryPage, CliError> {
    let config = args.into_config()?;
    config.source.validate_sources()?;
    let catalog = config.source.load()?;
    Ok(catalog.engine.query(&catalog.listings, &config.query))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<QueryConfig, CliError> {
    let merged = QueryArgs::merge_from_layers(layers).map_err(CliError::from)?;
    QueryConfig::try_from(merged)
}
