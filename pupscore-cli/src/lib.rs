//! Command-line interface for ranking and summarising Pup Score catalogs.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod catalog;
mod error;
mod query;
mod stats;
mod tiers;
mod top;

pub use error::CliError;

use query::{QueryArgs, run_query};
use stats::{StatsArgs, run_stats};
use tiers::{TiersArgs, run_tiers};
use top::{TopArgs, run_top};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_PLATFORM_TABLE: &str = "platform-table";
pub(crate) const ARG_CONFIDENCE: &str = "confidence";
pub(crate) const ARG_QUERY_TEXT: &str = "text";
pub(crate) const ARG_QUERY_LOCATION: &str = "location";
pub(crate) const ARG_QUERY_MIN_PRICE: &str = "min-price";
pub(crate) const ARG_QUERY_MAX_PRICE: &str = "max-price";
pub(crate) const ARG_QUERY_MIN_RATING: &str = "min-rating";
pub(crate) const ARG_QUERY_AMENITIES: &str = "amenities";
pub(crate) const ARG_QUERY_SORT: &str = "sort";
pub(crate) const ARG_QUERY_PAGE: &str = "page";
pub(crate) const ARG_QUERY_LIMIT: &str = "limit";
pub(crate) const ARG_TIERS_PER_TIER: &str = "per-tier";
pub(crate) const ARG_TOP_PERCENTAGE: &str = "percentage";
pub(crate) const ENV_QUERY_CATALOG: &str = "PUPSCORE_CMDS_QUERY_CATALOG";
pub(crate) const ENV_TIERS_CATALOG: &str = "PUPSCORE_CMDS_TIERS_CATALOG";
pub(crate) const ENV_TOP_CATALOG: &str = "PUPSCORE_CMDS_TOP_CATALOG";
pub(crate) const ENV_STATS_CATALOG: &str = "PUPSCORE_CMDS_STATS_CATALOG";

/// Run the Pup Score CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, configuration cannot be
/// resolved, inputs cannot be read, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Query(args) => run_query(args),
        Command::Tiers(args) => run_tiers(args),
        Command::Top(args) => run_top(args),
        Command::Stats(args) => run_stats(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pupscore",
    about = "Rank, filter and summarise hotel catalogs by composite Pup Score",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter, sort and paginate a catalog.
    Query(QueryArgs),
    /// Show the best listings in every price tier.
    Tiers(TiersArgs),
    /// Show the top-rated share of a catalog.
    Top(TopArgs),
    /// Summarise prices and ratings across a catalog.
    Stats(StatsArgs),
}

#[cfg(test)]
mod tests;
