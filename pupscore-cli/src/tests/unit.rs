//! Focused unit tests covering CLI configuration resolution and loading.

use super::helpers::{BOOKING_ONLY_TABLE, temp_root, west_lake_catalog, write_utf8};
use crate::catalog::{CatalogSource, load_listings};
use crate::query::{QueryArgs, QueryConfig, config_from_layers_for_test};
use crate::stats::StatsArgs;
use crate::tiers::{TiersArgs, TiersConfig};
use crate::top::{TopArgs, TopConfig};
use crate::{
    ARG_CATALOG, ARG_PLATFORM_TABLE, CliError, ENV_QUERY_CATALOG, ENV_STATS_CATALOG,
    ENV_TIERS_CATALOG, ENV_TOP_CATALOG,
};
use camino::Utf8PathBuf;
use pupscore_catalog::{DEFAULT_PAGE_LIMIT, DEFAULT_PER_TIER, DEFAULT_TOP_PERCENTAGE, SortOrder};
use pupscore_scorer::ConfidencePolicy;
use rstest::rstest;

fn assert_missing_catalog(result: Result<(), CliError>, expected_env: &'static str) {
    match result.expect_err("missing catalog should error") {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn every_command_names_its_catalog_variable() {
    assert_missing_catalog(
        QueryConfig::try_from(QueryArgs::default()).map(drop),
        ENV_QUERY_CATALOG,
    );
    assert_missing_catalog(
        TiersConfig::try_from(TiersArgs::default()).map(drop),
        ENV_TIERS_CATALOG,
    );
    assert_missing_catalog(
        TopConfig::try_from(TopArgs::default()).map(drop),
        ENV_TOP_CATALOG,
    );
    assert_missing_catalog(
        CatalogSource::try_from(StatsArgs::default()).map(drop),
        ENV_STATS_CATALOG,
    );
}

#[rstest]
fn unset_options_fall_back_to_defaults() {
    let catalog = Some(Utf8PathBuf::from("catalog.json"));
    let query = QueryConfig::try_from(QueryArgs {
        catalog: catalog.clone(),
        ..QueryArgs::default()
    })
    .expect("query config");
    assert_eq!(query.query.page, 1);
    assert_eq!(query.query.limit, DEFAULT_PAGE_LIMIT);
    assert_eq!(query.query.sort, SortOrder::Recommended);
    assert_eq!(query.source.confidence, ConfidencePolicy::Inert);
    assert!(query.source.platform_table.is_none());

    let tiers = TiersConfig::try_from(TiersArgs {
        catalog: catalog.clone(),
        ..TiersArgs::default()
    })
    .expect("tiers config");
    assert_eq!(tiers.per_tier, DEFAULT_PER_TIER);

    let top = TopConfig::try_from(TopArgs {
        catalog,
        ..TopArgs::default()
    })
    .expect("top config");
    assert_eq!(top.percentage, DEFAULT_TOP_PERCENTAGE);
}

#[rstest]
fn validate_sources_reports_missing_catalog() {
    let (_tmp, root) = temp_root();
    let source = CatalogSource {
        catalog: root.join("missing.json"),
        platform_table: None,
        confidence: ConfidencePolicy::Inert,
    };
    match source.validate_sources().expect_err("expected failure") {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(path, root.join("missing.json"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let (_tmp, root) = temp_root();
    let catalog = west_lake_catalog(&root);
    let source = CatalogSource {
        catalog,
        platform_table: Some(root.clone()),
        confidence: ConfidencePolicy::Inert,
    };
    match source.validate_sources().expect_err("expected directory rejection") {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_PLATFORM_TABLE),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_listings_reports_parse_errors() {
    let (_tmp, root) = temp_root();
    let path = root.join("catalog.json");
    write_utf8(&path, b"[{ \"id\": \"no-price\" }]");
    match load_listings(&path).expect_err("price is required") {
        CliError::ParseCatalog { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseCatalog, found {other:?}"),
    }
}

#[rstest]
fn load_listings_io_error_returns_open_error() {
    let (_tmp, root) = temp_root();
    let path = root.join("absent.json");
    match load_listings(&path).expect_err("missing catalog should error") {
        CliError::OpenCatalog { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OpenCatalog, found {other:?}"),
    }
}

#[rstest]
fn load_applies_the_platform_table_file() {
    let (_tmp, root) = temp_root();
    let table = root.join("platforms.json");
    write_utf8(&table, BOOKING_ONLY_TABLE.as_bytes());
    let source = CatalogSource {
        catalog: west_lake_catalog(&root),
        platform_table: Some(table),
        confidence: ConfidencePolicy::Tiered,
    };
    let catalog = source.load().expect("catalog loads");
    assert_eq!(catalog.listings.len(), 4);
    assert_eq!(catalog.engine.scorer().table().len(), 1);
    assert_eq!(catalog.engine.scorer().policy(), ConfidencePolicy::Tiered);
}

#[rstest]
fn invalid_platform_tables_surface_their_error() {
    let (_tmp, root) = temp_root();
    let table = root.join("platforms.json");
    write_utf8(&table, br#"{ "booking": { "scale": 7, "weight": 1.0 } }"#);
    let source = CatalogSource {
        catalog: west_lake_catalog(&root),
        platform_table: Some(table),
        confidence: ConfidencePolicy::Inert,
    };
    match source.load().expect_err("scale 7 is unsupported") {
        CliError::PlatformTable(_) => {}
        other => panic!("expected PlatformTable, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "catalog": 42 }));

    match config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration")
    {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let (_tmp, root) = temp_root();
    let env_catalog = root.join("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": root.join("from-file.json").as_str(),
            "confidence": "tiered",
            "limit": 5,
        }),
        None,
    );
    composer.push_environment(json!({
        "catalog": env_catalog.as_str(),
        "sort": "price-asc",
    }));
    composer.push_cli(json!({ "limit": 10 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.source.catalog, env_catalog);
    assert_eq!(config.source.confidence, ConfidencePolicy::Tiered);
    assert_eq!(config.query.sort, SortOrder::PriceAscending);
    assert_eq!(config.query.limit, 10);
}
