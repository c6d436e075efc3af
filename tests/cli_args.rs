// tests/cli_args.rs
mod common;

use bg_scrape::cli::{self, Command, Invocation};
use bg_scrape::config::options::{SourceKind, TableKind};

#[test]
fn flags_land_in_app_options() {
    let inv = cli::parse_args([
        "all", "--snapshots", "pages", "--workers", "3", "--pause-ms", "0",
        "--db", "x/y.db", "--table", "Items", "--top", "10", "--charts", "charts",
    ])
    .unwrap();
    assert_eq!(inv.command, Command::All);
    let o = &inv.options;
    assert_eq!(o.scrape.source, SourceKind::Snapshots("pages".into()));
    assert_eq!(o.scrape.workers, 3);
    assert_eq!(o.scrape.pause_ms, 0);
    assert_eq!(o.load.db_path, std::path::PathBuf::from("x/y.db"));
    assert_eq!(o.load.table, "Items");
    assert_eq!(o.analysis.top_n, 10);
    assert!(o.analysis.charts_dir.is_some());
}

#[test]
fn bad_input_is_rejected() {
    assert!(cli::parse_args(["frobnicate"]).is_err());
    assert!(cli::parse_args(["load", "--table", "drop table; --"]).is_err());
    assert!(cli::parse_args(["scrape", "--categories", "Garden"]).is_err());
    assert!(cli::parse_args(["scrape", "--workers", "0"]).is_err());
    assert!(cli::parse_args(["export", "--table-kind", "teams"]).is_err());
    assert!(cli::parse_args(["analyze", "nope"]).is_err());
}

#[test]
fn execute_runs_stages_from_parsed_args() {
    let dir = tempfile::tempdir().unwrap();
    let opts = common::options_in(dir.path());
    cli::execute(Invocation { command: Command::Scrape, options: opts.clone() }).unwrap();
    cli::execute(Invocation { command: Command::Transform, options: opts.clone() }).unwrap();

    let mut export = opts.clone();
    export.export.table = TableKind::Products;
    export.export.set_path(dir.path().join("products.tsv").to_str().unwrap());
    cli::execute(Invocation { command: Command::Export, options: export }).unwrap();
    assert!(dir.path().join("products.tsv").exists());

    cli::execute(Invocation { command: Command::Load, options: opts }).unwrap();
}
