// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::analysis::AnalysisKind;
use crate::config::options::{
    AppOptions, CategorySelector, ExportFormat, ExportType, SourceKind, TableKind,
};
use crate::progress::ConsoleProgress;
use crate::runner;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Scrape,
    Transform,
    /// Empty → every analysis
    Analyze(Vec<AnalysisKind>),
    Load,
    Export,
    All,
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub options: AppOptions,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let inv = parse_args(env::args().skip(1))?;
    execute(inv)
}

pub fn execute(inv: Invocation) -> Result<(), Box<dyn Error>> {
    let mut console = ConsoleProgress::default();
    let progress = Some(&mut console as &mut dyn crate::progress::Progress);
    let opts = &inv.options;
    logf!("CLI: {:?}", inv.command);

    match inv.command {
        Command::Help => println!("{}", include_str!("cli_help.txt")),
        Command::Scrape => { runner::scrape(opts, progress)?; }
        Command::Transform => { runner::transform(opts, progress)?; }
        Command::Analyze(kinds) => { runner::analyze(opts, &kinds, progress)?; }
        Command::Load => {
            let v = runner::load(opts, progress)?;
            if !v.matches() {
                return Err(format!("Row count mismatch: expected {}, found {}", v.expected, v.actual).into());
            }
        }
        Command::Export => { runner::export(opts, progress)?; }
        Command::All => runner::run_all(opts, progress)?,
    }
    Ok(())
}

pub fn parse_args<I, S>(args: I) -> Result<Invocation, Box<dyn Error>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut options = AppOptions::default();
    let mut command: Option<Command> = None;
    let mut out: Option<String> = None;

    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("Missing value for {flag}"));
        match a.as_str() {
            "-h" | "--help" => command = Some(Command::Help),

            "--categories" => {
                let v = value(&a)?;
                let names: Vec<String> = v.split(',').map(|s| s!(s.trim())).filter(|s| !s.is_empty()).collect();
                if names.is_empty() { return Err("Empty --categories list".into()); }
                options.scrape.categories = CategorySelector::Names(names);
                // Fail early on typos
                options.scrape.categories.resolve()?;
            }
            "--snapshots" => options.scrape.source = SourceKind::Snapshots(PathBuf::from(value(&a)?)),
            "--workers" => {
                let n: usize = value(&a)?.parse()?;
                if n == 0 { return Err("--workers must be at least 1".into()); }
                options.scrape.workers = n;
            }
            "--pause-ms" => options.scrape.pause_ms = value(&a)?.parse()?,

            "--raw" => options.paths.raw = PathBuf::from(value(&a)?),
            "--data" => options.paths.transformed = PathBuf::from(value(&a)?),

            "--top" => options.analysis.top_n = value(&a)?.parse()?,
            "--charts" => options.analysis.charts_dir = Some(PathBuf::from(value(&a)?)),

            "--db" => options.load.db_path = PathBuf::from(value(&a)?),
            "--table" => {
                let v = value(&a)?;
                if !crate::sql::valid_table_name(&v) {
                    return Err(format!("Invalid table name: '{v}'").into());
                }
                options.load.table = v;
            }

            "--table-kind" => {
                let v = value(&a)?;
                options.export.table = match v.to_ascii_lowercase().as_str() {
                    "raw" => TableKind::Raw,
                    "products" | "transformed" => TableKind::Products,
                    other => return Err(format!("Unknown table kind: {other}").into()),
                };
            }
            "--format" => {
                let v = value(&a)?;
                options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {other}").into()),
                };
            }
            "--per-category" => options.export.export_type = ExportType::PerCategory,
            "--include-headers" => options.export.include_headers = true,
            "--no-headers" => options.export.include_headers = false,
            "-o" | "--out" => out = Some(value(&a)?),

            flag if flag.starts_with('-') => return Err(format!("Unknown arg: {flag}").into()),

            word => match &mut command {
                None => command = Some(parse_command(word)?),
                Some(Command::Analyze(kinds)) => {
                    let k = AnalysisKind::from_slug(word)
                        .ok_or_else(|| format!("Unknown analysis: {word}"))?;
                    if !kinds.contains(&k) { kinds.push(k); }
                }
                Some(_) => return Err(format!("Unexpected argument: {word}").into()),
            },
        }
    }

    // After the loop: the path's meaning depends on --per-category
    if let Some(o) = out {
        options.export.set_path(&o);
    }

    let command = command.ok_or("Missing command (try --help)")?;
    Ok(Invocation { command, options })
}

fn parse_command(word: &str) -> Result<Command, Box<dyn Error>> {
    Ok(match word.to_ascii_lowercase().as_str() {
        "scrape" => Command::Scrape,
        "transform" => Command::Transform,
        "analyze" | "analyse" => Command::Analyze(Vec::new()),
        "load" => Command::Load,
        "export" => Command::Export,
        "all" => Command::All,
        "help" => Command::Help,
        other => return Err(format!("Unknown command: {other}").into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_collects_kinds_once() {
        let inv = parse_args(["analyze", "best-value", "top-reviewed", "best-value", "--top", "3"]).unwrap();
        assert_eq!(inv.command, Command::Analyze(vec![AnalysisKind::BestValue, AnalysisKind::TopReviewed]));
        assert_eq!(inv.options.analysis.top_n, 3);
    }

    #[test]
    fn out_path_applies_after_per_category() {
        let inv = parse_args(["export", "-o", "dump", "--per-category", "--format", "tsv"]).unwrap();
        assert_eq!(inv.options.export.out_path(), PathBuf::from("dump"));
        assert_eq!(inv.options.export.format, ExportFormat::Tsv);
    }

    #[test]
    fn rejects_unknowns() {
        assert!(parse_args(["scrape", "--bogus"]).is_err());
        assert!(parse_args(["frobnicate"]).is_err());
        assert!(parse_args(["scrape", "--categories", "Garden"]).is_err());
        assert!(parse_args(["load", "--table", "x;y"]).is_err());
        assert!(parse_args(["--top"]).is_err());
        assert!(parse_args(Vec::<String>::new()).is_err());
    }

    #[test]
    fn snapshots_and_categories() {
        let inv = parse_args(["scrape", "--snapshots", "pages", "--categories", "toys, tools"]).unwrap();
        assert_eq!(inv.options.scrape.source, SourceKind::Snapshots(PathBuf::from("pages")));
        let names: Vec<String> = inv.options.scrape.categories.resolve().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Tools", "Toys"]);
    }
}
