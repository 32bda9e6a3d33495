// src/cli.rs
use std::{
    env,
    error::Error,
    io::{self, Write},
    time::Duration,
};

use crate::{
    config::options::{AppOptions, ExportFormat, Source, SourceSelector},
    csv,
    data::failure_message,
    error::{ScanError, Severity},
    progress::Progress,
    scan::Scanner,
};

pub type CliResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Scan(AppOptions),
}

pub fn run() -> CliResult<()> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{HELP}");
            Ok(())
        }
        Command::Scan(opts) => scan(&opts),
    }
}

fn scan(opts: &AppOptions) -> CliResult<()> {
    let mut scanner = Scanner::http(&opts.scan)?;
    let sources = opts.sources.sources();

    let mut progress = CliProgress;
    let outcomes = scanner.scan_each(&sources, std::time::Instant::now(), Some(&mut progress));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let sep = opts.output.format.delim();

    let mut first = true;
    for (source, outcome) in outcomes {
        let Ok(snap) = outcome else { continue };
        if !first { writeln!(out)?; }
        first = false;
        eprintln!("== {} ({} rows) ==", source.title(), snap.table.row_count());
        csv::write_table(&mut out, &snap.table, opts.output.include_headers, sep)?;
    }
    out.flush()?;
    Ok(())
}

/// Prints per-source failures to stderr as they happen.
struct CliProgress;

impl Progress for CliProgress {
    fn item_failed(&mut self, source: Source, err: &ScanError) {
        let tag = match err.severity() {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        };
        eprintln!("{tag}: {}", failure_message(source, err));
    }
}

pub fn parse_args<I>(args: I) -> CliResult<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-s" | "--source" => {
                let v = args.next().ok_or("Missing value for --source")?;
                opts.sources = match v.to_ascii_lowercase().as_str() {
                    "all" => SourceSelector::All,
                    other => SourceSelector::One(
                        Source::from_slug(other).ok_or_else(|| format!("Unknown source: {}", other))?,
                    ),
                };
            }
            "-f" | "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.output.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => opts.output.include_headers = false,
            "-t" | "--timeout" => {
                let v = args.next().ok_or("Missing value for --timeout")?;
                let secs: f64 = v.parse().map_err(|_| format!("Invalid timeout: {}", v))?;
                if !(secs > 0.0 && secs <= 300.0) {
                    return Err(format!("Timeout out of range (0..300]: {}", v).into());
                }
                opts.scan.timeout = Duration::from_secs_f64(secs);
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(Command::Scan(opts))
}
