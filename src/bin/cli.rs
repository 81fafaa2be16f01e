//! newscrawl CLI
//!
//! Searches the archive for a category and keyword, reads every matching
//! article and saves them as JSON or CSV.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use newscrawl::{
    error::Result,
    models::{CATEGORIES, Config, RawRequest},
    pipeline::{self, RunOutcome},
    services::HttpSource,
};

const USAGE: &str = "Usage: [command] -cat=1 -search='chinese' -out=data.csv -format=csv";

/// newscrawl - news archive scraper
#[derive(Parser, Debug)]
#[command(name = "newscrawl", version, about = "Scrapes the news archive search")]
struct Cli {
    /// Category id
    #[arg(long, allow_hyphen_values = true)]
    cat: Option<String>,

    /// Search keywords
    #[arg(long, allow_hyphen_values = true)]
    search: Option<String>,

    /// Output file path
    #[arg(long, allow_hyphen_values = true)]
    out: Option<PathBuf>,

    /// File format: json or csv
    #[arg(long, default_value = "json", allow_hyphen_values = true)]
    format: String,

    /// Path to a TOML config file
    #[arg(long, allow_hyphen_values = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn into_request(self) -> RawRequest {
        RawRequest {
            category_id: self.cat,
            search: self.search,
            out: self.out,
            format: Some(self.format),
        }
    }
}

/// Flags that take a value as the next argument.
const VALUE_FLAGS: &[&str] = &["cat", "search", "out", "format", "config"];

/// Accept Go-style single-dash long flags (`-cat=9`) alongside `--cat=9`.
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut normalized = Vec::new();
    let mut takes_value = false;

    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || std::mem::take(&mut takes_value) {
            normalized.push(arg);
            continue;
        }
        let Some(s) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        let flag = s.trim_start_matches('-');
        let dashes = s.len() - flag.len();
        if dashes == 0 || flag.is_empty() {
            normalized.push(arg);
            continue;
        }

        let name = flag.split('=').next().unwrap_or(flag);
        takes_value = !flag.contains('=') && VALUE_FLAGS.contains(&name);

        if dashes == 1 && flag.len() > 1 {
            normalized.push(OsString::from(format!("-{s}")));
        } else {
            normalized.push(arg);
        }
    }

    normalized
}

fn print_usage() {
    println!("category id: ");
    for category in CATEGORIES {
        println!("{}", category.display_line());
    }
    println!("{USAGE}");
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> Result<RunOutcome> {
    let config = match &cli.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    let source = HttpSource::new(&config)?;
    pipeline::run_pipeline(&config, cli.into_request(), &source)
}

/// Main entry point for the CLI application.
fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let cli = Cli::parse_from(normalize_args(args));
    init_logging(cli.verbose);

    match run(cli) {
        Ok(RunOutcome::Saved { path, count }) => {
            log::info!("Done! {} articles written to {}", count, path.display());
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::NoData) => {
            println!("No data.");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_validation() => {
            println!("{e}");
            ExitCode::from(2)
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(normalize_args(args.iter().map(OsString::from)))
    }

    #[test]
    fn test_single_dash_flags() {
        let cli = parse(&[
            "newscrawl",
            "-cat=9",
            "-search",
            "flood",
            "-out=data.csv",
            "-format=csv",
        ]);
        assert_eq!(cli.cat.as_deref(), Some("9"));
        assert_eq!(cli.search.as_deref(), Some("flood"));
        assert_eq!(cli.out, Some(PathBuf::from("data.csv")));
        assert_eq!(cli.format, "csv");
    }

    #[test]
    fn test_double_dash_and_defaults() {
        let cli = parse(&["newscrawl", "--cat", "1", "--search=x"]);
        assert_eq!(cli.cat.as_deref(), Some("1"));
        assert_eq!(cli.out, None);
        assert_eq!(cli.format, "json");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_values_are_not_rewritten() {
        let args = normalize_args(["newscrawl", "-search", "-flood-"].map(OsString::from));
        assert_eq!(args[1], OsString::from("--search"));
        assert_eq!(args[2], OsString::from("-flood-"));

        let args = normalize_args(["newscrawl", "-search=-x", "-v"].map(OsString::from));
        assert_eq!(args[1], OsString::from("--search=-x"));
        assert_eq!(args[2], OsString::from("-v"));
    }

    #[test]
    fn test_hyphenated_values_reach_every_flag() {
        let cli = parse(&[
            "newscrawl",
            "-cat",
            "-5",
            "-search",
            "x",
            "-out",
            "-x.json",
            "-format",
            "-csv",
            "-config",
            "-conf.toml",
        ]);
        assert_eq!(cli.cat.as_deref(), Some("-5"));
        assert_eq!(cli.search.as_deref(), Some("x"));
        assert_eq!(cli.out, Some(PathBuf::from("-x.json")));
        assert_eq!(cli.format, "-csv");
        assert_eq!(cli.config, Some(PathBuf::from("-conf.toml")));
    }
}
