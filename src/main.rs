//! facelift - Standardize a folder of app mockup pages

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use facelift::{BatchOptions, DEFAULT_BACKUP_SUFFIX, FileStatus, Report};

#[derive(Parser)]
#[command(name = "facelift")]
#[command(version, about = "Standardize the head, icons and navigation of HTML pages", long_about = None)]
#[command(after_help = "EXAMPLES:
    facelift                    Rewrite every *.html page in the current folder
    facelift site -n            Show what would change in site/ without writing
    facelift site --json        Print the report as JSON")]
struct Cli {
    /// Folder containing the pages
    #[arg(value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Suffix appended to each original file name for its backup
    #[arg(long, value_name = "SUFFIX", default_value = DEFAULT_BACKUP_SUFFIX)]
    backup_suffix: String,

    /// Standardize and report without writing any file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Suppress per-file success lines
    #[arg(short, long)]
    quiet: bool,

    /// Increase log detail (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the report as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = BatchOptions::new(&cli.dir)
        .with_backup_suffix(cli.backup_suffix.as_str())
        .with_dry_run(cli.dry_run);

    let report = match facelift::run(&options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&report, cli.quiet);
    }

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "facelift=warn",
        1 => "facelift=info",
        _ => "facelift=debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_report(report: &Report, quiet: bool) {
    for file in &report.files {
        match &file.status {
            FileStatus::Updated { .. } if quiet => {}
            FileStatus::Updated { .. } if report.dry_run => {
                println!("Would update: {}", file.path.display());
            }
            FileStatus::Updated { .. } => println!("Updated: {}", file.path.display()),
            FileStatus::Failed { error } => {
                eprintln!("[ERROR] {}: {error}", file.path.display());
            }
        }
    }

    let verb = if report.dry_run { "checked" } else { "updated" };
    println!(
        "{} {verb}, {} failed, {} total",
        report.succeeded(),
        report.failed(),
        report.files.len()
    );
}
