use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use bstree::tracker::{write_report, ReportKind, Repository, DEFAULT_REPOSITORY};
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Track where words occur across text files and report them alphabetically
#[derive(Parser, Debug)]
#[command(name = "wordtracker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file to add to the repository
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Report style: -pf files, -pl files and lines, -po files, lines and entry counts
    #[arg(short = 'p', value_enum, value_name = "KIND")]
    report: ReportArg,

    /// Write the report to this file instead of stdout
    #[arg(short = 'f', long = "output", value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Repository file holding every word tracked so far
    #[arg(long, env = "WORDTRACKER_REPOSITORY", default_value = DEFAULT_REPOSITORY, value_hint = ValueHint::FilePath)]
    repository: PathBuf,

    /// Debug output: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ReportArg {
    /// Files each word was found in
    #[value(name = "f")]
    Files,
    /// Files and line numbers
    #[value(name = "l")]
    Lines,
    /// Files, line numbers and the number of entries
    #[value(name = "o")]
    Occurrences,
}

impl From<ReportArg> for ReportKind {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Files => ReportKind::Files,
            ReportArg::Lines => ReportKind::Lines,
            ReportArg::Occurrences => ReportKind::Occurrences,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let repository = Repository::new(&cli.repository);
    let mut tracker = repository.load();

    let recorded = tracker
        .ingest_file(&cli.input)
        .with_context(|| format!("cannot track {}", cli.input.display()))?;
    info!("run: recorded {} words, {} distinct", recorded, tracker.len());

    repository
        .save(&tracker)
        .context("cannot save the repository")?;

    let kind = ReportKind::from(cli.report);
    debug!("run: writing {:?} report", kind);
    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            write_report(&tracker, kind, BufWriter::new(file))
                .with_context(|| format!("cannot write {}", path.display()))?;
            println!("\nOutput file generated.\n");
        }
        None => {
            write_report(&tracker, kind, io::stdout().lock()).context("cannot write report")?
        }
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Logs go to stderr so stdout only carries the report.
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    debug!("setup_logging: {}", filter);
}
