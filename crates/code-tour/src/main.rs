//! code-tour CLI binary entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use log::LevelFilter;

use code_tree::euler::TourMode;
use code_tree::pipeline::{run, RunConfig, RunSummary};
use code_tree::tree::DEFAULT_ROOT_NAME;

/// Fold hierarchical code lists into a shared tree and write its Euler tour.
#[derive(Parser, Debug)]
#[command(name = "code-tour")]
#[command(version, about, long_about = None)]
struct Cli {
    /// CSV file of the codes, one hierarchy path per line
    #[arg(short, long)]
    codes: PathBuf,

    /// Directory name for the results
    #[arg(short, long)]
    results: PathBuf,

    /// Name of the artificial root node
    #[arg(long, default_value = DEFAULT_ROOT_NAME)]
    root_name: String,

    /// Keep the final return to the root at the end of the tour
    #[arg(long)]
    closed: bool,

    /// Also write a Graphviz rendering of the tree
    #[arg(long)]
    dot: bool,

    /// Log every traversal event
    #[arg(long)]
    trace: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        let mut config = RunConfig::new(&self.codes, &self.results);
        config.root_name = self.root_name.clone();
        config.mode = if self.closed {
            TourMode::Closed
        } else {
            TourMode::Open
        };
        config.dot = self.dot;
        config
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Per-module overrides on top of the global level
    ///
    /// `--trace` covers the whole library: node creation in the tree as well
    /// as the tour events.
    fn module_filters(&self) -> Vec<(&'static str, LevelFilter)> {
        if self.trace {
            vec![("code_tree", LevelFilter::Trace)]
        } else {
            Vec::new()
        }
    }
}

fn init_logging(cli: &Cli) {
    let env = env_logger::Env::default().default_filter_or(cli.log_level().as_str());
    let mut builder = env_logger::Builder::from_env(env);
    for (module, level) in cli.module_filters() {
        builder.filter_module(module, level);
    }
    builder.init();
}

fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let report = &summary.report;
    let counts = [
        ("Lines read:", report.lines_read),
        ("Lines skipped:", report.skipped.len()),
        ("Duplicate paths:", report.duplicates),
        ("Tree nodes:", summary.node_count),
        ("Tour records:", summary.tour_len),
    ];

    let mut lines: Vec<String> = counts
        .iter()
        .map(|(label, count)| format!("{:<17}{}", label, count))
        .collect();
    lines.extend(
        summary
            .outputs
            .iter()
            .map(|path| format!("  {}", path.display())),
    );
    lines
}

fn print_summary(summary: &RunSummary) {
    for line in summary_lines(summary) {
        println!("{}", line);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = cli.run_config();
    match run(&config).with_context(|| format!("could not process {}", config.codes.display())) {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let config_error = err
                .downcast_ref::<code_tree::Error>()
                .is_some_and(code_tree::Error::is_config);
            if config_error {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
