//! coursemine CLI - mine course co-occurrence rules from score records.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use coursemine_analysis::labels::{IdentityLabels, LabelLookup, LabelTable};
use coursemine_analysis::loader::{read_records, InputOptions};
use coursemine_analysis::pipeline::{MiningParams, MiningPipeline};
use coursemine_analysis::reporters::{available_formats, create_reporter};
use coursemine_analysis::TransactionTable;
use coursemine_core::config::{CliOverrides, CoursemineConfig, RuleScope};
use coursemine_core::errors::{ErrorCode, PipelineError};
use coursemine_core::tracing::init_tracing;

#[derive(Parser)]
#[command(name = "coursemine")]
#[command(version = coursemine_core::constants::VERSION)]
#[command(about = "Apriori association rules over per-student course scores", long_about = None)]
struct Cli {
    /// Directory holding coursemine.toml (default: current directory)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mine frequent course sets and association rules
    Mine {
        /// Score records file (entity,item,score); falls back to input.records_path
        records: Option<PathBuf>,

        /// Label file (item,label)
        #[arg(short, long)]
        labels: Option<PathBuf>,

        /// Minimum score for a course to count
        #[arg(long)]
        min_score: Option<i64>,

        /// Absolute minimum support count
        #[arg(long, conflicts_with = "support_fraction")]
        min_support: Option<u64>,

        /// Minimum support as a fraction of students, rounded up
        #[arg(long)]
        support_fraction: Option<f64>,

        /// Minimum rule confidence
        #[arg(long)]
        min_confidence: Option<f64>,

        /// Generate rules from the largest itemsets only, or from all of them
        #[arg(long, value_parser = parse_rule_scope)]
        rule_scope: Option<RuleScope>,

        /// Output format
        #[arg(short, long, default_value = "console")]
        format: String,
    },

    /// Print the resolved configuration as TOML
    Config,
}

fn parse_rule_scope(s: &str) -> Result<RuleScope, String> {
    s.parse()
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<PipelineError>() {
                Some(pipeline_error) => eprintln!("{}", pipeline_error.coded_string()),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = match cli.config_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    match cli.command {
        Commands::Mine {
            records,
            labels,
            min_score,
            min_support,
            support_fraction,
            min_confidence,
            rule_scope,
            format,
        } => {
            let overrides = CliOverrides {
                records_path: records,
                labels_path: labels,
                min_score,
                min_support,
                support_fraction,
                min_confidence,
                rule_scope,
            };
            let config = load_config(&root, Some(&overrides))?;
            mine(&config, &format)
        }
        Commands::Config => {
            let config = load_config(&root, None)?;
            print!("{}", config.to_toml().map_err(PipelineError::from)?);
            Ok(())
        }
    }
}

fn load_config(root: &Path, overrides: Option<&CliOverrides>) -> Result<CoursemineConfig> {
    Ok(CoursemineConfig::load(root, overrides).map_err(PipelineError::from)?)
}

fn mine(config: &CoursemineConfig, format: &str) -> Result<()> {
    let reporter = create_reporter(format).ok_or_else(|| {
        anyhow!(
            "unknown format '{}' (available: {})",
            format,
            available_formats().join(", ")
        )
    })?;

    let records_path = config
        .input
        .records_path
        .as_deref()
        .ok_or_else(|| anyhow!("no records file given (argument or input.records_path)"))?;
    let options = InputOptions::from_config(&config.input);

    let records = read_records(records_path, &options).map_err(PipelineError::from)?;
    let min_score = config.mining.effective_min_score();
    let table = TransactionTable::from_records(records, min_score);
    info!(entities = table.len(), min_score, "built transaction table");

    let labels: Box<dyn LabelLookup> = match config.input.labels_path.as_deref() {
        Some(path) => {
            let label_options = InputOptions::labels_from_config(&config.input);
            Box::new(LabelTable::load(path, &label_options).map_err(PipelineError::from)?)
        }
        None => Box::new(IdentityLabels),
    };

    let pipeline = MiningPipeline::new(MiningParams::from_config(&config.mining));
    let report = pipeline.run(&table, labels.as_ref())?;

    let output = reporter.generate(&report).map_err(|e| anyhow!(e))?;
    print!("{output}");
    Ok(())
}
