use crate::config::{RunConfig, Verbosity, DEFAULT_THRESHOLD};
use anyhow::Result;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gchart")]
#[command(about = "Monthly commit and author activity charts for git repositories")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(short, long, global = true, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(short, long, global = true, help = "First month to include (YYYYMM)")]
    pub start: Option<String>,

    #[arg(short, long, global = true, help = "Last month to include (YYYYMM), defaults to the current month")]
    pub end: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_THRESHOLD,
        help = "Authors with fewer commits are grouped as 'others'; 0 disables grouping"
    )]
    pub threshold: u64,

    #[arg(short, long, global = true, conflicts_with = "quiet", help = "Log every skipped commit and per-month counts")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Only report warnings and errors")]
    pub quiet: bool,
}

impl CommonArgs {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn to_config(&self) -> Result<RunConfig> {
        let start = self
            .start
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("missing start month, pass --start YYYYMM"))?;
        let config = RunConfig::new(
            self.repo.clone(),
            start,
            self.end.as_deref(),
            self.threshold,
            self.verbosity(),
            Utc::now(),
        )?;
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write an HTML page with a monthly bar chart and an author pie chart
    Chart {
        #[arg(short, long, default_value = "output.html", help = "Output file")]
        output: PathBuf,
    },
    /// Print monthly activity and author shares to the terminal
    Summary,
    /// Print the aggregated statistics as JSON or NDJSON
    Export {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, conflicts_with = "json", help = "Output as NDJSON")]
        ndjson: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::init(self.common.verbosity());
        let config = self.common.to_config()?;

        match self.command {
            Commands::Chart { output } => crate::report::exec::chart(&config, &output),
            Commands::Summary => crate::report::exec::summary(&config),
            Commands::Export { json, ndjson } => crate::report::exec::export(&config, json, ndjson),
        }
    }
}
