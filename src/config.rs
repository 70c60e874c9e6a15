use crate::error::Result;
use crate::range::{resolve_range, TimeRange};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub const DEFAULT_THRESHOLD: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Everything one run needs, resolved once from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub repo: Option<PathBuf>,
    pub range: TimeRange,
    pub threshold: u64,
    pub verbosity: Verbosity,
}

impl RunConfig {
    pub fn new(
        repo: Option<PathBuf>,
        start: &str,
        end: Option<&str>,
        threshold: u64,
        verbosity: Verbosity,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let range = resolve_range(start, end, now)?;
        Ok(Self {
            repo,
            range,
            threshold,
            verbosity,
        })
    }

    pub fn quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }
}
