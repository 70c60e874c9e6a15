use crate::bucket::month_slot;
use crate::error::{GchartError, Result};
use crate::model::{AggregateResult, CommitRecord, MonthlyAggregate};
use crate::range::TimeRange;
use tracing::{debug, error};

/// Single-pass accumulator of commits into month buckets.
pub struct CommitAggregator {
    range: TimeRange,
    buckets: Vec<MonthlyAggregate>,
    excluded: u64,
}

impl CommitAggregator {
    pub fn new(range: TimeRange) -> Self {
        let months = range.months() as usize;
        Self {
            range,
            buckets: vec![MonthlyAggregate::new(); months],
            excluded: 0,
        }
    }

    /// Places one commit. Returns `false` when it falls outside the range and
    /// was skipped.
    pub fn ingest(&mut self, commit: &CommitRecord) -> bool {
        let slot = month_slot(self.range.start(), commit.timestamp) as usize;
        if slot < 1 || slot > self.buckets.len() || !self.range.contains(&commit.timestamp) {
            debug!(
                commit = %commit.id,
                timestamp = %commit.timestamp,
                "ignoring commit outside of requested range"
            );
            self.excluded += 1;
            return false;
        }

        self.buckets[slot - 1].record(&commit.author_name);
        true
    }

    pub fn finish(self) -> Result<AggregateResult> {
        let total_commits: u64 = self.buckets.iter().map(|b| b.commit_count).sum();
        let author_total: u64 = self.buckets.iter().map(MonthlyAggregate::author_total).sum();

        if total_commits != author_total {
            error!(total_commits, author_total, "bucket totals diverged from author totals");
            return Err(GchartError::ConsistencyViolation(format!(
                "bucket commit total {total_commits} does not match author total {author_total}"
            )));
        }

        Ok(AggregateResult {
            time_frame: self.range.time_frame_label(),
            range: self.range,
            buckets: self.buckets,
            total_commits,
            excluded_commits: self.excluded,
        })
    }
}

/// Aggregates `commits` into monthly buckets over `range`, consuming the
/// sequence exactly once.
///
/// The first failed item aborts the pass with [`GchartError::SourceRead`];
/// nothing accumulated before it is returned.
pub fn aggregate<I, E>(range: &TimeRange, commits: I) -> Result<AggregateResult>
where
    I: IntoIterator<Item = std::result::Result<CommitRecord, E>>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let mut aggregator = CommitAggregator::new(*range);
    for commit in commits {
        let commit = commit.map_err(GchartError::source_read)?;
        aggregator.ingest(&commit);
    }
    aggregator.finish()
}
