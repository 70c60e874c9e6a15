use crate::aggregate::aggregate;
use crate::config::{RunConfig, Verbosity};
use crate::git::GitRepo;
use crate::model::AggregateResult;
use crate::util::month_key;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// Walks the repository once and aggregates the commits into the configured
/// range, with a spinner unless running quiet.
pub fn fetch_aggregate(repo: &GitRepo, config: &RunConfig) -> anyhow::Result<AggregateResult> {
    let pb = if config.quiet() {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} {pos}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb
    };
    pb.set_message("Walking commits...");

    let commits = repo.commits().context("Failed to start walking commits from HEAD")?;
    let result = aggregate(&config.range, commits.inspect(|_| pb.inc(1)));
    pb.finish_and_clear();

    let result = result.context("Failed to aggregate commits")?;

    info!(
        "processed {} commits over {} months",
        result.total_commits,
        result.buckets.len()
    );
    if result.excluded_commits > 0 {
        debug!(
            "skipped {} commits outside of {}",
            result.excluded_commits, result.time_frame
        );
    }
    if config.verbosity == Verbosity::Verbose {
        for (index, bucket) in result.buckets.iter().enumerate() {
            let month = result
                .range
                .month_start(index as u32)
                .map(|start| month_key(&start))
                .unwrap_or_default();
            debug!("{month}: {} commits by {} authors", bucket.commit_count, bucket.author_count());
        }
    }

    Ok(result)
}
