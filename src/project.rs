//! Chart-ready views derived from an [`AggregateResult`].

use crate::model::{AggregateResult, AuthorDistribution, AuthorShare, MonthlyPoint, OTHERS_LABEL};
use crate::util::month_label;
use std::collections::HashMap;

/// One point per month bucket, in chronological order.
pub fn project_monthly(result: &AggregateResult) -> Vec<MonthlyPoint> {
    result
        .buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| MonthlyPoint {
            month: result
                .range
                .month_start(index as u32)
                .map(|start| month_label(&start))
                .unwrap_or_default(),
            commit_count: bucket.commit_count,
            author_count: bucket.author_count(),
        })
        .collect()
}

/// Per-author commit totals across the whole range.
pub fn author_totals(result: &AggregateResult) -> HashMap<String, u64> {
    let mut totals: HashMap<String, u64> = HashMap::new();
    for bucket in &result.buckets {
        for (author, count) in &bucket.author_counts {
            *totals.entry(author.clone()).or_insert(0) += count;
        }
    }
    totals
}

/// Author shares where everyone below `threshold` commits is folded into a
/// single grouped entry. A threshold of 0 disables grouping.
///
/// Entries are sorted by commits descending, then by name; the grouped entry,
/// when present, comes last.
pub fn project_author_distribution(result: &AggregateResult, threshold: u64) -> AuthorDistribution {
    let totals = author_totals(result);
    let total_authors = totals.len();

    let mut entries = Vec::with_capacity(total_authors);
    let mut grouped_authors = 0;
    let mut grouped_commits = 0;

    for (name, commits) in totals {
        if commits < threshold {
            grouped_authors += 1;
            grouped_commits += commits;
        } else {
            entries.push(AuthorShare {
                name,
                commits,
                grouped: false,
            });
        }
    }

    entries.sort_by(|a, b| b.commits.cmp(&a.commits).then_with(|| a.name.cmp(&b.name)));

    if grouped_authors > 0 {
        entries.push(AuthorShare {
            name: OTHERS_LABEL.to_string(),
            commits: grouped_commits,
            grouped: true,
        });
    }

    debug_assert_eq!(entries.iter().map(|e| e.commits).sum::<u64>(), result.total_commits);

    AuthorDistribution {
        entries,
        total_authors,
        grouped_authors,
    }
}
