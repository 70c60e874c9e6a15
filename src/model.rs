use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const SCHEMA_VERSION: u32 = 1;

/// Label of the synthetic distribution entry that small contributors fold into.
pub const OTHERS_LABEL: &str = "others";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub id: String,
    pub author_name: String,
    pub timestamp: DateTime<Utc>,
}

impl CommitRecord {
    pub fn new(id: impl Into<String>, author_name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            author_name: author_name.into(),
            timestamp,
        }
    }
}

/// Commit and author tallies for one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub commit_count: u64,
    pub author_counts: HashMap<String, u64>,
}

impl MonthlyAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, author: &str) {
        self.commit_count += 1;
        *self.author_counts.entry(author.to_string()).or_insert(0) += 1;
    }

    /// Distinct authors with at least one commit in this month.
    pub fn author_count(&self) -> usize {
        self.author_counts.values().filter(|&&c| c > 0).count()
    }

    pub fn author_total(&self) -> u64 {
        self.author_counts.values().sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    pub range: crate::range::TimeRange,
    pub buckets: Vec<MonthlyAggregate>,
    pub total_commits: u64,
    pub excluded_commits: u64,
    pub time_frame: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub commit_count: u64,
    pub author_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorShare {
    pub name: String,
    pub commits: u64,
    /// Set on the single entry that holds the commits of grouped authors.
    pub grouped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDistribution {
    pub entries: Vec<AuthorShare>,
    pub total_authors: usize,
    pub grouped_authors: usize,
}

impl AuthorDistribution {
    pub fn total_commits(&self) -> u64 {
        self.entries.iter().map(|e| e.commits).sum()
    }

    pub fn individual_entries(&self) -> impl Iterator<Item = &AuthorShare> {
        self.entries.iter().filter(|e| !e.grouped)
    }

    pub fn grouped_entry(&self) -> Option<&AuthorShare> {
        self.entries.iter().find(|e| e.grouped)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthAuthors {
    pub month: String,
    pub authors: HashMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub time_frame: String,
    pub threshold: u64,
    pub total_commits: u64,
    pub excluded_commits: u64,
    pub months: Vec<MonthlyPoint>,
    pub buckets: Vec<MonthAuthors>,
    pub authors: AuthorDistribution,
}
