//! Monthly commit statistics for git repositories.
//!
//! A run resolves a `YYYYMM` start/end pair into a [`range::TimeRange`], walks
//! the repository history once through [`aggregate::aggregate`], and derives a
//! per-month series and a grouped author distribution with [`project`].

pub mod aggregate;
pub mod bucket;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod model;
pub mod project;
pub mod range;
pub mod report;
pub mod util;

pub use aggregate::{aggregate, CommitAggregator};
pub use bucket::{bucket_offset, month_slot};
pub use error::{GchartError, Result};
pub use model::{AggregateResult, AuthorDistribution, AuthorShare, CommitRecord, MonthlyAggregate, MonthlyPoint};
pub use project::{project_author_distribution, project_monthly};
pub use range::{resolve_range, TimeRange};
