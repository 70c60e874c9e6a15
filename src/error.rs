use chrono::{DateTime, Utc};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GchartError>;

#[derive(Error, Debug)]
pub enum GchartError {
    #[error("Invalid date format '{0}': expected YYYYMM")]
    InvalidDateFormat(String),
    #[error("Invalid date range: end ({end}) is before start ({start})")]
    InvalidDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("Failed to read commits")]
    SourceRead(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Consistency violation: {0}")]
    ConsistencyViolation(String),
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::discover::Error> for GchartError {
    fn from(err: gix::discover::Error) -> Self {
        GchartError::GitDiscover(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for GchartError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GchartError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for GchartError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        GchartError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for GchartError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        GchartError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for GchartError {
    fn from(err: gix::objs::decode::Error) -> Self {
        GchartError::ObjectDecode(Box::new(err))
    }
}

impl GchartError {
    /// Wraps a failure raised by a commit source while it was being consumed.
    pub fn source_read<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        GchartError::SourceRead(err.into())
    }
}
