//! Error types surfaced by the logger's public API.
//!
//! Callers only ever need to distinguish two failure kinds: a row operation
//! issued in the wrong state, and the log refusing to accept more data. The
//! internal storage layers plumb `eyre::Result` with rich context; whatever
//! reaches the public boundary is folded into these kinds.

use thiserror::Error;

/// Result type alias for logger operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure kinds surfaced to callers.
#[derive(Error, Debug)]
pub enum Error {
    /// A row operation was issued with no row open.
    #[error("no row is currently open")]
    InvalidState,

    /// The log is full, the append would not fit, or the medium faulted.
    ///
    /// Once the log latches its FULL state, every subsequent row append
    /// reports this kind until the log is reformatted with
    /// [`clear`](crate::DataLog::clear).
    #[error("log store cannot accept more data")]
    NoResources,
}

/// Adapter faults are not recoverable by the logger; the underlying report
/// is preserved in the trace before the fault surfaces as `NoResources`.
impl From<eyre::Report> for Error {
    fn from(report: eyre::Report) -> Self {
        tracing::warn!("unrecoverable storage fault: {report:#}");
        Error::NoResources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_faults_fold_into_no_resources() {
        let report = eyre::eyre!("write beyond end of medium");
        let err: Error = report.into();
        assert!(matches!(err, Error::NoResources));
    }

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(Error::InvalidState.to_string(), "no row is currently open");
        assert_eq!(
            Error::NoResources.to_string(),
            "log store cannot accept more data"
        );
    }
}
