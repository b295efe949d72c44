use thiserror::Error;

/// Failure modes of the copy sequence.
///
/// `External` wraps every external-command or adapter failure unchanged; the
/// other variants are produced by the orchestration itself.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("not overwriting secret {0} without confirmation")]
    ConfirmationRequired(String),

    #[error("unexpected number of fields for line {0}")]
    MalformedLine(String),

    #[error(transparent)]
    External(#[from] anyhow::Error),
}
