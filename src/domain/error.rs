use thiserror::Error;

/// Domain-level errors for workflow operations.
///
/// The taxonomy is deliberately narrow: a project with no workflow (or no
/// steps) is a normal business state and the read-side functions return
/// zero-value results for it rather than erroring. Errors are reserved for
/// caller contract violations.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Invalid project attributes: {0}")]
    InvalidProjectAttributes(String),
}
