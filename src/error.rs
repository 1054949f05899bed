//! src/error.rs
use crate::sink::AuthError;

/// Run-level failures. Everything else (a fetch, a decode, a batch) is
/// logged and skipped where it happens; these two abort the run before any
/// sink write and each maps to its own process exit code.
#[derive(thiserror::Error)]
pub enum JobError {
    #[error("no documents could be retrieved")]
    NoData,
    #[error("sink authorization failed")]
    Authorization(#[from] AuthError),
}

impl std::fmt::Debug for JobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
