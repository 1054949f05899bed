//! src/sink/mod.rs
use async_trait::async_trait;

mod emitter;
mod spreadsheet;

pub use emitter::{BatchEmitter, EmitReport};
pub use spreadsheet::{SpreadsheetAuthorizer, SpreadsheetSink};

/// One sink row: a word and how many times it occurred in the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub word: String,
    pub count: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("append rejected by the sink: {0}")]
    Rejected(String),
    #[error("failed to reach the sink")]
    Transport(#[source] anyhow::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("failed to read keyfile at {path}")]
    Keyfile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("keyfile is not valid JSON")]
    Malformed(#[from] serde_json::Error),
    #[error("keyfile is missing a usable token")]
    MissingToken,
}

/// Append side of the external row store. Appends are strictly additive;
/// the sink never dedups or overwrites.
#[async_trait]
pub trait RowSink: Send + Sync + std::fmt::Debug {
    async fn append(&self, rows: &[Row]) -> Result<(), SinkError>;
}

/// Turns local credentials into a usable sink session. Run once per job,
/// after counting and before the first append.
#[async_trait]
pub trait SinkAuthorizer: Send + Sync {
    async fn authorize(&self) -> Result<Box<dyn RowSink>, AuthError>;
}
