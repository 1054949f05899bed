//! src/sink/emitter.rs
use crate::sink::{Row, RowSink, SinkError};

/// Outcome of one emit pass over the full row sequence.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EmitReport {
    pub rows_appended: usize,
    pub batches_sent: usize,
    pub batches_failed: usize,
}

/// Delivers rows to a sink in order-preserving chunks of at most
/// `batch_size`, retrying each chunk up to `max_retries` times after its
/// first attempt.
#[derive(Debug, Clone)]
pub struct BatchEmitter {
    batch_size: usize,
    max_retries: u32,
}

impl BatchEmitter {
    pub fn new(batch_size: usize, max_retries: u32) -> Self {
        assert!(batch_size > 0, "batch size must be positive");
        Self {
            batch_size,
            max_retries,
        }
    }

    /// Sends `rows` to the sink, `batch_size` rows at a time. A batch that
    /// still fails once its retries are spent is logged and skipped; the
    /// remaining batches are still attempted.
    #[tracing::instrument(name = "Emit rows", skip_all, fields(rows = rows.len()))]
    pub async fn emit(&self, sink: &dyn RowSink, rows: &[Row]) -> EmitReport {
        let mut report = EmitReport::default();
        for (index, batch) in rows.chunks(self.batch_size).enumerate() {
            match self.append_with_retry(sink, batch).await {
                Ok(()) => {
                    report.batches_sent += 1;
                    report.rows_appended += batch.len();
                }
                Err(error) => {
                    tracing::error!(
                        error = %error,
                        batch = index,
                        rows = batch.len(),
                        "Dropping batch after exhausting retries"
                    );
                    report.batches_failed += 1;
                }
            }
        }
        report
    }

    async fn append_with_retry(&self, sink: &dyn RowSink, batch: &[Row]) -> Result<(), SinkError> {
        let mut attempt = 0;
        loop {
            match sink.append(batch).await {
                Ok(()) => return Ok(()),
                Err(error) if attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(error = %error, attempt, "Sink append failed, retrying");
                }
                Err(error) => return Err(error),
            }
        }
    }
}
