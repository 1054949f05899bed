//! src/main.rs
//!
//! Exit codes: 0 on success, 2 when no documents could be retrieved, 3 when
//! sink authorization fails.
use std::process::ExitCode;
use wordtally::configuration::get_configuration;
use wordtally::error::JobError;
use wordtally::job;
use wordtally::telemetry::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let configuration = get_configuration().expect("Failed to read configuration.");
    let tracer_provider = init_tracing("wordtally").expect("Failed to initialize tracing.");

    let code = match job::run(configuration).await {
        Ok(report) => {
            tracing::info!(
                documents = report.documents_counted,
                skipped = report.documents_skipped,
                distinct_words = report.distinct_words,
                rows_appended = report.emit.rows_appended,
                batches_failed = report.emit.batches_failed,
                "Run complete"
            );
            ExitCode::SUCCESS
        }
        Err(error @ JobError::NoData) => {
            tracing::error!(error = ?error, "No documents could be retrieved");
            ExitCode::from(2)
        }
        Err(error @ JobError::Authorization(_)) => {
            tracing::error!(error = ?error, "Sink authorization failed");
            ExitCode::from(3)
        }
    };

    // Flush the last batch of spans before the process ends.
    tracer_provider.shutdown().ok();
    code
}
