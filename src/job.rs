//! src/job.rs
use crate::configuration::Settings;
use crate::error::JobError;
use crate::sink::{BatchEmitter, EmitReport, SinkAuthorizer, SpreadsheetAuthorizer};
use crate::storage::{ObjectStore, S3BlobStore};
use crate::tally::WordTally;
use crate::tokenizer;
use uuid::Uuid;

/// What one completed run did, for the final log line.
#[derive(Debug)]
pub struct RunReport {
    pub documents_counted: usize,
    pub documents_skipped: usize,
    pub distinct_words: usize,
    pub emit: EmitReport,
}

/// Fetches and tokenizes every named object, merging all token streams
/// into one tally. A fetch or decode failure skips that document and the
/// loop moves on; the caller decides what an empty tally means.
#[tracing::instrument(name = "Collect word counts", skip_all, fields(documents = keys.len()))]
pub async fn collect_word_counts(store: &dyn ObjectStore, keys: &[String]) -> (WordTally, usize) {
    let mut tally = WordTally::new();
    let mut skipped = 0;
    for key in keys {
        let bytes = match store.fetch(key).await {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::error!(error = %error, resource = %key, "Skipping object that could not be fetched");
                skipped += 1;
                continue;
            }
        };
        match tokenizer::tokenize(&bytes) {
            Ok(tokens) => tally.accumulate(tokens),
            Err(error) => {
                tracing::error!(error = %error, resource = %key, "Skipping object that could not be decoded");
                skipped += 1;
            }
        }
    }
    (tally, skipped)
}

/// The pipeline: fetch + count, bail if nothing was retrieved, authorize
/// the sink, then emit the rows in batches.
pub struct WordCountJob<'a> {
    store: &'a dyn ObjectStore,
    authorizer: &'a dyn SinkAuthorizer,
    emitter: BatchEmitter,
}

impl<'a> WordCountJob<'a> {
    pub fn new(
        store: &'a dyn ObjectStore,
        authorizer: &'a dyn SinkAuthorizer,
        emitter: BatchEmitter,
    ) -> Self {
        Self {
            store,
            authorizer,
            emitter,
        }
    }

    #[tracing::instrument(name = "Run word count job", skip_all, fields(run_id = %Uuid::new_v4()))]
    pub async fn run(&self, keys: &[String]) -> Result<RunReport, JobError> {
        let (tally, skipped) = collect_word_counts(self.store, keys).await;
        if tally.is_empty() {
            return Err(JobError::NoData);
        }

        let sink = self.authorizer.authorize().await?;

        let distinct_words = tally.len();
        let rows = tally.into_rows();
        let emit = self.emitter.emit(sink.as_ref(), &rows).await;

        Ok(RunReport {
            documents_counted: keys.len() - skipped,
            documents_skipped: skipped,
            distinct_words,
            emit,
        })
    }
}

/// Production wiring: anonymous S3-compatible store, keyfile-authorized
/// spreadsheet sink.
pub async fn run(settings: Settings) -> Result<RunReport, JobError> {
    let store = S3BlobStore::new(&settings.source).await;
    let emitter = BatchEmitter::new(settings.sink.batch_size, settings.sink.max_retries);
    let authorizer = SpreadsheetAuthorizer::new(settings.sink);

    WordCountJob::new(&store, &authorizer, emitter)
        .run(&settings.source.objects)
        .await
}
