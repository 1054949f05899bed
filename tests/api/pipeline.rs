//! tests/api/pipeline.rs
use crate::helpers::{keys, DenyingAuthorizer, RecordingSink, StaticAuthorizer};
use claims::{assert_err, assert_ok};
use wordtally::error::JobError;
use wordtally::job::{collect_word_counts, WordCountJob};
use wordtally::sink::{BatchEmitter, Row};
use wordtally::storage::InMemoryStore;

fn row(word: &str, count: u64) -> Row {
    Row {
        word: word.to_string(),
        count,
    }
}

#[tokio::test]
async fn should_count_across_all_documents_and_emit_rows_in_first_seen_order() {
    // Arrange
    let store = InMemoryStore::new()
        .with_object("shakespeare/kinglear.txt", b"Cat dog. Dog cat!")
        .with_object("shakespeare/othello.txt", b"Bird")
        .with_object("shakespeare/romeoandjuliet.txt", b"cat");
    let sink = RecordingSink::new();
    let authorizer = StaticAuthorizer::new(sink.clone());
    let job = WordCountJob::new(&store, &authorizer, BatchEmitter::new(1000, 3));

    // Act
    let report = assert_ok!(
        job.run(&keys(&[
            "shakespeare/kinglear.txt",
            "shakespeare/othello.txt",
            "shakespeare/romeoandjuliet.txt",
        ]))
        .await
    );

    // Assert
    assert_eq!(report.documents_counted, 3);
    assert_eq!(report.documents_skipped, 0);
    assert_eq!(report.distinct_words, 3);
    assert_eq!(report.emit.rows_appended, 3);
    assert_eq!(
        sink.appended_rows(),
        vec![row("cat", 3), row("dog", 2), row("bird", 1)]
    );
}

#[tokio::test]
async fn should_fail_with_no_data_when_every_fetch_fails() {
    // An empty store makes every fetch fail. The denying authorizer proves
    // the job never even reached authorization: had it tried, the error
    // would have been Authorization instead of NoData.
    let store = InMemoryStore::new();
    let authorizer = DenyingAuthorizer;
    let job = WordCountJob::new(&store, &authorizer, BatchEmitter::new(1000, 3));

    let error = assert_err!(job.run(&keys(&["gone.txt", "also-gone.txt"])).await);

    assert!(matches!(error, JobError::NoData));
}

#[tokio::test]
async fn should_fail_before_any_append_when_authorization_is_denied() {
    let store = InMemoryStore::new().with_object("doc.txt", b"some words here");
    let authorizer = DenyingAuthorizer;
    let job = WordCountJob::new(&store, &authorizer, BatchEmitter::new(1000, 3));

    let error = assert_err!(job.run(&keys(&["doc.txt"])).await);

    assert!(matches!(error, JobError::Authorization(_)));
}

#[tokio::test]
async fn should_skip_documents_that_cannot_be_fetched_or_decoded() {
    let store = InMemoryStore::new()
        .with_object("good.txt", b"alpha beta alpha")
        .with_object("binary.bin", &[0xff, 0xfe, 0x00]);
    let sink = RecordingSink::new();
    let authorizer = StaticAuthorizer::new(sink.clone());
    let job = WordCountJob::new(&store, &authorizer, BatchEmitter::new(1000, 3));

    let report = assert_ok!(
        job.run(&keys(&["good.txt", "binary.bin", "missing.txt"]))
            .await
    );

    assert_eq!(report.documents_counted, 1);
    assert_eq!(report.documents_skipped, 2);
    assert_eq!(
        sink.appended_rows(),
        vec![row("alpha", 2), row("beta", 1)]
    );
}

#[tokio::test]
async fn should_merge_token_streams_rather_than_keep_the_last_document() {
    let store = InMemoryStore::new()
        .with_object("first.txt", b"a b a")
        .with_object("second.txt", b"b b");

    let (tally, skipped) = collect_word_counts(&store, &keys(&["first.txt", "second.txt"])).await;

    assert_eq!(skipped, 0);
    assert_eq!(tally.count("a"), Some(2));
    assert_eq!(tally.count("b"), Some(3));
}

#[tokio::test]
async fn should_split_large_row_sets_across_batches_in_order() {
    // 1500 distinct words at batch size 1000 gives two appends.
    let text = (0..1500)
        .map(|i| format!("w{i}"))
        .collect::<Vec<_>>()
        .join(" ");
    let store = InMemoryStore::new().with_object("big.txt", text.as_bytes());
    let sink = RecordingSink::new();
    let authorizer = StaticAuthorizer::new(sink.clone());
    let job = WordCountJob::new(&store, &authorizer, BatchEmitter::new(1000, 3));

    let report = assert_ok!(job.run(&keys(&["big.txt"])).await);

    assert_eq!(report.distinct_words, 1500);
    assert_eq!(report.emit.batches_sent, 2);
    let batches = sink.batches();
    assert_eq!(batches[0].len(), 1000);
    assert_eq!(batches[1].len(), 500);
    assert_eq!(batches[0][0].word, "w0");
    assert_eq!(batches[1][0].word, "w1000");
}
