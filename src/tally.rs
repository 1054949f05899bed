//! src/tally.rs
use crate::sink::Row;
use indexmap::IndexMap;

/// Running word -> occurrence count for one job. Keys keep the order in
/// which they were first seen across every accumulated document, which is
/// also the order rows are emitted in.
#[derive(Debug, Default)]
pub struct WordTally {
    counts: IndexMap<String, u64>,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one document's tokens into the running counts. Invoked once
    /// per document; counts from every document in the run are merged into
    /// the same map.
    pub fn accumulate<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        for token in tokens {
            *self.counts.entry(token).or_insert(0) += 1;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Consumes the tally into the ordered row sequence handed to the sink.
    pub fn into_rows(self) -> Vec<Row> {
        self.counts
            .into_iter()
            .map(|(word, count)| Row { word, count })
            .collect()
    }
}
