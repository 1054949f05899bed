//! src/storage/mod.rs
use async_trait::async_trait;

mod memory;
mod s3;

pub use memory::InMemoryStore;
pub use s3::S3BlobStore;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("object {key} not found in bucket")]
    NotFound { key: String },
    #[error("failed to fetch object {key}")]
    Transport {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Read side of the object store, bound to one bucket. Each key is fetched
/// exactly once per run; a failure is reported to the caller instead of
/// aborting the job.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn fetch(&self, key: &str) -> Result<Vec<u8>, FetchError>;
}
