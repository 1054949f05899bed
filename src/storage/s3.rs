//! src/storage/s3.rs
use crate::configuration::SourceSettings;
use crate::storage::{FetchError, ObjectStore};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;

/// S3-compatible store over a public bucket. The client carries no
/// credentials; the source container allows anonymous reads.
#[derive(Debug)]
pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    #[tracing::instrument(name = "Create S3BlobStore handle", skip(settings), fields(bucket = %settings.bucket))]
    pub async fn new(settings: &SourceSettings) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .no_credentials()
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(true);
        if let Some(endpoint) = &settings.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Self {
            client: Client::from_conf(builder.build()),
            bucket: settings.bucket.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3BlobStore {
    #[tracing::instrument(name = "Fetch object", skip(self), fields(bucket = %self.bucket))]
    async fn fetch(&self, key: &str) -> Result<Vec<u8>, FetchError> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| match err.as_service_error() {
                Some(e) if e.is_no_such_key() => FetchError::NotFound {
                    key: key.to_string(),
                },
                _ => FetchError::Transport {
                    key: key.to_string(),
                    source: err.into(),
                },
            })?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|err| FetchError::Transport {
                key: key.to_string(),
                source: err.into(),
            })?
            .into_bytes();
        Ok(data.to_vec())
    }
}
