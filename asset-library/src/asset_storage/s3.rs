//! S3-backed asset storage

use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::{
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    presigning::PresigningConfig,
    primitives::DateTime as S3DateTime,
    Client as S3Client,
};
use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};

use super::{
    AssetStorage, ListedObject, ObjectListing, PresignedUrl, StorageError, StorageResult,
};

/// Asset storage client for S3 operations
pub struct S3AssetStorage {
    s3_client: Arc<S3Client>,
}

impl S3AssetStorage {
    /// Creates a new asset storage client
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>) -> Self {
        Self { s3_client }
    }
}

fn to_utc(timestamp: &S3DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
}

#[async_trait::async_trait]
impl AssetStorage for S3AssetStorage {
    async fn list_objects(&self, bucket: &str, prefix: &str) -> StorageResult<ObjectListing> {
        debug!("Listing objects in {} under {}", bucket, prefix);

        let result = self
            .s3_client
            .list_objects()
            .bucket(bucket)
            .prefix(prefix)
            .send()
            .await;

        match result {
            Ok(output) => {
                let objects = output
                    .contents()
                    .iter()
                    .filter_map(|object| {
                        object.key().map(|key| ListedObject {
                            key: key.to_string(),
                            size: object.size(),
                            last_modified: object.last_modified().and_then(to_utc),
                        })
                    })
                    .collect();

                Ok(ObjectListing::succeeded(
                    bucket,
                    prefix,
                    objects,
                    output.is_truncated().unwrap_or(false),
                ))
            }
            Err(SdkError::ServiceError(service_err)) => {
                let status_code = service_err.raw().status().as_u16();
                let err = service_err.err();
                warn!(
                    "Listing of {} under {} rejected with status {}: {:?}",
                    bucket,
                    prefix,
                    status_code,
                    err.code()
                );

                Ok(ObjectListing::rejected(
                    bucket,
                    prefix,
                    status_code,
                    err.code().map(str::to_string),
                    err.message().map(str::to_string),
                ))
            }
            Err(e) => {
                error!("Failed to list objects in {}: {}", bucket, e);
                Err(StorageError::Request(DisplayErrorContext(&e).to_string()))
            }
        }
    }

    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in_secs: u64,
    ) -> StorageResult<PresignedUrl> {
        let presigned_config = PresigningConfig::expires_in(Duration::from_secs(expires_in_secs))
            .map_err(|e| {
                StorageError::Config(format!("Failed to create presigning config: {e}"))
            })?;

        let presigned_request = self
            .s3_client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigned_config)
            .await
            .map_err(|e| StorageError::Presign(DisplayErrorContext(&e).to_string()))?;

        let expires_at = Utc::now() + Duration::from_secs(expires_in_secs);

        debug!("Generated presigned URL for {} expires at: {}", key, expires_at);

        Ok(PresignedUrl {
            url: presigned_request.uri().to_string(),
            expires_at,
        })
    }
}
