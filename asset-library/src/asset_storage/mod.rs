//! Object storage operations used by the asset library

mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
mod s3;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use error::{StorageError, StorageResult};
pub use s3::S3AssetStorage;

/// HTTP status of a successful listing
pub const LISTING_OK_STATUS: u16 = 200;

/// Presigned URL with expiration information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignedUrl {
    /// The presigned URL for GET operations
    pub url: String,
    /// UTC timestamp when the URL expires
    pub expires_at: DateTime<Utc>,
}

/// Object returned by a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedObject {
    /// Object key within the bucket
    pub key: String,
    /// Size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    /// Last modification time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl ListedObject {
    /// Creates a listed object with only a key
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            size: None,
            last_modified: None,
        }
    }
}

/// Raw outcome of a single listing request
///
/// Rejected listings keep the service status and error so callers can report
/// them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectListing {
    /// HTTP status returned by the object store
    pub status_code: u16,
    /// Bucket that was listed
    pub bucket: String,
    /// Key prefix the listing was scoped to
    pub prefix: String,
    /// Objects in listing order
    pub objects: Vec<ListedObject>,
    /// Whether the store had more keys than returned in this page
    pub is_truncated: bool,
    /// Service error code of a rejected listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Service error message of a rejected listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ObjectListing {
    /// Creates a successful listing
    #[must_use]
    pub fn succeeded(
        bucket: &str,
        prefix: &str,
        objects: Vec<ListedObject>,
        is_truncated: bool,
    ) -> Self {
        Self {
            status_code: LISTING_OK_STATUS,
            bucket: bucket.to_string(),
            prefix: prefix.to_string(),
            objects,
            is_truncated,
            error_code: None,
            error_message: None,
        }
    }

    /// Creates a listing the object store answered with an error status
    #[must_use]
    pub fn rejected(
        bucket: &str,
        prefix: &str,
        status_code: u16,
        error_code: Option<String>,
        error_message: Option<String>,
    ) -> Self {
        Self {
            status_code,
            bucket: bucket.to_string(),
            prefix: prefix.to_string(),
            objects: Vec::new(),
            is_truncated: false,
            error_code,
            error_message,
        }
    }

    /// Whether the store answered with status 200
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code == LISTING_OK_STATUS
    }
}

/// Object store operations needed to build the asset library
#[async_trait::async_trait]
pub trait AssetStorage: Send + Sync {
    /// Lists the objects under `prefix` with a single request (no pagination)
    ///
    /// A response carrying an error status is returned as a rejected
    /// `ObjectListing`, not as an error.
    async fn list_objects(&self, bucket: &str, prefix: &str) -> StorageResult<ObjectListing>;

    /// Generates a presigned GET URL for `key` valid for `expires_in_secs`
    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in_secs: u64,
    ) -> StorageResult<PresignedUrl>;
}
