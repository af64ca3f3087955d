//! In-memory asset storage for tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use chrono::Utc;

use super::{
    AssetStorage, ListedObject, ObjectListing, PresignedUrl, StorageError, StorageResult,
};

/// Listing behaviour of the mock
#[derive(Debug, Clone)]
enum MockListing {
    Objects(Vec<String>),
    Rejected(u16),
    Unreachable(String),
}

/// A presign request received by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningCall {
    /// Bucket passed to the signer
    pub bucket: String,
    /// Key passed to the signer
    pub key: String,
    /// Expiry passed to the signer
    pub expires_in_secs: u64,
}

/// Mock storage returning canned listings and fake presigned URLs
pub struct MockAssetStorage {
    listing: MockListing,
    failing_key: Option<String>,
    list_calls: AtomicUsize,
    signing_calls: Mutex<Vec<SigningCall>>,
}

impl MockAssetStorage {
    const fn with_listing(listing: MockListing) -> Self {
        Self {
            listing,
            failing_key: None,
            list_calls: AtomicUsize::new(0),
            signing_calls: Mutex::new(Vec::new()),
        }
    }

    /// Storage whose listing returns the given keys in order
    #[must_use]
    pub fn with_objects<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::with_listing(MockListing::Objects(
            keys.into_iter().map(Into::into).collect(),
        ))
    }

    /// Storage whose listing is answered with `status_code`
    #[must_use]
    pub fn rejecting(status_code: u16) -> Self {
        Self::with_listing(MockListing::Rejected(status_code))
    }

    /// Storage whose listing request fails before any response
    #[must_use]
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::with_listing(MockListing::Unreachable(message.into()))
    }

    /// Makes presigning fail for `key`
    #[must_use]
    pub fn failing_on(mut self, key: impl Into<String>) -> Self {
        self.failing_key = Some(key.into());
        self
    }

    /// Number of listing requests received
    #[must_use]
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Presign requests received so far
    ///
    /// # Panics
    ///
    /// Panics if the call log mutex is poisoned
    #[must_use]
    pub fn signing_calls(&self) -> Vec<SigningCall> {
        self.signing_calls
            .lock()
            .expect("signing call log poisoned")
            .clone()
    }

    /// URL the mock hands out for a key
    #[must_use]
    pub fn url_for(bucket: &str, key: &str, expires_in_secs: u64) -> String {
        format!("https://{bucket}.s3.mock.local/{key}?X-Amz-Expires={expires_in_secs}")
    }
}

#[async_trait::async_trait]
impl AssetStorage for MockAssetStorage {
    async fn list_objects(&self, bucket: &str, prefix: &str) -> StorageResult<ObjectListing> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        match &self.listing {
            MockListing::Objects(keys) => Ok(ObjectListing::succeeded(
                bucket,
                prefix,
                keys.iter().map(ListedObject::new).collect(),
                false,
            )),
            MockListing::Rejected(status_code) => Ok(ObjectListing::rejected(
                bucket,
                prefix,
                *status_code,
                Some("AccessDenied".to_string()),
                Some("Access Denied".to_string()),
            )),
            MockListing::Unreachable(message) => Err(StorageError::Request(message.clone())),
        }
    }

    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in_secs: u64,
    ) -> StorageResult<PresignedUrl> {
        self.signing_calls
            .lock()
            .expect("signing call log poisoned")
            .push(SigningCall {
                bucket: bucket.to_string(),
                key: key.to_string(),
                expires_in_secs,
            });

        if self.failing_key.as_deref() == Some(key) {
            return Err(StorageError::Presign(format!("credentials expired for {key}")));
        }

        Ok(PresignedUrl {
            url: Self::url_for(bucket, key, expires_in_secs),
            expires_at: Utc::now() + Duration::from_secs(expires_in_secs),
        })
    }
}
