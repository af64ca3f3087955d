//! Listing of original assets and signing of their download URLs

mod error;

use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    asset_storage::{AssetStorage, PresignedUrl},
    types::AssetLibraryConfig,
};

pub use error::{AssetLibraryError, AssetLibraryResult, ListingFailure};

/// Key prefix of the original assets
pub const ORIGINALS_PREFIX: &str = "originals/";

/// Key prefix of the thumbnails
pub const THUMBNAILS_PREFIX: &str = "thumbs/";

/// Validity of every presigned URL (one hour)
pub const PRESIGNED_URL_EXPIRY_SECS: u64 = 60 * 60;

/// Signed download links for one original and its thumbnail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetResult {
    /// Presigned URL of the original
    pub original: String,
    /// Presigned URL of the thumbnail
    pub thumbnail: String,
    /// Bucket holding the thumbnail
    pub s3_object_bucket: String,
    /// Key of the thumbnail
    pub s3_object_key: String,
}

/// Maps an original's key to its thumbnail's key
///
/// Only the first `originals/` segment is replaced. The thumbnail is not
/// checked for existence.
#[must_use]
pub fn thumbnail_key(original_key: &str) -> String {
    original_key.replacen(ORIGINALS_PREFIX, THUMBNAILS_PREFIX, 1)
}

/// Lists the originals of the configured bucket and signs a URL for each
/// original and its thumbnail
///
/// Items are signed concurrently and returned in listing order. A single
/// signing failure discards every result.
///
/// # Errors
///
/// - `AssetLibraryError::ListingFailed` if the listing is rejected or cannot be sent
/// - `AssetLibraryError::SigningFailed` if any URL cannot be signed
#[instrument(skip(storage, config), fields(bucket = config.bucket_name()))]
pub async fn list_assets<S>(
    storage: &S,
    config: &AssetLibraryConfig,
) -> AssetLibraryResult<Vec<AssetResult>>
where
    S: AssetStorage + ?Sized,
{
    let bucket = config.bucket_name();

    let listing = storage
        .list_objects(bucket, ORIGINALS_PREFIX)
        .await
        .map_err(ListingFailure::Request)?;

    if !listing.is_success() {
        warn!("Listing rejected with status {}", listing.status_code);
        return Err(ListingFailure::Rejected(Box::new(listing)).into());
    }

    info!("Listed {} originals", listing.objects.len());

    try_join_all(
        listing
            .objects
            .iter()
            .map(|object| sign_asset(storage, bucket, &object.key)),
    )
    .await
}

async fn sign_asset<S>(
    storage: &S,
    bucket: &str,
    original_key: &str,
) -> AssetLibraryResult<AssetResult>
where
    S: AssetStorage + ?Sized,
{
    let thumbnail_key = thumbnail_key(original_key);

    let (original, thumbnail) = futures::try_join!(
        presign(storage, bucket, original_key),
        presign(storage, bucket, &thumbnail_key),
    )?;

    Ok(AssetResult {
        original: original.url,
        thumbnail: thumbnail.url,
        s3_object_bucket: bucket.to_string(),
        s3_object_key: thumbnail_key,
    })
}

async fn presign<S>(storage: &S, bucket: &str, key: &str) -> AssetLibraryResult<PresignedUrl>
where
    S: AssetStorage + ?Sized,
{
    debug!("Signing {}", key);

    storage
        .presign_get(bucket, key, PRESIGNED_URL_EXPIRY_SECS)
        .await
        .map_err(|source| AssetLibraryError::SigningFailed {
            key: key.to_string(),
            source,
        })
}
