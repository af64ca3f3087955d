//! Error types for the asset library pipeline

use thiserror::Error;

use crate::asset_storage::{ObjectListing, StorageError};

/// Result type for asset library operations
pub type AssetLibraryResult<T> = Result<T, AssetLibraryError>;

/// Reasons an invocation could not produce the asset library
#[derive(Error, Debug)]
pub enum AssetLibraryError {
    /// The bucket configuration is absent or blank
    #[error("{variable} environment variable not set")]
    ConfigurationMissing {
        /// Name of the missing variable
        variable: &'static str,
    },

    /// The originals could not be listed
    #[error(transparent)]
    ListingFailed(#[from] ListingFailure),

    /// A presigned URL could not be generated
    #[error("Failed to sign URL for {key}: {source}")]
    SigningFailed {
        /// Key whose URL could not be signed
        key: String,
        /// Underlying storage error
        #[source]
        source: StorageError,
    },
}

/// Ways the listing request can fail
#[derive(Error, Debug)]
pub enum ListingFailure {
    /// The object store answered with a non-200 status
    #[error(
        "Listing of {} under {} returned status {}",
        .0.bucket,
        .0.prefix,
        .0.status_code
    )]
    Rejected(Box<ObjectListing>),

    /// The listing request itself failed
    #[error("Failed to list assets: {0}")]
    Request(#[from] StorageError),
}
