//! Response envelope returned by every invocation

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::asset_library::{AssetLibraryError, AssetResult, ListingFailure};

/// Message returned when the listing is rejected by the object store
pub const LISTING_REJECTED_MESSAGE: &str = "Failed to retrieve asset library";

/// Message returned when listing or signing raised an error
pub const RETRIEVAL_ERROR_MESSAGE: &str = "Error occurred while retrieving assets";

/// Message returned when the bucket is not configured
pub const NOT_CONFIGURED_MESSAGE: &str = "Asset library is not configured";

/// Envelope returned to the caller
///
/// `result` holds the asset list on success, the raw listing when the store
/// rejected the listing, or an error message otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Whether the asset library was retrieved
    pub success: bool,
    /// Human readable summary
    pub message: String,
    /// Payload or error detail
    pub result: Value,
}

impl ResponseEnvelope {
    /// Successful envelope for the assets of `bucket`
    #[must_use]
    pub fn from_assets(bucket: &str, assets: &[AssetResult]) -> Self {
        Self {
            success: true,
            message: format!("Retrieved assets from bucket with name {bucket}"),
            result: json!(assets),
        }
    }

    /// Failure envelope for a pipeline error
    #[must_use]
    pub fn from_error(err: &AssetLibraryError) -> Self {
        match err {
            AssetLibraryError::ListingFailed(ListingFailure::Rejected(listing)) => {
                warn!("{err}");
                Self::failure(LISTING_REJECTED_MESSAGE, json!(listing))
            }
            AssetLibraryError::ListingFailed(ListingFailure::Request(_))
            | AssetLibraryError::SigningFailed { .. } => {
                error!("{err}");
                Self::failure(RETRIEVAL_ERROR_MESSAGE, Value::String(err.to_string()))
            }
            AssetLibraryError::ConfigurationMissing { .. } => {
                error!("Configuration error: {err}");
                Self::failure(NOT_CONFIGURED_MESSAGE, Value::String(err.to_string()))
            }
        }
    }

    fn failure(message: &str, result: Value) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            result,
        }
    }
}
