//! Asset library configuration

use std::env;

use crate::asset_library::{AssetLibraryError, AssetLibraryResult};

/// Environment variable naming the bucket that stores the assets
pub const ASSETS_BUCKET_VAR: &str = "AssetsBucket";

/// Configuration passed into the listing pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLibraryConfig {
    bucket_name: String,
}

impl AssetLibraryConfig {
    /// Creates a configuration for the given bucket
    ///
    /// # Errors
    ///
    /// Returns `AssetLibraryError::ConfigurationMissing` if the bucket name is blank
    pub fn new(bucket_name: impl Into<String>) -> AssetLibraryResult<Self> {
        let bucket_name = bucket_name.into();
        if bucket_name.trim().is_empty() {
            return Err(AssetLibraryError::ConfigurationMissing {
                variable: ASSETS_BUCKET_VAR,
            });
        }

        Ok(Self { bucket_name })
    }

    /// Reads the configuration from the `AssetsBucket` environment variable
    ///
    /// # Errors
    ///
    /// Returns `AssetLibraryError::ConfigurationMissing` if the variable is unset or blank
    pub fn from_env() -> AssetLibraryResult<Self> {
        let bucket_name =
            env::var(ASSETS_BUCKET_VAR).map_err(|_| AssetLibraryError::ConfigurationMissing {
                variable: ASSETS_BUCKET_VAR,
            })?;

        Self::new(bucket_name)
    }

    /// Name of the bucket holding the assets
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }
}
