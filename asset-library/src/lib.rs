//! Asset library function
//!
//! Lists the original assets stored in a bucket and returns presigned download
//! URLs for each original and its thumbnail.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Listing and signing pipeline
pub mod asset_library;

/// Object storage access
pub mod asset_storage;

/// Response envelope returned to the caller
pub mod envelope;

/// Function invocation entry points
pub mod handler;

/// Configuration and deployment environment
pub mod types;
