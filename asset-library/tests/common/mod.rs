// Not every utils is used in every test, so we allow dead code
#![allow(unused_imports, dead_code)]

mod s3_utils;
pub use s3_utils::*;

/// Bucket used by tests that do not touch a real object store
pub const TEST_BUCKET: &str = "generated-images";

/// Initialize tracing for tests
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}
