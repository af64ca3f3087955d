mod config;
mod environment;

pub use config::{AssetLibraryConfig, ASSETS_BUCKET_VAR};
pub use environment::Environment;
