//! Invocation handling

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::{
    asset_library::list_assets,
    asset_storage::AssetStorage,
    envelope::ResponseEnvelope,
    types::AssetLibraryConfig,
};

/// Builds the asset library envelope for one invocation
///
/// Never fails: every error is reported through the envelope.
pub async fn handle_invocation<S>(storage: &S, config: &AssetLibraryConfig) -> ResponseEnvelope
where
    S: AssetStorage + ?Sized,
{
    match list_assets(storage, config).await {
        Ok(assets) => ResponseEnvelope::from_assets(config.bucket_name(), &assets),
        Err(err) => ResponseEnvelope::from_error(&err),
    }
}

/// Runtime entry point
///
/// The event payload is ignored; the bucket is read from the environment on
/// every invocation.
///
/// # Errors
///
/// Does not return errors; the `Result` is required by the runtime
pub async fn function_handler<S>(
    storage: &S,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error>
where
    S: AssetStorage + ?Sized,
{
    let (_payload, context) = event.into_parts();
    info!(request_id = %context.request_id, "Retrieving asset library");

    let envelope = match AssetLibraryConfig::from_env() {
        Ok(config) => handle_invocation(storage, &config).await,
        Err(err) => ResponseEnvelope::from_error(&err),
    };

    Ok(envelope)
}
