use std::sync::Arc;

use asset_library::{asset_storage::S3AssetStorage, handler::function_handler, types::Environment};
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // JSON logs for staging/production, plain text for development
    if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    info!("Starting asset library function in {:?} environment", environment);

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let storage = Arc::new(S3AssetStorage::new(s3_client));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let storage = Arc::clone(&storage);
        async move { function_handler(storage.as_ref(), event).await }
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))
}
