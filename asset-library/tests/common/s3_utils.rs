use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::{config::retry::RetryConfig, primitives::ByteStream, Client as S3Client};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};
use uuid::Uuid;

/// Test configuration for LocalStack
pub const LOCALSTACK_ENDPOINT: &str = "http://localhost:4566";
pub const TEST_REGION: &str = "us-east-1";

/// Endpoint nothing listens on
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1";

fn test_credentials() -> Credentials {
    Credentials::from_keys(
        "test", // AWS_ACCESS_KEY_ID
        "test", // AWS_SECRET_ACCESS_KEY
        None,   // no session token
    )
}

/// S3 client with static credentials that never leaves the process when presigning
pub fn offline_s3_client() -> Arc<S3Client> {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(TEST_REGION))
        .credentials_provider(test_credentials())
        .build();

    Arc::new(S3Client::from_conf(config))
}

/// S3 client with static credentials, path-style addressing and no retries,
/// pointed at `endpoint`
pub fn s3_client_for_endpoint(endpoint: &str) -> Arc<S3Client> {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(TEST_REGION))
        .credentials_provider(test_credentials())
        .endpoint_url(endpoint)
        .force_path_style(true)
        .retry_config(RetryConfig::disabled())
        .build();

    Arc::new(S3Client::from_conf(config))
}

/// Serves every request with the same canned response and returns the endpoint URL
pub async fn spawn_stub_endpoint(status: u16, reason: &str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub endpoint");
    let address = listener.local_addr().expect("Stub endpoint has no address");
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\n\
         Content-Type: application/xml\r\n\
         Content-Length: {}\r\n\
         x-amz-request-id: 4442587FB7D0A2F9\r\n\
         Connection: close\r\n\r\n{body}",
        body.len()
    );

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let response = response.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0_u8; 1024];
                // Requests are bodyless GETs; stop at the end of the headers
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{address}")
}

/// S3 client pointed at LocalStack
pub async fn localstack_s3_client() -> Arc<S3Client> {
    let config = aws_config::defaults(BehaviorVersion::latest())
        .endpoint_url(LOCALSTACK_ENDPOINT)
        .region(Region::new(TEST_REGION))
        .credentials_provider(test_credentials())
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&config)
        .force_path_style(true)
        .build();

    Arc::new(S3Client::from_conf(s3_config))
}

/// Creates a uniquely named bucket holding `keys`
pub async fn create_bucket_with_objects(client: &S3Client, keys: &[&str]) -> String {
    let bucket = format!("test-assets-{}", Uuid::new_v4());

    client
        .create_bucket()
        .bucket(&bucket)
        .send()
        .await
        .expect("Failed to create bucket");

    for key in keys {
        client
            .put_object()
            .bucket(&bucket)
            .key(*key)
            .body(ByteStream::from_static(b"image"))
            .send()
            .await
            .expect("Failed to put object");
    }

    bucket
}
