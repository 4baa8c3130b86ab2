//! AWS SDK client setup.

use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;

use crate::config::Config;

/// Creates a DynamoDB client with the given configuration.
///
/// The client is built once at startup and shared by every request.
pub async fn create_client(config: &Config) -> Client {
    let timeouts = TimeoutConfig::builder()
        .operation_timeout(config.operation_timeout())
        .build();

    let mut sdk_config_loader = aws_config::defaults(BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .timeout_config(timeouts);

    if let Some(endpoint) = &config.aws_endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}
