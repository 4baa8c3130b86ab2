use std::{env, time::Duration};

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
pub struct Config {
    /// DynamoDB table holding advert records (default: "Adverts")
    pub table_name: String,
    /// AWS region (default: "ap-southeast-1")
    pub aws_region: String,
    /// Custom endpoint URL, e.g. DynamoDB Local (default: none)
    pub aws_endpoint_url: Option<String>,
    /// Per-operation timeout for DynamoDB calls in seconds (default: 5)
    pub operation_timeout_seconds: u64,
    /// Maximum items per scan page (default: let DynamoDB decide)
    pub scan_page_size: Option<i32>,
}

#[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ADVERTS_TABLE_NAME` - Table name (default: "Adverts")
    /// - `AWS_REGION` - AWS region (default: "ap-southeast-1")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (optional)
    /// - `DYNAMODB_OPERATION_TIMEOUT_SECS` - Operation timeout (default: 5)
    /// - `DYNAMODB_SCAN_PAGE_SIZE` - Scan page size (optional)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("ADVERTS_TABLE_NAME").unwrap_or_else(|| "Adverts".to_string()),
            aws_region: lookup("AWS_REGION").unwrap_or_else(|| "ap-southeast-1".to_string()),
            aws_endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|url| !url.trim().is_empty()),
            operation_timeout_seconds: lookup("DYNAMODB_OPERATION_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            scan_page_size: lookup("DYNAMODB_SCAN_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|size: &i32| *size > 0),
        }
    }

    /// Get the operation timeout as a Duration.
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_seconds)
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.aws_endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.aws_region),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
