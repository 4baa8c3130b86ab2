//! Storage backend implementations.
//!
//! This module provides concrete implementations of
//! `adverts_core::storage::AdvertRepository`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always compiled so tests and local runs work
//! without AWS access.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p adverts
//! ```
//!
//! Build without the AWS SDK:
//! ```bash
//! cargo build -p adverts --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
pub use inmemory::InMemoryRepository;
