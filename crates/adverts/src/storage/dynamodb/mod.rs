//! DynamoDB storage backend implementation.
//!
//! Adverts live in a single table keyed by the `id` string attribute.

mod client;
mod conversions;
mod error;
mod repository;
mod scan;

pub use repository::DynamoDbRepository;
