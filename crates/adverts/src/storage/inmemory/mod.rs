//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of `AdvertRepository`
//! that stores all adverts in a HashMap wrapped in `Arc<RwLock<_>>`. This is
//! useful for testing and local development where persistence is not
//! required.
//!
//! # Example
//!
//! ```rust,ignore
//! use adverts::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
