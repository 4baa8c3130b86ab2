//! Core for the adverts service.
//!
//! Holds the advert domain types, the pure lifecycle rules shared by every
//! storage backend, and the [`storage::AdvertRepository`] contract.

pub mod advert;
pub mod storage;
