pub mod adverts;
pub mod error;
pub mod health;

pub use error::AppError;
