mod error;
mod operations;
mod requests;
mod types;

pub use error::AdvertError;
pub use operations::{
    apply_confirmation, is_table_active, validate_advert_input, validate_confirmation,
    ConfirmOutcome,
};
pub use requests::{AdvertInput, ConfirmAdvert, ConfirmStatus};
pub use types::{Advert, AdvertStatus};
