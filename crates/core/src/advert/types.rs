use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::AdvertError;
use super::requests::AdvertInput;

/// Lifecycle status of a persisted advert.
///
/// Rejected adverts are deleted rather than stored, so there is no
/// `Rejected` variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdvertStatus {
    Pending,
    Active,
}

impl AdvertStatus {
    /// Returns the stored representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvertStatus::Pending => "Pending",
            AdvertStatus::Active => "Active",
        }
    }
}

impl fmt::Display for AdvertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdvertStatus {
    type Err = AdvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(AdvertStatus::Pending),
            "active" => Ok(AdvertStatus::Active),
            _ => Err(AdvertError::UnknownStatus(s.to_string())),
        }
    }
}

/// An advert record as it is persisted in the backing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advert {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub user_name: Option<String>,
    pub status: AdvertStatus,
    pub creation_date_time: DateTime<Utc>,
    /// Location of the uploaded asset. Only set once the advert is active.
    pub file_path: Option<String>,
}

impl Advert {
    /// Creates a fresh pending advert from caller-supplied fields.
    ///
    /// The id and creation timestamp are generated here, never taken from
    /// the caller.
    pub fn new_pending(input: AdvertInput) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            price: input.price,
            user_name: input.user_name,
            status: AdvertStatus::Pending,
            creation_date_time: Utc::now(),
            file_path: None,
        }
    }

    /// Sets a specific ID for this advert (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns true if the advert has been confirmed.
    pub fn is_active(&self) -> bool {
        self.status == AdvertStatus::Active
    }
}
