use serde::{Deserialize, Serialize};

/// Caller-supplied fields for a new advert.
///
/// Carries no id, status or timestamp; those are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl AdvertInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            price: 0.0,
            user_name: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }
}

/// Outcome requested by whoever reviewed the advert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmStatus {
    #[serde(alias = "active")]
    Active,
    #[serde(alias = "rejected")]
    Rejected,
}

/// Confirmation of a pending advert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmAdvert {
    pub id: String,
    pub status: ConfirmStatus,
    #[serde(default)]
    pub file_path: Option<String>,
}

impl ConfirmAdvert {
    /// Accepts the advert, attaching the uploaded asset path.
    pub fn accept(id: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: ConfirmStatus::Active,
            file_path: Some(file_path.into()),
        }
    }

    /// Rejects the advert.
    pub fn reject(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: ConfirmStatus::Rejected,
            file_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advert_input_defaults() {
        let input: AdvertInput = serde_json::from_str(r#"{"title": "Car"}"#).unwrap();
        assert_eq!(input, AdvertInput::new("Car"));
    }

    #[test]
    fn test_advert_input_full_payload() {
        let json = r#"{"title": "Car", "description": "Red", "price": 99.5, "userName": "bo"}"#;
        let input: AdvertInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.description.as_deref(), Some("Red"));
        assert_eq!(input.price, 99.5);
        assert_eq!(input.user_name.as_deref(), Some("bo"));
    }

    #[test]
    fn test_confirm_advert_deserialize() {
        let json = r#"{"id": "X", "status": "Active", "filePath": "/files/x.jpg"}"#;
        let confirm: ConfirmAdvert = serde_json::from_str(json).unwrap();
        assert_eq!(confirm, ConfirmAdvert::accept("X", "/files/x.jpg"));

        let json = r#"{"id": "Y", "status": "rejected"}"#;
        let confirm: ConfirmAdvert = serde_json::from_str(json).unwrap();
        assert_eq!(confirm, ConfirmAdvert::reject("Y"));
    }

    #[test]
    fn test_confirm_advert_rejects_unknown_status() {
        let json = r#"{"id": "X", "status": "Pending"}"#;
        assert!(serde_json::from_str::<ConfirmAdvert>(json).is_err());
    }
}
