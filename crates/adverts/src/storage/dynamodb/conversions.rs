//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! adverts. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use adverts_core::advert::{Advert, AdvertError, AdvertStatus};
use adverts_core::storage::RepositoryError;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};

/// Partition key attribute of the adverts table.
pub const ID_ATTRIBUTE: &str = "id";

/// Build the primary key for an advert.
pub fn advert_key(id: &str) -> (String, AttributeValue) {
    (ID_ATTRIBUTE.to_string(), AttributeValue::S(id.to_string()))
}

/// Convert an Advert to a DynamoDB item.
pub fn advert_to_item(advert: &Advert) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        ID_ATTRIBUTE.to_string(),
        AttributeValue::S(advert.id.clone()),
    );
    item.insert("title".to_string(), AttributeValue::S(advert.title.clone()));
    if let Some(desc) = &advert.description {
        item.insert("description".to_string(), AttributeValue::S(desc.clone()));
    }
    item.insert(
        "price".to_string(),
        AttributeValue::N(advert.price.to_string()),
    );
    if let Some(user_name) = &advert.user_name {
        item.insert("userName".to_string(), AttributeValue::S(user_name.clone()));
    }
    item.insert(
        "status".to_string(),
        AttributeValue::S(advert.status.as_str().to_string()),
    );
    item.insert(
        "creationDateTime".to_string(),
        AttributeValue::S(advert.creation_date_time.to_rfc3339()),
    );
    if let Some(path) = &advert.file_path {
        item.insert("filePath".to_string(), AttributeValue::S(path.clone()));
    }

    item
}

/// Convert a DynamoDB item to an Advert.
pub fn item_to_advert(item: &HashMap<String, AttributeValue>) -> Result<Advert, RepositoryError> {
    Ok(Advert {
        id: get_string(item, ID_ATTRIBUTE)?,
        title: get_string(item, "title")?,
        description: get_optional_string(item, "description"),
        price: get_optional_number(item, "price")?.unwrap_or_default(),
        user_name: get_optional_string(item, "userName"),
        status: parse_status(&get_string(item, "status")?)?,
        creation_date_time: get_datetime(item, "creationDateTime")?,
        file_path: get_optional_string(item, "filePath"),
    })
}

/// Parse AdvertStatus from its stored string.
pub fn parse_status(s: &str) -> Result<AdvertStatus, RepositoryError> {
    s.parse()
        .map_err(|e: AdvertError| RepositoryError::InvalidData(e.to_string()))
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get an optional numeric attribute.
fn get_optional_number(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<f64>, RepositoryError> {
    let Some(value) = item.get(key) else {
        return Ok(None);
    };
    let raw = value
        .as_n()
        .map_err(|_| RepositoryError::InvalidData(format!("Field {} is not a number", key)))?;
    raw.parse::<f64>()
        .map(Some)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}
