//! Paginated scan accumulation.
//!
//! Drives page fetches through a closure so the resume logic can be tested
//! without DynamoDB access.

use std::collections::HashMap;
use std::future::Future;

use adverts_core::advert::Advert;
use adverts_core::storage::Result;
use aws_sdk_dynamodb::types::AttributeValue;

use super::conversions::item_to_advert;

/// A DynamoDB item or key.
pub type Item = HashMap<String, AttributeValue>;

/// One page returned by a Scan request.
#[derive(Debug, Default)]
pub struct ScanPage {
    pub items: Vec<Item>,
    pub last_evaluated_key: Option<Item>,
}

impl ScanPage {
    pub fn new(items: Option<Vec<Item>>, last_evaluated_key: Option<Item>) -> Self {
        Self {
            items: items.unwrap_or_default(),
            last_evaluated_key,
        }
    }
}

/// Fetches pages until the store stops returning a `LastEvaluatedKey`.
///
/// `fetch_page` receives the key to resume from (`None` for the first page).
/// Returns the decoded adverts and the number of pages read. Stops at the
/// first item that fails to decode.
pub async fn collect_adverts<F, Fut>(mut fetch_page: F) -> Result<(Vec<Advert>, usize)>
where
    F: FnMut(Option<Item>) -> Fut,
    Fut: Future<Output = Result<ScanPage>>,
{
    let mut adverts = Vec::new();
    let mut start_key = None;
    let mut pages = 0usize;

    loop {
        let page = fetch_page(start_key.take()).await?;
        pages += 1;

        for item in &page.items {
            adverts.push(item_to_advert(item)?);
        }

        match page.last_evaluated_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => break,
        }
    }

    Ok((adverts, pages))
}
