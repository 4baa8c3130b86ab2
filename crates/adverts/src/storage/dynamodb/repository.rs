//! DynamoDB repository implementation.
//!
//! Implements `AdvertRepository` from `adverts_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use adverts_core::advert::{
    apply_confirmation, is_table_active, Advert, AdvertInput, ConfirmAdvert, ConfirmOutcome,
};
use adverts_core::storage::{AdvertRepository, RepositoryError, Result};

use super::client::create_client;
use super::conversions::{advert_key, advert_to_item, item_to_advert};
use super::error::{
    map_delete_item_error, map_describe_table_error, map_get_item_error, map_put_item_error,
    map_scan_error,
};
use super::scan::{collect_adverts, ScanPage};
use crate::config::Config;

/// DynamoDB-based advert repository.
///
/// Holds one long-lived client; each operation only builds its own request.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    scan_page_size: Option<i32>,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            scan_page_size: None,
        }
    }

    /// Limits how many items each scan page may hold.
    pub fn with_scan_page_size(mut self, scan_page_size: Option<i32>) -> Self {
        self.scan_page_size = scan_page_size;
        self
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain.
    pub async fn from_config(config: &Config) -> Self {
        let client = create_client(config).await;
        Self::new(client, config.table_name.clone()).with_scan_page_size(config.scan_page_size)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Fetches the table status reported by DescribeTable.
    async fn table_status(&self) -> Result<Option<String>> {
        let output = self
            .client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_describe_table_error)?;

        Ok(output
            .table()
            .and_then(|table| table.table_status())
            .map(|status| status.as_str().to_string()))
    }

    async fn load_advert(&self, id: &str) -> Result<Option<Advert>> {
        let (key_name, key_value) = advert_key(id);
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_advert(&item)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl AdvertRepository for DynamoDbRepository {
    async fn add_advert(&self, input: &AdvertInput) -> Result<String> {
        let advert = Advert::new_pending(input.clone());

        // Fails fast with StorageUnavailable when the table is missing.
        self.table_status().await?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(advert_to_item(&advert)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, advert.id.clone()))?;

        Ok(advert.id)
    }

    async fn confirm_advert(&self, confirmation: &ConfirmAdvert) -> Result<()> {
        let record = self
            .load_advert(&confirmation.id)
            .await?
            .ok_or_else(|| RepositoryError::advert_not_found(&confirmation.id))?;

        match apply_confirmation(record, confirmation) {
            ConfirmOutcome::Activate(advert) => {
                self.client
                    .put_item()
                    .table_name(&self.table_name)
                    .set_item(Some(advert_to_item(&advert)))
                    .condition_expression("attribute_exists(id)")
                    .send()
                    .await
                    .map_err(|e| map_put_item_error(e, advert.id.clone()))?;

                tracing::debug!(advert_id = %advert.id, "Activated advert");
            }
            ConfirmOutcome::Remove => {
                let (key_name, key_value) = advert_key(&confirmation.id);
                self.client
                    .delete_item()
                    .table_name(&self.table_name)
                    .key(key_name, key_value)
                    .condition_expression("attribute_exists(id)")
                    .send()
                    .await
                    .map_err(|e| map_delete_item_error(e, confirmation.id.clone()))?;

                tracing::debug!(advert_id = %confirmation.id, "Removed rejected advert");
            }
            ConfirmOutcome::Unchanged => {
                tracing::debug!(advert_id = %confirmation.id, "Advert already active");
            }
        }

        Ok(())
    }

    async fn get_all_adverts(&self) -> Result<Vec<Advert>> {
        let (adverts, pages) = collect_adverts(|start_key| async move {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_limit(self.scan_page_size)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            Ok::<_, RepositoryError>(ScanPage::new(output.items, output.last_evaluated_key))
        })
        .await?;

        tracing::debug!(count = adverts.len(), pages, "Scanned adverts table");

        Ok(adverts)
    }

    async fn get_advert(&self, id: &str) -> Result<Advert> {
        self.load_advert(id)
            .await?
            .ok_or_else(|| RepositoryError::advert_not_found(id))
    }

    async fn check_health(&self) -> bool {
        tracing::debug!(table = %self.table_name, "Health checking...");

        match self.table_status().await {
            Ok(Some(status)) if is_table_active(&status) => true,
            Ok(status) => {
                tracing::warn!(table = %self.table_name, ?status, "Table is not active");
                false
            }
            Err(e) => {
                tracing::warn!(table = %self.table_name, error = %e, "Health check failed");
                false
            }
        }
    }
}
