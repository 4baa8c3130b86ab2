//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `adverts_core::storage`.
//! Transport failures end up in the catch-all arm of each mapper, so they
//! surface as `StorageUnavailable` too.

use std::fmt::Debug;

use adverts_core::storage::RepositoryError;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;

fn unavailable(message: impl Into<String>) -> RepositoryError {
    RepositoryError::StorageUnavailable(message.into())
}

/// Map a DescribeTable SDK error to RepositoryError.
pub fn map_describe_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DescribeTableError, R>,
) -> RepositoryError {
    match err.into_service_error() {
        DescribeTableError::ResourceNotFoundException(_) => unavailable("Table not found"),
        DescribeTableError::InternalServerError(_) => {
            unavailable("DynamoDB internal server error")
        }
        err => unavailable(format!("DescribeTable failed: {:?}", err)),
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => unavailable("Table not found"),
        GetItemError::ProvisionedThroughputExceededException(_) => {
            unavailable("Throughput exceeded, please retry")
        }
        GetItemError::RequestLimitExceeded(_) => {
            unavailable("Request limit exceeded, please retry")
        }
        GetItemError::InternalServerError(_) => unavailable("DynamoDB internal server error"),
        err => unavailable(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
///
/// A failed condition means the advert vanished before the write, which is
/// reported as `NotFound`.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    id: impl Into<String>,
) -> RepositoryError {
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => RepositoryError::advert_not_found(id),
        PutItemError::ResourceNotFoundException(_) => unavailable("Table not found"),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            unavailable("Throughput exceeded, please retry")
        }
        PutItemError::RequestLimitExceeded(_) => {
            unavailable("Request limit exceeded, please retry")
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            unavailable("Item collection size limit exceeded")
        }
        PutItemError::TransactionConflictException(_) => {
            unavailable("Transaction conflict, please retry")
        }
        PutItemError::InternalServerError(_) => unavailable("DynamoDB internal server error"),
        err => unavailable(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    id: impl Into<String>,
) -> RepositoryError {
    match err.into_service_error() {
        DeleteItemError::ConditionalCheckFailedException(_) => {
            RepositoryError::advert_not_found(id)
        }
        DeleteItemError::ResourceNotFoundException(_) => unavailable("Table not found"),
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            unavailable("Throughput exceeded, please retry")
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            unavailable("Request limit exceeded, please retry")
        }
        DeleteItemError::TransactionConflictException(_) => {
            unavailable("Transaction conflict, please retry")
        }
        DeleteItemError::InternalServerError(_) => unavailable("DynamoDB internal server error"),
        err => unavailable(format!("DeleteItem failed: {:?}", err)),
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => unavailable("Table not found"),
        ScanError::ProvisionedThroughputExceededException(_) => {
            unavailable("Throughput exceeded, please retry")
        }
        ScanError::RequestLimitExceeded(_) => unavailable("Request limit exceeded, please retry"),
        ScanError::InternalServerError(_) => unavailable("DynamoDB internal server error"),
        err => unavailable(format!("Scan failed: {:?}", err)),
    }
}
