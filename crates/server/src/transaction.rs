use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionError, TransactionTrait};
use service::ServiceError;
use tracing::warn;

/// Run `work` inside one database transaction: commit on `Ok`, roll back on
/// any `Err`.
pub async fn in_transaction<F, T>(db: &DatabaseConnection, work: F) -> Result<T, ServiceError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send + 'c>>
        + Send,
    T: Send,
{
    db.transaction::<_, T, ServiceError>(work).await.map_err(|e| match e {
        TransactionError::Connection(db_err) => {
            warn!(error = %db_err, "transaction could not start or commit");
            ServiceError::from(db_err)
        }
        TransactionError::Transaction(err) => {
            warn!(error = %err, "transaction rolled back");
            err
        }
    })
}
