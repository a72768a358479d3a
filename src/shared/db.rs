use std::time::Duration;

use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr, SqlErr,
};
use tracing::warn;

/// What kind of storage failure a `DbErr` represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbFailure {
    UniqueViolation(String),
    ForeignKeyViolation(String),
    Other(String),
}

/// Integrity violations are recognised through the driver error codes first;
/// the message match covers errors that reach us without a driver code
/// (mock connections, wrapped custom errors).
pub fn classify_db_error(err: &DbErr) -> DbFailure {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => return DbFailure::UniqueViolation(msg),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            return DbFailure::ForeignKeyViolation(msg)
        }
        _ => {}
    }

    let message = err.to_string();
    let lowered = message.to_lowercase();
    if lowered.contains("23505")
        || lowered.contains("duplicate key")
        || lowered.contains("unique constraint")
    {
        DbFailure::UniqueViolation(message)
    } else if lowered.contains("23503") || lowered.contains("foreign key constraint") {
        DbFailure::ForeignKeyViolation(message)
    } else {
        DbFailure::Other(message)
    }
}

/// Rolls back after a failed write. A failed rollback is logged, not returned,
/// so callers keep reporting the write error.
pub async fn rollback(txn: DatabaseTransaction) {
    if let Err(e) = txn.rollback().await {
        warn!(error = %e, "Transaction rollback failed");
    }
}

pub async fn connect(url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    Database::connect(opt).await
}
