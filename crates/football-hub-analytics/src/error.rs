use thiserror::Error;

/// Errors produced while building a report
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The store was unreachable or rejected a query
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
