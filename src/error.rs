use thiserror::Error;

/// Any failure coming out of the document store.
///
/// Handlers never turn these into responses: they are logged and the
/// request finishes with its usual redirect or render.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid document id: {0:?}")]
    InvalidId(String),
    #[error("Corrupt document {id}: {reason}")]
    Corrupt { id: String, reason: String },
}
