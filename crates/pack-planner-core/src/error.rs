use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Catalog has no pack sizes")]
    EmptyCatalog,
    #[error("Invalid pack size: {0} (must be greater than zero)")]
    InvalidPackSize(u32),
    #[error("Pack size {0} already exists in the catalog")]
    DuplicatePackSize(u32),
    #[error("Requested {requested} items exceeds the configured limit of {max}")]
    RequestTooLarge { requested: i64, max: u64 },
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Order not found: {0}")]
    OrderNotFound(Uuid),
    #[error("Pack size not found: {0}")]
    PackSizeNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
