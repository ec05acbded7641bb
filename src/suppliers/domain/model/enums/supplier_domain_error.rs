use thiserror::Error;

use crate::suppliers::domain::model::validation::validation_result::ValidationResult;

#[derive(Debug, Error)]
pub enum SupplierDomainError {
    #[error("supplier id is invalid")]
    InvalidSupplierId,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("supplier failed validation with {} error(s)", .0.len())]
    ValidationFailed(Vec<ValidationResult>),

    #[error("supplier already exists")]
    DuplicateSupplierId,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
