use thiserror::Error;

use crate::domain::ProductId;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument { field: &'static str, reason: String },
}

impl ProductError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProductError::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ProductError::InvalidArgument { field, .. } => field,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),
    #[error(transparent)]
    InvalidProduct(#[from] ProductError),
    #[error("Inventory service unavailable: {0}")]
    ServiceUnavailable(String),
}
