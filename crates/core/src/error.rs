//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable by the caller. Operations validate before they
/// mutate, so receiving one of these means no state was changed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A product with this identifier is already managed.
    #[error("product {0} already exists")]
    DuplicateId(ProductId),

    /// No product with this identifier is managed.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// A sale asked for more units than are in stock.
    #[error("insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// A restock would overflow the stock counter.
    #[error("stock overflow for {product_id}: requested {requested}, available {available}")]
    StockOverflow {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate_id(id: &ProductId) -> Self {
        Self::DuplicateId(id.clone())
    }

    pub fn not_found(id: &ProductId) -> Self {
        Self::NotFound(id.clone())
    }

    pub fn insufficient_stock(id: &ProductId, requested: u32, available: u32) -> Self {
        Self::InsufficientStock {
            product_id: id.clone(),
            requested,
            available,
        }
    }

    pub fn stock_overflow(id: &ProductId, requested: u32, available: u32) -> Self {
        Self::StockOverflow {
            product_id: id.clone(),
            requested,
            available,
        }
    }
}
