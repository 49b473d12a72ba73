//! Error types for catalog operations.

use thiserror::Error;

use crate::product::ProductId;

/// Errors raised by catalog lookups and mutations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product carries the identifier.
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The identifier that was looked up
        id: ProductId,
    },

    /// No product carries the name.
    #[error("Product not found: {name}")]
    NameNotFound {
        /// The exact name that was searched
        name: String,
    },

    /// No product belongs to the category.
    #[error("No products found in category: {category}")]
    CategoryNotFound {
        /// The category that was listed
        category: String,
    },

    /// A purchase would not leave at least one unit in stock.
    #[error("Insufficient stock for {name} (id {id}): {stock} in stock, {requested} requested")]
    InsufficientStock {
        /// Product identifier
        id: ProductId,
        /// Product name
        name: String,
        /// Units in stock when the purchase was refused
        stock: i64,
        /// Units requested
        requested: u32,
    },

    /// Another live product already uses the identifier.
    #[error("Product id already in use: {id}")]
    DuplicateProductId {
        /// The conflicting identifier
        id: ProductId,
    },

    /// The product has a field value that cannot be stored.
    #[error("Invalid product: {reason}")]
    InvalidProduct {
        /// Which field is wrong and why
        reason: String,
    },

    /// Purchase quantity was zero.
    #[error("Purchase quantity must be at least 1")]
    InvalidQuantity,
}

impl CatalogError {
    /// Check if this error indicates a product, name or category was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::ProductNotFound { .. }
                | CatalogError::NameNotFound { .. }
                | CatalogError::CategoryNotFound { .. }
        )
    }

    /// Check if this error is a refused purchase.
    pub fn is_insufficient_stock(&self) -> bool {
        matches!(self, CatalogError::InsufficientStock { .. })
    }

    /// Check if this error was caused by caller-supplied input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CatalogError::DuplicateProductId { .. }
                | CatalogError::InvalidProduct { .. }
                | CatalogError::InvalidQuantity
        )
    }

    /// Get the product identifier if this error is about a specific product.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            CatalogError::ProductNotFound { id }
            | CatalogError::InsufficientStock { id, .. }
            | CatalogError::DuplicateProductId { id } => Some(*id),
            _ => None,
        }
    }
}

impl From<CatalogError> for crate::Error {
    fn from(err: CatalogError) -> Self {
        crate::Error::Catalog(err)
    }
}
