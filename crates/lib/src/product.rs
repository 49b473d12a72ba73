//! Product record type.

use serde::{Deserialize, Serialize};

/// Caller-supplied product identifier.
///
/// Identifiers are not generated by the catalog and are not required to be
/// unique by the underlying [`OrderedCatalog`](crate::catalog::OrderedCatalog).
pub type ProductId = i64;

/// A single product in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price, expected to be non-negative.
    pub price: f64,
    pub category: String,
    /// Units in stock.
    pub stock: i64,
    pub description: String,
    /// Rating, nominally 0 to 5 but never range-checked.
    pub rating: f64,
}

impl Product {
    /// Create a product from its field values.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        stock: i64,
        description: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
            stock,
            description: description.into(),
            rating,
        }
    }

    /// Whether at least one unit is in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check that the product can be stored and reloaded without loss.
    ///
    /// Text fields must be non-empty and contain no line breaks, and the price
    /// must be a finite, non-negative number.
    pub(crate) fn validate(&self) -> std::result::Result<(), String> {
        for (field, value) in [
            ("name", &self.name),
            ("category", &self.category),
            ("description", &self.description),
        ] {
            if value.is_empty() {
                return Err(format!("{field} must not be empty"));
            }
            if value.contains(['\n', '\r']) {
                return Err(format!("{field} must be a single line"));
            }
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!(
                "price must be a non-negative number, got {}",
                self.price
            ));
        }
        if !self.rating.is_finite() {
            return Err(format!("rating must be a number, got {}", self.rating));
        }
        Ok(())
    }
}
