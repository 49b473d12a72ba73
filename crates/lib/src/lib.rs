//!
//! Prodcat: an in-memory product catalog with name search, rating ranking and undo.
//!
//! ## Core Concepts
//!
//! * **Products (`product::Product`)**: Caller-identified records with a name, price, category, stock, description and rating.
//! * **OrderedCatalog (`catalog::OrderedCatalog`)**: Owns the products in insertion order and supports lookup, removal and stock changes by identifier.
//! * **PrefixIndex (`index::PrefixIndex`)**: A character trie mapping each exact product name to the identifiers carrying it.
//! * **UndoLog (`undo::UndoLog`)**: A stack of tagged insert/delete entries that can each be reversed once.
//! * **RatingRanker (`ranker::RatingRanker`)**: A per-query max-heap yielding products from highest to lowest rating.
//! * **CatalogService (`service::CatalogService`)**: The façade composing all of the above with user accounts, the login session and file persistence.
//! * **Storage (`storage`)**: The seven-lines-per-product text file format.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod index;
pub mod product;
pub mod ranker;
pub mod service;
pub mod storage;
pub mod undo;
pub mod user;

pub use config::{CatalogConfig, DuplicateIdPolicy};
pub use product::{Product, ProductId};
pub use service::{CatalogService, UndoOutcome};

/// Result type used throughout the Prodcat library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Prodcat library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured catalog errors from the catalog module
    #[error(transparent)]
    Catalog(catalog::CatalogError),

    /// Structured undo errors from the undo module
    #[error(transparent)]
    Undo(undo::UndoError),

    /// Structured user errors from the user module
    #[error(transparent)]
    User(user::UserError),

    /// Structured storage errors from the storage module
    #[error(transparent)]
    Storage(storage::StorageError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Catalog(_) => "catalog",
            Error::Undo(_) => "undo",
            Error::User(_) => "user",
            Error::Storage(_) => "storage",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a product, name, category or user was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Catalog(catalog_err) => catalog_err.is_not_found(),
            Error::User(user_err) => user_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a refused purchase.
    pub fn is_insufficient_stock(&self) -> bool {
        matches!(self, Error::Catalog(catalog_err) if catalog_err.is_insufficient_stock())
    }

    /// Check if this error means there was nothing to undo.
    pub fn is_empty_history(&self) -> bool {
        matches!(self, Error::Undo(undo_err) if undo_err.is_empty_history())
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, Error::User(user_err) if user_err.is_authentication_error())
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Storage(storage_err) => storage_err.is_io_error(),
            _ => false,
        }
    }
}
