//! Insertion-ordered product storage.
//!
//! [`OrderedCatalog`] owns every live [`Product`]. Records keep the order in
//! which they were appended, can be walked from either end, and are looked up
//! by identifier with a linear scan where the first match wins.
//!
//! Each record also carries a [`RecordKey`] that stays stable for the lifetime
//! of that record. Undo uses it to find the exact record an insert created,
//! even when several records share an identifier.

pub mod errors;

pub use errors::CatalogError;

use std::fmt;

use crate::product::{Product, ProductId};

/// Stable handle for one record in an [`OrderedCatalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey(u64);

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Record {
    key: RecordKey,
    product: Product,
}

/// A record taken out of the catalog, with the position it occupied.
///
/// Passing it back to [`OrderedCatalog::restore`] puts it back where it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Removed {
    pub key: RecordKey,
    /// Index in the catalog order at the time of removal.
    pub position: usize,
    pub product: Product,
}

/// Products in insertion order.
#[derive(Debug, Clone, Default)]
pub struct OrderedCatalog {
    records: Vec<Record>,
    next_key: u64,
}

impl OrderedCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `product` to the end of the order.
    ///
    /// Never fails and never checks whether the identifier is already taken.
    pub fn insert(&mut self, product: Product) -> RecordKey {
        let key = RecordKey(self.next_key);
        self.next_key += 1;
        self.records.push(Record { key, product });
        key
    }

    /// Unlinks the first product whose identifier is `id`.
    pub fn remove_by_id(&mut self, id: ProductId) -> Result<Removed, CatalogError> {
        let position = self
            .records
            .iter()
            .position(|r| r.product.id == id)
            .ok_or(CatalogError::ProductNotFound { id })?;
        Ok(self.take(position))
    }

    /// Unlinks the record created under `key`, if it is still live.
    pub fn remove_record(&mut self, key: RecordKey) -> Option<Removed> {
        let position = self.records.iter().position(|r| r.key == key)?;
        Some(self.take(position))
    }

    /// Relinks a previously removed record at its former position.
    ///
    /// Positions past the end append, so a record always comes back even if
    /// the catalog shrank in the meantime.
    pub fn restore(&mut self, removed: Removed) {
        let position = removed.position.min(self.records.len());
        self.records.insert(
            position,
            Record {
                key: removed.key,
                product: removed.product,
            },
        );
    }

    /// First product whose identifier is `id`.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.records
            .iter()
            .map(|r| &r.product)
            .find(|p| p.id == id)
    }

    /// Whether any product carries `id`.
    pub fn contains_id(&self, id: ProductId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Key of the record at the front of the order whose identifier is `id`.
    pub fn key_of(&self, id: ProductId) -> Option<RecordKey> {
        self.records.iter().find(|r| r.product.id == id).map(|r| r.key)
    }

    /// All products in insertion order. Reverse it to walk from the tail.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Product> + ExactSizeIterator {
        self.records.iter().map(|r| &r.product)
    }

    /// Products whose category matches `category` exactly, in insertion order.
    pub fn iter_by_category<'a, 'c>(
        &'a self,
        category: &'c str,
    ) -> impl DoubleEndedIterator<Item = &'a Product> {
        self.iter().filter(move |p| p.category == category)
    }

    /// Takes `quantity` units out of stock for the first product with `id`.
    ///
    /// The purchase only goes through if it leaves strictly more than zero
    /// units; buying the last unit is refused. Returns the remaining stock.
    pub fn adjust_stock(&mut self, id: ProductId, quantity: u32) -> Result<i64, CatalogError> {
        let product = self
            .records
            .iter_mut()
            .map(|r| &mut r.product)
            .find(|p| p.id == id)
            .ok_or(CatalogError::ProductNotFound { id })?;

        match product.stock.checked_sub(i64::from(quantity)) {
            Some(remaining) if remaining > 0 => {
                product.stock = remaining;
                Ok(remaining)
            }
            _ => Err(CatalogError::InsufficientStock {
                id,
                name: product.name.clone(),
                stock: product.stock,
                requested: quantity,
            }),
        }
    }

    /// Whether the first product with `id` has any stock.
    pub fn is_available(&self, id: ProductId) -> bool {
        self.find_by_id(id).is_some_and(Product::in_stock)
    }

    /// Number of live products.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn take(&mut self, position: usize) -> Removed {
        let Record { key, product } = self.records.remove(position);
        Removed {
            key,
            position,
            product,
        }
    }
}

impl<'a> IntoIterator for &'a OrderedCatalog {
    type Item = &'a Product;
    type IntoIter = Box<dyn DoubleEndedIterator<Item = &'a Product> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
