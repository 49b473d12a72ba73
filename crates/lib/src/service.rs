//! The catalog façade.
//!
//! [`CatalogService`] owns the ordered catalog, the name index, the undo
//! history, the user directory and the login session. Every mutation goes
//! through it so that the catalog and the index never disagree, and every
//! successful insert or delete can be undone.

use std::path::Path;

use crate::{
    Result,
    catalog::{CatalogError, OrderedCatalog},
    config::{CatalogConfig, DuplicateIdPolicy},
    index::PrefixIndex,
    product::{Product, ProductId},
    ranker::RatingRanker,
    storage,
    undo::{UndoEntry, UndoError, UndoLog},
    user::{Session, UserDirectory},
};

/// What [`CatalogService::undo_last_operation`] reversed.
#[derive(Clone, Debug, PartialEq)]
pub enum UndoOutcome {
    /// An inserted product was removed again.
    InsertionReverted(Product),
    /// A deleted product was put back in its former position.
    DeletionReverted(Product),
}

impl UndoOutcome {
    pub fn product(&self) -> &Product {
        match self {
            UndoOutcome::InsertionReverted(p) | UndoOutcome::DeletionReverted(p) => p,
        }
    }
}

/// In-memory product catalog with name search, rating ranking and undo.
#[derive(Debug)]
pub struct CatalogService {
    config: CatalogConfig,
    catalog: OrderedCatalog,
    index: PrefixIndex,
    history: UndoLog,
    users: UserDirectory,
    session: Session,
}

impl CatalogService {
    /// Creates an empty service. Nothing is read from disk.
    pub fn new(config: CatalogConfig) -> Self {
        let users = if config.seed_builtin_users {
            UserDirectory::with_builtin_users()
        } else {
            UserDirectory::new()
        };
        Self {
            history: UndoLog::with_depth(config.undo_depth),
            config,
            catalog: OrderedCatalog::new(),
            index: PrefixIndex::new(),
            users,
            session: Session::new(),
        }
    }

    /// Creates a service and loads the configured data file.
    pub fn open(config: CatalogConfig) -> Result<Self> {
        let mut service = Self::new(config);
        let path = service.config.data_file.clone();
        service.load_from_file(path)?;
        Ok(service)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    // === Persistence ===

    /// Appends every complete record in `path` to the catalog.
    ///
    /// Loaded products are indexed but not recorded in the undo history.
    /// Records that would be refused by [`Self::insert_product`] are skipped,
    /// as are records reusing a live identifier when duplicates are rejected.
    /// Returns the number of products added.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let mut added = 0;
        for product in storage::load_from_file(path)? {
            if let Err(reason) = product.validate() {
                tracing::warn!(id = product.id, name = %product.name, %reason, "Skipping invalid product in file");
                continue;
            }
            if self.config.duplicate_ids == DuplicateIdPolicy::Reject
                && self.catalog.contains_id(product.id)
            {
                tracing::warn!(id = product.id, name = %product.name, "Skipping duplicate product id in file");
                continue;
            }
            self.index.insert(&product.name, product.id);
            self.catalog.insert(product);
            added += 1;
        }
        Ok(added)
    }

    /// Writes the catalog to the configured data file.
    pub fn save(&self) -> Result<()> {
        self.save_to_file(&self.config.data_file)
    }

    /// Writes the catalog to `path` in catalog order.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        storage::save_to_file(path, self.catalog.iter())
    }

    // === Mutations ===

    /// Appends a product, indexes its name and records the insert for undo.
    pub fn insert_product(&mut self, product: Product) -> Result<()> {
        product
            .validate()
            .map_err(|reason| CatalogError::InvalidProduct { reason })?;
        if self.config.duplicate_ids == DuplicateIdPolicy::Reject
            && self.catalog.contains_id(product.id)
        {
            return Err(CatalogError::DuplicateProductId { id: product.id }.into());
        }

        self.index.insert(&product.name, product.id);
        let key = self.catalog.insert(product.clone());
        tracing::debug!(id = product.id, name = %product.name, %key, "Inserted product");
        self.history.record_insert(key, product);
        Ok(())
    }

    /// Removes the first product with `id` and records the delete for undo.
    pub fn delete_product(&mut self, id: ProductId) -> Result<Product> {
        let removed = self.catalog.remove_by_id(id)?;
        if !self.index.remove(&removed.product.name, id) {
            tracing::warn!(id, name = %removed.product.name, "Deleted product was missing from the name index");
        }
        tracing::debug!(id, position = removed.position, "Deleted product");

        let product = removed.product.clone();
        self.history.record_delete(removed);
        Ok(product)
    }

    /// Buys `quantity` units of product `id`.
    ///
    /// Refused unless strictly more than zero units remain afterwards.
    /// Purchases are not recorded in the undo history. Returns the remaining
    /// stock.
    pub fn purchase(&mut self, id: ProductId, quantity: u32) -> Result<i64> {
        if quantity == 0 {
            return Err(CatalogError::InvalidQuantity.into());
        }
        let remaining = self.catalog.adjust_stock(id, quantity)?;
        tracing::debug!(id, quantity, remaining, "Purchased product");
        Ok(remaining)
    }

    /// Reverses the most recent insert or delete.
    pub fn undo_last_operation(&mut self) -> Result<UndoOutcome> {
        match self.history.pop()? {
            UndoEntry::Insert { key, product } => {
                let removed = self
                    .catalog
                    .remove_record(key)
                    .ok_or(UndoError::StaleEntry { key })?;
                self.index.remove(&removed.product.name, removed.product.id);
                tracing::debug!(id = product.id, %key, "Undid product insertion");
                Ok(UndoOutcome::InsertionReverted(removed.product))
            }
            UndoEntry::Delete(removed) => {
                let product = removed.product.clone();
                self.index.insert(&product.name, product.id);
                tracing::debug!(id = product.id, position = removed.position, "Undid product deletion");
                self.catalog.restore(removed);
                Ok(UndoOutcome::DeletionReverted(product))
            }
        }
    }

    // === Queries ===

    /// Identifiers of every product named exactly `name`.
    pub fn search_by_name(&self, name: &str) -> Result<&[ProductId]> {
        let ids = self.index.search(name);
        if ids.is_empty() {
            return Err(CatalogError::NameNotFound {
                name: name.to_string(),
            }
            .into());
        }
        Ok(ids)
    }

    /// The first product with `id`.
    pub fn find_product(&self, id: ProductId) -> Result<&Product> {
        self.catalog
            .find_by_id(id)
            .ok_or_else(|| CatalogError::ProductNotFound { id }.into())
    }

    /// All products in insertion order.
    pub fn products(&self) -> impl DoubleEndedIterator<Item = &Product> + ExactSizeIterator {
        self.catalog.iter()
    }

    /// Products in `category`, in insertion order. Fails if there are none.
    pub fn products_in_category(&self, category: &str) -> Result<Vec<&Product>> {
        let products: Vec<_> = self.catalog.iter_by_category(category).collect();
        if products.is_empty() {
            return Err(CatalogError::CategoryNotFound {
                category: category.to_string(),
            }
            .into());
        }
        Ok(products)
    }

    /// All products, highest rating first.
    pub fn products_by_rating(&self) -> RatingRanker<'_> {
        RatingRanker::new(self.catalog.iter())
    }

    /// Whether product `id` exists and has stock.
    pub fn is_available(&self, id: ProductId) -> bool {
        self.catalog.is_available(id)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn catalog(&self) -> &OrderedCatalog {
        &self.catalog
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    pub fn history(&self) -> &UndoLog {
        &self.history
    }

    // === Users and session ===

    pub fn register_user(&mut self, username: &str, password: &str, is_admin: bool) -> Result<()> {
        Ok(self.users.register(username, password, is_admin)?)
    }

    /// Logs in if the password matches exactly. A failed attempt leaves the
    /// session as it was.
    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        Ok(self.session.login(&self.users, username, password)?)
    }

    pub fn logout(&mut self) -> Option<String> {
        self.session.logout()
    }

    pub fn current_user(&self) -> Option<&str> {
        self.session.current_user()
    }

    /// Whether the logged-in user is an administrator.
    ///
    /// Fails with `UserError::NoActiveSession` when nobody is logged in.
    pub fn is_current_user_admin(&self) -> Result<bool> {
        Ok(self.session.is_admin(&self.users)?)
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}
