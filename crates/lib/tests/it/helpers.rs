//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use prodcat::{CatalogConfig, CatalogService, Product, ProductId};

/// A service with the default configuration and an empty catalog.
pub fn setup_service() -> CatalogService {
    CatalogService::new(CatalogConfig::default())
}

/// A service holding [`sample_products`]. Each insert is in the undo history.
pub fn setup_service_with_products() -> CatalogService {
    let mut service = setup_service();
    for product in sample_products() {
        service
            .insert_product(product)
            .expect("Failed to insert sample product");
    }
    service
}

/// Five products over three categories, two of them sharing a name.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(101, "Laptop", 899.99, "Electronics", 5, "14 inch, 16GB RAM", 4.5),
        Product::new(102, "Coffee Mug", 7.5, "Kitchen", 40, "Ceramic, 350ml", 3.5),
        Product::new(103, "Headphones", 59.0, "Electronics", 12, "Over-ear, wired", 4.8),
        Product::new(104, "Notebook", 2.25, "Stationery", 200, "A5, dotted", 2.0),
        Product::new(105, "Coffee Mug", 9.0, "Kitchen", 15, "Enamel, 400ml", 4.8),
    ]
}

pub fn product(id: ProductId, name: &str, category: &str, stock: i64, rating: f64) -> Product {
    Product::new(id, name, 10.0, category, stock, "Test product", rating)
}

/// Identifiers of every product, in catalog order.
pub fn listed_ids(service: &CatalogService) -> Vec<ProductId> {
    service.products().map(|p| p.id).collect()
}

/// Identifiers in rating order.
pub fn ranked_ids(service: &CatalogService) -> Vec<ProductId> {
    service.products_by_rating().map(|p| p.id).collect()
}
