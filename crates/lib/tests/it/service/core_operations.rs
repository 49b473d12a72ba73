//! Insert, delete, search and listing through the service.

use prodcat::{
    CatalogConfig, CatalogService, DuplicateIdPolicy, Error, Product, catalog::CatalogError,
};

use crate::helpers::*;

#[test]
fn test_inserted_product_is_found_by_exact_name() {
    let mut service = setup_service();
    service
        .insert_product(product(1, "Desk Lamp", "Home", 3, 4.0))
        .unwrap();

    assert_eq!(service.search_by_name("Desk Lamp").unwrap(), &[1]);
    assert!(service.search_by_name("Desk").unwrap_err().is_not_found());
    assert!(service.search_by_name("desk lamp").unwrap_err().is_not_found());
}

#[test]
fn test_shared_name_lists_every_id() {
    let service = setup_service_with_products();
    assert_eq!(service.search_by_name("Coffee Mug").unwrap(), &[102, 105]);
}

#[test]
fn test_list_all_in_insertion_order() {
    let service = setup_service_with_products();
    assert_eq!(listed_ids(&service), vec![101, 102, 103, 104, 105]);

    let fields: Vec<Product> = service.products().cloned().collect();
    assert_eq!(fields, sample_products());
}

#[test]
fn test_list_by_category() {
    let service = setup_service_with_products();

    let electronics: Vec<_> = service
        .products_in_category("Electronics")
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(electronics, vec![101, 103]);

    let err = service.products_in_category("Garden").unwrap_err();
    assert!(matches!(
        err,
        Error::Catalog(CatalogError::CategoryNotFound { ref category }) if category == "Garden"
    ));
}

#[test]
fn test_delete_removes_product_everywhere() {
    let mut service = setup_service_with_products();

    let deleted = service.delete_product(103).unwrap();
    assert_eq!(deleted.name, "Headphones");

    assert_eq!(listed_ids(&service), vec![101, 102, 104, 105]);
    assert!(!ranked_ids(&service).contains(&103));
    assert!(service.search_by_name("Headphones").is_err());
    let electronics = service.products_in_category("Electronics").unwrap();
    assert_eq!(electronics.len(), 1);
    assert!(service.find_product(103).unwrap_err().is_not_found());
}

#[test]
fn test_delete_keeps_name_while_another_product_shares_it() {
    let mut service = setup_service_with_products();

    service.delete_product(102).unwrap();
    assert_eq!(service.search_by_name("Coffee Mug").unwrap(), &[105]);

    service.delete_product(105).unwrap();
    assert!(service.search_by_name("Coffee Mug").is_err());
    assert!(service.products_in_category("Kitchen").is_err());
}

#[test]
fn test_delete_unknown_id_reports_not_found() {
    let mut service = setup_service_with_products();
    let history = service.history().len();

    let err = service.delete_product(999).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(service.len(), 5);
    assert_eq!(service.history().len(), history);
}

#[test]
fn test_duplicate_ids_rejected_by_default() {
    let mut service = setup_service_with_products();

    let err = service
        .insert_product(product(101, "Tablet", "Electronics", 1, 4.0))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Catalog(CatalogError::DuplicateProductId { id: 101 })
    ));
    assert!(service.search_by_name("Tablet").is_err());
    assert_eq!(service.len(), 5);
}

#[test]
fn test_duplicate_ids_shadow_when_allowed() {
    let config = CatalogConfig::default().with_duplicate_ids(DuplicateIdPolicy::Allow);
    let mut service = CatalogService::new(config);

    service.insert_product(product(1, "First", "A", 1, 1.0)).unwrap();
    service.insert_product(product(1, "Second", "A", 1, 1.0)).unwrap();

    assert_eq!(service.len(), 2);
    assert_eq!(service.find_product(1).unwrap().name, "First");

    service.delete_product(1).unwrap();
    assert_eq!(service.find_product(1).unwrap().name, "Second");
    assert!(service.search_by_name("First").is_err());
    assert_eq!(service.search_by_name("Second").unwrap(), &[1]);
}

#[test]
fn test_unstorable_products_are_rejected() {
    let mut service = setup_service();

    let mut multi_line = product(1, "Lamp", "Home", 1, 1.0);
    multi_line.description = "line one\nline two".to_string();
    let err = service.insert_product(multi_line).unwrap_err();
    assert!(matches!(
        err,
        Error::Catalog(CatalogError::InvalidProduct { .. })
    ));

    let empty_category = product(2, "Lamp", "", 1, 1.0);
    assert!(service.insert_product(empty_category).is_err());

    assert!(service.is_empty());
    assert!(service.history().is_empty());
}
