//! Undo of inserts and deletes.

use prodcat::{CatalogConfig, CatalogService, UndoOutcome};

use crate::helpers::*;

#[test]
fn test_undo_with_empty_history() {
    let mut service = setup_service();
    assert!(service.undo_last_operation().unwrap_err().is_empty_history());
}

#[test]
fn test_undo_insert_removes_product_entirely() {
    let mut service = setup_service_with_products();
    service
        .insert_product(product(200, "Desk", "Furniture", 2, 4.0))
        .unwrap();

    let outcome = service.undo_last_operation().unwrap();
    assert!(matches!(outcome, UndoOutcome::InsertionReverted(ref p) if p.id == 200));

    assert_eq!(listed_ids(&service), vec![101, 102, 103, 104, 105]);
    assert!(service.search_by_name("Desk").is_err());
    assert!(service.products_in_category("Furniture").is_err());
    assert!(!ranked_ids(&service).contains(&200));
}

#[test]
fn test_undo_delete_restores_fields_and_position() {
    let mut service = setup_service_with_products();
    let original = service.find_product(103).unwrap().clone();

    service.delete_product(103).unwrap();
    let outcome = service.undo_last_operation().unwrap();

    assert_eq!(outcome, UndoOutcome::DeletionReverted(original.clone()));
    assert_eq!(listed_ids(&service), vec![101, 102, 103, 104, 105]);
    assert_eq!(service.find_product(103).unwrap(), &original);
    assert_eq!(service.search_by_name("Headphones").unwrap(), &[103]);
}

#[test]
fn test_undo_delete_of_head_and_tail() {
    let mut service = setup_service_with_products();

    service.delete_product(101).unwrap();
    service.undo_last_operation().unwrap();
    assert_eq!(listed_ids(&service), vec![101, 102, 103, 104, 105]);

    service.delete_product(105).unwrap();
    service.undo_last_operation().unwrap();
    assert_eq!(listed_ids(&service), vec![101, 102, 103, 104, 105]);
}

#[test]
fn test_undo_delete_in_single_element_catalog() {
    let mut service = setup_service();
    service.insert_product(product(1, "Only", "X", 1, 1.0)).unwrap();
    service.delete_product(1).unwrap();
    assert!(service.is_empty());

    let outcome = service.undo_last_operation().unwrap();
    assert!(matches!(outcome, UndoOutcome::DeletionReverted(_)));
    assert_eq!(listed_ids(&service), vec![1]);

    let outcome = service.undo_last_operation().unwrap();
    assert!(matches!(outcome, UndoOutcome::InsertionReverted(_)));
    assert!(service.is_empty());
    assert!(service.index().is_empty());
}

#[test]
fn test_consecutive_undos_unwind_in_reverse_order() {
    let mut service = setup_service();
    service.insert_product(product(1, "A", "X", 1, 1.0)).unwrap();
    service.insert_product(product(2, "B", "X", 1, 1.0)).unwrap();
    service.insert_product(product(3, "C", "X", 1, 1.0)).unwrap();
    service.delete_product(2).unwrap();
    service.delete_product(1).unwrap();
    assert_eq!(listed_ids(&service), vec![3]);

    service.undo_last_operation().unwrap();
    assert_eq!(listed_ids(&service), vec![1, 3]);
    service.undo_last_operation().unwrap();
    assert_eq!(listed_ids(&service), vec![1, 2, 3]);
    service.undo_last_operation().unwrap();
    assert_eq!(listed_ids(&service), vec![1, 2]);
    service.undo_last_operation().unwrap();
    service.undo_last_operation().unwrap();
    assert!(service.is_empty());
    assert!(service.undo_last_operation().unwrap_err().is_empty_history());
}

#[test]
fn test_undo_depth_limits_history() {
    let config = CatalogConfig::default().with_undo_depth(Some(1));
    let mut service = CatalogService::new(config);
    service.insert_product(product(1, "A", "X", 1, 1.0)).unwrap();
    service.insert_product(product(2, "B", "X", 1, 1.0)).unwrap();

    service.undo_last_operation().unwrap();
    assert!(service.undo_last_operation().unwrap_err().is_empty_history());
    assert_eq!(listed_ids(&service), vec![1]);
}
