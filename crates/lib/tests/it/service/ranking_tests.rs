//! Listing by rating.

use crate::helpers::*;

#[test]
fn test_ratings_descending_with_deterministic_ties() {
    let mut service = setup_service();
    service.insert_product(product(1, "A", "X", 1, 3.5)).unwrap();
    service.insert_product(product(2, "B", "X", 1, 4.8)).unwrap();
    service.insert_product(product(3, "C", "X", 1, 4.8)).unwrap();
    service.insert_product(product(4, "D", "X", 1, 2.0)).unwrap();

    let ratings: Vec<f64> = service.products_by_rating().map(|p| p.rating).collect();
    assert_eq!(ratings, vec![4.8, 4.8, 3.5, 2.0]);

    let first = ranked_ids(&service);
    assert_eq!(first, vec![2, 3, 1, 4]);
    assert_eq!(ranked_ids(&service), first);
}

#[test]
fn test_ranking_does_not_touch_history_or_order() {
    let service = setup_service_with_products();
    let history = service.history().len();

    assert_eq!(ranked_ids(&service), vec![103, 105, 101, 102, 104]);
    assert_eq!(service.history().len(), history);
    assert_eq!(listed_ids(&service), vec![101, 102, 103, 104, 105]);
}

#[test]
fn test_empty_catalog_ranks_nothing() {
    let service = setup_service();
    assert_eq!(service.products_by_rating().count(), 0);
}
