use std::fs;

use tempfile::TempDir;

use prodcat::{CatalogConfig, CatalogService, DuplicateIdPolicy, storage};

use crate::helpers::*;

#[test]
fn test_save_and_reload_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.txt");

    let service = setup_service_with_products();
    service.save_to_file(&path).unwrap();

    let config = CatalogConfig::default().with_data_file(&path);
    let reloaded = CatalogService::open(config).unwrap();

    let products: Vec<_> = reloaded.products().cloned().collect();
    assert_eq!(products, sample_products());
}

#[test]
fn test_reloaded_products_are_searchable_but_not_undoable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.txt");
    setup_service_with_products().save_to_file(&path).unwrap();

    let mut service = CatalogService::open(CatalogConfig::default().with_data_file(&path)).unwrap();

    assert_eq!(service.search_by_name("Coffee Mug").unwrap(), &[102, 105]);
    assert!(service.history().is_empty());
    assert!(service.undo_last_operation().unwrap_err().is_empty_history());
}

#[test]
fn test_save_uses_configured_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.txt");

    let mut service = CatalogService::open(CatalogConfig::default().with_data_file(&path)).unwrap();
    assert!(service.is_empty());
    assert!(path.exists());

    service
        .insert_product(product(1, "Chair", "Furniture", 4, 3.9))
        .unwrap();
    service.save().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "1\nChair\n10\nFurniture\n4\nTest product\n3.9\n");
}

#[test]
fn test_state_after_mutations_is_what_gets_saved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.txt");

    let mut service = setup_service_with_products();
    service.delete_product(102).unwrap();
    service.purchase(101, 2).unwrap();
    service.save_to_file(&path).unwrap();

    let products = storage::load_from_file(&path).unwrap();
    let ids: Vec<_> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![101, 103, 104, 105]);
    assert_eq!(products[0].stock, 3);
}

#[test]
fn test_truncated_file_loads_complete_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.txt");
    fs::write(
        &path,
        "1\nChair\n25\nFurniture\n4\nPine\n3.9\n2\nTable\nnot-a-price\n",
    )
    .unwrap();

    let service = CatalogService::open(CatalogConfig::default().with_data_file(&path)).unwrap();
    assert_eq!(listed_ids(&service), vec![1]);
}

#[test]
fn test_duplicate_ids_in_file_follow_policy() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.txt");
    fs::write(
        &path,
        "1\nChair\n25\nFurniture\n4\nPine\n3.9\n1\nStool\n15\nFurniture\n9\nBirch\n3.1\n",
    )
    .unwrap();

    let rejecting = CatalogService::open(CatalogConfig::default().with_data_file(&path)).unwrap();
    assert_eq!(rejecting.len(), 1);
    assert!(rejecting.search_by_name("Stool").is_err());

    let config = CatalogConfig::default()
        .with_data_file(&path)
        .with_duplicate_ids(DuplicateIdPolicy::Allow);
    let allowing = CatalogService::open(config).unwrap();
    assert_eq!(allowing.len(), 2);
    assert_eq!(allowing.find_product(1).unwrap().name, "Chair");
}

#[test]
fn test_open_fails_when_file_cannot_be_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing_dir").join("products.txt");

    let err = CatalogService::open(CatalogConfig::default().with_data_file(&path)).unwrap_err();
    assert!(err.is_io_error());
}

#[test]
fn test_invalid_utf8_in_file_ends_loading() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.txt");
    let mut bytes = b"1\nChair\n25\nFurniture\n4\nPine\n3.9\n2\nCaf".to_vec();
    bytes.extend_from_slice(b"\xe9\n5\nKitchen\n1\nMug\n4\n");
    fs::write(&path, bytes).unwrap();

    let service = CatalogService::open(CatalogConfig::default().with_data_file(&path)).unwrap();
    assert_eq!(listed_ids(&service), vec![1]);
}

#[test]
fn test_out_of_range_numbers_in_file_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.txt");
    fs::write(
        &path,
        "1\nChair\nNaN\nFurniture\n4\nPine\n3.9\n\
         2\nStool\n-5\nFurniture\n4\nBirch\n3.1\n\
         3\nTable\n80\nFurniture\n2\nOak\ninf\n\
         4\nBench\n40\nFurniture\n6\nTeak\n4.4\n",
    )
    .unwrap();

    let service = CatalogService::open(CatalogConfig::default().with_data_file(&path)).unwrap();
    assert_eq!(listed_ids(&service), vec![4]);
    assert!(service.search_by_name("Chair").is_err());
    assert_eq!(service.search_by_name("Bench").unwrap(), &[4]);
}
