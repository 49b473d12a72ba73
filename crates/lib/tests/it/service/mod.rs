//! CatalogService integration tests

mod core_operations;
mod ranking_tests;
mod undo_tests;
