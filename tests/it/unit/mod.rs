//! Unit tests for KWL Board.

mod export_tests;
mod snapshot_tests;
mod storage_tests;
