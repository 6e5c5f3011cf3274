//! Unit tests for Shelfboard.

mod settings_tests;
mod snapshot_tests;
