#![warn(clippy::all, clippy::pedantic)]

// Test modules
pub mod app_tests;
pub mod integration_tests;
pub mod ui_tests;
