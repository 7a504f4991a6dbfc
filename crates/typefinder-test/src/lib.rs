//! Shared test fixtures for TypeFinder crates.
//!
//! - [`app`] - A small application type graph split into three modules
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! typefinder-test = { workspace = true }
//! ```
//!
//! Then build the modules you need:
//!
//! ```ignore
//! use typefinder_test::app::{all_modules, plugins_module};
//! ```

pub mod app;

pub use app::{all_modules, handlers_module, models_module, plugins_module};
