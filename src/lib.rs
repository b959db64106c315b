//! # Arsenal
//!
//! A weapon stat catalog with objective rankings and side-by-side comparison.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (stat records, categories, objectives, comparisons)
//! - **calculate**: Stat derivation, objective registry, ranking, comparison and cards
//! - **catalog**: Immutable lookup tables built once from the dataset
//! - **storage**: Reading the weapon dataset from the data directory
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod catalog;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
