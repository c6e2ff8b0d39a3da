//! Synthetic verification-data generator for pension dashboards.
//!
//! Produces hierarchical, statistically consistent datasets
//! (state → district → location → bank → age group → category → gender)
//! from fixed catalogs and an explicit, seedable random source.

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod geo;
pub mod model;
pub mod partition;
pub mod summary;

pub use config::GenConfig;
pub use error::GenError;
pub use generator::Generator;
