#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for skeljson.
//!
//! - [`names`]: append-only name tables that binary records index into
//! - [`atlas`]: region sizes from a texture atlas, behind the [`RegionSizes`] trait
//! - [`colors`]: terminal palette for the CLI summary
//! - [`utils`]: color and default-value helpers shared by the decoder

pub mod atlas;
pub mod colors;
pub mod names;
pub mod utils;

#[cfg(test)]
mod utils_tests;

pub use atlas::{Atlas, AtlasError, RegionSizes};
pub use colors::Colors;
pub use names::{NameError, NameKind, NameRegistry, NameTable};
