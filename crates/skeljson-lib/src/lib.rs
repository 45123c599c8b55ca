//! Skeljson: Spine 3.5 binary skeletons to a JSON-shaped document.
//!
//! # Example
//!
//! ```no_run
//! use skeljson_lib::{Atlas, decode};
//!
//! let bytes = std::fs::read("hero.skel").unwrap();
//! let atlas: Atlas = std::fs::read_to_string("hero.atlas").unwrap().parse().unwrap();
//!
//! let decoded = decode(&bytes, &atlas).unwrap();
//! assert!(decoded.is_fully_consumed());
//! eprintln!("{}", decoded.diagnostics.render());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cursor;
pub mod decode;
pub mod diagnostics;
pub mod error;
pub mod model;

#[cfg(test)]
pub(crate) mod test_utils;

pub use decode::{Decoded, decode};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter};
pub use error::{DecodeError, Result};
pub use model::SkeletonDocument;
pub use skeljson_core::{Atlas, AtlasError, RegionSizes};
