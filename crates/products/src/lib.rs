//! Products domain module.
//!
//! This crate contains the catalog item model: a common base record plus a
//! closed set of variants, implemented purely as deterministic domain logic
//! (no IO, no clock reads, no storage).

pub mod product;

pub use product::{Product, ProductDetails, ProductKind};
