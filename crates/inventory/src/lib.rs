//! Inventory domain module.
//!
//! A keyed, in-memory container that exclusively owns catalog products and
//! exposes stock mutations, attribute queries, valuation and the expiry sweep.
//! Deterministic domain logic only (no IO, no clock reads, no storage).

pub mod store;

pub use store::Inventory;
