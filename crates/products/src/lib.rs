//! Products domain module.
//!
//! This crate contains the polymorphic product model (a closed set of
//! variants over a common field core), implemented purely as deterministic
//! domain logic (no IO, no storage).

pub mod date;
pub mod product;

pub use date::{format_date, parse_date};
pub use product::{Product, ProductKind};
