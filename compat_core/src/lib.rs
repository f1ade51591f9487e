//! # Compat Core
//!
//! Answers compatibility and recommendation questions over the hardware
//! knowledge graph built from a `parts_catalog` dataset.
//!
//! ## Core Components
//!
//! - **store**: Fact store holding subject-predicate-object triples, with a structured
//!   pattern-matching query model
//! - **engine**: Derives the symmetric compatibility relation and runs configuration,
//!   compatibility, recommendation and upgrade queries against the store
//!
//! ## Lifecycle
//!
//! The store is loaded once, the compatibility relation is derived once when the
//! [`CompatEngine`] is constructed, and every query after that is read-only.

pub mod engine;
pub mod error;
pub mod store;

pub use engine::*;
pub use error::*;
pub use store::*;
