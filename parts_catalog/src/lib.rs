//! # Parts Catalog
//!
//! The static hardware catalog: every CPU and motherboard known to the system,
//! along with their sockets, performance tiers and manufacturers.
//! This crate is the single source of truth for the dataset and does not contain any query logic.

pub mod catalog;
pub mod component;
pub mod error;
pub mod token;

pub use catalog::*;
pub use component::*;
pub use error::*;
pub use token::*;
