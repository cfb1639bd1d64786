//! The immutable service catalog.

pub mod types;

pub use types::{Catalog, CatalogEntry};
