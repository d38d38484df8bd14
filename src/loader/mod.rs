//! Word-pair catalog loading

pub mod catalog;

pub use catalog::{CatalogLoader, WordCatalog, WordPair};
