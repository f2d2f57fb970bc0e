// Main library file for the stay catalog

// Export modules for the catalog and its filter
pub mod catalog;
pub mod catalog_filter;
pub mod config;
pub mod error;
pub mod listing;

// Re-export key types for convenience
pub use catalog::Catalog;
pub use catalog_filter::{distinct_categories, filter, CategoryFilter, FilterCriteria, ALL_CATEGORIES};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use listing::{sample_listings, Listing};
