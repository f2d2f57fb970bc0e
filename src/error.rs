use thiserror::Error;

// Error types for building a catalog. Filtering itself never fails.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate listing id: {0}")]
    DuplicateId(u32),

    #[error("Duplicate listing slug: {0}")]
    DuplicateSlug(String),

    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    #[error("Listing {0} has an empty title")]
    EmptyTitle(u32),

    #[error("Listing {id} has an invalid nightly price: {price}")]
    InvalidPrice { id: u32, price: f64 },

    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
