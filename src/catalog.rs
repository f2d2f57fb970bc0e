// The listing collection owned by the page, built once and read-only after

use std::{collections::HashSet, path::Path};

use tracing::{debug, info, warn};

use crate::{
    catalog_filter::{distinct_categories, filter, FilterCriteria},
    config::CatalogConfig,
    error::CatalogError,
    listing::{is_valid_slug, sample_listings, Listing},
};

/// Immutable, validated set of listings.
///
/// Construction checks the data-model invariants (unique ids and slugs,
/// non-empty titles, finite non-negative prices). There is no way to add,
/// change or remove listings afterwards, so a `Catalog` can be shared
/// across threads behind an `Arc` without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        if let Err(e) = validate(&listings) {
            warn!(error = %e, "rejected listing collection");
            return Err(e);
        }

        debug!(count = listings.len(), "catalog built");
        Ok(Self { listings })
    }

    // The landing page's four built-in listings
    pub fn sample() -> Self {
        Self {
            listings: sample_listings(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        Self::new(listings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!(path = %path.display(), count = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        match &config.listings_path {
            Some(path) => Self::load(path),
            None => {
                info!("no listings path configured, using sample catalog");
                Ok(Self::sample())
            }
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.slug == slug)
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Listing> {
        filter(&self.listings, criteria)
    }

    // Options for the category selector, "All" first
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.listings)
    }

    // Cheapest and most expensive nightly price, for bounding a price input
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut prices = self.listings.iter().map(|l| l.price_per_night);
        let first = prices.next()?;
        Some(prices.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

fn validate(listings: &[Listing]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();

    for listing in listings {
        if !ids.insert(listing.id) {
            return Err(CatalogError::DuplicateId(listing.id));
        }
        if !is_valid_slug(&listing.slug) {
            return Err(CatalogError::InvalidSlug(listing.slug.clone()));
        }
        if !slugs.insert(listing.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug(listing.slug.clone()));
        }
        if listing.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle(listing.id));
        }
        if !listing.price_per_night.is_finite() || listing.price_per_night < 0.0 {
            return Err(CatalogError::InvalidPrice {
                id: listing.id,
                price: listing.price_per_night,
            });
        }
    }

    Ok(())
}
