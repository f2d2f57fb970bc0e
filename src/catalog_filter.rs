// Catalog filtering: the text/category/price predicate and the category set

use std::{collections::HashSet, convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::listing::Listing;

// Label of the synthetic "every category" entry
pub const ALL_CATEGORIES: &str = "All";

// Category selector: the "All" sentinel or one exact category label
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(String),
}

impl CategoryFilter {
    // Exact comparison, no case folding or trimming
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(wanted) => wanted == category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Exact(value)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::from(value.to_string())
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::from(s))
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Exact(category) => category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Exact(category) => f.write_str(category),
        }
    }
}

/// Filter inputs for one pass over the catalog.
///
/// Deserializes from the page's form state (`query`, `category`,
/// `maxPrice`); any missing field takes its default, and a `null` price
/// means no ceiling.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub query: String,
    pub category: CategoryFilter,
    #[serde(deserialize_with = "price_or_unbounded")]
    pub max_price: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
            max_price: f64::INFINITY,
        }
    }
}

impl FilterCriteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = max_price;
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_price == f64::INFINITY
    }

    // All three predicates must hold
    pub fn matches(&self, listing: &Listing) -> bool {
        query_matches(&self.query.to_lowercase(), listing)
            && self.category.matches(&listing.category)
            && listing.price_per_night <= self.max_price
    }
}

// `needle` must already be lowercased
fn query_matches(needle: &str, listing: &Listing) -> bool {
    needle.is_empty() || listing.search_text().contains(needle)
}

fn price_or_unbounded<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

// Listings satisfying every criterion, in their original order. Never fails:
// a negative or NaN ceiling simply matches nothing.
pub fn filter(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    let needle = criteria.query.to_lowercase();
    let mut filtered = Vec::new();

    for listing in listings {
        let query_ok = query_matches(&needle, listing);
        let category_ok = criteria.category.matches(&listing.category);
        let price_ok = listing.price_per_night <= criteria.max_price;

        if query_ok && category_ok && price_ok {
            filtered.push(listing.clone());
        }
    }

    debug!(
        query = %criteria.query,
        category = %criteria.category,
        max_price = criteria.max_price,
        matched = filtered.len(),
        total = listings.len(),
        "filtered listings"
    );

    filtered
}

// "All" followed by each category once, in first-seen order
pub fn distinct_categories(listings: &[Listing]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = vec![ALL_CATEGORIES.to_string()];

    for listing in listings {
        if seen.insert(listing.category.as_str()) {
            categories.push(listing.category.clone());
        }
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::sample_listings;

    fn ids(listings: &[Listing]) -> Vec<u32> {
        listings.iter().map(|l| l.id).collect()
    }

    fn criteria(query: &str, category: &str, max_price: f64) -> FilterCriteria {
        FilterCriteria::default()
            .with_query(query)
            .with_category(category)
            .with_max_price(max_price)
    }

    #[test]
    fn test_default_criteria_is_identity() {
        let listings = sample_listings();
        let result = filter(&listings, &FilterCriteria::default());
        assert_eq!(result, listings);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter(&[], &FilterCriteria::default()).is_empty());
        assert_eq!(distinct_categories(&[]), vec!["All".to_string()]);
    }

    #[test]
    fn test_sample_scenarios() {
        let l = sample_listings();

        // 1. everything, original order
        assert_eq!(ids(&filter(&l, &criteria("", "All", 9999.0))), vec![1, 2, 3, 4]);

        // 2. both studios
        assert_eq!(ids(&filter(&l, &criteria("studio", "All", 9999.0))), vec![2, 4]);

        // 3. category only
        assert_eq!(ids(&filter(&l, &criteria("", "Duplex", 9999.0))), vec![3]);

        // 4. price ceiling
        assert_eq!(ids(&filter(&l, &criteria("", "All", 40.0))), vec![4]);

        // 5. location in title/description
        assert_eq!(ids(&filter(&l, &criteria("lekki", "All", 9999.0))), vec![1]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let l = sample_listings();
        let upper = filter(&l, &FilterCriteria::default().with_query("STUDIO"));
        let lower = filter(&l, &FilterCriteria::default().with_query("studio"));
        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), vec![2, 4]);
    }

    #[test]
    fn test_query_spans_field_boundaries() {
        let l = sample_listings();
        // end of the description, the joining space, then the category
        let result = filter(&l, &FilterCriteria::default().with_query("trips. studio"));
        assert_eq!(ids(&result), vec![4]);

        let none = filter(&l, &FilterCriteria::default().with_query("penthouse"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_category_is_exact_and_case_sensitive() {
        let l = sample_listings();
        assert!(filter(&l, &criteria("", "studio", f64::INFINITY)).is_empty());
        assert!(filter(&l, &criteria("", "Studio ", f64::INFINITY)).is_empty());
        assert_eq!(ids(&filter(&l, &criteria("", "Studio", f64::INFINITY))), vec![2, 4]);
    }

    #[test]
    fn test_price_ceiling_is_inclusive() {
        let l = sample_listings();
        assert_eq!(ids(&filter(&l, &criteria("", "All", 60.0))), vec![1, 2, 4]);

        let mut pricey = l[1].clone();
        pricey.price_per_night = 60.0 + 0.01;
        assert!(filter(&[pricey], &criteria("", "All", 60.0)).is_empty());
    }

    #[test]
    fn test_negative_or_nan_ceiling_matches_nothing() {
        let l = sample_listings();
        assert!(filter(&l, &criteria("", "All", -1.0)).is_empty());
        assert!(filter(&l, &criteria("", "All", f64::NAN)).is_empty());
    }

    #[test]
    fn test_combined_criteria() {
        let l = sample_listings();
        assert_eq!(ids(&filter(&l, &criteria("business", "Studio", 50.0))), vec![4]);
        assert!(filter(&l, &criteria("business", "Duplex", 9999.0)).is_empty());
    }

    #[test]
    fn test_duplicates_preserved_and_input_untouched() {
        let l = sample_listings();
        let doubled: Vec<Listing> = l.iter().chain(l.iter()).cloned().collect();
        let before = doubled.clone();

        let result = filter(&doubled, &FilterCriteria::default().with_category("Studio"));
        assert_eq!(ids(&result), vec![2, 4, 2, 4]);
        assert_eq!(doubled, before);
    }

    #[test]
    fn test_filter_is_deterministic() {
        let l = sample_listings();
        let c = criteria("st", "All", 100.0);
        let first = filter(&l, &c);
        for _ in 0..10 {
            assert_eq!(filter(&l, &c), first);
        }
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let l = sample_listings();
        for query in ["", "a", "studio", "ikoyi", "x"] {
            for max_price in [0.0, 40.0, 60.0, 200.0] {
                let result = filter(&l, &criteria(query, "All", max_price));
                let mut positions = result
                    .iter()
                    .map(|r| l.iter().position(|x| x == r).unwrap());
                let mut last = positions.next();
                for p in positions {
                    assert!(Some(p) > last);
                    last = Some(p);
                }
            }
        }
    }

    #[test]
    fn test_criteria_matches_agrees_with_filter() {
        let l = sample_listings();
        let c = criteria("STUDIO", "All", 50.0);
        let expected: Vec<u32> = l.iter().filter(|x| c.matches(x)).map(|x| x.id).collect();
        assert_eq!(ids(&filter(&l, &c)), expected);
    }

    #[test]
    fn test_distinct_categories() {
        let l = sample_listings();
        assert_eq!(
            distinct_categories(&l),
            vec!["All", "One-bedroom", "Studio", "Duplex"]
        );
    }

    #[test]
    fn test_distinct_categories_no_repeats() {
        let l = sample_listings();
        let tripled: Vec<Listing> = l.iter().chain(&l).chain(&l).cloned().collect();
        let categories = distinct_categories(&tripled);
        assert_eq!(categories[0], "All");
        let unique: HashSet<&String> = categories.iter().collect();
        assert_eq!(unique.len(), categories.len());
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(
            "Studio".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Exact("Studio".to_string())
        );
        assert_eq!(
            CategoryFilter::from("all"),
            CategoryFilter::Exact("all".to_string())
        );
        assert_eq!(CategoryFilter::All.to_string(), "All");
        assert_eq!(String::from(CategoryFilter::from("Duplex")), "Duplex");
    }

    #[test]
    fn test_criteria_from_form_state() {
        let c: FilterCriteria =
            serde_json::from_str(r#"{"query": "Lekki", "category": "One-bedroom", "maxPrice": 50}"#)
                .unwrap();
        assert_eq!(c.query, "Lekki");
        assert_eq!(c.category, CategoryFilter::Exact("One-bedroom".to_string()));
        assert_eq!(c.max_price, 50.0);

        let defaults: FilterCriteria = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, FilterCriteria::default());
        assert!(defaults.is_unbounded());

        let null_price: FilterCriteria =
            serde_json::from_str(r#"{"category": "All", "maxPrice": null}"#).unwrap();
        assert_eq!(null_price.category, CategoryFilter::All);
        assert!(null_price.is_unbounded());
    }
}
