// Listing records and the built-in sample collection

use serde::{Deserialize, Serialize};

// One bookable unit in the catalog. Field names on the wire follow the
// source data shape so the page's literal records load unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Listing {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub category: String,
    #[serde(rename = "pricePerNight")]
    pub price_per_night: f64,
    #[serde(rename = "image")]
    pub image_url: String,
    #[serde(rename = "beds")]
    pub bed_count: u32,
    #[serde(rename = "baths")]
    pub bath_count: u32,
    pub description: String,
    pub slug: String,
}

impl Listing {
    /// Lowercased `title description category`, the haystack for the text
    /// predicate.
    pub fn search_text(&self) -> String {
        [
            self.title.as_str(),
            self.description.as_str(),
            self.category.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

// Slugs are non-empty and made of lowercase ASCII letters, digits and hyphens
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    title: &str,
    category: &str,
    price_per_night: f64,
    image_url: &str,
    (bed_count, bath_count): (u32, u32),
    description: &str,
    slug: &str,
) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        category: category.to_string(),
        price_per_night,
        image_url: image_url.to_string(),
        bed_count,
        bath_count,
        description: description.to_string(),
        slug: slug.to_string(),
    }
}

// The four properties shown on the landing page, in display order
pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing(
            1,
            "Cozy One-Bedroom — Lekki",
            "One-bedroom",
            45.0,
            "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?auto=format&fit=crop&w=1200&q=60",
            (1, 1),
            "Bright, air-conditioned one-bedroom apartment in central Lekki — perfect for business stays and weekend getaways.",
            "cozy-1br-lekki",
        ),
        listing(
            2,
            "Studio Suite — Victoria Island",
            "Studio",
            60.0,
            "https://images.unsplash.com/photo-1505691723518-36a2b57c3a3e?auto=format&fit=crop&w=1200&q=60",
            (1, 1),
            "Modern studio with kitchenette and fast Wi-Fi — walkable to restaurants and offices in Victoria Island.",
            "studio-vi",
        ),
        listing(
            3,
            "Luxury Duplex — Ikoyi",
            "Duplex",
            140.0,
            "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&w=1200&q=60",
            (3, 2),
            "Spacious duplex with private terrace — ideal for families and extended stays in upmarket Ikoyi.",
            "duplex-ikoyi",
        ),
        listing(
            4,
            "Compact Studio — Yaba",
            "Studio",
            35.0,
            "https://images.unsplash.com/photo-1560448204-2b9f9c3b3d6b?auto=format&fit=crop&w=1200&q=60",
            (1, 1),
            "Affordable studio close to tech hubs and transport links — great for short business trips.",
            "studio-yaba",
        ),
    ]
}
