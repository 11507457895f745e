use serde::{Deserialize, Serialize};

/// Kind of price reduction attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    Percent,
    Fixed,
}

/// A `{type, value}` discount descriptor as it appears in the product data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    pub value: f64,
}

/// A single product record from the static catalog file.
///
/// The record is externally supplied and read-only from the core's
/// perspective; optional classification fields default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Base price before any discount.
    pub price: f64,
    #[serde(default)]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, rename = "imageUrls")]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "altText")]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub trending: bool,
}

/// Inclusive price range derived from the catalog, used to seed the
/// min/max price filter controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    /// Fallback range when the catalog is empty or carries no valid prices.
    pub const DEFAULT: Self = Self {
        min: 0.0,
        max: 1200.0,
    };
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The full product list for the current session, fetched once from the
/// static data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog (useful for tests and the failed-fetch fallback).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Parse a catalog from a bare JSON array of product records.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid products.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let products = serde_json::from_str(json)?;
        Ok(Self { products })
    }

    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look a product up by its identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category names in first-seen order, for the filter controls.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        Self::distinct(self.products.iter().filter_map(|p| p.category.as_deref()))
    }

    /// Distinct brand names in first-seen order.
    #[must_use]
    pub fn brands(&self) -> Vec<String> {
        Self::distinct(self.products.iter().filter_map(|p| p.brand.as_deref()))
    }

    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut seen = Vec::new();
        for value in values {
            if !seen.iter().any(|s: &String| s.eq_ignore_ascii_case(value)) {
                seen.push(value.to_string());
            }
        }
        seen
    }

    /// Derive the slider bounds from base prices: floor of the lowest,
    /// ceiling of the highest. Non-finite and negative prices are ignored;
    /// with no valid prices the range falls back to [`PriceBounds::DEFAULT`].
    #[must_use]
    pub fn price_bounds(&self) -> PriceBounds {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for product in &self.products {
            if product.price.is_finite() && product.price >= 0.0 {
                lo = lo.min(product.price);
                hi = hi.max(product.price);
            }
        }
        if lo.is_finite() && hi.is_finite() {
            PriceBounds {
                min: lo.floor(),
                max: hi.ceil(),
            }
        } else {
            PriceBounds::DEFAULT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            price,
            discount: None,
            category: None,
            brand: None,
            image_urls: vec![],
            description: None,
            alt_text: None,
            trending: false,
        }
    }

    #[test]
    fn parses_bare_array_with_optional_fields() {
        let json = r#"[
            {
                "id": "p1",
                "name": "Laptop Pro X",
                "price": 1099.0,
                "discount": { "type": "percent", "value": 10 },
                "category": "Electronics",
                "brand": "Acme",
                "imageUrls": ["img/laptop-1.jpg", "img/laptop-2.jpg"],
                "trending": true
            },
            { "id": "p2", "name": "Coffee Mug", "price": 15.0 }
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.products.len(), 2);
        let laptop = catalog.find("p1").unwrap();
        assert_eq!(laptop.discount.as_ref().unwrap().kind, DiscountKind::Percent);
        assert_eq!(laptop.image_urls.len(), 2);
        assert!(laptop.trending);
        let mug = catalog.find("p2").unwrap();
        assert!(mug.discount.is_none());
        assert!(!mug.trending);
        assert!(catalog.find("p3").is_none());
    }

    #[test]
    fn price_bounds_floor_and_ceil() {
        let catalog =
            Catalog::from_products(vec![product("a", 10.0), product("b", 50.0), product("c", 200.0)]);
        let bounds = catalog.price_bounds();
        assert_eq!(bounds.min, 10.0);
        assert_eq!(bounds.max, 200.0);

        let fractional = Catalog::from_products(vec![product("a", 9.5), product("b", 19.99)]);
        let bounds = fractional.price_bounds();
        assert_eq!(bounds.min, 9.0);
        assert_eq!(bounds.max, 20.0);
    }

    #[test]
    fn category_and_brand_lists_dedupe_case_insensitively() {
        let mut a = product("a", 1.0);
        a.category = Some("Electronics".to_string());
        a.brand = Some("Acme".to_string());
        let mut b = product("b", 2.0);
        b.category = Some("electronics".to_string());
        b.brand = Some("BrewCo".to_string());
        let mut c = product("c", 3.0);
        c.brand = Some("ACME".to_string());
        let catalog = Catalog::from_products(vec![a, b, c]);
        assert_eq!(catalog.categories(), ["Electronics"]);
        assert_eq!(catalog.brands(), ["Acme", "BrewCo"]);
    }

    #[test]
    fn price_bounds_fall_back_when_no_valid_prices() {
        assert_eq!(Catalog::empty().price_bounds(), PriceBounds::DEFAULT);
        let invalid = Catalog::from_products(vec![product("a", f64::NAN), product("b", -5.0)]);
        assert_eq!(invalid.price_bounds(), PriceBounds::DEFAULT);
    }
}
