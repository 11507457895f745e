//! Catalog filtering and search
use crate::catalog::{PriceBounds, Product};
use crate::pricing::compute_price;
use std::collections::BTreeSet;

/// Idle interval before a search keystroke burst triggers recomputation.
/// The timer itself lives in the UI layer; an explicit submit bypasses it.
pub const SEARCH_DEBOUNCE_MS: u32 = 350;

/// The transient filter selections held in memory by the grid page.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub search_term: String,
    /// Empty string means "all categories".
    pub selected_category: String,
    pub min_price: f64,
    pub max_price: f64,
    /// Empty set means "all brands".
    pub selected_brands: BTreeSet<String>,
}

impl FilterState {
    /// The cleared state for a given catalog price range.
    #[must_use]
    pub fn for_bounds(bounds: PriceBounds) -> Self {
        Self {
            search_term: String::new(),
            selected_category: String::new(),
            min_price: bounds.min,
            max_price: bounds.max,
            selected_brands: BTreeSet::new(),
        }
    }

    /// Reset every selection back to defaults, keeping the price range.
    pub fn clear(&mut self, bounds: PriceBounds) {
        *self = Self::for_bounds(bounds);
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        if !self.selected_brands.remove(brand) {
            self.selected_brands.insert(brand.to_string());
        }
    }

    /// True iff the product passes all four predicates. The predicates are
    /// independent, so evaluation order never changes the outcome.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.matches_category(product)
            && self.matches_price(product)
            && self.matches_brand(product)
    }

    fn matches_search(&self, product: &Product) -> bool {
        let term = self.search_term.trim();
        term.is_empty()
            || product
                .name
                .to_lowercase()
                .contains(&term.to_lowercase())
    }

    fn matches_category(&self, product: &Product) -> bool {
        if self.selected_category.is_empty() {
            return true;
        }
        product
            .category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(&self.selected_category))
    }

    fn matches_price(&self, product: &Product) -> bool {
        let quote = compute_price(product.price, product.discount.as_ref());
        quote.final_price >= self.min_price && quote.final_price <= self.max_price
    }

    fn matches_brand(&self, product: &Product) -> bool {
        if self.selected_brands.is_empty() {
            return true;
        }
        product.brand.as_deref().is_some_and(|b| {
            self.selected_brands
                .iter()
                .any(|selected| selected.eq_ignore_ascii_case(b))
        })
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::for_bounds(PriceBounds::DEFAULT)
    }
}

/// Result of applying the filter state to a catalog. "No matches" is kept
/// distinct from "catalog empty"; the failed-to-load state is tracked by
/// the page alongside its catalog handle.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome<'a> {
    CatalogEmpty,
    NoMatches,
    Visible(Vec<&'a Product>),
}

/// Apply the combined predicate over the catalog.
#[must_use]
pub fn compute_visible<'a>(products: &'a [Product], state: &FilterState) -> FilterOutcome<'a> {
    if products.is_empty() {
        return FilterOutcome::CatalogEmpty;
    }
    let visible: Vec<&Product> = products.iter().filter(|p| state.matches(p)).collect();
    if visible.is_empty() {
        FilterOutcome::NoMatches
    } else {
        FilterOutcome::Visible(visible)
    }
}
