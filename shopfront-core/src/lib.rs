//! Shopfront Core
//!
//! Platform-agnostic storefront logic: product catalog, pricing, cart
//! ledger, filtering/search, recently-viewed tracking and overlay state.
//! This crate has no UI or browser dependencies; the web front-end supplies
//! storage backends through the [`KeyValueStore`] seam.

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod overlay;
pub mod pricing;
pub mod recent;
pub mod storage;

// Re-export commonly used types
pub use cart::{CartError, CartLedger, CartLine, CartTotals};
pub use catalog::{Catalog, Discount, DiscountKind, PriceBounds, Product};
pub use filter::{FilterOutcome, FilterState, SEARCH_DEBOUNCE_MS, compute_visible};
pub use overlay::{Overlay, OverlayCoordinator};
pub use pricing::{PriceQuote, compute_price, round2};
pub use recent::RecentlyViewed;
pub use storage::{KeyValueStore, MemoryStore, StorageError};

/// Durable-storage key for the persisted cart mapping.
pub const CART_STORAGE_KEY: &str = "shoppingCart";
/// Session-storage key for the recently-viewed id list.
pub const RECENT_STORAGE_KEY: &str = "recentlyViewedProducts";

/// Ties the cart ledger and recently-viewed tracker to their storage
/// backends: a durable store for the cart and a session-scoped store for
/// the view history.
///
/// Write failures are logged and swallowed; a full storage area must never
/// break an add-to-cart action.
pub struct StorefrontEngine<D, S>
where
    D: KeyValueStore,
    S: KeyValueStore,
{
    durable: D,
    session: S,
}

impl<D, S> StorefrontEngine<D, S>
where
    D: KeyValueStore,
    S: KeyValueStore,
{
    /// Create an engine over the provided storage backends.
    pub const fn new(durable: D, session: S) -> Self {
        Self { durable, session }
    }

    /// Load the persisted cart and run the validation sweep. A corrupt
    /// payload resets to an empty cart; when the payload parses but the
    /// sweep drops invalid lines, the cleaned mapping is written back so
    /// the next load is already clean.
    pub fn load_cart(&self) -> CartLedger {
        let Some(raw) = self.durable.read(CART_STORAGE_KEY) else {
            return CartLedger::new();
        };
        let mut cart = CartLedger::from_json(&raw);
        let parsed_lines = cart.len();
        cart.recompute();
        let swept = cart.len() != parsed_lines;
        if swept || (cart.is_empty() && raw != "{}") {
            self.save_cart(&cart);
        }
        cart
    }

    /// Persist the cart mapping, logging (never propagating) failures.
    pub fn save_cart(&self, cart: &CartLedger) {
        match cart.to_json() {
            Ok(json) => {
                if let Err(err) = self.durable.write(CART_STORAGE_KEY, &json) {
                    log::warn!("failed to persist cart: {err}");
                }
            }
            Err(err) => log::error!("failed to serialize cart: {err}"),
        }
    }

    /// Add one unit to the cart and persist the result.
    ///
    /// # Errors
    ///
    /// Returns the validation error unchanged; nothing is persisted when
    /// the input is rejected.
    pub fn add_to_cart(
        &self,
        cart: &mut CartLedger,
        id: &str,
        name: &str,
        price: f64,
    ) -> Result<CartTotals, CartError> {
        cart.add_item(id, name, price)?;
        let totals = cart.recompute();
        self.save_cart(cart);
        Ok(totals)
    }

    /// Remove a line and persist the result.
    pub fn remove_from_cart(&self, cart: &mut CartLedger, id: &str) -> CartTotals {
        cart.remove_item(id);
        let totals = cart.recompute();
        self.save_cart(cart);
        totals
    }

    /// Load the recently-viewed list; corrupt content yields an empty list.
    pub fn load_recent(&self) -> RecentlyViewed {
        self.session
            .read(RECENT_STORAGE_KEY)
            .map_or_else(RecentlyViewed::new, |raw| RecentlyViewed::from_json(&raw))
    }

    /// Record a product view and persist the updated list.
    pub fn record_view(&self, id: &str) -> RecentlyViewed {
        let mut recent = self.load_recent();
        recent.record(id);
        match recent.to_json() {
            Ok(json) => {
                if let Err(err) = self.session.write(RECENT_STORAGE_KEY, &json) {
                    log::warn!("failed to persist recently-viewed list: {err}");
                }
            }
            Err(err) => log::error!("failed to serialize recently-viewed list: {err}"),
        }
        recent
    }
}
