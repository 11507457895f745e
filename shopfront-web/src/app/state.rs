use crate::catalog::CatalogStatus;
use shopfront_core::{
    CartLedger, CartTotals, FilterState, OverlayCoordinator, PriceBounds, Product,
};
use yew::prelude::*;

/// The single authoritative application-state object. Every page and
/// component reads through these handles; there is no ambient global state.
#[derive(Clone, PartialEq)]
pub struct AppState {
    pub catalog: UseStateHandle<CatalogStatus>,
    pub bounds: UseStateHandle<PriceBounds>,
    pub filters: UseStateHandle<FilterState>,
    pub cart: UseStateHandle<CartLedger>,
    pub totals: UseStateHandle<CartTotals>,
    pub overlay: UseStateHandle<OverlayCoordinator>,
    /// Product shown in the quick-view modal while it is open.
    pub quick_view: UseStateHandle<Option<Product>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    // load_cart already runs the validation sweep and rewrites storage.
    let cart = use_state(|| crate::storage::web_engine().load_cart());
    let totals = {
        let initial = (*cart).clone();
        use_state(move || {
            let mut cart = initial;
            cart.recompute()
        })
    };
    AppState {
        catalog: use_state(|| CatalogStatus::Loading),
        bounds: use_state(PriceBounds::default),
        filters: use_state(FilterState::default),
        cart,
        totals,
        overlay: use_state(OverlayCoordinator::new),
        quick_view: use_state(|| None::<Product>),
    }
}
