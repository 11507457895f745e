//! Callback builders wiring user actions to the core engines
use crate::a11y;
use crate::app::state::AppState;
use crate::storage::web_engine;
use shopfront_core::{FilterState, Overlay, Product};
use yew::prelude::*;

/// Payload of an add-to-cart action: id, display name and the unit price
/// the buyer saw (the discounted price where a discount is active).
pub type AddToCart = (String, String, f64);

pub fn build_add_to_cart(state: &AppState) -> Callback<AddToCart> {
    let cart_handle = state.cart.clone();
    let totals_handle = state.totals.clone();
    Callback::from(move |(id, name, price): AddToCart| {
        let engine = web_engine();
        let mut cart = (*cart_handle).clone();
        match engine.add_to_cart(&mut cart, &id, &name, price) {
            Ok(totals) => {
                a11y::set_status(&format!("{name} added to cart"));
                totals_handle.set(totals);
                cart_handle.set(cart);
            }
            Err(err) => {
                if cfg!(target_arch = "wasm32") {
                    crate::dom::alert(&format!("Could not add to cart: {err}"));
                }
            }
        }
    })
}

pub fn build_remove_from_cart(state: &AppState) -> Callback<String> {
    let cart_handle = state.cart.clone();
    let totals_handle = state.totals.clone();
    Callback::from(move |id: String| {
        let engine = web_engine();
        let mut cart = (*cart_handle).clone();
        let totals = engine.remove_from_cart(&mut cart, &id);
        a11y::set_status("Item removed from cart");
        totals_handle.set(totals);
        cart_handle.set(cart);
    })
}

/// Toggle a sidebar overlay from its header button. Closing restores focus
/// to the element that was focused when the overlay opened, falling back to
/// the trigger button.
pub fn build_toggle_overlay(state: &AppState, overlay: Overlay, trigger_id: &str) -> Callback<()> {
    let overlay_handle = state.overlay.clone();
    let trigger_id = trigger_id.to_string();
    Callback::from(move |()| {
        let mut fsm = (*overlay_handle).clone();
        let restore = fsm.toggle(overlay, a11y::active_element_id());
        a11y::set_scroll_lock(fsm.scroll_locked());
        if !fsm.is_open(overlay) {
            a11y::focus_after_transition(restore.unwrap_or_else(|| trigger_id.clone()));
        }
        overlay_handle.set(fsm);
    })
}

pub fn build_close_overlay(state: &AppState, overlay: Overlay, fallback_focus: &str) -> Callback<()> {
    let overlay_handle = state.overlay.clone();
    let quick_view = state.quick_view.clone();
    let fallback = fallback_focus.to_string();
    Callback::from(move |()| {
        let mut fsm = (*overlay_handle).clone();
        let restore = fsm.close(overlay);
        a11y::set_scroll_lock(fsm.scroll_locked());
        a11y::focus_after_transition(restore.unwrap_or_else(|| fallback.clone()));
        if overlay == Overlay::QuickView {
            quick_view.set(None);
        }
        overlay_handle.set(fsm);
    })
}

pub fn build_open_quick_view(state: &AppState) -> Callback<Product> {
    let overlay_handle = state.overlay.clone();
    let quick_view = state.quick_view.clone();
    Callback::from(move |product: Product| {
        let mut fsm = (*overlay_handle).clone();
        fsm.open(Overlay::QuickView, a11y::active_element_id());
        a11y::set_scroll_lock(fsm.scroll_locked());
        quick_view.set(Some(product));
        overlay_handle.set(fsm);
    })
}

pub fn build_open_auth(state: &AppState) -> Callback<()> {
    let overlay_handle = state.overlay.clone();
    Callback::from(move |()| {
        let mut fsm = (*overlay_handle).clone();
        fsm.open(Overlay::Auth, a11y::active_element_id());
        a11y::set_scroll_lock(fsm.scroll_locked());
        overlay_handle.set(fsm);
    })
}

pub fn build_open_zoom(state: &AppState) -> Callback<()> {
    let overlay_handle = state.overlay.clone();
    Callback::from(move |()| {
        let mut fsm = (*overlay_handle).clone();
        fsm.open(Overlay::Zoom, a11y::active_element_id());
        a11y::set_scroll_lock(fsm.scroll_locked());
        overlay_handle.set(fsm);
    })
}

/// The global cancel action: Escape peels the topmost overlay.
pub fn build_escape_handler(state: &AppState) -> Callback<KeyboardEvent> {
    let overlay_handle = state.overlay.clone();
    let quick_view = state.quick_view.clone();
    Callback::from(move |event: KeyboardEvent| {
        if event.key() != "Escape" {
            return;
        }
        let mut fsm = (*overlay_handle).clone();
        let Some(closed) = fsm.close_topmost() else {
            return;
        };
        event.prevent_default();
        a11y::set_scroll_lock(fsm.scroll_locked());
        if closed == Overlay::QuickView {
            quick_view.set(None);
        }
        overlay_handle.set(fsm);
    })
}

pub fn build_set_search(state: &AppState) -> Callback<String> {
    let filters_handle = state.filters.clone();
    Callback::from(move |term: String| {
        let mut filters = (*filters_handle).clone();
        filters.search_term = term;
        filters_handle.set(filters);
    })
}

pub fn build_set_category(state: &AppState) -> Callback<String> {
    let filters_handle = state.filters.clone();
    Callback::from(move |category: String| {
        let mut filters = (*filters_handle).clone();
        filters.selected_category = category;
        filters_handle.set(filters);
    })
}

pub fn build_toggle_brand(state: &AppState) -> Callback<String> {
    let filters_handle = state.filters.clone();
    Callback::from(move |brand: String| {
        let mut filters = (*filters_handle).clone();
        filters.toggle_brand(&brand);
        filters_handle.set(filters);
    })
}

pub fn build_set_price_range(state: &AppState) -> Callback<(Option<f64>, Option<f64>)> {
    let filters_handle = state.filters.clone();
    let bounds_handle = state.bounds.clone();
    Callback::from(move |(min, max): (Option<f64>, Option<f64>)| {
        let bounds = *bounds_handle;
        let mut filters = (*filters_handle).clone();
        if let Some(min) = min {
            filters.min_price = if min.is_finite() { min } else { bounds.min };
        }
        if let Some(max) = max {
            filters.max_price = if max.is_finite() { max } else { bounds.max };
        }
        filters_handle.set(filters);
    })
}

pub fn build_clear_filters(state: &AppState) -> Callback<()> {
    let filters_handle = state.filters.clone();
    let bounds_handle = state.bounds.clone();
    Callback::from(move |()| {
        filters_handle.set(FilterState::for_bounds(*bounds_handle));
    })
}
