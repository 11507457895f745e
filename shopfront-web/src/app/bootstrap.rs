#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use crate::catalog::CatalogStatus;
#[cfg(any(target_arch = "wasm32", test))]
use shopfront_core::FilterState;
#[cfg(any(target_arch = "wasm32", test))]
use std::rc::Rc;
#[cfg(any(target_arch = "wasm32", test))]
use yew::prelude::*;

#[cfg(any(target_arch = "wasm32", test))]
fn apply_fetch_result(
    state: &AppState,
    result: Result<shopfront_core::Catalog, crate::catalog::CatalogError>,
) {
    match result {
        Ok(catalog) => {
            let bounds = catalog.price_bounds();
            state.bounds.set(bounds);
            state.filters.set(FilterState::for_bounds(bounds));
            state.catalog.set(CatalogStatus::Ready(Rc::new(catalog)));
        }
        Err(err) => {
            if cfg!(target_arch = "wasm32") {
                crate::dom::console_error(&format!("catalog fetch failed: {err}"));
            }
            state.catalog.set(CatalogStatus::Failed(err.to_string()));
        }
    }
}

/// One-shot catalog fetch on mount. `CatalogStatus::Loading` doubles as the
/// in-flight flag, so re-renders never issue a second request.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let state = app_state.clone();
    use_effect_with((), move |()| {
        if *state.catalog == CatalogStatus::Loading {
            wasm_bindgen_futures::spawn_local(async move {
                let result = crate::catalog::fetch_catalog().await;
                apply_fetch_result(&state, result);
            });
        }
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use shopfront_core::{Catalog, Product};
    use yew::LocalServerRenderer;

    fn sample_catalog() -> Catalog {
        Catalog::from_products(vec![Product {
            id: "p1".to_string(),
            name: "Laptop Pro X".to_string(),
            price: 1099.0,
            discount: None,
            category: Some("Electronics".to_string()),
            brand: Some("Acme".to_string()),
            image_urls: vec![],
            description: None,
            alt_text: None,
            trending: false,
        }])
    }

    #[function_component(BootstrapHarness)]
    fn bootstrap_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        let initialized = use_state(|| false);
        if !*initialized {
            initialized.set(true);
            apply_fetch_result(&app_state, Ok(sample_catalog()));
        }
        Html::default()
    }

    #[function_component(FailureHarness)]
    fn failure_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        let initialized = use_state(|| false);
        if !*initialized {
            initialized.set(true);
            apply_fetch_result(
                &app_state,
                Err(crate::catalog::CatalogError::Status(404)),
            );
        }
        Html::default()
    }

    #[test]
    fn bootstrap_applies_catalog_and_failure_states() {
        let _ = block_on(LocalServerRenderer::<BootstrapHarness>::new().render());
        let _ = block_on(LocalServerRenderer::<FailureHarness>::new().render());
    }
}
