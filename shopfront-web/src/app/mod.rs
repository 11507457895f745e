#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use shopfront_core::Overlay;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod handlers;
pub mod state;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    use crate::components::{
        auth_modal::AuthModal, cart_drawer::CartDrawer, footer::Footer, header::Header,
        quick_view::QuickView,
    };
    use crate::pages::{
        home::HomePage, not_found::NotFound, product::ProductPage,
    };

    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    let overlay = (*app_state.overlay).clone();
    let on_keydown = handlers::build_escape_handler(&app_state);
    let add_to_cart = handlers::build_add_to_cart(&app_state);
    let open_quick_view = handlers::build_open_quick_view(&app_state);

    let render_route = {
        let app_state = app_state.clone();
        let add_to_cart = add_to_cart.clone();
        let open_quick_view = open_quick_view.clone();
        let overlay = overlay.clone();
        Callback::from(move |route: Route| match route {
            Route::Home => html! {
                <HomePage
                    status={(*app_state.catalog).clone()}
                    filters={(*app_state.filters).clone()}
                    bounds={*app_state.bounds}
                    filters_open={overlay.is_open(Overlay::Filters)}
                    on_open_filters={handlers::build_toggle_overlay(&app_state, Overlay::Filters, "filters-toggle")}
                    on_close_filters={handlers::build_close_overlay(&app_state, Overlay::Filters, "filters-toggle")}
                    on_category={handlers::build_set_category(&app_state)}
                    on_brand={handlers::build_toggle_brand(&app_state)}
                    on_price_range={handlers::build_set_price_range(&app_state)}
                    on_clear_filters={handlers::build_clear_filters(&app_state)}
                    on_add_to_cart={add_to_cart.clone()}
                    on_quick_view={open_quick_view.clone()}
                />
            },
            Route::Product => html! {
                <ProductPage
                    status={(*app_state.catalog).clone()}
                    product_id={crate::router::current_product_id().map(AttrValue::from)}
                    zoom_open={overlay.is_open(Overlay::Zoom)}
                    on_open_zoom={handlers::build_open_zoom(&app_state)}
                    on_close_zoom={handlers::build_close_overlay(&app_state, Overlay::Zoom, "zoom-open-btn")}
                    on_add_to_cart={add_to_cart.clone()}
                />
            },
            Route::NotFound => html! { <NotFound /> },
        })
    };

    html! {
        <div class="app-shell" onkeydown={on_keydown}>
            <Header
                cart_count={app_state.totals.item_count}
                nav_open={overlay.is_open(Overlay::Nav)}
                cart_open={overlay.is_open(Overlay::Cart)}
                on_toggle_nav={handlers::build_toggle_overlay(&app_state, Overlay::Nav, "nav-toggle")}
                on_toggle_cart={handlers::build_toggle_overlay(&app_state, Overlay::Cart, "cart-toggle")}
                on_open_auth={handlers::build_open_auth(&app_state)}
                on_search={handlers::build_set_search(&app_state)}
            />
            <main id="main">
                <Switch<Route> render={render_route} />
            </main>
            <CartDrawer
                open={overlay.is_open(Overlay::Cart)}
                cart={(*app_state.cart).clone()}
                totals={*app_state.totals}
                on_remove={handlers::build_remove_from_cart(&app_state)}
                on_close={handlers::build_close_overlay(&app_state, Overlay::Cart, "cart-toggle")}
            />
            <QuickView
                product={(*app_state.quick_view).clone()}
                open={overlay.is_open(Overlay::QuickView)}
                on_close={handlers::build_close_overlay(&app_state, Overlay::QuickView, "main")}
                on_add_to_cart={add_to_cart}
            />
            <AuthModal
                open={overlay.is_open(Overlay::Auth)}
                on_close={handlers::build_close_overlay(&app_state, Overlay::Auth, "auth-open-btn")}
            />
            <Footer />
            <p id="status-helper" class="sr-only" aria-live="polite"></p>
        </div>
    }
}
