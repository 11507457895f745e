use shopfront_core::SEARCH_DEBOUNCE_MS;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cart_count: u32,
    pub nav_open: bool,
    pub cart_open: bool,
    pub on_toggle_nav: Callback<()>,
    pub on_toggle_cart: Callback<()>,
    pub on_open_auth: Callback<()>,
    /// Receives the search term after the debounce interval, or immediately
    /// on an explicit submit.
    pub on_search: Callback<String>,
}

fn input_value(e: &web_sys::Event) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    // Pending debounce timer; dropping a Timeout cancels it.
    let pending: Rc<RefCell<Option<gloo::timers::callback::Timeout>>> =
        use_mut_ref(|| None::<gloo::timers::callback::Timeout>);

    let on_input = {
        let on_search = p.on_search.clone();
        let pending = pending.clone();
        Callback::from(move |e: InputEvent| {
            let Some(value) = input_value(&e) else {
                return;
            };
            pending.borrow_mut().take();
            if cfg!(target_arch = "wasm32") {
                let on_search = on_search.clone();
                let timer = gloo::timers::callback::Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                    on_search.emit(value);
                });
                *pending.borrow_mut() = Some(timer);
            } else {
                on_search.emit(value);
            }
        })
    };

    let on_submit_key = {
        let on_search = p.on_search.clone();
        let pending = pending.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }
            e.prevent_default();
            pending.borrow_mut().take();
            if let Some(value) = input_value(&e) {
                on_search.emit(value);
            }
        })
    };

    let toggle_nav = {
        let cb = p.on_toggle_nav.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_cart = {
        let cb = p.on_toggle_cart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let open_auth = {
        let cb = p.on_open_auth.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{"Skip to content"}</a>
            <div class="header-content">
                <button
                    id="nav-toggle"
                    class="header-btn"
                    aria-expanded={p.nav_open.to_string()}
                    aria-controls="site-nav"
                    onclick={toggle_nav}
                >
                    {"Menu"}
                </button>
                <a class="header-logo" href="/">{"Shopfront"}</a>
                <div class="header-search" role="search">
                    <label for="search-input" class="sr-only">{"Search products"}</label>
                    <input
                        id="search-input"
                        type="search"
                        placeholder="Search products…"
                        oninput={on_input}
                        onkeydown={on_submit_key}
                    />
                </div>
                <div class="header-right">
                    <button id="auth-open-btn" class="header-btn" onclick={open_auth}>
                        {"Sign in"}
                    </button>
                    <button
                        id="cart-toggle"
                        class="header-btn"
                        aria-expanded={p.cart_open.to_string()}
                        aria-controls="cart-drawer"
                        onclick={toggle_cart}
                    >
                        {"Cart"}
                        <span class="cart-badge" data-testid="cart-count">{p.cart_count}</span>
                    </button>
                </div>
            </div>
            if p.nav_open {
                <nav id="site-nav" class="nav-drawer" aria-label="Site">
                    <a href="/">{"All products"}</a>
                    <a href="/?trending=1">{"Trending"}</a>
                </nav>
            }
        </header>
    }
}
