use futures::executor::block_on;
use shopfront_core::{
    CartLedger, Catalog, Discount, DiscountKind, FilterState, PriceBounds, Product,
};
use shopfront_web::catalog::CatalogStatus;
use shopfront_web::components::{
    auth_modal::{AuthModal, Props as AuthModalProps},
    cart_drawer::{CartDrawer, Props as CartDrawerProps},
    filter_panel::{FilterPanel, Props as FilterPanelProps},
    product_card::{ProductCard, Props as ProductCardProps},
    quick_view::{Props as QuickViewProps, QuickView},
    recently_viewed::{Props as RecentlyViewedProps, RecentlyViewedStrip},
};
use shopfront_web::pages::{
    home::{HomePage, HomePageProps},
    product::{ProductPage, ProductPageProps},
};
use std::rc::Rc;
use yew::{Callback, LocalServerRenderer};

fn product(id: &str, name: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        discount: None,
        category: Some("Electronics".to_string()),
        brand: Some("Acme".to_string()),
        image_urls: vec!["static/assets/img/sample.jpg".to_string()],
        description: Some("A sample product.".to_string()),
        alt_text: None,
        trending: false,
    }
}

fn sample_catalog() -> Rc<Catalog> {
    let mut laptop = product("laptop-pro-x", "Laptop Pro X", 1099.0);
    laptop.discount = Some(Discount {
        kind: DiscountKind::Percent,
        value: 10.0,
    });
    laptop.trending = true;
    let mut mug = product("coffee-mug", "Coffee Mug", 15.0);
    mug.category = Some("Kitchen".to_string());
    mug.brand = Some("BrewCo".to_string());
    Rc::new(Catalog::from_products(vec![laptop, mug]))
}

fn home_props(status: CatalogStatus, filters: FilterState) -> HomePageProps {
    HomePageProps {
        status,
        filters,
        bounds: PriceBounds {
            min: 0.0,
            max: 1200.0,
        },
        filters_open: false,
        on_open_filters: Callback::noop(),
        on_close_filters: Callback::noop(),
        on_category: Callback::noop(),
        on_brand: Callback::noop(),
        on_price_range: Callback::noop(),
        on_clear_filters: Callback::noop(),
        on_add_to_cart: Callback::noop(),
        on_quick_view: Callback::noop(),
    }
}

#[test]
fn home_page_renders_loading_and_error_states() {
    let html = block_on(
        LocalServerRenderer::<HomePage>::with_props(home_props(
            CatalogStatus::Loading,
            FilterState::default(),
        ))
        .render(),
    );
    assert!(html.contains("Loading products"));

    let html = block_on(
        LocalServerRenderer::<HomePage>::with_props(home_props(
            CatalogStatus::Failed("unexpected HTTP status 500".to_string()),
            FilterState::default(),
        ))
        .render(),
    );
    assert!(html.contains("could not be loaded"));
    assert!(html.contains("unexpected HTTP status 500"));
}

#[test]
fn home_page_distinguishes_empty_catalog_from_no_matches() {
    let html = block_on(
        LocalServerRenderer::<HomePage>::with_props(home_props(
            CatalogStatus::Ready(Rc::new(Catalog::empty())),
            FilterState::default(),
        ))
        .render(),
    );
    assert!(html.contains("No products are available yet"));

    let mut filters = FilterState::default();
    filters.search_term = "zzz-no-such-product".to_string();
    let html = block_on(
        LocalServerRenderer::<HomePage>::with_props(home_props(
            CatalogStatus::Ready(sample_catalog()),
            filters,
        ))
        .render(),
    );
    assert!(html.contains("No products match your filters"));
}

#[test]
fn home_page_grid_applies_search_filter() {
    let mut filters = FilterState::default();
    filters.search_term = "lap".to_string();
    let html = block_on(
        LocalServerRenderer::<HomePage>::with_props(home_props(
            CatalogStatus::Ready(sample_catalog()),
            filters,
        ))
        .render(),
    );
    assert!(html.contains("Laptop Pro X"));
    assert!(!html.contains("Coffee Mug"));
}

#[test]
fn product_card_shows_discounted_and_original_price() {
    let mut laptop = product("laptop-pro-x", "Laptop Pro X", 1099.0);
    laptop.discount = Some(Discount {
        kind: DiscountKind::Percent,
        value: 10.0,
    });
    laptop.trending = true;
    let html = block_on(
        LocalServerRenderer::<ProductCard>::with_props(ProductCardProps {
            product: laptop,
            on_add_to_cart: Callback::noop(),
            on_quick_view: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("$989.10"));
    assert!(html.contains("$1099.00"));
    assert!(html.contains("10% off"));
    assert!(html.contains("Trending"));
    assert!(html.contains("/product?id=laptop-pro-x"));
}

#[test]
fn cart_drawer_lists_lines_and_totals() {
    let mut cart = CartLedger::new();
    cart.add_item("p1", "Widget", 19.99).unwrap();
    cart.add_item("p1", "Widget", 19.99).unwrap();
    let totals = cart.recompute();
    let html = block_on(
        LocalServerRenderer::<CartDrawer>::with_props(CartDrawerProps {
            open: true,
            cart,
            totals,
            on_remove: Callback::noop(),
            on_close: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Widget"));
    assert!(html.contains("x2"));
    assert!(html.contains("$39.98"));
    assert!(html.contains("2 item(s)"));

    let html = block_on(
        LocalServerRenderer::<CartDrawer>::with_props(CartDrawerProps {
            open: true,
            cart: CartLedger::new(),
            totals: shopfront_core::CartTotals::default(),
            on_remove: Callback::noop(),
            on_close: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Your cart is empty"));
}

#[test]
fn filter_panel_lists_categories_and_brands() {
    let catalog = sample_catalog();
    let html = block_on(
        LocalServerRenderer::<FilterPanel>::with_props(FilterPanelProps {
            categories: catalog.categories(),
            brands: catalog.brands(),
            filters: FilterState::default(),
            bounds: PriceBounds {
                min: 15.0,
                max: 1099.0,
            },
            open_as_overlay: false,
            on_close: Callback::noop(),
            on_category: Callback::noop(),
            on_brand: Callback::noop(),
            on_price_range: Callback::noop(),
            on_clear: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("All categories"));
    assert!(html.contains("Electronics"));
    assert!(html.contains("Kitchen"));
    assert!(html.contains("Acme"));
    assert!(html.contains("BrewCo"));
    assert!(html.contains("Clear filters"));
}

#[test]
fn product_page_renders_detail_or_missing_state() {
    let base = ProductPageProps {
        status: CatalogStatus::Ready(sample_catalog()),
        product_id: Some("laptop-pro-x".into()),
        zoom_open: false,
        on_open_zoom: Callback::noop(),
        on_close_zoom: Callback::noop(),
        on_add_to_cart: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProductPage>::with_props(base.clone()).render());
    assert!(html.contains("Laptop Pro X"));
    assert!(html.contains("$989.10"));
    assert!(html.contains("Add to cart"));

    let mut missing = base;
    missing.product_id = Some("no-such-id".into());
    let html = block_on(LocalServerRenderer::<ProductPage>::with_props(missing).render());
    assert!(html.contains("could not be found"));
    // The missing state keeps the same page wrapper as every other state.
    assert!(html.contains("product-page"));
}

#[test]
fn quick_view_renders_only_when_open_with_product() {
    let props = QuickViewProps {
        open: true,
        product: Some(product("coffee-mug", "Coffee Mug", 15.0)),
        on_close: Callback::noop(),
        on_add_to_cart: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<QuickView>::with_props(props.clone()).render());
    assert!(html.contains("Coffee Mug"));
    assert!(html.contains("Full details"));

    let mut closed = props;
    closed.open = false;
    let html = block_on(LocalServerRenderer::<QuickView>::with_props(closed).render());
    assert!(!html.contains("Coffee Mug"));
}

#[test]
fn auth_modal_renders_sign_in_form() {
    let html = block_on(
        LocalServerRenderer::<AuthModal>::with_props(AuthModalProps {
            open: true,
            on_close: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Sign in"));
    assert!(html.contains("Need an account? Register"));
    assert!(html.contains("auth-email"));
}

#[test]
fn recently_viewed_strip_hides_when_empty() {
    let html = block_on(
        LocalServerRenderer::<RecentlyViewedStrip>::with_props(RecentlyViewedProps {
            products: vec![],
        })
        .render(),
    );
    assert!(!html.contains("Recently viewed"));

    let html = block_on(
        LocalServerRenderer::<RecentlyViewedStrip>::with_props(RecentlyViewedProps {
            products: vec![product("coffee-mug", "Coffee Mug", 15.0)],
        })
        .render(),
    );
    assert!(html.contains("Recently viewed"));
    assert!(html.contains("Coffee Mug"));
}
