use crate::app::handlers::AddToCart;
use crate::catalog::CatalogStatus;
use crate::components::filter_panel::FilterPanel;
use crate::components::product_card::ProductCard;
use shopfront_core::{FilterOutcome, FilterState, PriceBounds, Product, compute_visible};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub status: CatalogStatus,
    pub filters: FilterState,
    pub bounds: PriceBounds,
    pub filters_open: bool,
    pub on_open_filters: Callback<()>,
    pub on_close_filters: Callback<()>,
    pub on_category: Callback<String>,
    pub on_brand: Callback<String>,
    pub on_price_range: Callback<(Option<f64>, Option<f64>)>,
    pub on_clear_filters: Callback<()>,
    pub on_add_to_cart: Callback<AddToCart>,
    pub on_quick_view: Callback<Product>,
}

fn grid(products: &[&Product], p: &HomePageProps) -> Html {
    html! {
        <div class="product-grid" data-testid="product-grid">
            { for products.iter().map(|product| html! {
                <ProductCard
                    key={product.id.clone()}
                    product={(*product).clone()}
                    on_add_to_cart={p.on_add_to_cart.clone()}
                    on_quick_view={p.on_quick_view.clone()}
                />
            }) }
        </div>
    }
}

/// The grid page. Renders one of four distinct states: loading, failed to
/// load, catalog empty, and no products matching the current filters.
#[function_component(HomePage)]
pub fn home_page(p: &HomePageProps) -> Html {
    let open_filters = {
        let cb = p.on_open_filters.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let content = match &p.status {
        CatalogStatus::Loading => html! {
            <p class="grid-status" data-testid="grid-loading">{"Loading products…"}</p>
        },
        CatalogStatus::Failed(reason) => html! {
            <p class="grid-status grid-status--error" role="alert" data-testid="grid-error">
                { format!("Products could not be loaded ({reason}). Please try again later.") }
            </p>
        },
        CatalogStatus::Ready(catalog) => match compute_visible(&catalog.products, &p.filters) {
            FilterOutcome::CatalogEmpty => html! {
                <p class="grid-status" data-testid="grid-empty">{"No products are available yet."}</p>
            },
            FilterOutcome::NoMatches => html! {
                <p class="grid-status" data-testid="grid-no-matches">
                    {"No products match your filters."}
                </p>
            },
            FilterOutcome::Visible(products) => grid(&products, p),
        },
    };

    let (categories, brands) = p.status.catalog().map_or_else(
        || (Vec::new(), Vec::new()),
        |catalog| (catalog.categories(), catalog.brands()),
    );

    html! {
        <div class="home-page">
            <button id="filters-toggle" class="btn btn-ghost filters-toggle" onclick={open_filters}>
                {"Filters"}
            </button>
            <FilterPanel
                categories={categories}
                brands={brands}
                filters={p.filters.clone()}
                bounds={p.bounds}
                open_as_overlay={p.filters_open}
                on_close={p.on_close_filters.clone()}
                on_category={p.on_category.clone()}
                on_brand={p.on_brand.clone()}
                on_price_range={p.on_price_range.clone()}
                on_clear={p.on_clear_filters.clone()}
            />
            { content }
        </div>
    }
}
