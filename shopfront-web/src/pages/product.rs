use crate::app::handlers::AddToCart;
use crate::catalog::CatalogStatus;
use crate::clipboard::CopyFeedback;
use crate::components::recently_viewed::RecentlyViewedStrip;
use crate::components::zoom_overlay::ZoomOverlay;
use shopfront_core::{Product, compute_price};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductPageProps {
    pub status: CatalogStatus,
    /// From the `id` query parameter; `None` when the URL carries none.
    #[prop_or_default]
    pub product_id: Option<AttrValue>,
    pub zoom_open: bool,
    pub on_open_zoom: Callback<()>,
    pub on_close_zoom: Callback<()>,
    pub on_add_to_cart: Callback<AddToCart>,
}

fn fallback(message: &str) -> Html {
    html! {
        <p class="product-missing" role="alert" data-testid="product-missing">{ message }</p>
    }
}

fn detail(p: &ProductPageProps, product: &Product, on_share: &Callback<MouseEvent>, share_label: &'static str) -> Html {
    let quote = compute_price(product.price, product.discount.as_ref());
    let alt = product
        .alt_text
        .clone()
        .unwrap_or_else(|| product.name.clone());
    let primary_image = product.image_urls.first().cloned();

    let add = {
        let cb = p.on_add_to_cart.clone();
        let payload: AddToCart = (
            product.id.clone(),
            product.name.clone(),
            quote.final_price,
        );
        Callback::from(move |_| cb.emit(payload.clone()))
    };
    let open_zoom = {
        let cb = p.on_open_zoom.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <article class="product-detail" data-testid={format!("detail-{}", product.id)}>
            <div class="product-detail__media">
                if let Some(src) = primary_image.clone() {
                    <button
                        id="zoom-open-btn"
                        class="product-detail__zoom"
                        aria-label="Zoom image"
                        onclick={open_zoom}
                    >
                        <img src={crate::paths::asset_path(&src)} alt={alt.clone()} />
                    </button>
                }
                <div class="product-detail__thumbs">
                    { for product.image_urls.iter().skip(1).map(|src| html! {
                        <img src={crate::paths::asset_path(src)} alt={alt.clone()} loading="lazy" />
                    }) }
                </div>
            </div>
            <div class="product-detail__info">
                <h1>{ &product.name }</h1>
                if product.trending {
                    <span class="badge badge--trending">{"Trending"}</span>
                }
                <p class="product-detail__price">
                    <span class="price-final">{ format!("${:.2}", quote.final_price) }</span>
                    if quote.has_discount {
                        <del class="price-original">{ format!("${:.2}", quote.original_price) }</del>
                        if let Some(text) = quote.discount_text.clone() {
                            <span class="badge badge--discount">{ text }</span>
                        }
                    }
                </p>
                if let Some(desc) = &product.description {
                    <p class="product-detail__description">{ desc.clone() }</p>
                }
                <div class="product-detail__actions">
                    <button class="btn btn-primary" onclick={add}>{"Add to cart"}</button>
                    <button class="btn btn-ghost" data-testid="share-btn" onclick={on_share.clone()}>
                        { share_label }
                    </button>
                </div>
            </div>
        </article>
    }
}

#[function_component(ProductPage)]
pub fn product_page(p: &ProductPageProps) -> Html {
    let recent = use_state(Vec::<Product>::new);

    // Record the view once per product and resolve the strip against the
    // catalog, excluding the product being viewed.
    {
        let recent = recent.clone();
        let status = p.status.clone();
        let product_id = p.product_id.clone();
        use_effect_with((p.product_id.clone(), p.status.clone()), move |_| {
            if let (Some(id), Some(catalog)) = (product_id.as_deref(), status.catalog()) {
                if catalog.find(id).is_some() {
                    let engine = crate::storage::web_engine();
                    let history = engine.record_view(id);
                    let resolved: Vec<Product> = history
                        .list(id)
                        .iter()
                        .filter_map(|seen| catalog.find(seen).cloned())
                        .collect();
                    recent.set(resolved);
                }
            }
            || {}
        });
    }

    let feedback = use_state(CopyFeedback::default);
    let on_share = {
        let feedback = feedback.clone();
        Callback::from(move |_| {
            let feedback = feedback.clone();
            #[cfg(target_arch = "wasm32")]
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = crate::clipboard::copy_page_url().await;
                crate::a11y::set_status(outcome.label());
                feedback.set(outcome);
                gloo::timers::future::TimeoutFuture::new(crate::clipboard::FEEDBACK_RESET_MS).await;
                feedback.set(CopyFeedback::Idle);
            });
            #[cfg(not(target_arch = "wasm32"))]
            feedback.set(CopyFeedback::Failed);
        })
    };

    // Every state renders inside the same page wrapper.
    let body = match &p.status {
        CatalogStatus::Loading => fallback("Loading product…"),
        CatalogStatus::Failed(_) => fallback("Product details are unavailable right now."),
        CatalogStatus::Ready(catalog) => {
            match p.product_id.as_deref().and_then(|id| catalog.find(id)) {
                None => fallback("This product could not be found."),
                Some(product) => {
                    let zoom = product.image_urls.first().map(|src| {
                        let alt = product
                            .alt_text
                            .clone()
                            .unwrap_or_else(|| product.name.clone());
                        html! {
                            <ZoomOverlay
                                open={p.zoom_open}
                                src={crate::paths::asset_path(src)}
                                alt={alt}
                                on_close={p.on_close_zoom.clone()}
                            />
                        }
                    });
                    html! {
                        <>
                            { detail(p, product, &on_share, feedback.label()) }
                            { zoom }
                            <RecentlyViewedStrip products={(*recent).clone()} />
                        </>
                    }
                }
            }
        }
    };

    html! { <div class="product-page">{ body }</div> }
}
