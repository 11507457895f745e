use crate::app::handlers::AddToCart;
use shopfront_core::{Product, compute_price};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub product: Product,
    pub on_add_to_cart: Callback<AddToCart>,
    pub on_quick_view: Callback<Product>,
}

/// One grid tile: image, pricing, add-to-cart and quick-view actions.
/// The price shown (and charged) is the discounted final price.
#[function_component(ProductCard)]
pub fn product_card(p: &Props) -> Html {
    let product = &p.product;
    let quote = compute_price(product.price, product.discount.as_ref());

    let add = {
        let cb = p.on_add_to_cart.clone();
        let payload: AddToCart = (
            product.id.clone(),
            product.name.clone(),
            quote.final_price,
        );
        Callback::from(move |_| cb.emit(payload.clone()))
    };
    let quick_view = {
        let cb = p.on_quick_view.clone();
        let product = product.clone();
        Callback::from(move |_| cb.emit(product.clone()))
    };

    let image = product.image_urls.first().map(|src| {
        let alt = product
            .alt_text
            .clone()
            .unwrap_or_else(|| product.name.clone());
        html! {
            <img src={crate::paths::asset_path(src)} alt={alt} loading="lazy" />
        }
    });

    html! {
        <article class="product-card" data-testid={format!("card-{}", product.id)}>
            <a href={crate::router::product_href(&product.id)} class="product-card__media">
                { image }
                if product.trending {
                    <span class="badge badge--trending">{"Trending"}</span>
                }
            </a>
            <h3 class="product-card__name">{ &product.name }</h3>
            <p class="product-card__price">
                <span class="price-final">{ format!("${:.2}", quote.final_price) }</span>
                if quote.has_discount {
                    <del class="price-original">{ format!("${:.2}", quote.original_price) }</del>
                    if let Some(text) = quote.discount_text.clone() {
                        <span class="badge badge--discount">{ text }</span>
                    }
                }
            </p>
            <div class="product-card__actions">
                <button class="btn btn-primary" onclick={add}>{"Add to cart"}</button>
                <button class="btn btn-ghost" onclick={quick_view}>{"Quick view"}</button>
            </div>
        </article>
    }
}
