use crate::app::handlers::AddToCart;
use crate::components::modal::Modal;
use shopfront_core::{Product, compute_price};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub product: Option<Product>,
    pub on_close: Callback<()>,
    pub on_add_to_cart: Callback<AddToCart>,
}

#[function_component(QuickView)]
pub fn quick_view(p: &Props) -> Html {
    let Some(product) = p.product.as_ref().filter(|_| p.open) else {
        return Html::default();
    };
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

    html! {
        <Modal open={true} title={product.name.clone()} on_close={p.on_close.clone()}>
            if let Some(src) = product.image_urls.first() {
                <img
                    src={crate::paths::asset_path(src)}
                    alt={product.alt_text.clone().unwrap_or_else(|| product.name.clone())}
                />
            }
            if let Some(desc) = &product.description {
                <p class="quick-view__description">{ desc.clone() }</p>
            }
            <p class="quick-view__price">
                <span class="price-final">{ format!("${:.2}", quote.final_price) }</span>
                if quote.has_discount {
                    <del class="price-original">{ format!("${:.2}", quote.original_price) }</del>
                }
            </p>
            <button class="btn btn-primary" onclick={add}>{"Add to cart"}</button>
            <a href={crate::router::product_href(&product.id)}>{"Full details"}</a>
        </Modal>
    }
}
