use shopfront_core::Product;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Already resolved against the catalog and with the current product
    /// filtered out.
    pub products: Vec<Product>,
}

#[function_component(RecentlyViewedStrip)]
pub fn recently_viewed_strip(p: &Props) -> Html {
    if p.products.is_empty() {
        return Html::default();
    }
    html! {
        <section class="recently-viewed" aria-label="Recently viewed">
            <h2>{"Recently viewed"}</h2>
            <ul class="recently-viewed__list">
                { for p.products.iter().map(|product| html! {
                    <li key={product.id.clone()}>
                        <a href={crate::router::product_href(&product.id)}>
                            if let Some(src) = product.image_urls.first() {
                                <img
                                    src={crate::paths::asset_path(src)}
                                    alt={product.alt_text.clone().unwrap_or_else(|| product.name.clone())}
                                    loading="lazy"
                                />
                            }
                            <span>{ &product.name }</span>
                        </a>
                    </li>
                }) }
            </ul>
        </section>
    }
}
