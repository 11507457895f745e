use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer role="contentinfo">
            <p>{"Shopfront — demo storefront. No orders are actually placed."}</p>
        </footer>
    }
}
