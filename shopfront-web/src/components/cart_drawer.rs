use shopfront_core::{CartLedger, CartTotals};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub cart: CartLedger,
    pub totals: CartTotals,
    pub on_remove: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(CartDrawer)]
pub fn cart_drawer(p: &Props) -> Html {
    if !p.open {
        return Html::default();
    }

    let on_close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <aside id="cart-drawer" class="drawer drawer--cart" aria-label="Shopping cart">
            <div class="drawer__header">
                <h2>{"Your cart"}</h2>
                <button class="drawer__close" aria-label="Close cart" onclick={on_close}>{"X"}</button>
            </div>
            if p.cart.is_empty() {
                <p class="cart-empty">{"Your cart is empty."}</p>
            } else {
                <ul class="cart-lines">
                    { for p.cart.iter().map(|(id, line)| {
                        let remove = {
                            let cb = p.on_remove.clone();
                            let id = id.clone();
                            Callback::from(move |_| cb.emit(id.clone()))
                        };
                        html! {
                            <li class="cart-line" data-testid={format!("cart-line-{id}")}>
                                <span class="cart-line__name">{ &line.name }</span>
                                <span class="cart-line__qty">{ format!("x{}", line.quantity) }</span>
                                <span class="cart-line__price">
                                    { format!("${:.2}", line.unit_price * f64::from(line.quantity)) }
                                </span>
                                <button class="btn btn-ghost" aria-label={format!("Remove {}", line.name)} onclick={remove}>
                                    {"Remove"}
                                </button>
                            </li>
                        }
                    }) }
                </ul>
                <p class="cart-totals" data-testid="cart-total">
                    { format!("{} item(s) — total ${:.2}", p.totals.item_count, p.totals.grand_total) }
                </p>
            }
        </aside>
    }
}
