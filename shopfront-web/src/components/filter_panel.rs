use shopfront_core::{FilterState, PriceBounds};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub filters: FilterState,
    pub bounds: PriceBounds,
    /// Rendered as a sidebar overlay on small viewports.
    pub open_as_overlay: bool,
    pub on_close: Callback<()>,
    pub on_category: Callback<String>,
    pub on_brand: Callback<String>,
    /// `(min, max)` — `None` leaves that end of the range untouched.
    pub on_price_range: Callback<(Option<f64>, Option<f64>)>,
    pub on_clear: Callback<()>,
}

fn parsed_number(e: &web_sys::Event) -> Option<f64> {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.value().parse::<f64>().ok())
}

#[function_component(FilterPanel)]
pub fn filter_panel(p: &Props) -> Html {
    let on_category = {
        let cb = p.on_category.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    let on_min = {
        let cb = p.on_price_range.clone();
        Callback::from(move |e: web_sys::Event| cb.emit((parsed_number(&e), None)))
    };
    let on_max = {
        let cb = p.on_price_range.clone();
        Callback::from(move |e: web_sys::Event| cb.emit((None, parsed_number(&e))))
    };
    let on_clear = {
        let cb = p.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let class = classes!(
        "filter-panel",
        p.open_as_overlay.then_some("filter-panel--overlay")
    );

    html! {
        <aside id="filter-panel" {class} aria-label="Product filters">
            if p.open_as_overlay {
                <button class="filter-panel__close" aria-label="Close filters" onclick={on_close}>
                    {"X"}
                </button>
            }
            <div class="filter-group">
                <label for="category-select">{"Category"}</label>
                <select id="category-select" onchange={on_category} value={p.filters.selected_category.clone()}>
                    <option value="" selected={p.filters.selected_category.is_empty()}>{"All categories"}</option>
                    { for p.categories.iter().map(|c| {
                        let selected = c.eq_ignore_ascii_case(&p.filters.selected_category);
                        html! { <option value={c.clone()} {selected}>{ c.clone() }</option> }
                    }) }
                </select>
            </div>
            <fieldset class="filter-group">
                <legend>{"Brands"}</legend>
                { for p.brands.iter().map(|brand| {
                    let checked = p.filters.selected_brands.contains(brand);
                    let onchange = {
                        let cb = p.on_brand.clone();
                        let brand = brand.clone();
                        Callback::from(move |_: web_sys::Event| cb.emit(brand.clone()))
                    };
                    html! {
                        <label class="filter-brand">
                            <input type="checkbox" {checked} {onchange} />
                            { brand.clone() }
                        </label>
                    }
                }) }
            </fieldset>
            <div class="filter-group">
                <label for="min-price">{"Min price"}</label>
                <input
                    id="min-price" type="number"
                    min={p.bounds.min.to_string()} max={p.bounds.max.to_string()}
                    value={p.filters.min_price.to_string()}
                    onchange={on_min}
                />
                <label for="max-price">{"Max price"}</label>
                <input
                    id="max-price" type="number"
                    min={p.bounds.min.to_string()} max={p.bounds.max.to_string()}
                    value={p.filters.max_price.to_string()}
                    onchange={on_max}
                />
            </div>
            <button class="btn btn-ghost" data-testid="clear-filters" onclick={on_clear}>
                {"Clear filters"}
            </button>
        </aside>
    }
}
