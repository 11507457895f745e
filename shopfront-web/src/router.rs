use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/product")]
    Product,
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// Extract a query parameter from a raw `location.search` string.
///
/// This is the navigation contract between the grid and detail pages: the
/// grid links to `/product?id=<id>` and the detail page reads `id` back.
#[must_use]
pub fn query_param(search: &str, name: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == name && !value.is_empty() {
            return Some(value.to_string());
        }
    }
    None
}

/// The `id` query parameter of the current page, if any.
#[must_use]
pub fn current_product_id() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    query_param(&search, "id")
}

/// Link target for a product detail page.
#[must_use]
pub fn product_href(id: &str) -> String {
    format!("{}?id={id}", crate::paths::asset_path("product"))
}
