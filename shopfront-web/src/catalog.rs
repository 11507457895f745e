//! One-shot fetch of the static product catalog
use shopfront_core::{Catalog, Product};
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed product data: {0}")]
    Json(String),
}

/// Lifecycle of the catalog for the current page load. `Loading` doubles as
/// the in-flight guard; the fetch is only issued while in that state.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    Loading,
    Ready(Rc<Catalog>),
    Failed(String),
}

impl CatalogStatus {
    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Ready(catalog) => Some(catalog),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

/// Fetch the product list with a cache-defeating query parameter.
///
/// # Errors
///
/// Returns a [`CatalogError`] for network failures, non-success statuses
/// and malformed JSON. The caller maps any error to
/// [`CatalogStatus::Failed`] and an inline page message; a failed fetch is
/// never fatal.
#[allow(clippy::future_not_send)] // Wasm futures are single-threaded.
pub async fn fetch_catalog() -> Result<Catalog, CatalogError> {
    let cache_buster = js_sys::Date::now() as u64;
    let url = format!("{}?v={cache_buster}", crate::paths::products_data_url());
    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|err| CatalogError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }
    let products: Vec<Product> = response
        .json()
        .await
        .map_err(|err| CatalogError::Json(err.to_string()))?;
    Ok(Catalog::from_products(products))
}
