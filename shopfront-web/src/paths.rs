//! Helpers for constructing URLs to static assets that respect the deployment base path.

/// Prefix a relative asset path with the compile-time `PUBLIC_URL` base
/// (e.g. `/shop` when hosted under a subdirectory). Local builds without
/// `PUBLIC_URL` fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(option_env!("PUBLIC_URL").unwrap_or(""), relative)
}

/// Base path for the router; `None` when the app is served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    let base = option_env!("PUBLIC_URL").unwrap_or("").trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

/// URL of the static product data file.
#[must_use]
pub fn products_data_url() -> String {
    asset_path("static/assets/data/products.json")
}

fn join_base(base: &str, relative: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');
    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
