//! Product catalog and shopping cart storefront.
//!
//! A client-rendered Leptos app:
//! - Catalog pages backed by a REST product resource
//! - Search, price filter and sort on the product list
//! - A cart kept in `localStorage`

mod app;
pub mod config;
mod logging;
pub mod notify;
mod pages;
pub mod routes;
mod state;

pub use app::App;
pub use config::ShopConfig;

/// Mount the app on `<body>`.
#[cfg(feature = "csr")]
pub fn run() {
    use leptos::prelude::*;

    let config = ShopConfig::embedded();
    logging::init(&config.log_level);
    leptos::mount::mount_to_body(move || view! { <App config/> });
}
