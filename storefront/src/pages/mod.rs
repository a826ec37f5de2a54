//! Page components.

mod cart;
mod detail;
mod editor;
mod home;
mod products;

pub use cart::CartPage;
pub use detail::ProductPage;
pub use editor::{EditProductPage, NewProductPage};
pub use home::HomePage;
pub use products::ProductsPage;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::routes::AppRoute;

/// The `:id` route parameter, if present.
fn use_id_param() -> Memo<Option<String>> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get("id")).filter(|id| !id.is_empty()))
}

#[component]
fn ProductNotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <p>"Product not found"</p>
            <A href=AppRoute::Products.href()>"Back to products"</A>
        </div>
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! { <p class="loading">"Loading..."</p> }
}
