//! Application shell and router.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::config::ShopConfig;
use crate::pages::{CartPage, EditProductPage, HomePage, NewProductPage, ProductPage, ProductsPage};
use crate::routes::AppRoute;
use crate::state::AppState;

#[component]
pub fn App(config: ShopConfig) -> impl IntoView {
    provide_meta_context();

    let title = config.title.clone();
    tracing::info!(app = %config.app_name, api = %config.api_base_url, "starting storefront");

    let state = AppState::new(config);
    provide_context(state);
    state.load_catalog();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="Product catalog and shopping cart"/>
        <Title text=title/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/products/new") view=NewProductPage/>
                    <Route path=path!("/products/:id") view=ProductPage/>
                    <Route path=path!("/products/:id/edit") view=EditProductPage/>
                    <Route path=path!("/cart") view=CartPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    let state = AppState::expect();
    let count = move || state.cart.with(|c| c.cart().item_count());

    view! {
        <header>
            <h1>{move || state.config.with_value(|c| c.title.clone())}</h1>
            <nav>
                <A href=AppRoute::Home.href()>"Home"</A>
                <A href=AppRoute::Products.href()>"Products"</A>
                <A href=AppRoute::NewProduct.href()>"Add Product"</A>
                <A href=AppRoute::Cart.href()>"Cart (" {count} ")"</A>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Catalog served by a mock REST backend. Cart kept in this browser."</p>
        </footer>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <A href=AppRoute::Home.href()>"Back to Home"</A>
        </div>
    }
}
