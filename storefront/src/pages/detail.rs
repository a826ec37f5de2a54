//! Single product view.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shop_commerce::prelude::*;

use crate::notify::confirm;
use crate::routes::AppRoute;
use crate::state::{use_product, AppState, Lookup};

use super::{use_id_param, Loading, ProductNotFound};

#[component]
pub fn ProductPage() -> impl IntoView {
    let lookup = use_product(use_id_param());

    move || match lookup.get() {
        Lookup::Loading => view! { <Loading/> }.into_any(),
        Lookup::Missing => view! { <ProductNotFound/> }.into_any(),
        Lookup::Found(product) => view! { <ProductDetail product/> }.into_any(),
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let state = AppState::expect();
    let navigate = use_navigate();

    let image = product.image_or(&state.placeholder_image()).to_string();
    let edit = AppRoute::EditProduct(product.id.clone()).href();
    let name = product.name.clone();
    let alt = name.clone();
    let price = product.price_display();
    let description = product.description.clone();

    let id = product.id.clone();
    let on_delete = move |_| {
        if !confirm("Are you sure you want to delete this product?") {
            return;
        }
        let navigate = navigate.clone();
        state.delete_product(id.clone(), move || {
            navigate(&AppRoute::Products.href(), Default::default())
        });
    };
    let on_add = move |_| state.add_to_cart(product.clone());

    view! {
        <div class="product-detail">
            <A href=AppRoute::Products.href()>"Back to products"</A>
            <img src=image alt=alt/>
            <div class="info">
                <h2>{name}</h2>
                <p class="price">{price}</p>
                {description.map(|d| view! { <p class="description">{d}</p> })}
                <div class="actions">
                    <button on:click=on_add>"Add to Cart"</button>
                    <A href=edit>"Edit"</A>
                    <button class="danger" on:click=on_delete>"Delete"</button>
                </div>
            </div>
        </div>
    }
}
