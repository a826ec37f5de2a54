//! Shopping cart page.

use leptos::prelude::*;
use leptos_router::components::A;
use shop_commerce::prelude::*;

use crate::routes::AppRoute;
use crate::state::AppState;

#[component]
pub fn CartPage() -> impl IntoView {
    let state = AppState::expect();
    let is_empty = move || state.cart.with(|c| c.cart().is_empty());
    let total = move || state.cart.with(|c| c.cart().total_display());
    let items = move || state.cart.with(|c| c.cart().items().to_vec());

    view! {
        <div class="cart-page">
            <h2>"Shopping Cart"</h2>
            <Show
                when=move || !is_empty()
                fallback=|| {
                    view! {
                        <div class="empty">
                            <p>"Your cart is empty"</p>
                            <A href=AppRoute::Products.href()>"Browse Products"</A>
                        </div>
                    }
                }
            >
                <table class="cart">
                    <thead>
                        <tr>
                            <th>"Product"</th>
                            <th>"Price"</th>
                            <th>"Quantity"</th>
                            <th>"Subtotal"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items().into_iter().map(|item| view! { <CartRow item/> }).collect_view()}
                    </tbody>
                </table>
                <div class="cart-summary">
                    <p class="total">"Total: " {total}</p>
                    <button class="danger" on:click=move |_| state.cart.update(|c| c.clear())>
                        "Clear Cart"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CartRow(item: CartItem) -> impl IntoView {
    let state = AppState::expect();
    let detail = AppRoute::ProductDetail(item.id().clone()).href();
    let quantity = item.quantity.to_string();
    let subtotal = item.subtotal_display();
    let price = item.product.price_display();
    let name = item.product.name.clone();

    let id = item.id().clone();
    let on_quantity = move |ev: leptos::ev::Event| {
        // Half-typed or non-numeric input leaves the cart alone.
        if let Ok(quantity) = event_target_value(&ev).trim().parse::<i64>() {
            state.cart.update(|c| {
                c.set_quantity(&id, quantity);
            });
        }
    };
    let id = item.id().clone();
    let on_remove = move |_| {
        state.cart.update(|c| {
            c.remove(&id);
        });
    };

    view! {
        <tr>
            <td>
                <A href=detail>{name}</A>
            </td>
            <td>{price}</td>
            <td>
                <input type="number" min="0" prop:value=quantity on:change=on_quantity/>
            </td>
            <td>{subtotal}</td>
            <td>
                <button on:click=on_remove>"Remove"</button>
            </td>
        </tr>
    }
}
