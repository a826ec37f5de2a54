//! Product listing with search, price filter and sort.

use leptos::prelude::*;
use leptos_router::components::A;
use shop_commerce::prelude::*;

use crate::notify::confirm;
use crate::routes::AppRoute;
use crate::state::AppState;

const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

/// How many placeholder cards to show while the catalog loads.
const SKELETON_CARDS: usize = 6;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let state = AppState::expect();

    let search = RwSignal::new(String::new());
    let min_price = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());
    let sort = RwSignal::new(SortMode::None);

    let visible = Memo::new(move |_| {
        let query = CatalogQuery::new()
            .with_text(search.get())
            .with_price(PriceRange::from_inputs(&min_price.get(), &max_price.get()))
            .with_sort(sort.get());
        state.catalog.with(|c| query.apply(c.products()))
    });

    view! {
        <div class="products-page">
            <div class="toolbar">
                <h2>"Products"</h2>
                <A href=AppRoute::NewProduct.href()>"Add Product"</A>
            </div>

            <div class="filters">
                <input
                    type="search"
                    placeholder="Search products..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Min price"
                    prop:value=move || min_price.get()
                    on:input=move |ev| min_price.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Max price"
                    prop:value=move || max_price.get()
                    on:input=move |ev| max_price.set(event_target_value(&ev))
                />
                <select on:change=move |ev| sort.set(SortMode::from_value(&event_target_value(&ev)))>
                    {SortMode::ALL
                        .into_iter()
                        .map(|mode| {
                            view! {
                                <option value=mode.as_str() selected=move || sort.get() == mode>
                                    {mode.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <Show
                when=move || !state.catalog.with(|c| c.is_loading())
                fallback=|| view! { <Skeleton/> }
            >
                <Show
                    when=move || !visible.with(|v| v.is_empty())
                    fallback=|| view! { <p class="empty">"No products found"</p> }
                >
                    <div class="products">
                        {move || {
                            visible
                                .get()
                                .into_iter()
                                .map(|p| view! { <ProductCard product=p query=search/> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn Skeleton() -> impl IntoView {
    view! {
        <div class="products">
            {(0..SKELETON_CARDS)
                .map(|_| {
                    view! {
                        <div class="product-card skeleton">
                            <div class="skeleton-image"></div>
                            <div class="skeleton-line"></div>
                            <div class="skeleton-line short"></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// One catalog entry. Name matches for `query` are wrapped in `<mark>`.
#[component]
pub fn ProductCard(product: Product, #[prop(into)] query: Signal<String>) -> impl IntoView {
    let state = AppState::expect();
    let image = product.image_or(&state.placeholder_image()).to_string();
    let detail = AppRoute::ProductDetail(product.id.clone()).href();
    let image_link = detail.clone();
    let edit = AppRoute::EditProduct(product.id.clone()).href();
    let price = product.price_display();
    let description = product.description.clone();
    let name = product.name.clone();
    let alt = name.clone();

    let highlighted = move || {
        let query = query.get();
        highlight(&name, &query)
            .into_iter()
            .map(|segment| {
                let text = segment.text.to_string();
                if segment.matched {
                    view! { <mark>{text}</mark> }.into_any()
                } else {
                    text.into_any()
                }
            })
            .collect_view()
    };

    let id = product.id.clone();
    let on_delete = move |_| {
        if confirm(DELETE_PROMPT) {
            state.delete_product(id.clone(), || {});
        }
    };
    let on_add = move |_| state.add_to_cart(product.clone());

    view! {
        <div class="product-card">
            <A href=image_link>
                <img src=image alt=alt/>
            </A>
            <h3>
                <A href=detail>{highlighted}</A>
            </h3>
            <p class="price">{price}</p>
            {description.map(|d| view! { <p class="description">{d}</p> })}
            <div class="actions">
                <button on:click=on_add>"Add to Cart"</button>
                <A href=edit>"Edit"</A>
                <button class="danger" on:click=on_delete>"Delete"</button>
            </div>
        </div>
    }
}
