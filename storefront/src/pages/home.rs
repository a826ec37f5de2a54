//! Home page.

use leptos::prelude::*;
use leptos_router::components::A;

use super::products::ProductCard;
use super::Loading;
use crate::routes::AppRoute;
use crate::state::AppState;

/// How many catalog entries the home page previews.
const FEATURED: usize = 3;

/// Home page with hero section
#[component]
pub fn HomePage() -> impl IntoView {
    let state = AppState::expect();
    let featured = move || {
        state
            .catalog
            .with(|c| c.products().iter().take(FEATURED).cloned().collect::<Vec<_>>())
    };
    let no_query = Signal::derive(String::new);

    view! {
        <div class="hero">
            <h2>"Welcome"</h2>
            <p>"Browse the catalog, manage products, and fill your cart."</p>
            <A href=AppRoute::Products.href()>"Browse Products"</A>
        </div>

        <h2>"Featured Products"</h2>
        <Show
            when=move || !state.catalog.with(|c| c.is_loading())
            fallback=|| view! { <Loading/> }
        >
            <div class="products">
                {move || {
                    featured()
                        .into_iter()
                        .map(|p| view! { <ProductCard product=p query=no_query/> })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
