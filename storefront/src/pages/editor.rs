//! Create and edit forms.

use std::future::Future;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shop_commerce::prelude::*;

use crate::routes::AppRoute;
use crate::state::{use_product, AppState, Lookup};

use super::{use_id_param, Loading, ProductNotFound};

#[component]
pub fn NewProductPage() -> impl IntoView {
    let state = AppState::expect();
    let navigate = use_navigate();

    let save = move |draft: ProductDraft| {
        let service = state.products();
        let navigate = navigate.clone();
        async move {
            if let Ok(product) = service.create(draft).await {
                state.catalog.update(|c| c.insert(product));
                navigate(&AppRoute::Products.href(), Default::default());
            }
        }
    };

    view! {
        <div class="product-form">
            <h2>"Add Product"</h2>
            {product_editor(ProductForm::default(), "Create Product", save)}
        </div>
    }
}

#[component]
pub fn EditProductPage() -> impl IntoView {
    let state = AppState::expect();
    let navigate = use_navigate();
    let lookup = use_product(use_id_param());

    move || match lookup.get() {
        Lookup::Loading => view! { <Loading/> }.into_any(),
        Lookup::Missing => view! { <ProductNotFound/> }.into_any(),
        Lookup::Found(product) => {
            let id = product.id.clone();
            let navigate = navigate.clone();
            let save = move |draft: ProductDraft| {
                let service = state.products();
                let navigate = navigate.clone();
                let id = id.clone();
                async move {
                    if let Ok(updated) = service.update(&id, draft).await {
                        state.catalog.update(|c| {
                            if !c.replace(updated.clone()) {
                                c.insert(updated);
                            }
                        });
                        navigate(&AppRoute::Products.href(), Default::default());
                    }
                }
            };

            view! {
                <div class="product-form">
                    <h2>"Edit Product"</h2>
                    {product_editor(ProductForm::from_product(&product), "Save Changes", save)}
                </div>
            }
            .into_any()
        }
    }
}

/// The shared product form.
///
/// Fields stay raw strings until submit. A failed validation shows inline;
/// a valid draft goes to `on_submit`, and the button is disabled until the
/// returned future finishes.
fn product_editor<F, Fut>(initial: ProductForm, submit_label: &'static str, on_submit: F) -> impl IntoView
where
    F: Fn(ProductDraft) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let form = RwSignal::new(initial);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.with_untracked(ProductForm::validate) {
            Err(e) => error.set(Some(e.to_string())),
            Ok(draft) => {
                error.set(None);
                pending.set(true);
                let saving = on_submit(draft);
                spawn_local(async move {
                    saving.await;
                    // The page may be gone after a successful save.
                    let _ = pending.try_set(false);
                });
            }
        }
    };

    view! {
        <form on:submit=submit>
            <label>
                "Name"
                <input
                    type="text"
                    required
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </label>
            <label>
                "Price"
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    required
                    prop:value=move || form.with(|f| f.price.clone())
                    on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <textarea
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "Image URL"
                <input
                    type="url"
                    prop:value=move || form.with(|f| f.image.clone())
                    on:input=move |ev| form.update(|f| f.image = event_target_value(&ev))
                />
            </label>

            {move || error.get().map(|e| view! { <p class="error">{e}</p> })}

            <div class="actions">
                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Saving..." } else { submit_label }}
                </button>
                <A href=AppRoute::Products.href()>"Cancel"</A>
            </div>
        </form>
    }
}
