//! Application state shared through Leptos context.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shop_cache::LocalStorage;
use shop_commerce::prelude::*;
use shop_data::{ProductApi, ProductService, ReqwestTransport};

use crate::config::ShopConfig;
use crate::notify::BrowserNotifier;

/// The persisted cart as the app holds it.
pub type BrowserCart = CartStore<LocalStorage, BrowserNotifier>;

/// The product calls as the app makes them.
pub type BrowserProducts = ProductService<ReqwestTransport, BrowserNotifier>;

/// Everything pages read and write. Cheap to copy; provided once by `App`.
#[derive(Clone, Copy)]
pub struct AppState {
    pub config: StoredValue<ShopConfig>,
    pub catalog: RwSignal<CatalogState>,
    pub cart: RwSignal<BrowserCart>,
}

impl AppState {
    /// Build the state and rehydrate the cart from localStorage.
    pub fn new(config: ShopConfig) -> Self {
        let cart = CartStore::load(LocalStorage::new(), BrowserNotifier, config.cart_storage_key.clone());
        Self {
            config: StoredValue::new(config),
            catalog: RwSignal::new(CatalogState::new()),
            cart: RwSignal::new(cart),
        }
    }

    /// Fetch from context.
    pub fn expect() -> Self {
        expect_context::<AppState>()
    }

    /// A product service pointed at the configured backend.
    pub fn products(&self) -> BrowserProducts {
        let base_url = self.config.with_value(|c| c.api_base_url.clone());
        ProductService::new(ProductApi::new(base_url), BrowserNotifier)
    }

    pub fn placeholder_image(&self) -> String {
        self.config.with_value(|c| c.placeholder_image.clone())
    }

    /// Load the catalog once. Failures leave it empty but no longer loading.
    pub fn load_catalog(&self) {
        let catalog = self.catalog;
        let service = self.products();
        spawn_local(async move {
            let products = service.list().await;
            catalog.update(|c| c.finish_loading(products));
        });
    }

    /// Delete remotely, then locally on success.
    pub fn delete_product(&self, id: ProductId, then: impl FnOnce() + 'static) {
        let catalog = self.catalog;
        let service = self.products();
        spawn_local(async move {
            if service.delete(&id).await.is_ok() {
                catalog.update(|c| {
                    c.remove(&id);
                });
                then();
            }
        });
    }

    pub fn add_to_cart(&self, product: Product) {
        self.cart.update(|c| c.add(product));
    }
}

/// The product a detail or edit page is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Loading,
    Found(Product),
    Missing,
}

/// Track the product named by the `:id` route parameter.
///
/// Uses the local catalog when it already has the product, otherwise asks
/// the backend.
pub fn use_product(id: Memo<Option<String>>) -> ReadSignal<Lookup> {
    let state = AppState::expect();
    let (lookup, set_lookup) = signal(Lookup::Loading);

    Effect::new(move |_| {
        let Some(id) = id.get().map(ProductId::new) else {
            set_lookup.set(Lookup::Missing);
            return;
        };

        if let Some(product) = state.catalog.with_untracked(|c| c.find(&id).cloned()) {
            set_lookup.set(Lookup::Found(product));
            return;
        }

        set_lookup.set(Lookup::Loading);
        let service = state.products();
        spawn_local(async move {
            let next = match service.get(&id).await {
                Ok(product) => Lookup::Found(product),
                Err(_) => Lookup::Missing,
            };
            set_lookup.set(next);
        });
    });

    lookup
}
