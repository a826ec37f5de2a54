//! Product catalog module.
//!
//! Contains the product type, the product form mapping, and the local
//! catalog state.

mod form;
mod product;
mod state;

pub use form::{ProductDraft, ProductForm};
pub use product::{format_price, Product};
pub use state::CatalogState;
