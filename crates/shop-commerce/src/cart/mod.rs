//! Shopping cart module.
//!
//! [`Cart`] is the pure reducer; [`CartStore`] owns one and mirrors it to
//! persistent storage after every change.

mod cart;
mod store;

pub use cart::{Cart, CartItem};
pub use store::{CartStore, DEFAULT_CART_KEY};
