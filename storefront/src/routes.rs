//! URL routes.

use std::fmt;

use shop_commerce::ProductId;

/// Every page the storefront can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Products,
    NewProduct,
    ProductDetail(ProductId),
    EditProduct(ProductId),
    Cart,
}

impl AppRoute {
    /// The path to link to.
    pub fn href(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::Products => "/products".to_string(),
            AppRoute::NewProduct => "/products/new".to_string(),
            AppRoute::ProductDetail(id) => format!("/products/{}", id),
            AppRoute::EditProduct(id) => format!("/products/{}/edit", id),
            AppRoute::Cart => "/cart".to_string(),
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_hrefs() {
        assert_eq!(AppRoute::Home.href(), "/");
        assert_eq!(AppRoute::Products.href(), "/products");
        assert_eq!(AppRoute::NewProduct.href(), "/products/new");
        assert_eq!(AppRoute::Cart.href(), "/cart");
    }

    #[test]
    fn test_product_hrefs() {
        let id = ProductId::new("42");
        assert_eq!(AppRoute::ProductDetail(id.clone()).href(), "/products/42");
        assert_eq!(AppRoute::EditProduct(id).href(), "/products/42/edit");
    }

    #[test]
    fn test_display_matches_href() {
        let route = AppRoute::EditProduct(ProductId::new("7"));
        assert_eq!(route.to_string(), route.href());
    }
}
