//! Mapping between the product form and product values.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Raw form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

impl ProductForm {
    /// Prefill the form from an existing product (edit page).
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone().unwrap_or_default(),
            image: product.image.clone().unwrap_or_default(),
        }
    }

    /// Validate the fields into a draft.
    pub fn validate(&self) -> Result<ProductDraft, CommerceError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CommerceError::validation("name", "must not be empty"));
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| CommerceError::validation("price", format!("{:?} is not a number", self.price)))?;
        if !price.is_finite() || price < 0.0 {
            return Err(CommerceError::validation("price", "must be zero or more"));
        }

        Ok(ProductDraft {
            name: name.to_string(),
            price,
            description: non_empty(&self.description),
            image: non_empty(&self.image),
        })
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Validated product fields without an id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl ProductDraft {
    /// Attach an id.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            image: self.image,
        }
    }
}
