//! Catalog query: filter then sort.

use std::cmp::Ordering;

use crate::catalog::Product;
use crate::search::{matches_name, PriceRange};

/// Sort modes offered on the products page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Keep catalog order.
    #[default]
    None,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::None,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::NameAsc,
        SortMode::NameDesc,
    ];

    /// Value used in the `<select>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::None => "",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::NameAsc => "name-asc",
            SortMode::NameDesc => "name-desc",
        }
    }

    /// Unknown values fall back to [`SortMode::None`].
    pub fn from_value(s: &str) -> Self {
        match s {
            "price-asc" => SortMode::PriceAsc,
            "price-desc" => SortMode::PriceDesc,
            "name-asc" => SortMode::NameAsc,
            "name-desc" => SortMode::NameDesc,
            _ => SortMode::None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::None => "No sorting",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
            SortMode::NameAsc => "Name: A-Z",
            SortMode::NameDesc => "Name: Z-A",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortMode::None => Ordering::Equal,
            SortMode::PriceAsc => a.price.total_cmp(&b.price),
            SortMode::PriceDesc => b.price.total_cmp(&a.price),
            SortMode::NameAsc => compare_names(&a.name, &b.name),
            SortMode::NameDesc => compare_names(&b.name, &a.name),
        }
    }
}

/// Locale-aware name ordering, as `String.prototype.localeCompare` in the
/// browser's default locale.
#[cfg(target_arch = "wasm32")]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new())
        .cmp(&0)
}

/// Collation fallback outside the browser.
///
/// Compares accent-folded, lowercased text first, so `Éclair` sorts with the
/// other `e` names. Ties fall to accents, then case (lowercase first),
/// then raw text.
#[cfg(not(target_arch = "wasm32"))]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let (a_base, b_base) = (fold(a), fold(b));
    a_base
        .to_lowercase()
        .cmp(&b_base.to_lowercase())
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b_base.cmp(&a_base))
        .then_with(|| a.cmp(b))
}

/// Strip combining marks after canonical decomposition.
#[cfg(not(target_arch = "wasm32"))]
fn fold(text: &str) -> String {
    use unicode_normalization::char::is_combining_mark;
    use unicode_normalization::UnicodeNormalization;

    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Filter `items` by name and price, then sort.
///
/// Pure and cheap enough to re-run on every render.
pub fn apply(items: &[Product], query: &str, bounds: PriceRange, sort: SortMode) -> Vec<Product> {
    let mut result: Vec<Product> = items
        .iter()
        .filter(|p| matches_name(&p.name, query) && bounds.contains(p.price))
        .cloned()
        .collect();

    if sort != SortMode::None {
        result.sort_by(|a, b| sort.compare(a, b));
    }
    result
}

/// The products page's filter state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub text: String,
    pub price: PriceRange,
    pub sort: SortMode,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Run [`apply`] with this query.
    pub fn apply(&self, items: &[Product]) -> Vec<Product> {
        apply(items, &self.text, self.price, self.sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(prices: &[f64]) -> Vec<Product> {
        prices
            .iter()
            .enumerate()
            .map(|(i, p)| Product::new(i.to_string(), format!("Item {}", i), *p))
            .collect()
    }

    fn prices(items: &[Product]) -> Vec<f64> {
        items.iter().map(|p| p.price).collect()
    }

    fn names(items: &[Product]) -> Vec<&str> {
        items.iter().map(|p| p.name.as_str()).collect()
    }

    fn fruit() -> Vec<Product> {
        vec![
            Product::new("1", "banana", 1.0),
            Product::new("2", "Apple Watch", 399.0),
            Product::new("3", "Cherry", 3.0),
        ]
    }

    #[test]
    fn test_sort_price_asc_and_desc() {
        let items = priced(&[30.0, 10.0, 20.0]);

        let asc = apply(&items, "", PriceRange::unbounded(), SortMode::PriceAsc);
        assert_eq!(prices(&asc), vec![10.0, 20.0, 30.0]);

        let desc = apply(&items, "", PriceRange::unbounded(), SortMode::PriceDesc);
        assert_eq!(prices(&desc), vec![30.0, 20.0, 10.0]);
    }

    #[test]
    fn test_sort_none_keeps_order() {
        let items = priced(&[30.0, 10.0, 20.0]);
        let out = apply(&items, "", PriceRange::unbounded(), SortMode::None);
        assert_eq!(out, items);
    }

    #[test]
    fn test_sort_names_ignore_case() {
        let asc = apply(&fruit(), "", PriceRange::unbounded(), SortMode::NameAsc);
        assert_eq!(names(&asc), vec!["Apple Watch", "banana", "Cherry"]);

        let desc = apply(&fruit(), "", PriceRange::unbounded(), SortMode::NameDesc);
        assert_eq!(names(&desc), vec!["Cherry", "banana", "Apple Watch"]);
    }

    #[test]
    fn test_sort_names_with_accents() {
        let items = vec![
            Product::new("1", "Zebra", 1.0),
            Product::new("2", "Éclair", 2.0),
            Product::new("3", "apple", 3.0),
        ];

        let asc = apply(&items, "", PriceRange::unbounded(), SortMode::NameAsc);
        assert_eq!(names(&asc), vec!["apple", "Éclair", "Zebra"]);

        let desc = apply(&items, "", PriceRange::unbounded(), SortMode::NameDesc);
        assert_eq!(names(&desc), vec!["Zebra", "Éclair", "apple"]);
    }

    #[test]
    fn test_compare_names_tiebreaks() {
        assert_eq!(compare_names("eclair", "éclair"), Ordering::Less);
        assert_eq!(compare_names("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_names("Apple", "Apple"), Ordering::Equal);
    }

    #[test]
    fn test_text_filter() {
        let out = apply(&fruit(), "app", PriceRange::unbounded(), SortMode::None);
        assert_eq!(names(&out), vec!["Apple Watch"]);
    }

    #[test]
    fn test_combined_filter_and_sort() {
        let query = CatalogQuery::new()
            .with_price(PriceRange::new(Some(1.0), Some(10.0)))
            .with_sort(SortMode::PriceDesc);
        assert_eq!(names(&query.apply(&fruit())), vec!["Cherry", "banana"]);

        let query = query.with_text("an");
        assert_eq!(names(&query.apply(&fruit())), vec!["banana"]);
    }

    #[test]
    fn test_sort_mode_select_values() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::from_value(mode.as_str()), mode);
        }
        assert_eq!(SortMode::from_value("bogus"), SortMode::None);
    }
}
