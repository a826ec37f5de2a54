//! Search module.
//!
//! The products page filter/sort pipeline and search-term highlighting.

mod filter;
mod query;

pub use filter::{highlight, matches_name, PriceRange, Segment};
pub use query::{apply, compare_names, CatalogQuery, SortMode};
