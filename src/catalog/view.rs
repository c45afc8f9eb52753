// src/catalog/view.rs
use super::models::{Category, Product};
use super::Catalog;
use crate::query::Params;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Products",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// Unknown values fall back to `All`.
    pub fn parse(raw: &str) -> Self {
        Category::parse(raw).map_or(CategoryFilter::All, CategoryFilter::Only)
    }

    pub fn matches(self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => product.category == c,
        }
    }

    /// "all" first, then each category.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    Location,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Location,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Location => "location",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name (A-Z)",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Location => "Location",
        }
    }

    /// Unknown values fall back to `Name`.
    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == raw)
            .unwrap_or_default()
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Name => locale_cmp(&a.name, &b.name),
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::Location => locale_cmp(&a.location, &b.location),
        }
    }
}

/// Case-insensitive first, exact text as tie-break, so "apples" and
/// "Apples" sit together the way a locale collation would place them.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Marketplace grid state, carried in the query string:
/// `filter`, `q` and `sort`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub filter: CategoryFilter,
    pub query: String,
    pub sort: SortKey,
}

impl ViewState {
    pub fn from_params(params: &Params) -> Self {
        Self {
            filter: params
                .get("filter")
                .map_or(CategoryFilter::All, |f| CategoryFilter::parse(f)),
            query: params.get("q").cloned().unwrap_or_default(),
            sort: params.get("sort").map_or(SortKey::Name, |s| SortKey::parse(s)),
        }
    }

    pub fn with_filter(&self, filter: CategoryFilter) -> Self {
        Self {
            filter,
            ..self.clone()
        }
    }

    /// Non-default fields only, so the bare page URL is the default view.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if self.filter != CategoryFilter::All {
            pairs.push(("filter", self.filter.as_str()));
        }
        if !self.query.is_empty() {
            pairs.push(("q", self.query.as_str()));
        }
        if self.sort != SortKey::Name {
            pairs.push(("sort", self.sort.as_str()));
        }
        pairs
    }
}

/// Products matching the filter and search text, ordered by the sort key.
pub fn recompute<'a>(catalog: &'a Catalog, state: &ViewState) -> Vec<&'a Product> {
    let needle = state.query.to_lowercase();

    let mut rows: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| state.filter.matches(p))
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.location.to_lowercase().contains(&needle)
        })
        .collect();

    // stable, so equal keys keep catalog order
    rows.sort_by(|a, b| state.sort.compare(a, b));
    rows
}
