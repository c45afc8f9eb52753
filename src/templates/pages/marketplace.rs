use crate::catalog::{CategoryFilter, Product, SortKey, ViewState};
use crate::modal::open_href;
use crate::query::{href, Params};
use crate::templates::components::{product_card, section_header};
use maud::{html, Markup};

pub struct MarketplaceVm<'a> {
    pub path: &'a str,
    pub params: &'a Params,
    pub state: &'a ViewState,
    pub products: &'a [&'a Product],
}

pub fn marketplace_page(vm: &MarketplaceVm) -> Markup {
    html! {
        section class="page-hero" {
            h1 { "Marketplace" }
            p class="hero-subtitle" { "Fresh produce listed directly by farmers." }
        }

        section class="marketplace" id="marketplace" {
            (section_header("Browse Produce", "Filter by category, search by name or region, and sort the results."))
            (controls(vm))
            (grid(vm))
        }
    }
}

/// Every control carries the full view state so none resets the others.
fn controls(vm: &MarketplaceVm) -> Markup {
    let state = vm.state;

    html! {
        div class="marketplace-controls" {
            div class="filter-buttons" {
                @for option in CategoryFilter::options() {
                    a.filter-btn.active[option == state.filter]
                        data-filter=(option.as_str())
                        href=(href(vm.path, state.with_filter(option).query_pairs()))
                    { (option.label()) }
                }
            }

            form class="search-sort" method="get" action=(vm.path) {
                @if state.filter != CategoryFilter::All {
                    input type="hidden" name="filter" value=(state.filter.as_str());
                }
                label class="sr-only" for="searchInput" { "Search produce" }
                input
                    type="search"
                    id="searchInput"
                    name="q"
                    value=(state.query)
                    placeholder="Search by product or location...";

                label class="sr-only" for="sortSelect" { "Sort by" }
                select id="sortSelect" name="sort" onchange="this.form.submit()" {
                    @for key in SortKey::ALL {
                        option value=(key.as_str()) selected[key == state.sort] { (key.label()) }
                    }
                }
                button type="submit" class="btn-secondary" { "Apply" }
            }
        }
    }
}

fn grid(vm: &MarketplaceVm) -> Markup {
    html! {
        div class="marketplace-grid" id="marketplaceGrid" {
            @if vm.products.is_empty() {
                div class="empty-state" {
                    p { "No produce matches your search." }
                    a href=(vm.path) { "Clear filters" }
                }
            }
            @for product in vm.products {
                (product_card(product, &open_href(vm.path, vm.params, "contact", Some(product.name.as_str()))))
            }
        }
    }
}
