use crate::auth::{SessionUser, Toast};
use crate::domain::{ListingQuery, Property};
use crate::templates::components::{bottom_nav, filter_form, property_card, NavTab};
use crate::templates::layouts::app::{app_layout, APP_NAME};
use maud::{html, Markup};

pub struct ListingsVm<'a> {
    pub user: &'a SessionUser,
    pub query: &'a ListingQuery,
    pub results: Vec<&'a Property>,
    pub tab: NavTab,
    pub flash: Option<Toast>,
}

/// "1 property found", "3 properties found"
pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 property found".to_string()
    } else {
        format!("{count} properties found")
    }
}

pub fn listings_page(vm: &ListingsVm) -> Markup {
    app_layout(
        "Listings",
        vm.flash.as_ref(),
        html! {
            header class="container" style="padding-bottom: 0;" {
                h1 style="text-align: center;" { (APP_NAME) }
                div class="muted" style="text-align: right; font-size: 0.85rem;" {
                    "Signed in as " strong title=(vm.user.email) { (vm.user.display_name) }
                    form method="post" action="/auth/logout" style="display: inline; margin-left: 0.5rem;" {
                        button type="submit" class="btn" style="padding: 0.2rem 0.6rem;" { "Log out" }
                    }
                }
                (filter_form(vm.query))
            }

            main class="container" {
                p class="muted result-count" { (result_count_label(vm.results.len())) }

                @for property in &vm.results {
                    (property_card(property, vm.query))
                }

                @if vm.results.is_empty() {
                    div class="empty-state" style="text-align: center; padding: 3rem 0;" {
                        p class="muted" { "No properties found matching your search criteria." }
                        a class="btn" href=(vm.query.cleared().listings_href()) { "Clear All Filters" }
                    }
                }
            }

            (bottom_nav(vm.query, vm.tab))
        },
    )
}
