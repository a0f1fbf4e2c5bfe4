use crate::domain::filter::{
    RoomFilter, TownshipFilter, ALL_TOWNSHIPS, PRICE_CEILING, PRICE_FLOOR, PRICE_STEP,
};
use crate::domain::property::{format_rand, Township};
use crate::domain::ListingQuery;
use crate::templates::components::badge;
use maud::{html, Markup};

const BEDROOM_OPTIONS: [(RoomFilter, &str); 5] = [
    (RoomFilter::Any, "Any"),
    (RoomFilter::Exactly(1), "1 Bedroom"),
    (RoomFilter::Exactly(2), "2 Bedrooms"),
    (RoomFilter::Exactly(3), "3 Bedrooms"),
    (RoomFilter::Exactly(4), "4+ Bedrooms"),
];

const BATHROOM_OPTIONS: [(RoomFilter, &str); 4] = [
    (RoomFilter::Any, "Any"),
    (RoomFilter::Exactly(1), "1 Bathroom"),
    (RoomFilter::Exactly(2), "2 Bathrooms"),
    (RoomFilter::Exactly(3), "3+ Bathrooms"),
];

fn room_select(name: &str, current: RoomFilter, options: &[(RoomFilter, &str)]) -> Markup {
    html! {
        select name=(name) id=(name) {
            @for (value, label) in options {
                option value=(value.as_param()) selected[*value == current] { (label) }
            }
        }
    }
}

/// "2 beds", "1 bath"
fn room_chip(filter: RoomFilter, noun: &str) -> Option<String> {
    match filter {
        RoomFilter::Any => None,
        RoomFilter::Exactly(1) => Some(format!("1 {noun}")),
        RoomFilter::Exactly(n) => Some(format!("{n} {noun}s")),
    }
}

/// Search box plus the filter sheet. Submits back to `/listings` via GET.
pub fn filter_form(query: &ListingQuery) -> Markup {
    let filters = &query.filters;
    let active = filters.active_count();

    html! {
        form method="get" action="/listings" class="filter-form" {
            div style="display: flex; gap: 0.5rem;" {
                label class="sr-only" for="q" { "Search" }
                input type="search" id="q" name="q" value=(query.search)
                    placeholder="Search by location, township, or property type...";
                button type="submit" class="btn" { "Search" }
            }

            details class="card" style="margin-top: 0.75rem;" {
                summary {
                    "Filters "
                    @if active > 0 {
                        span class="badge badge-accent" data-active-filters=(active) { (active) }
                    }
                }
                h3 { "Filter Properties" }
                p class="muted" { "Narrow down your search with these filters" }

                label for="township" { "Township" }
                select name="township" id="township" {
                    option value=(ALL_TOWNSHIPS) selected[filters.township == TownshipFilter::All] { (ALL_TOWNSHIPS) }
                    @for t in Township::ALL {
                        option value=(t.as_str()) selected[filters.township == TownshipFilter::Only(t)] { (t.as_str()) }
                    }
                }

                label { "Price Range: " (format_rand(filters.price.min())) " - " (format_rand(filters.price.max())) }
                div style="display: flex; gap: 0.5rem;" {
                    input type="number" name="min_price" value=(filters.price.min())
                        min=(PRICE_FLOOR) max=(PRICE_CEILING) step=(PRICE_STEP);
                    input type="number" name="max_price" value=(filters.price.max())
                        min=(PRICE_FLOOR) max=(PRICE_CEILING) step=(PRICE_STEP);
                }

                label for="bedrooms" { "Bedrooms" }
                (room_select("bedrooms", filters.bedrooms, &BEDROOM_OPTIONS))

                label for="bathrooms" { "Bathrooms" }
                (room_select("bathrooms", filters.bathrooms, &BATHROOM_OPTIONS))

                div style="display: flex; gap: 0.5rem; padding-top: 1rem;" {
                    a class="btn" href=(query.cleared().listings_href()) { "Clear Filters" }
                    button type="submit" class="btn btn-primary" { "Apply Filters" }
                }
            }
        }

        @if active > 0 {
            div class="active-filters" style="display: flex; flex-wrap: wrap; gap: 0.5rem;" {
                @if filters.township != TownshipFilter::All {
                    (badge(filters.township.label()))
                }
                @if !filters.price.is_default() {
                    (badge(&format!("{} - {}", format_rand(filters.price.min()), format_rand(filters.price.max()))))
                }
                @if let Some(chip) = room_chip(filters.bedrooms, "bed") {
                    (badge(&chip))
                }
                @if let Some(chip) = room_chip(filters.bathrooms, "bath") {
                    (badge(&chip))
                }
            }
        }
    }
}
