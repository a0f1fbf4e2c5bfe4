use crate::auth::Toast;
use crate::domain::contact::share_text;
use crate::domain::property::{format_rand, pluralize, Property};
use crate::domain::ListingQuery;
use crate::templates::components::{card, price_badge};
use crate::templates::layouts::app::app_layout;
use maud::{html, Markup};

pub struct PropertyDetailVm<'a> {
    pub property: &'a Property,
    /// The listing view the user came from; the back link returns to it.
    pub back: &'a ListingQuery,
    pub flash: Option<Toast>,
}

pub fn property_detail_page(vm: &PropertyDetailVm) -> Markup {
    let p = vm.property;

    app_layout(
        &p.title,
        vm.flash.as_ref(),
        html! {
            header class="container" style="display: flex; justify-content: space-between; align-items: center; padding-bottom: 0;" {
                a class="btn" href=(vm.back.listings_href()) aria-label="Back" { "←" }
                h1 style="font-size: 1.1rem;" { "Property Details" }
                span class="muted share" title=(share_text(p)) { "Share" }
            }

            main class="container" {
                div style="position: relative;" {
                    img src=(p.image) alt=(p.title) style="width: 100%; height: 16rem; object-fit: cover; border-radius: 0.75rem;";
                    div style="position: absolute; top: 1rem; right: 1rem;" { (price_badge(p.price)) }
                }

                h2 { (p.title) }
                p class="muted" { (p.full_address()) }
                p class="muted" {
                    (pluralize(p.bedrooms, "Bedroom")) " · " (pluralize(p.bathrooms, "Bathroom"))
                }

                (card("Pricing", html! {
                    dl class="pricing" {
                        dt class="muted" { "Monthly Rent:" }
                        dd { (format_rand(p.price)) }
                        dt class="muted" { "Security Deposit:" }
                        dd { (format_rand(p.deposit)) }
                        dt { strong { "Total Move-in Cost:" } }
                        dd style="color: var(--accent); font-weight: bold;" { (format_rand(p.move_in_cost())) }
                    }
                }))

                (card("Description", html! {
                    p { (p.description) }
                }))

                (card("Amenities", html! {
                    ul class="amenities" style="display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; padding-left: 1rem;" {
                        @for amenity in &p.amenities {
                            li { (amenity) }
                        }
                    }
                }))

                (card("Landlord", html! {
                    div style="display: flex; gap: 0.75rem; align-items: center;" {
                        span class="badge badge-accent" style="width: 3rem; height: 3rem; display: flex; align-items: center; justify-content: center; font-size: 1.2rem;" {
                            (p.landlord_initial())
                        }
                        div {
                            p style="margin: 0;" { (p.landlord_name) }
                            p class="muted" style="margin: 0;" { (p.landlord_phone) }
                        }
                    }
                }))
            }

            div class="bottom-nav" style="gap: 0.75rem; padding: 1rem;" {
                a class="btn btn-primary" style="flex: 1;" href=(format!("/properties/{}/call", p.id)) { "Call Now" }
                a class="btn" style="flex: 1;" href=(format!("/properties/{}/whatsapp", p.id)) target="_blank" rel="noopener" { "WhatsApp" }
            }
        },
    )
}
