use crate::domain::property::{format_rand, Property};
use crate::domain::ListingQuery;
use crate::templates::components::price_badge;
use maud::{html, Markup};

/// "/properties/3?q=garden", so the detail page can link back to the same
/// result list.
pub fn detail_href(property: &Property, query: &ListingQuery) -> String {
    let qs = query.to_query_string();
    if qs.is_empty() {
        format!("/properties/{}", property.id)
    } else {
        format!("/properties/{}?{qs}", property.id)
    }
}

pub fn property_card(property: &Property, query: &ListingQuery) -> Markup {
    html! {
        article class="card property-card" id=(format!("property-{}", property.id)) {
            div style="position: relative;" {
                img src=(property.image) alt=(property.title) style="width: 100%; height: 12rem; object-fit: cover; border-radius: 0.5rem;";
                div style="position: absolute; top: 0.5rem; right: 0.5rem;" { (price_badge(property.price)) }
            }
            h3 { (property.title) }
            p class="muted" { (property.full_address()) }
            p class="muted" {
                (property.bedrooms) " bed · " (property.bathrooms) " bath"
            }
            p class="muted" {
                "Deposit: " strong style="color: #fff;" { (format_rand(property.deposit)) }
            }
            div style="display: flex; gap: 0.5rem;" {
                a class="btn" href=(detail_href(property, query)) { "View Property" }
                a class="btn btn-primary" href=(format!("/properties/{}/call", property.id)) { "Call Now" }
                a class="btn" href=(format!("/properties/{}/whatsapp?from=listing", property.id)) target="_blank" rel="noopener" { "WhatsApp" }
            }
        }
    }
}
