// src/domain/contact.rs

use crate::domain::property::{format_rand, Property};
use url::Url;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Where a WhatsApp message was started from. The detail page greets the
/// landlord by name and asks for a viewing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOrigin {
    Listing,
    Detail,
}

/// `tel:` URI for a landlord phone. Whitespace is dropped, the leading `+`
/// is kept.
pub fn call_uri(phone: &str) -> String {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{compact}")
}

/// `https://wa.me/<digits>?text=<message>`
pub fn whatsapp_uri(phone: &str, message: &str) -> Result<Url, url::ParseError> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    Url::parse_with_params(&format!("{WHATSAPP_BASE}{digits}"), &[("text", message)])
}

pub fn enquiry_message(property: &Property, origin: ContactOrigin) -> String {
    match origin {
        ContactOrigin::Listing => {
            format!("Hi, I'm interested in the property: {}", property.title)
        }
        ContactOrigin::Detail => format!(
            "Hi {}, I'm interested in the property: {}. Can we schedule a viewing?",
            property.landlord_name, property.title
        ),
    }
}

pub fn share_text(property: &Property) -> String {
    format!(
        "Check out this property: {} - {}/month",
        property.title,
        format_rand(property.price)
    )
}
