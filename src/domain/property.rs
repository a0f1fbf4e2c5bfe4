// src/domain/property.rs

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Townships the marketplace currently lists properties in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Township {
    Soweto,
    Alexandra,
    Tembisa,
    Khayelitsha,
    Mamelodi,
}

impl Township {
    /// Selection order used by the township dropdown.
    pub const ALL: [Township; 5] = [
        Township::Soweto,
        Township::Alexandra,
        Township::Tembisa,
        Township::Khayelitsha,
        Township::Mamelodi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Township::Soweto => "Soweto",
            Township::Alexandra => "Alexandra",
            Township::Tembisa => "Tembisa",
            Township::Khayelitsha => "Khayelitsha",
            Township::Mamelodi => "Mamelodi",
        }
    }
}

impl fmt::Display for Township {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive: "soweto" is not a township name.
impl FromStr for Township {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Township::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown township: {s}"))
    }
}

/// A rental listing as shown to tenants. Prices are whole Rand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub price: u32,
    pub deposit: u32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub address: String,
    pub township: Township,
    pub province: String,
    pub image: String,
    pub landlord_name: String,
    pub landlord_phone: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

impl Property {
    /// First month's rent plus the security deposit.
    pub fn move_in_cost(&self) -> u32 {
        self.price + self.deposit
    }

    /// "123 Vilakazi Street, Soweto, Gauteng"
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}", self.address, self.township, self.province)
    }

    pub fn landlord_initial(&self) -> String {
        self.landlord_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Formats a whole-Rand amount the way the listings display it: "R12,400".
pub fn format_rand(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('R');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// "1 Bedroom", "3 Bedrooms"
pub fn pluralize(count: u8, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}
