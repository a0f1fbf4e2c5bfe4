// src/domain/catalog.rs

use crate::domain::property::{Property, Township};

/// The compiled-in listing table. Order is declaration order and is the
/// order every listing view is shown in.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
}

struct Seed {
    id: &'static str,
    title: &'static str,
    price: u32,
    deposit: u32,
    bedrooms: u8,
    bathrooms: u8,
    address: &'static str,
    township: Township,
    province: &'static str,
    image: &'static str,
    landlord_name: &'static str,
    landlord_phone: &'static str,
    description: &'static str,
    amenities: &'static [&'static str],
}

const SEEDS: [Seed; 5] = [
    Seed {
        id: "1",
        title: "Modern 2-Bedroom House",
        price: 3500,
        deposit: 7000,
        bedrooms: 2,
        bathrooms: 1,
        address: "123 Vilakazi Street",
        township: Township::Soweto,
        province: "Gauteng",
        image: "/modern-house-soweto.png",
        landlord_name: "Thabo Mthembu",
        landlord_phone: "+27 82 123 4567",
        description: "This beautifully renovated 2-bedroom house offers modern living in the heart of Soweto. Features include an open-plan kitchen and living area, built-in wardrobes, and a private garden. Perfect for a small family or young professionals. The property is close to schools, shopping centers, and public transport.",
        amenities: &["Parking", "WiFi", "Electricity", "Water", "Garden", "Security"],
    },
    Seed {
        id: "2",
        title: "Cozy Bachelor Flat",
        price: 2200,
        deposit: 4400,
        bedrooms: 1,
        bathrooms: 1,
        address: "45 Mandela Avenue",
        township: Township::Alexandra,
        province: "Gauteng",
        image: "/bachelor-flat-alexandra.png",
        landlord_name: "Nomsa Dlamini",
        landlord_phone: "+27 83 987 6543",
        description: "A comfortable bachelor flat ideal for a single person or couple. The unit features a kitchenette, bathroom, and living area. Located in a safe complex with 24-hour security. Walking distance to taxi ranks and local amenities.",
        amenities: &["Parking", "Electricity", "Water", "Security"],
    },
    Seed {
        id: "3",
        title: "Family Home with Garden",
        price: 4800,
        deposit: 9600,
        bedrooms: 3,
        bathrooms: 2,
        address: "78 Sisulu Road",
        township: Township::Tembisa,
        province: "Gauteng",
        image: "/tembisa-family-garden.png",
        landlord_name: "Sipho Khumalo",
        landlord_phone: "+27 84 555 7890",
        description: "Spacious family home with a large garden perfect for children to play. The house features 3 bedrooms, 2 bathrooms, a lounge, dining room, and kitchen. Additional features include a double garage and outdoor entertainment area. Located in a quiet neighborhood with good schools nearby.",
        amenities: &["Parking", "WiFi", "Electricity", "Water", "Garden", "Garage"],
    },
    Seed {
        id: "4",
        title: "Spacious 4-Bedroom House",
        price: 6200,
        deposit: 12400,
        bedrooms: 4,
        bathrooms: 2,
        address: "12 Biko Street",
        township: Township::Khayelitsha,
        province: "Western Cape",
        image: "/spacious-house-khayelitsha.png",
        landlord_name: "Mandla Ngcobo",
        landlord_phone: "+27 81 234 5678",
        description: "Large family home with 4 bedrooms and 2 bathrooms. Perfect for a big family. The property includes a spacious lounge, kitchen with dining area, and a backyard. Close to schools, clinics, and shopping centers.",
        amenities: &["Parking", "Electricity", "Water", "Garden"],
    },
    Seed {
        id: "5",
        title: "Affordable 1-Bedroom Flat",
        price: 1800,
        deposit: 3600,
        bedrooms: 1,
        bathrooms: 1,
        address: "89 Tambo Road",
        township: Township::Mamelodi,
        province: "Gauteng",
        image: "/affordable-flat-mamelodi.png",
        landlord_name: "Grace Motaung",
        landlord_phone: "+27 85 876 5432",
        description: "Affordable 1-bedroom flat perfect for first-time renters. The unit includes a bedroom, bathroom, kitchen, and small living area. Located in a secure building with controlled access. Close to public transport and local shops.",
        amenities: &["Electricity", "Water", "Security"],
    },
];

impl Seed {
    fn to_property(&self) -> Property {
        Property {
            id: self.id.to_string(),
            title: self.title.to_string(),
            price: self.price,
            deposit: self.deposit,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            address: self.address.to_string(),
            township: self.township,
            province: self.province.to_string(),
            image: self.image.to_string(),
            landlord_name: self.landlord_name.to_string(),
            landlord_phone: self.landlord_phone.to_string(),
            description: self.description.to_string(),
            amenities: self.amenities.iter().map(|a| a.to_string()).collect(),
            images: vec![self.image.to_string()],
        }
    }
}

impl Catalog {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// The five launch listings.
    pub fn seeded() -> Self {
        Self::new(SEEDS.iter().map(Seed::to_property).collect())
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn find(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
