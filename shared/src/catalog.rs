//! The listing snapshot handed to the core by the item data source.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::{LatLng, Popup, PopupError, PopupId, SavedPopup};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error(transparent)]
    InvalidPopup(#[from] PopupError),
    #[error("duplicate popup id: {0}")]
    DuplicateId(PopupId),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Catalog {
    pub popups: Vec<Popup>,
    #[serde(default)]
    pub saved: Vec<SavedPopup>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

impl Catalog {
    pub fn new(popups: Vec<Popup>, saved: Vec<SavedPopup>) -> Self {
        Self { popups, saved }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn find(&self, id: &PopupId) -> Option<&Popup> {
        self.popups.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &PopupId) -> bool {
        self.find(id).is_some()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.popups.len());
        for popup in &self.popups {
            popup.validate()?;
            if !seen.insert(&popup.id) {
                return Err(CatalogError::DuplicateId(popup.id.clone()));
            }
        }
        Ok(())
    }

    /// Built-in San Francisco listings.
    pub fn seed() -> Self {
        let popups = SEED_POPUPS
            .iter()
            .filter_map(|s| s.to_popup())
            .collect();
        let saved = vec![
            SavedPopup {
                id: PopupId::new("1"),
                name: "Jaden & Justin's Juice Bar".into(),
                date: "November 9, 2025".into(),
                time: "Happening Now!".into(),
                attendees: 87,
                description: "Fresh cold-pressed juices and smoothie bowls with superfoods and local organic fruits".into(),
                location: "123 Market St, San Francisco, CA".into(),
                image_url: "https://images.unsplash.com/photo-1610970881699-44a5587cabec?w=800".into(),
            },
            SavedPopup {
                id: PopupId::new("2"),
                name: "Mahi's Matcha".into(),
                date: "November 27, 2025".into(),
                time: "6:00 PM - 10:00 PM".into(),
                attendees: 142,
                description: "Premium ceremonial grade matcha lattes and Japanese-inspired pastries".into(),
                location: "456 Valencia St, San Francisco, CA".into(),
                image_url: "https://images.unsplash.com/photo-1615392007796-540c8013cce7?w=800".into(),
            },
        ];
        Self { popups, saved }
    }
}

struct SeedPopup {
    id: &'static str,
    name: &'static str,
    lat: f64,
    lng: f64,
    distance_miles: f32,
    drive_time: &'static str,
    cuisine: &'static str,
    short_description: &'static str,
    full_description: &'static str,
    image_url: &'static str,
    attendees: u32,
    rating: Option<f32>,
    hours: Option<&'static str>,
    contact: Option<&'static str>,
}

impl SeedPopup {
    fn to_popup(&self) -> Option<Popup> {
        let location = LatLng::new(self.lat, self.lng).ok()?;
        Some(Popup {
            id: PopupId::new(self.id),
            name: self.name.into(),
            location,
            distance_miles: self.distance_miles,
            drive_time: self.drive_time.into(),
            cuisine: self.cuisine.into(),
            short_description: self.short_description.into(),
            full_description: self.full_description.into(),
            image_url: self.image_url.into(),
            attendees: self.attendees,
            rating: self.rating,
            hours: self.hours.map(Into::into),
            contact: self.contact.map(Into::into),
        })
    }
}

const SEED_POPUPS: &[SeedPopup] = &[
    SeedPopup {
        id: "1",
        name: "Jaden & Justin's Juice Bar",
        lat: 37.7897,
        lng: -122.4000,
        distance_miles: 0.8,
        drive_time: "5 min",
        cuisine: "Juice & Smoothies",
        short_description: "Cold-pressed juices and smoothie bowls",
        full_description: "Fresh cold-pressed juices and smoothie bowls with superfoods and local organic fruits.",
        image_url: "https://images.unsplash.com/photo-1610970881699-44a5587cabec?w=800",
        attendees: 87,
        rating: Some(4.8),
        hours: Some("8:00 AM - 2:00 PM"),
        contact: Some("@jjjuicebar"),
    },
    SeedPopup {
        id: "2",
        name: "Mahi's Matcha",
        lat: 37.7649,
        lng: -122.4216,
        distance_miles: 1.2,
        drive_time: "8 min",
        cuisine: "Tea & Pastries",
        short_description: "Ceremonial matcha and Japanese pastries",
        full_description: "Premium ceremonial grade matcha lattes and Japanese-inspired pastries, whisked to order.",
        image_url: "https://images.unsplash.com/photo-1615392007796-540c8013cce7?w=800",
        attendees: 142,
        rating: Some(4.9),
        hours: Some("6:00 PM - 10:00 PM"),
        contact: Some("@mahismatcha"),
    },
    SeedPopup {
        id: "3",
        name: "Bagel Brothers",
        lat: 37.7599,
        lng: -122.4148,
        distance_miles: 1.5,
        drive_time: "9 min",
        cuisine: "Bagels",
        short_description: "Hand-rolled, kettle-boiled bagels",
        full_description: "Hand-rolled bagels boiled in small batches with house-whipped schmears.",
        image_url: "https://images.unsplash.com/photo-1585445490387-f47934b73b54?w=800",
        attendees: 64,
        rating: Some(4.6),
        hours: Some("7:00 AM - 12:00 PM"),
        contact: None,
    },
    SeedPopup {
        id: "4",
        name: "Taco Tuesday Truck",
        lat: 37.7526,
        lng: -122.4185,
        distance_miles: 2.1,
        drive_time: "12 min",
        cuisine: "Mexican",
        short_description: "Street tacos with handmade tortillas",
        full_description: "Al pastor off the trompo, carnitas and rotating vegetarian tacos on fresh masa tortillas.",
        image_url: "https://images.unsplash.com/photo-1565299585323-38d6b0865b47?w=800",
        attendees: 203,
        rating: Some(4.7),
        hours: Some("5:00 PM - 11:00 PM"),
        contact: Some("(415) 555-0142"),
    },
    SeedPopup {
        id: "5",
        name: "Dumpling Den",
        lat: 37.7941,
        lng: -122.4078,
        distance_miles: 0.6,
        drive_time: "4 min",
        cuisine: "Chinese",
        short_description: "Soup dumplings folded to order",
        full_description: "Xiao long bao, pan-fried potstickers and chili oil wontons from a family recipe.",
        image_url: "https://images.unsplash.com/photo-1496116218417-1a781b1c416c?w=800",
        attendees: 118,
        rating: Some(4.8),
        hours: Some("11:00 AM - 3:00 PM"),
        contact: None,
    },
    SeedPopup {
        id: "6",
        name: "Sourdough Social",
        lat: 37.8024,
        lng: -122.4058,
        distance_miles: 1.9,
        drive_time: "11 min",
        cuisine: "Bakery",
        short_description: "Naturally leavened loaves and toasts",
        full_description: "Country loaves from a forty year old starter, served as toasts with seasonal toppings.",
        image_url: "https://images.unsplash.com/photo-1509440159596-0249088772ff?w=800",
        attendees: 55,
        rating: None,
        hours: Some("9:00 AM - 1:00 PM"),
        contact: Some("@sourdoughsocial"),
    },
    SeedPopup {
        id: "7",
        name: "Curry Corner",
        lat: 37.7715,
        lng: -122.4305,
        distance_miles: 1.4,
        drive_time: "9 min",
        cuisine: "Indian",
        short_description: "Slow-cooked curries and fresh naan",
        full_description: "Butter chicken, chana masala and garlic naan from the tandoor on wheels.",
        image_url: "https://images.unsplash.com/photo-1585937421612-70a008356fbe?w=800",
        attendees: 97,
        rating: Some(4.5),
        hours: None,
        contact: None,
    },
    SeedPopup {
        id: "8",
        name: "Poke Paradise",
        lat: 37.7833,
        lng: -122.4167,
        distance_miles: 0.9,
        drive_time: "6 min",
        cuisine: "Hawaiian",
        short_description: "Build-your-own poke bowls",
        full_description: "Sushi-grade ahi and salmon poke over rice or greens with house sauces.",
        image_url: "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=800",
        attendees: 76,
        rating: Some(4.4),
        hours: Some("11:30 AM - 4:00 PM"),
        contact: None,
    },
    SeedPopup {
        id: "9",
        name: "Smoke & Bones BBQ",
        lat: 37.7449,
        lng: -122.4194,
        distance_miles: 2.8,
        drive_time: "15 min",
        cuisine: "BBQ",
        short_description: "Oak-smoked brisket and ribs",
        full_description: "Twelve hour oak-smoked brisket, pork ribs and classic sides until sold out.",
        image_url: "https://images.unsplash.com/photo-1529193591184-b1d58069ecdd?w=800",
        attendees: 188,
        rating: Some(4.9),
        hours: Some("12:00 PM - sold out"),
        contact: Some("(415) 555-0199"),
    },
    SeedPopup {
        id: "10",
        name: "Gelato Girls",
        lat: 37.7987,
        lng: -122.4376,
        distance_miles: 2.3,
        drive_time: "13 min",
        cuisine: "Dessert",
        short_description: "Small-batch gelato and sorbetto",
        full_description: "Churned-daily gelato with local dairy and fruit sorbetto in rotating flavors.",
        image_url: "https://images.unsplash.com/photo-1501443762994-82bd5dace89a?w=800",
        attendees: 132,
        rating: Some(4.7),
        hours: Some("1:00 PM - 9:00 PM"),
        contact: None,
    },
    SeedPopup {
        id: "11",
        name: "Pho Real",
        lat: 37.7785,
        lng: -122.4620,
        distance_miles: 3.1,
        drive_time: "17 min",
        cuisine: "Vietnamese",
        short_description: "Twenty-four hour bone broth pho",
        full_description: "Beef and chicken pho, banh mi and iced coffee with condensed milk.",
        image_url: "https://images.unsplash.com/photo-1582878826629-29b7ad1cdc43?w=800",
        attendees: 91,
        rating: Some(4.6),
        hours: Some("10:00 AM - 8:00 PM"),
        contact: Some("@phoreal_sf"),
    },
    SeedPopup {
        id: "12",
        name: "Arepa Alley",
        lat: 37.7609,
        lng: -122.4350,
        distance_miles: 1.7,
        drive_time: "10 min",
        cuisine: "Venezuelan",
        short_description: "Griddled arepas stuffed to order",
        full_description: "Corn arepas with reina pepiada, pabellon and black bean fillings.",
        image_url: "https://images.unsplash.com/photo-1599974579688-8dbdd335c77f?w=800",
        attendees: 48,
        rating: None,
        hours: Some("11:00 AM - 7:00 PM"),
        contact: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_valid() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.popups.len(), SEED_POPUPS.len());
        assert_eq!(catalog.popups.len(), 12);
        assert_eq!(catalog.saved.len(), 2);
        assert_eq!(catalog.validate(), Ok(()));
    }

    #[test]
    fn find_by_id() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.find(&PopupId::new("4")).map(|p| p.name.as_str()), Some("Taco Tuesday Truck"));
        assert!(!catalog.contains(&PopupId::new("42")));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut catalog = Catalog::seed();
        let dup = catalog.popups[0].clone();
        catalog.popups.push(dup);
        assert_eq!(catalog.validate(), Err(CatalogError::DuplicateId(PopupId::new("1"))));
    }

    #[test]
    fn invalid_popup_is_reported() {
        let mut catalog = Catalog::seed();
        catalog.popups[3].image_url = "ftp://files.example.com/x.png".into();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidPopup(PopupError::InvalidImageUrl { .. }))
        ));
    }

    #[test]
    fn snapshot_deserializes_without_saved_list() {
        let json = serde_json::to_string(&Catalog::seed().popups).unwrap();
        let catalog: Catalog = serde_json::from_str(&format!(r#"{{"popups":{json}}}"#)).unwrap();
        assert_eq!(catalog.popups.len(), 12);
        assert!(catalog.saved.is_empty());
    }
}
