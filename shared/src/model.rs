use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::going::GoingSet;
use crate::navigation::Navigation;
use crate::profile::{BusinessStats, UserProfile};
use crate::CoreConfig;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PopupId(pub String);

impl PopupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PopupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("Latitude {0} is out of valid range [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("Longitude {0} is out of valid range [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("Coordinate value is not finite (NaN or Infinity)")]
    NonFinite,
}

/// Validated lat/lng in degrees
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLatLng")]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct RawLatLng {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawLatLng> for LatLng {
    type Error = CoordinateError;

    fn try_from(raw: RawLatLng) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng)
    }
}

/// Default map center (San Francisco).
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 37.7749,
    lng: -122.4194,
};

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(CoordinateError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl TryFrom<(f64, f64)> for LatLng {
    type Error = CoordinateError;

    fn try_from((lat, lng): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(lat, lng)
    }
}

/// A single food pop-up listing. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    pub id: PopupId,
    pub name: String,
    pub location: LatLng,
    pub distance_miles: f32,
    pub drive_time: String,
    pub cuisine: String,
    pub short_description: String,
    pub full_description: String,
    pub image_url: String,
    pub attendees: u32,
    pub rating: Option<f32>,
    pub hours: Option<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PopupError {
    #[error("popup id is empty")]
    EmptyId,
    #[error("popup {0} has no name")]
    EmptyName(PopupId),
    #[error("popup {id} has an invalid image url: {url}")]
    InvalidImageUrl { id: PopupId, url: String },
}

impl Popup {
    /// Checks the fields the shell relies on to render a listing.
    pub fn validate(&self) -> Result<(), PopupError> {
        if self.id.as_str().trim().is_empty() {
            return Err(PopupError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(PopupError::EmptyName(self.id.clone()));
        }
        let valid_url = url::Url::parse(&self.image_url)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !valid_url {
            return Err(PopupError::InvalidImageUrl {
                id: self.id.clone(),
                url: self.image_url.clone(),
            });
        }
        Ok(())
    }
}

/// An entry in the user's saved list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPopup {
    pub id: PopupId,
    pub name: String,
    pub date: String,
    pub time: String,
    pub attendees: u32,
    pub description: String,
    pub location: String,
    pub image_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub nav: Navigation,
    pub catalog: Catalog,
    pub config: CoreConfig,

    // The list panel and the detail panel track attendance separately.
    pub list_going: GoingSet,
    pub detail_going: GoingSet,

    pub profile: UserProfile,
    pub business: BusinessStats,
}

impl Model {
    pub fn new(catalog: Catalog, config: CoreConfig) -> Self {
        Self {
            nav: Navigation::default(),
            catalog,
            config,
            list_going: GoingSet::default(),
            detail_going: GoingSet::default(),
            profile: UserProfile::seed(),
            business: BusinessStats::seed(),
        }
    }

    pub fn total_pages(&self) -> usize {
        crate::pager::total_pages(self.catalog.popups.len(), self.config.page_size)
    }

    pub fn popup(&self, id: &PopupId) -> Option<&Popup> {
        self.catalog.find(id)
    }

    pub fn selected_popup(&self) -> Option<&Popup> {
        self.nav.selection.selected().and_then(|id| self.popup(id))
    }
}
