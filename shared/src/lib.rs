// lib.rs - shared core for the pop-up listings app

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod app;
pub mod capabilities;
pub mod catalog;
pub mod event;
pub mod forms;
pub mod going;
pub mod map;
pub mod model;
pub mod navigation;
pub mod pager;
pub mod profile;
pub mod selection;

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use thiserror::Error;

pub use app::{App, ViewModel};
pub use capabilities::{Capabilities, Effect, ToastKind};
pub use catalog::{Catalog, CatalogError};
pub use event::Event;
pub use forms::{CreatePopupForm, FormError, SearchQuery};
pub use model::{CoordinateError, LatLng, Model, Popup, PopupId, SavedPopup, DEFAULT_CENTER};
pub use navigation::{Navigation, View, ViewError};
pub use pager::{PageSize, PagerError};
pub use profile::{BusinessStats, UserProfile};

pub const POPUPS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => panic!("page size must be non-zero"),
};
pub const DEFAULT_MAP_ZOOM: f64 = 13.0;
pub const MIN_MAP_ZOOM: f64 = 0.0;
pub const MAX_MAP_ZOOM: f64 = 19.0;
pub const MARKER_PADDING_PX: u32 = 50;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(String),
    #[error("map zoom {0} is outside [0, 19]")]
    InvalidZoom(f64),
}

/// Tunables the shell may override with `Event::Configure`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct CoreConfig {
    pub page_size: PageSize,
    pub map_center: LatLng,
    pub map_zoom: f64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            map_center: DEFAULT_CENTER,
            map_zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

impl CoreConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.map_zoom.is_finite() || !(MIN_MAP_ZOOM..=MAX_MAP_ZOOM).contains(&self.map_zoom) {
            return Err(ConfigError::InvalidZoom(self.map_zoom));
        }
        Ok(())
    }

    /// Parses and validates a JSON config document. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Pager(#[from] PagerError),
    #[error(transparent)]
    View(#[from] ViewError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CoreError {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Coordinate(_) => "INVALID_COORDINATE",
            Self::Catalog(_) => "INVALID_CATALOG",
            Self::Pager(_) => "INVALID_PAGE_SIZE",
            Self::View(_) => "UNKNOWN_VIEW",
            Self::Form(FormError::MissingFields(_)) => "MISSING_FIELDS",
            Self::Form(FormError::EmptyQuery) => "EMPTY_QUERY",
            Self::Config(_) => "INVALID_CONFIG",
        }
    }

    #[must_use]
    pub fn user_facing_message(&self) -> String {
        match self {
            Self::Form(FormError::MissingFields(_)) => "Please fill in all fields".into(),
            Self::Form(FormError::EmptyQuery) => "Please enter a search query".into(),
            Self::Catalog(_) | Self::Coordinate(_) => {
                "Unable to load popups. Please try again later.".into()
            }
            Self::Pager(_) | Self::View(_) | Self::Config(_) => {
                "An unexpected error occurred. Please restart the app.".into()
            }
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
