use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("search query is empty")]
    EmptyQuery,
}

/// Contents of the "Create Your Popup!" dialog.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CreatePopupForm {
    pub name: String,
    pub location: String,
    pub time: String,
    pub menu_items: String,
}

impl CreatePopupForm {
    pub fn validate(&self) -> Result<(), FormError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("location", &self.location),
            ("time", &self.time),
            ("menu_items", &self.menu_items),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }
}

/// Shown under the search box while the dialog is open.
pub const SEARCH_SUGGESTIONS: [&str; 6] =
    ["Tacos", "Burgers", "Ramen", "Pizza", "Desserts", "Vietnamese"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Result<Self, FormError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FormError::EmptyQuery);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
