//! Which panel is on screen, which dialogs are open, and the list cursor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::PopupId;
use crate::pager;
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unknown view: {0:?}")]
    UnknownView(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Home,
    Map,
    Post,
    Search,
    Saved,
    Profile,
    Business,
}

impl View {
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Map,
        Self::Post,
        Self::Search,
        Self::Saved,
        Self::Profile,
        Self::Business,
    ];

    /// Entries of the bottom navigation bar, in display order.
    pub const FOOTER: [Self; 5] = [Self::Home, Self::Map, Self::Post, Self::Search, Self::Saved];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Map => "map",
            Self::Post => "post",
            Self::Search => "search",
            Self::Saved => "saved",
            Self::Profile => "profile",
            Self::Business => "business",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Map => "Map",
            Self::Post => "Pop!",
            Self::Search => "Search",
            Self::Saved => "Saved",
            Self::Profile => "Profile",
            Self::Business => "Business",
        }
    }

    /// Overlays open a dialog on top of the current view instead of replacing it.
    #[must_use]
    pub const fn is_overlay(self) -> bool {
        matches!(self, Self::Post | Self::Search)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ViewError::UnknownView(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dialogs {
    pub create_open: bool,
    pub search_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Navigation {
    pub view: View,
    pub selection: Selection,
    pub page: usize,
    pub dialogs: Dialogs,
}

impl Navigation {
    pub fn navigate(&mut self, target: View) {
        self.selection.clear();

        match target {
            View::Home => {
                self.view = View::Home;
                self.page = 0;
            }
            View::Post => self.dialogs.create_open = true,
            View::Search => self.dialogs.search_open = true,
            View::Map | View::Saved | View::Profile | View::Business => self.view = target,
        }
    }

    /// Reducer form of [`Navigation::navigate`].
    #[must_use]
    pub fn navigated(mut self, target: View) -> Self {
        self.navigate(target);
        self
    }

    pub fn select_item(&mut self, id: PopupId) {
        self.selection.select(id);
    }

    pub fn close_detail(&mut self) {
        self.selection.clear();
    }

    pub fn open_search_dialog(&mut self) {
        self.dialogs.search_open = true;
    }

    pub fn close_create_dialog(&mut self) {
        self.dialogs.create_open = false;
    }

    pub fn close_search_dialog(&mut self) {
        self.dialogs.search_open = false;
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = pager::advance(self.page, total_pages);
    }

    pub fn prev_page(&mut self) {
        self.page = pager::retreat(self.page);
    }

    pub fn clamp_page(&mut self, total_pages: usize) {
        self.page = pager::clamp(self.page, total_pages);
    }
}
