use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::model::PopupId;

/// The popup whose detail panel is open, if any.
///
/// The store does not check that the id belongs to a loaded catalog; the app
/// clears it with [`Selection::retain_in`] whenever the catalog changes.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection(Option<PopupId>);

impl Selection {
    pub fn select(&mut self, id: PopupId) {
        self.0 = Some(id);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn selected(&self) -> Option<&PopupId> {
        self.0.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Drops the selection if it no longer refers to a popup in `catalog`.
    /// Returns true when something was dropped.
    pub fn retain_in(&mut self, catalog: &Catalog) -> bool {
        let dangling = self.0.as_ref().is_some_and(|id| !catalog.contains(id));
        if dangling {
            self.0 = None;
        }
        dangling
    }
}
