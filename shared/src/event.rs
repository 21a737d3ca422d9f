use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::forms::CreatePopupForm;
use crate::model::PopupId;
use crate::navigation::View;
use crate::CoreConfig;

// --- Event enum: every variant is a discrete user or shell action ---

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    // Data source & configuration
    CatalogLoaded(Box<Catalog>),
    Configure(CoreConfig),

    // Navigation
    Navigate(View),
    HeaderSearchClicked,
    HeaderSettingsClicked,
    HeaderProfileClicked,
    StartPoppingClicked,
    EditProfileClicked,

    // List, map & detail
    PopupClicked { id: PopupId },
    MarkerClicked { id: PopupId },
    DetailClosed,
    NextPage,
    PrevPage,
    ListGoingToggled { id: PopupId },
    DetailGoingToggled { id: PopupId },

    // Dialogs
    CreateDialogClosed,
    SearchDialogClosed,
    CreateSubmitted(CreatePopupForm),
    SearchSubmitted { query: String },
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CatalogLoaded(_) => "catalog_loaded",
            Self::Configure(_) => "configure",
            Self::Navigate(_) => "navigate",
            Self::HeaderSearchClicked => "header_search_clicked",
            Self::HeaderSettingsClicked => "header_settings_clicked",
            Self::HeaderProfileClicked => "header_profile_clicked",
            Self::StartPoppingClicked => "start_popping_clicked",
            Self::EditProfileClicked => "edit_profile_clicked",
            Self::PopupClicked { .. } => "popup_clicked",
            Self::MarkerClicked { .. } => "marker_clicked",
            Self::DetailClosed => "detail_closed",
            Self::NextPage => "next_page",
            Self::PrevPage => "prev_page",
            Self::ListGoingToggled { .. } => "list_going_toggled",
            Self::DetailGoingToggled { .. } => "detail_going_toggled",
            Self::CreateDialogClosed => "create_dialog_closed",
            Self::SearchDialogClosed => "search_dialog_closed",
            Self::CreateSubmitted(_) => "create_submitted",
            Self::SearchSubmitted { .. } => "search_submitted",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        !matches!(self, Self::CatalogLoaded(_) | Self::Configure(_))
    }
}
