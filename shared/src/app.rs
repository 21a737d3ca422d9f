use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use crate::capabilities::Capabilities;
use crate::catalog::Catalog;
use crate::event::Event;
use crate::forms::{SearchQuery, SEARCH_SUGGESTIONS};
use crate::going::GoingSet;
use crate::map::{self, Bounds, MapMarker};
use crate::model::{Model, Popup, PopupId, SavedPopup};
use crate::navigation::View;
use crate::profile::{BusinessStats, UserProfile};
use crate::{pager, CoreError, MARKER_PADDING_PX};

pub const SETTINGS_COMING_SOON: &str = "Settings feature coming soon!";
pub const EDIT_PROFILE_COMING_SOON: &str = "Edit profile feature coming soon!";
pub const POPUP_POSTED: &str = "Your popup has been posted!";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ListItemView {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub distance_text: String,
    pub drive_time: String,
    pub attendees_text: String,
    pub short_description: String,
    pub image_url: String,
    pub going: bool,
    pub going_label: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ListPanel {
    pub items: Vec<ListItemView>,
    pub page: usize,
    pub total_pages: usize,
    pub page_label: String,
    pub can_prev: bool,
    pub can_next: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DetailView {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: Option<f32>,
    pub distance_text: String,
    pub hours: Option<String>,
    pub contact: Option<String>,
    pub full_description: String,
    pub image_url: String,
    pub attendees: u32,
    pub going: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MapPanel {
    pub markers: Vec<MapMarker>,
    pub bounds: Option<Bounds>,
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: f64,
    pub padding_px: u32,
    pub full_screen: bool,
    pub geojson: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    pub view: View,
    pub label: String,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub view: View,
    pub create_dialog_open: bool,
    pub search_dialog_open: bool,
    pub search_suggestions: Vec<String>,
    pub map: Option<MapPanel>,
    pub list: Option<ListPanel>,
    pub detail: Option<DetailView>,
    pub saved: Vec<SavedPopup>,
    pub profile: Option<UserProfile>,
    pub business: Option<BusinessStats>,
    pub nav_items: Vec<NavItem>,
}

fn format_distance(miles: f32) -> String {
    if !miles.is_finite() || miles < 0.0 {
        return "Unknown".into();
    }
    format!("{miles:.1} mi")
}

fn going_label(going: bool) -> &'static str {
    if going {
        "Going!"
    } else {
        "Going"
    }
}

#[derive(Default)]
pub struct App;

impl App {
    fn select_if_known(model: &mut Model, id: PopupId, caps: &Capabilities) {
        if model.catalog.contains(&id) {
            debug!(popup = %id, "popup selected");
            model.nav.select_item(id);
            caps.render.render();
        } else {
            warn!(popup = %id, "ignoring selection of unknown popup");
        }
    }

    /// Toggles `id` in `set` when the popup is listed. `None` means it was ignored.
    fn toggle_going(catalog: &Catalog, set: &mut GoingSet, id: &PopupId) -> Option<bool> {
        if catalog.contains(id) {
            Some(set.toggle(id))
        } else {
            warn!(popup = %id, "ignoring going toggle for unknown popup");
            None
        }
    }

    fn build_list_panel(model: &Model) -> ListPanel {
        let page = pager::paginate(&model.catalog.popups, model.nav.page, model.config.page_size);
        let current = model.nav.page;

        let items = page
            .items
            .iter()
            .map(|p| {
                let going = model.list_going.has(&p.id);
                ListItemView {
                    id: p.id.0.clone(),
                    name: p.name.clone(),
                    cuisine: p.cuisine.clone(),
                    distance_text: format_distance(p.distance_miles),
                    drive_time: p.drive_time.clone(),
                    attendees_text: format!("{} attending", p.attendees),
                    short_description: p.short_description.clone(),
                    image_url: p.image_url.clone(),
                    going,
                    going_label: going_label(going).into(),
                }
            })
            .collect();

        let page_label = if page.total_pages == 0 {
            "No popups yet".into()
        } else {
            format!("Page {} of {}", current + 1, page.total_pages)
        };

        ListPanel {
            items,
            page: current,
            total_pages: page.total_pages,
            page_label,
            can_prev: current > 0,
            can_next: current + 1 < page.total_pages,
        }
    }

    fn build_detail(model: &Model, popup: &Popup) -> DetailView {
        DetailView {
            id: popup.id.0.clone(),
            name: popup.name.clone(),
            cuisine: popup.cuisine.clone(),
            rating: popup.rating,
            distance_text: format!(
                "{} away \u{2022} {} drive",
                format_distance(popup.distance_miles),
                popup.drive_time
            ),
            hours: popup.hours.clone(),
            contact: popup.contact.clone(),
            full_description: popup.full_description.clone(),
            image_url: popup.image_url.clone(),
            attendees: popup.attendees,
            going: model.detail_going.has(&popup.id),
        }
    }

    fn build_map_panel(model: &Model) -> MapPanel {
        let markers = map::build_markers(&model.catalog.popups);
        let geojson = map::markers_geojson(&markers);
        MapPanel {
            bounds: map::popup_bounds(&model.catalog.popups),
            markers,
            center_lat: model.config.map_center.lat(),
            center_lng: model.config.map_center.lng(),
            zoom: model.config.map_zoom,
            padding_px: MARKER_PADDING_PX,
            full_screen: model.nav.view == View::Map,
            geojson,
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    #[instrument(skip_all, fields(event = event.name()))]
    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        if event.is_user_initiated() {
            debug!("user action");
        }

        match event {
            Event::CatalogLoaded(catalog) => match catalog.validate() {
                Ok(()) => {
                    model.catalog = *catalog;
                    let total = model.total_pages();
                    model.nav.clamp_page(total);
                    if model.nav.selection.retain_in(&model.catalog) {
                        info!("selected popup no longer listed, selection cleared");
                    }
                    let dropped = model.list_going.retain_in(&model.catalog)
                        + model.detail_going.retain_in(&model.catalog);
                    if dropped > 0 {
                        info!(dropped, "going marks for unlisted popups cleared");
                    }
                    info!(popups = model.catalog.popups.len(), "catalog loaded");
                    caps.render.render();
                }
                Err(e) => {
                    let err = CoreError::from(e);
                    error!(error = %err, code = err.code(), "rejected catalog snapshot");
                    caps.notify.error(err.user_facing_message());
                }
            },

            Event::Configure(config) => match config.validate() {
                Ok(()) => {
                    model.config = config;
                    let total = model.total_pages();
                    model.nav.clamp_page(total);
                    info!(page_size = config.page_size.get(), "config applied");
                    caps.render.render();
                }
                Err(e) => {
                    error!(error = %e, "ignoring invalid config");
                }
            },

            Event::Navigate(view) => {
                model.nav.navigate(view);
                info!(to = %view, active = %model.nav.view, "navigated");
                caps.render.render();
            }

            Event::HeaderSearchClicked => {
                model.nav.open_search_dialog();
                caps.render.render();
            }

            Event::HeaderSettingsClicked => {
                caps.notify.info(SETTINGS_COMING_SOON);
            }

            Event::HeaderProfileClicked => {
                model.nav.navigate(View::Profile);
                caps.render.render();
            }

            Event::StartPoppingClicked => {
                model.nav.navigate(View::Business);
                caps.render.render();
            }

            Event::EditProfileClicked => {
                caps.notify.info(EDIT_PROFILE_COMING_SOON);
            }

            Event::PopupClicked { id } | Event::MarkerClicked { id } => {
                Self::select_if_known(model, id, caps);
            }

            Event::DetailClosed => {
                model.nav.close_detail();
                caps.render.render();
            }

            Event::NextPage => {
                let total = model.total_pages();
                model.nav.next_page(total);
                debug!(page = model.nav.page, "next page");
                caps.render.render();
            }

            Event::PrevPage => {
                model.nav.prev_page();
                debug!(page = model.nav.page, "previous page");
                caps.render.render();
            }

            Event::ListGoingToggled { id } => {
                if let Some(going) = Self::toggle_going(&model.catalog, &mut model.list_going, &id) {
                    debug!(popup = %id, going, "list going toggled");
                    caps.render.render();
                }
            }

            Event::DetailGoingToggled { id } => {
                if let Some(going) =
                    Self::toggle_going(&model.catalog, &mut model.detail_going, &id)
                {
                    debug!(popup = %id, going, "detail going toggled");
                    caps.render.render();
                }
            }

            Event::CreateDialogClosed => {
                model.nav.close_create_dialog();
                caps.render.render();
            }

            Event::SearchDialogClosed => {
                model.nav.close_search_dialog();
                caps.render.render();
            }

            Event::CreateSubmitted(form) => match form.validate() {
                Ok(()) => {
                    info!(popup_name = %form.name, "popup posted");
                    model.nav.close_create_dialog();
                    caps.notify.success(POPUP_POSTED);
                    caps.render.render();
                }
                Err(e) => {
                    let err = CoreError::from(e);
                    debug!(error = %err, "create form rejected");
                    caps.notify.error(err.user_facing_message());
                }
            },

            Event::SearchSubmitted { query } => match SearchQuery::parse(&query) {
                Ok(query) => {
                    info!(query = query.as_str(), "search submitted");
                    model.nav.close_search_dialog();
                    caps.notify.success(format!("Searching for: \"{}\"", query.as_str()));
                    caps.render.render();
                }
                Err(e) => {
                    let err = CoreError::from(e);
                    debug!(error = %err, "search rejected");
                    caps.notify.error(err.user_facing_message());
                }
            },
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        let nav = &model.nav;
        let on_map_screen = matches!(nav.view, View::Home | View::Map);
        let selected = model.selected_popup();

        let map = on_map_screen.then(|| Self::build_map_panel(model));
        let detail = selected
            .filter(|_| on_map_screen)
            .map(|p| Self::build_detail(model, p));
        let list = (nav.view == View::Home && selected.is_none())
            .then(|| Self::build_list_panel(model));
        let saved = if nav.view == View::Saved {
            model.catalog.saved.clone()
        } else {
            Vec::new()
        };
        let profile = (nav.view == View::Profile).then(|| model.profile.clone());
        let business = (nav.view == View::Business).then(|| model.business.clone());
        let search_suggestions = if nav.dialogs.search_open {
            SEARCH_SUGGESTIONS.iter().map(|&s| s.to_owned()).collect()
        } else {
            Vec::new()
        };

        let nav_items = View::FOOTER
            .into_iter()
            .map(|v| NavItem {
                view: v,
                label: v.label().into(),
                active: v == nav.view,
            })
            .collect();

        ViewModel {
            view: nav.view,
            create_dialog_open: nav.dialogs.create_open,
            search_dialog_open: nav.dialogs.search_open,
            search_suggestions,
            map,
            list,
            detail,
            saved,
            profile,
            business,
            nav_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_distance_one_decimal() {
        assert_eq!(format_distance(0.8), "0.8 mi");
        assert_eq!(format_distance(3.0), "3.0 mi");
        assert_eq!(format_distance(f32::NAN), "Unknown");
        assert_eq!(format_distance(-1.0), "Unknown");
    }

    #[test]
    fn list_panel_labels_pages() {
        let model = Model::default();
        let panel = App::build_list_panel(&model);
        assert_eq!(panel.items.len(), 5);
        assert_eq!(panel.page_label, "Page 1 of 3");
        assert!(!panel.can_prev);
        assert!(panel.can_next);
        assert_eq!(panel.items[0].attendees_text, "87 attending");
        assert_eq!(panel.items[0].going_label, "Going");
    }

    #[test]
    fn list_panel_for_empty_catalog() {
        let model = Model::new(Catalog::empty(), crate::CoreConfig::default());
        let panel = App::build_list_panel(&model);
        assert!(panel.items.is_empty());
        assert_eq!(panel.total_pages, 0);
        assert_eq!(panel.page_label, "No popups yet");
        assert!(!panel.can_prev && !panel.can_next);
    }

    #[test]
    fn detail_uses_detail_going_set() {
        let mut model = Model::default();
        let id = PopupId::new("2");
        model.list_going.toggle(&id);

        let popup = model.popup(&id).unwrap().clone();
        let detail = App::build_detail(&model, &popup);
        assert!(!detail.going);
        assert_eq!(detail.distance_text, "1.2 mi away \u{2022} 8 min drive");

        model.detail_going.toggle(&id);
        assert!(App::build_detail(&model, &popup).going);
    }

    #[test]
    fn map_panel_is_full_screen_only_on_map_view() {
        let mut model = Model::default();
        assert!(!App::build_map_panel(&model).full_screen);

        model.nav.navigate(View::Map);
        let panel = App::build_map_panel(&model);
        assert!(panel.full_screen);
        assert_eq!(panel.markers.len(), 12);
        assert_eq!(panel.zoom, 13.0);
        assert!(panel.bounds.is_some());
    }
}
