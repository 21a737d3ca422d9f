use crux_core::testing::AppTester;
use shared::{App, Effect, Event, Model, PopupId, View};

fn rendered(effects: &[Effect]) -> bool {
    effects.iter().any(|e| matches!(e, Effect::Render(_)))
}

#[test]
fn browse_select_and_navigate() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();

    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    // 1. Fresh core shows the first page on Home
    let view = app.view(&model);
    assert_eq!(view.view, View::Home);
    let list = view.list.expect("home shows the list");
    assert_eq!(list.items.len(), 5);
    assert_eq!(list.page_label, "Page 1 of 3");
    assert!(view.map.is_some());
    assert!(view.detail.is_none());

    // 2. Page to the end; advancing past it is a no-op
    for _ in 0..4 {
        let update = app.update(Event::NextPage, &mut model);
        assert!(rendered(&update.effects));
    }
    assert_eq!(model.nav.page, 2);
    let list = app.view(&model).list.unwrap();
    assert_eq!(list.items.len(), 2);
    assert!(!list.can_next);

    // 3. Select a popup from the list: detail replaces the list
    app.update(Event::PopupClicked { id: PopupId::new("11") }, &mut model);
    let view = app.view(&model);
    assert!(view.list.is_none());
    assert_eq!(view.detail.unwrap().name, "Pho Real");

    // 4. Profile clears the selection and leaves the map screen
    app.update(Event::HeaderProfileClicked, &mut model);
    assert_eq!(model.nav.view, View::Profile);
    assert!(model.nav.selection.is_empty());
    let view = app.view(&model);
    assert!(view.map.is_none());
    assert!(view.detail.is_none());
    assert_eq!(model.nav.page, 2);

    // 5. Home resets the page
    app.update(Event::Navigate(View::Home), &mut model);
    assert_eq!(model.nav.page, 0);
    assert_eq!(app.view(&model).list.unwrap().page_label, "Page 1 of 3");
}

#[test]
fn overlays_keep_background_view() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(Event::Navigate(View::Map), &mut model);
    app.update(Event::MarkerClicked { id: PopupId::new("4") }, &mut model);
    assert!(app.view(&model).detail.is_some());

    app.update(Event::Navigate(View::Post), &mut model);
    let view = app.view(&model);
    assert_eq!(view.view, View::Map);
    assert!(view.create_dialog_open);
    assert!(view.detail.is_none(), "post clears the selection");
    assert!(view.map.unwrap().full_screen);

    app.update(Event::CreateDialogClosed, &mut model);
    assert_eq!(model.nav.view, View::Map);
    assert!(!model.nav.dialogs.create_open);

    // The header search button opens the dialog without touching the selection
    app.update(Event::MarkerClicked { id: PopupId::new("4") }, &mut model);
    app.update(Event::HeaderSearchClicked, &mut model);
    assert!(model.nav.dialogs.search_open);
    assert_eq!(model.nav.selection.selected(), Some(&PopupId::new("4")));
}

#[test]
fn unknown_popup_click_is_ignored() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(Event::PopupClicked { id: PopupId::new("42") }, &mut model);
    assert!(model.nav.selection.is_empty());
    assert!(!rendered(&update.effects));
}

#[test]
fn going_sets_are_per_panel() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    let id = PopupId::new("1");

    app.update(Event::ListGoingToggled { id: id.clone() }, &mut model);
    let item = app.view(&model).list.unwrap().items.remove(0);
    assert!(item.going);
    assert_eq!(item.going_label, "Going!");

    app.update(Event::PopupClicked { id: id.clone() }, &mut model);
    assert!(!app.view(&model).detail.unwrap().going);

    app.update(Event::DetailGoingToggled { id: id.clone() }, &mut model);
    assert!(app.view(&model).detail.unwrap().going);

    app.update(Event::ListGoingToggled { id: id.clone() }, &mut model);
    assert!(!model.list_going.has(&id));
    assert!(model.detail_going.has(&id));
}

#[test]
fn going_toggle_for_unknown_popup_is_ignored() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    let stranger = PopupId::new("no-such-popup");

    let update = app.update(Event::ListGoingToggled { id: stranger.clone() }, &mut model);
    assert!(!rendered(&update.effects));
    let update = app.update(Event::DetailGoingToggled { id: stranger.clone() }, &mut model);
    assert!(!rendered(&update.effects));

    assert!(model.list_going.is_empty());
    assert!(model.detail_going.is_empty());
}

#[test]
fn profile_screen_shows_user() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    assert!(app.view(&model).profile.is_none());

    app.update(Event::HeaderProfileClicked, &mut model);
    let view = app.view(&model);
    let profile = view.profile.expect("profile view carries the user");
    assert_eq!(profile.name, "Joshua K");
    assert_eq!(profile.location, "San Francisco, CA");
    assert_eq!(profile.food_preferences, ["Bagels", "Matcha"]);
    assert!(view.business.is_none());
    assert!(view.map.is_none() && view.list.is_none());
}

#[test]
fn business_screen_shows_stats() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(Event::HeaderProfileClicked, &mut model);
    app.update(Event::StartPoppingClicked, &mut model);
    let view = app.view(&model);
    assert!(view.profile.is_none());

    let business = view.business.expect("business view carries stats");
    assert_eq!(business.name, "Joshua's Coffee Corner");
    assert_eq!(business.total_attendees, 342);
    assert_eq!(business.average_attendees, 43);
    assert_eq!(business.previous_popups.len(), 5);
    assert_eq!(business.previous_popups[0].location, "Golden Gate Park, SF");
    assert_eq!(business.attendance.first().map(|p| p.date.as_str()), Some("Oct 5"));

    app.update(Event::Navigate(View::Home), &mut model);
    assert!(app.view(&model).business.is_none());
}

#[test]
fn footer_marks_active_view() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(Event::Navigate(View::Saved), &mut model);
    let view = app.view(&model);
    assert_eq!(view.saved.len(), 2);

    let active: Vec<View> = view
        .nav_items
        .iter()
        .filter(|i| i.active)
        .map(|i| i.view)
        .collect();
    assert_eq!(active, [View::Saved]);
    assert_eq!(view.nav_items.len(), 5);

    app.update(Event::StartPoppingClicked, &mut model);
    let view = app.view(&model);
    assert_eq!(view.view, View::Business);
    assert!(view.nav_items.iter().all(|i| !i.active));
}
