//! Marker data for the shell's map widget.

use geojson::{feature::Id, Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use serde::{Deserialize, Serialize};

use crate::model::{LatLng, Popup};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MapMarker {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub attendees: u32,
    pub lat: f64,
    pub lng: f64,
}

impl From<&Popup> for MapMarker {
    fn from(p: &Popup) -> Self {
        Self {
            id: p.id.0.clone(),
            name: p.name.clone(),
            cuisine: p.cuisine.clone(),
            attendees: p.attendees,
            lat: p.location.lat(),
            lng: p.location.lng(),
        }
    }
}

/// Axis-aligned box in degrees.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Smallest box containing every point. Does not wrap the antimeridian.
    pub fn fit<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self {
                    south: p.lat(),
                    west: p.lng(),
                    north: p.lat(),
                    east: p.lng(),
                },
                Some(b) => Self {
                    south: b.south.min(p.lat()),
                    west: b.west.min(p.lng()),
                    north: b.north.max(p.lat()),
                    east: b.east.max(p.lng()),
                },
            })
        })
    }

    pub fn contains(&self, p: LatLng) -> bool {
        (self.south..=self.north).contains(&p.lat()) && (self.west..=self.east).contains(&p.lng())
    }
}

pub fn build_markers(popups: &[Popup]) -> Vec<MapMarker> {
    popups.iter().map(MapMarker::from).collect()
}

pub fn popup_bounds(popups: &[Popup]) -> Option<Bounds> {
    Bounds::fit(popups.iter().map(|p| p.location))
}

/// Renders markers as a GeoJSON `FeatureCollection` of points.
pub fn markers_geojson(markers: &[MapMarker]) -> String {
    let features = markers
        .iter()
        .map(|m| {
            let mut properties = JsonObject::new();
            properties.insert("id".into(), m.id.clone().into());
            properties.insert("name".into(), m.name.clone().into());
            properties.insert("cuisine".into(), m.cuisine.clone().into());
            properties.insert("attendees".into(), m.attendees.into());

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![m.lng, m.lat]))),
                id: Some(Id::String(m.id.clone())),
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn at(lat: f64, lng: f64) -> LatLng {
        LatLng::new(lat, lng).unwrap()
    }

    #[test]
    fn fit_of_nothing_is_none() {
        assert_eq!(Bounds::fit(Vec::new()), None);
    }

    #[test]
    fn fit_single_point_is_degenerate() {
        let b = Bounds::fit([at(37.0, -122.0)]).unwrap();
        assert_eq!(b.south, b.north);
        assert_eq!(b.west, b.east);
    }

    #[test]
    fn fit_contains_all_seed_popups() {
        let catalog = Catalog::seed();
        let bounds = popup_bounds(&catalog.popups).unwrap();
        assert!(catalog.popups.iter().all(|p| bounds.contains(p.location)));
        assert!(!bounds.contains(at(0.0, 0.0)));
    }

    #[test]
    fn markers_follow_catalog_order() {
        let catalog = Catalog::seed();
        let markers = build_markers(&catalog.popups);
        assert_eq!(markers.len(), catalog.popups.len());
        assert_eq!(markers[0].id, "1");
        assert_eq!(markers[11].id, "12");
    }

    #[test]
    fn geojson_puts_longitude_first() {
        let markers = vec![MapMarker {
            id: "5".into(),
            name: "Dumpling Den".into(),
            cuisine: "Chinese".into(),
            attendees: 118,
            lat: 37.79,
            lng: -122.40,
        }];

        let parsed: GeoJson = markers_geojson(&markers).parse().unwrap();
        let GeoJson::FeatureCollection(fc) = parsed else {
            panic!("expected a feature collection");
        };
        assert_eq!(fc.features.len(), 1);

        let feature = &fc.features[0];
        assert_eq!(feature.id, Some(Id::String("5".into())));
        assert_eq!(feature.property("attendees"), Some(&serde_json::json!(118)));
        assert_eq!(feature.property("id"), Some(&serde_json::json!("5")));
        match feature.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Point(coords)) => assert_eq!(coords, &vec![-122.40, 37.79]),
            other => panic!("unexpected geometry: {other:?}"),
        }
    }
}
