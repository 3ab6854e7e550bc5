use yplaces_boundary::Place;

pub const DEFAULT_MAP_ZOOM: f64 = 15.0;

/// Initial setup of the map that shows a single place.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub lat: f64,
    pub lng: f64,
    pub zoom: f64,
    pub marker_title: String,
    pub zoom_control: bool,
    pub scroll_wheel_zoom: bool,
}

impl From<&Place> for MapView {
    fn from(place: &Place) -> Self {
        Self {
            lat: place.latitude,
            lng: place.longitude,
            zoom: DEFAULT_MAP_ZOOM,
            marker_title: place.name.clone(),
            zoom_control: true,
            scroll_wheel_zoom: false,
        }
    }
}
