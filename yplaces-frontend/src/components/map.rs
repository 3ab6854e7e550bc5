use js_sys::{Function, Reflect};
use leptos::*;
use leptos_leaflet::{position, MapContainer, Marker, Popup, Position, TileLayer};
use wasm_bindgen::{JsCast, JsValue};

use yplaces_core::map::MapView;

const TILE_LAYER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Map centered on the place with a single marker.
#[component]
pub fn PlaceMap(map_view: MapView) -> impl IntoView {
    let map = RwSignal::<Option<leaflet::Map>>::new(None);

    let MapView {
        lat,
        lng,
        zoom,
        marker_title,
        zoom_control,
        scroll_wheel_zoom,
    } = map_view;

    Effect::new(move |_| {
        let Some(map) = map.get() else {
            return;
        };
        if scroll_wheel_zoom {
            return;
        }
        log::debug!("Disable scroll wheel zoom");
        if let Err(err) = disable_handler(map.as_ref(), "scrollWheelZoom") {
            log::warn!("Unable to disable scroll wheel zoom: {err:?}");
        }
    });

    let center = Position::new(lat, lng);

    view! {
      <MapContainer
        class="map"
        center
        zoom
        zoom_control
        map=map.write_only()
        set_view=true
      >
        <TileLayer url=TILE_LAYER_URL attribution=MAP_ATTRIBUTION />
        <Marker position=position!(lat, lng)>
          <Popup>
            <strong>{ marker_title }</strong>
          </Popup>
        </Marker>
      </MapContainer>
    }
}

fn disable_handler(map: &JsValue, name: &str) -> Result<(), JsValue> {
    let handler = Reflect::get(map, &JsValue::from_str(name))?;
    let disable = Reflect::get(&handler, &JsValue::from_str("disable"))?;
    disable.dyn_into::<Function>()?.call0(&handler)?;
    Ok(())
}
