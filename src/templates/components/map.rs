use crate::config::MapConfig;
use crate::domain::apartment::ApartmentRecord;
use maud::{html, Markup, PreEscaped};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    pub popup: String,
}

/// Records with both coordinates; the rest stay off the map.
pub fn map_markers(records: &[ApartmentRecord]) -> Vec<MapMarker> {
    records
        .iter()
        .filter_map(|r| {
            r.coordinates().map(|c| MapMarker {
                lat: c.latitude,
                lon: c.longitude,
                popup: r.popup_text(),
            })
        })
        .collect()
}

const MAP_SCRIPT: &str = r#"
(function () {
  var el = document.getElementById('map');
  if (!el || typeof L === 'undefined') { return; }
  var markers = JSON.parse(document.getElementById('map-markers').textContent);
  var map = L.map(el).setView([+el.dataset.lat, +el.dataset.lon], +el.dataset.zoom);
  L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
  }).addTo(map);
  var cluster = L.markerClusterGroup();
  markers.forEach(function (m) {
    var popup = document.createElement('pre');
    popup.textContent = m.popup;
    L.marker([m.lat, m.lon]).bindPopup(popup).addTo(cluster);
  });
  map.addLayer(cluster);
})();
"#;

pub fn apartment_map(records: &[ApartmentRecord], config: &MapConfig) -> Markup {
    let markers = map_markers(records);
    // Keep the JSON from closing its <script> element early.
    let data = serde_json::to_string(&markers)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/");

    html! {
        div
            id="map"
            class="map"
            data-lat=(config.center_lat)
            data-lon=(config.center_lon)
            data-zoom=(config.zoom)
        {}
        p class="muted" { (markers.len()) " of " (records.len()) " apartments have coordinates." }
        script type="application/json" id="map-markers" { (PreEscaped(data)) }
        script { (PreEscaped(MAP_SCRIPT)) }
    }
}
