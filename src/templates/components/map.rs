use crate::map::MapView;
use maud::{html, Markup, PreEscaped};

const MAP_SCRIPT: &str = r#"
(function () {
  function text(s) {
    var el = document.createElement('span');
    el.textContent = s;
    return el;
  }
  var view = JSON.parse(document.getElementById('map-data').textContent);
  var map = L.map('map').setView([view.center.lat, view.center.lon], view.zoom);
  L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
  }).addTo(map);
  view.markers.forEach(function (m) {
    L.circleMarker([m.coord.lat, m.coord.lon], {
      radius: m.kind === 'building' ? 9 : 7,
      color: m.color,
      fillColor: m.color,
      fillOpacity: 0.7
    })
      .bindPopup(text(m.popup))
      .bindTooltip(text(m.tooltip))
      .addTo(map);
  });
})();
"#;

/// Map container plus the marker payload. The payload sits in a JSON data
/// block so no marker text is ever evaluated as script.
pub fn map_panel(view: &MapView) -> Markup {
    let payload = serde_json::to_string(view)
        .unwrap_or_else(|_| "{\"center\":{\"lat\":37.5665,\"lon\":126.978},\"zoom\":11,\"markers\":[]}".into())
        .replace("</", "<\\/");

    html! {
        div id="map" {}
        script type="application/json" id="map-data" { (PreEscaped(payload)) }
        script { (PreEscaped(MAP_SCRIPT)) }
    }
}
