//! Web page host backed by Mapbox GL JS.
//!
//! All classification happens on our side; the page only receives the
//! finished marker list and replays it once the widget fires `load`.

use tracing::{debug, warn};

use super::registry::MarkerRegistry;
use super::types::{Control, Marker};
use super::MapHost;
use crate::app::MapConfig;
use crate::render::html_escape;

const MAPBOX_GL_VERSION: &str = "v1.13.3";

/// Map host that renders to a standalone HTML document
#[derive(Debug)]
pub struct HtmlMapHost {
    config: MapConfig,
    registry: MarkerRegistry,
}

impl HtmlMapHost {
    /// Create a host with its navigation control attached
    pub fn new(config: MapConfig) -> Self {
        let mut host = Self {
            config,
            registry: MarkerRegistry::new(),
        };
        host.add_control(Control::Navigation);
        host
    }

    pub fn markers(&self) -> &[Marker] {
        self.registry.markers()
    }

    /// Render the complete page
    pub fn to_page(&self) -> Result<String, serde_json::Error> {
        if self.config.access_token.is_empty() {
            warn!("No access token configured, basemap tiles will not load");
        }

        let markers = script_json(&serde_json::to_string(self.registry.markers())?);
        let center = serde_json::to_string(&self.config.center)?;
        let token = serde_json::to_string(&self.config.access_token)?;
        let style = serde_json::to_string(&self.config.style)?;
        let container = serde_json::to_string(&self.config.container_id)?;

        let controls: String = self
            .registry
            .controls()
            .iter()
            .map(|control| match control {
                Control::Navigation => "map.addControl(new mapboxgl.NavigationControl());\n",
            })
            .collect();

        debug!(markers = self.registry.markers().len(), "Rendering page");

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Calidad del aire - PM2.5</title>
    <script src="https://api.mapbox.com/mapbox-gl-js/{version}/mapbox-gl.js"></script>
    <link href="https://api.mapbox.com/mapbox-gl-js/{version}/mapbox-gl.css" rel="stylesheet">
    <style>
        body {{ margin: 0; padding: 0; font-family: sans-serif; }}
        #{container_id} {{ position: absolute; top: 2em; bottom: 0; width: 100%; }}
        #{banner_id} {{ height: 2em; line-height: 2em; padding: 0 1em; }}
        .marker {{
            width: 32px;
            height: 32px;
            border-radius: 50%;
            line-height: 32px;
            text-align: center;
            font-size: 12px;
            font-weight: bold;
            color: #000;
            cursor: pointer;
        }}
    </style>
</head>
<body>
    <div id="{banner_id}">{banner}</div>
    <div id="{container_id}"></div>
    <script>
mapboxgl.accessToken = {token};
var map = new mapboxgl.Map({{
  container: {container},
  style: {style},
  center: {center},
  zoom: {zoom}
}});
{controls}var markers = {markers};
map.on('load', function () {{
  markers.forEach(function (m) {{
    var popup = new mapboxgl.Popup({{ offset: m.popup.offset }})
      .setLngLat(m.position)
      .setHTML(m.popup.html);
    var el = document.createElement('div');
    el.className = 'marker';
    el.innerText = m.label;
    el.style.background = m.background;
    if (m.foreground) {{
      el.style.color = m.foreground;
    }}
    new mapboxgl.Marker(el)
      .setLngLat(m.position)
      .setPopup(popup)
      .addTo(map);
  }});
}});
    </script>
</body>
</html>
"#,
            version = MAPBOX_GL_VERSION,
            container_id = html_escape(&self.config.container_id),
            banner_id = html_escape(&self.config.banner_id),
            banner = html_escape(self.registry.banner().unwrap_or_default()),
            token = token,
            container = container,
            style = style,
            center = center,
            zoom = self.config.zoom,
            controls = controls,
            markers = markers,
        ))
    }
}

/// Make JSON safe to embed in a `<script>` element
fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

impl MapHost for HtmlMapHost {
    fn config(&self) -> &MapConfig {
        &self.config
    }

    fn add_control(&mut self, control: Control) {
        self.registry.add_control(control);
    }

    fn has_control(&self, control: Control) -> bool {
        self.registry.controls().contains(&control)
    }

    fn set_banner(&mut self, text: &str) {
        self.registry.set_banner(text);
    }

    fn banner(&self) -> Option<String> {
        self.registry.banner().map(str::to_string)
    }

    fn add_marker(&mut self, marker: Marker) {
        self.registry.push(marker);
    }

    fn marker_count(&self) -> usize {
        self.registry.markers().len()
    }

    fn clear(&mut self) {
        self.registry.clear_markers();
    }
}
