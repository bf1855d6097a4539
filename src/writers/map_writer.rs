use crate::error::Result;
use crate::models::{CityCoordinate, RankedEntry};
use crate::writers::labels::OutputLabels;
use crate::utils::color::value_to_color;
use crate::utils::constants::{MAP_CENTER, MAP_ZOOM};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

const MAP_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="zh">
<head>
  <meta charset="UTF-8" />
  <title>__TITLE__</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" integrity="sha256-sA+vx6E1uu6wV6C0b8m2nLys9O6p3p0iJEJ4e5ihk54=" crossorigin="" />
  <style> #map { height: 700px; } .legend { background: white; padding: 10px; line-height: 1.6; } </style>
</head>
<body>
  <h2>__HEADING__</h2>
  <div id="map"></div>
  <div class="legend">__LEGEND__</div>
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" integrity="sha256-VHLoG2z8Xu1J10EhFM+w8ZRBK7f9BLeTYiQtohKQPe0=" crossorigin=""></script>
  <script>
    const map = L.map('map').setView([__CENTER_LAT__, __CENTER_LON__], __ZOOM__);
    L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', { maxZoom: 18, attribution: '&copy; OpenStreetMap' }).addTo(map);
    const cities = __CITIES__;
    const valueLabel = __VALUE_LABEL__;
    cities.forEach((item) => {
      const marker = L.circleMarker([item.lat, item.lon], {
        radius: 7,
        color: item.color,
        fillColor: item.color,
        fillOpacity: 0.8,
        weight: 1
      }).addTo(map);
      marker.bindPopup(`${item.rank}. ${item.city}<br/>${valueLabel}: ${item.aqi}`);
    });
  </script>
</body>
</html>
"#;

/// One marker on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFeature {
    pub rank: usize,
    pub city: String,
    pub aqi: f64,
    pub lat: f64,
    pub lon: f64,
    pub color: String,
}

/// Renders ranked cities as colored markers on a Leaflet map page
pub struct MapWriter {
    labels: OutputLabels,
}

impl MapWriter {
    pub fn new() -> Self {
        Self {
            labels: OutputLabels::default(),
        }
    }

    pub fn with_labels(mut self, labels: &OutputLabels) -> Self {
        self.labels = labels.clone();
        self
    }

    /// Build map markers for ranked cities that have a coordinate.
    ///
    /// Colors span the full range of ranked values, including cities left off the map.
    pub fn build_features(
        &self,
        ranking: &[RankedEntry],
        coordinates: &HashMap<String, CityCoordinate>,
    ) -> Vec<MapFeature> {
        let (min_val, max_val) = ranking
            .iter()
            .map(|e| e.value)
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 1.0));

        ranking
            .iter()
            .filter_map(|entry| {
                let coord = coordinates.get(&entry.city)?;
                Some(MapFeature {
                    rank: entry.rank,
                    city: entry.city.clone(),
                    aqi: (entry.value * 100.0).round() / 100.0,
                    lat: coord.latitude,
                    lon: coord.longitude,
                    color: value_to_color(entry.value, min_val, max_val),
                })
            })
            .collect()
    }

    pub fn render(&self, features: &[MapFeature]) -> Result<String> {
        // "</" inside a script block would end it early
        let cities = serde_json::to_string(features)?.replace("</", "<\\/");
        let value_label = serde_json::to_string(&self.labels.value_label())?.replace("</", "<\\/");

        Ok(MAP_TEMPLATE
            .replace("__TITLE__", &html_escape(&self.labels.title()))
            .replace("__HEADING__", &html_escape(&self.labels.heading()))
            .replace("__LEGEND__", &html_escape(&self.labels.legend()))
            .replace("__VALUE_LABEL__", &value_label)
            .replace("__CENTER_LAT__", &MAP_CENTER.0.to_string())
            .replace("__CENTER_LON__", &MAP_CENTER.1.to_string())
            .replace("__ZOOM__", &MAP_ZOOM.to_string())
            .replace("__CITIES__", &cities))
    }

    /// Write the map page for `ranking` to `path`
    pub fn write_map(
        &self,
        ranking: &[RankedEntry],
        coordinates: &HashMap<String, CityCoordinate>,
        path: &Path,
    ) -> Result<usize> {
        let features = self.build_features(ranking, coordinates);
        let html = self.render(&features)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, html)?;

        debug!(path = %path.display(), markers = features.len(), "Wrote map");
        Ok(features.len())
    }
}

impl Default for MapWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
