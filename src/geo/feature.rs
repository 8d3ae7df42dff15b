//! Country boundary features decoded from a TopoJSON topology document.

use geo_types::Coord;
use geojson::{Feature, Value};
use topojson::{to_geojson, Topology};

/// Name of the geometry collection holding country shapes in the
/// topology document.
const COUNTRIES_OBJECT: &str = "countries";

/// A single country's boundary geometry plus its display name.
///
/// Immutable once loaded; the renderer only ever re-projects it.
#[derive(Debug, Clone)]
pub struct CountryFeature {
    /// Display name, empty when the source document carries none.
    pub name: String,
    /// Exterior boundary rings in (lon, lat) degrees. One ring for a
    /// simple polygon, several for island groups.
    pub rings: Vec<Vec<Coord<f64>>>,
}

/// Decodes a TopoJSON document into an ordered list of country features.
///
/// Order follows the source document and is relied on for deterministic
/// rendering (fill opacity varies by index).
pub fn decode_topology(raw: &str) -> Result<Vec<CountryFeature>, String> {
    let topology: Topology =
        serde_json::from_str(raw).map_err(|e| format!("Failed to parse topology: {}", e))?;

    let collection = to_geojson(&topology, COUNTRIES_OBJECT)
        .map_err(|e| format!("Failed to extract '{}' object: {:?}", COUNTRIES_OBJECT, e))?;

    Ok(collection
        .features
        .iter()
        .filter_map(convert_feature)
        .collect())
}

fn convert_feature(feature: &Feature) -> Option<CountryFeature> {
    let name = feature
        .properties
        .as_ref()
        .and_then(|p| p.get("name").or_else(|| p.get("NAME")))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .unwrap_or_default();

    let geometry = feature.geometry.as_ref()?;
    let rings = match &geometry.value {
        Value::Polygon(rings) => {
            if rings.is_empty() {
                return None;
            }
            vec![convert_ring(&rings[0])]
        }
        Value::MultiPolygon(polygons) => {
            let rings: Vec<Vec<Coord<f64>>> = polygons
                .iter()
                .filter(|rings| !rings.is_empty())
                .map(|rings| convert_ring(&rings[0]))
                .collect();
            if rings.is_empty() {
                return None;
            }
            rings
        }
        // Countries are always polygonal; anything else is skipped.
        _ => return None,
    };

    Some(CountryFeature { name, rings })
}

fn convert_ring(ring: &[Vec<f64>]) -> Vec<Coord<f64>> {
    ring.iter().map(|c| Coord { x: c[0], y: c[1] }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two-country topology: a quadrilateral and a triangle sharing an arc.
    fn sample_topology() -> &'static str {
        r#"{
            "type": "Topology",
            "objects": {
                "countries": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {
                            "type": "Polygon",
                            "properties": {"name": "Alpha"},
                            "arcs": [[0, 1]]
                        },
                        {
                            "type": "Polygon",
                            "properties": {"name": "Beta"},
                            "arcs": [[2, -1]]
                        }
                    ]
                }
            },
            "arcs": [
                [[0, 0], [0, 10]],
                [[0, 10], [-10, 10], [-10, 0], [0, 0]],
                [[0, 0], [10, 5], [0, 10]]
            ]
        }"#
    }

    #[test]
    fn decodes_countries_in_document_order() {
        let features = decode_topology(sample_topology()).expect("decodes");

        assert_eq!(features.len(), 2);
        assert_eq!(features[0].name, "Alpha");
        assert_eq!(features[1].name, "Beta");
    }

    #[test]
    fn rings_are_closed_lon_lat() {
        let features = decode_topology(sample_topology()).expect("decodes");

        let ring = &features[0].rings[0];
        assert!(ring.len() >= 4);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn rejects_malformed_document() {
        assert!(decode_topology("{not json").is_err());
        assert!(decode_topology("{\"type\": \"FeatureCollection\"}").is_err());
    }

    #[test]
    fn missing_countries_object_is_an_error() {
        let topo = r#"{
            "type": "Topology",
            "objects": {"rivers": {"type": "GeometryCollection", "geometries": []}},
            "arcs": []
        }"#;
        assert!(decode_topology(topo).is_err());
    }
}
