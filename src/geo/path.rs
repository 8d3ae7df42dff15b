//! Path generation: projected feature outlines, areas, and centroids.

use super::{CountryFeature, GlobeProjection};
use eframe::egui::{Pos2, Vec2};

/// A feature projected into screen space for the current frame.
#[derive(Debug, Clone)]
pub struct FeaturePath {
    /// Visible screen-space rings. Far-hemisphere points are dropped, so
    /// a ring may be shorter than its source or absent entirely.
    pub rings: Vec<Vec<Pos2>>,
    /// Absolute projected area in px², summed over rings.
    pub area: f64,
    /// Projected centroid, the label anchor.
    pub centroid: Pos2,
}

impl FeaturePath {
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

/// Projects a feature's rings through the given projection.
///
/// Area and centroid are post-rotation screen-space values: a country's
/// label eligibility changes as it rotates toward or away from the viewer.
pub fn project_feature(projection: &GlobeProjection, feature: &CountryFeature) -> FeaturePath {
    let mut rings: Vec<Vec<Pos2>> = Vec::with_capacity(feature.rings.len());

    for ring in &feature.rings {
        let points: Vec<Pos2> = ring
            .iter()
            .filter_map(|c| projection.project(*c))
            .collect();
        if points.len() >= 3 {
            rings.push(points);
        }
    }

    let mut total_area = 0.0;
    let mut best_area = 0.0;
    let mut centroid = Pos2::ZERO;

    for points in &rings {
        let (area, c) = ring_area_centroid(points);
        total_area += area;
        // Anchor the label on the largest visible ring.
        if area > best_area {
            best_area = area;
            centroid = c;
        }
    }

    FeaturePath {
        rings,
        area: total_area,
        centroid,
    }
}

/// Shoelace area (absolute, px²) and centroid of a closed ring.
///
/// Degenerate rings fall back to the vertex average so the label anchor
/// stays inside the shape's vicinity.
fn ring_area_centroid(points: &[Pos2]) -> (f64, Pos2) {
    let n = points.len();
    let mut signed = 0.0f64;
    let mut cx = 0.0f64;
    let mut cy = 0.0f64;

    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        let cross = p.x as f64 * q.y as f64 - q.x as f64 * p.y as f64;
        signed += cross;
        cx += (p.x as f64 + q.x as f64) * cross;
        cy += (p.y as f64 + q.y as f64) * cross;
    }

    let area = signed / 2.0;
    if area.abs() < 1e-9 {
        let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
        let avg = Pos2::new(sum.x / n as f32, sum.y / n as f32);
        return (0.0, avg);
    }

    (
        area.abs(),
        Pos2::new((cx / (6.0 * area)) as f32, (cy / (6.0 * area)) as f32),
    )
}

/// Label eligibility rule: strictly greater than the threshold, so a
/// feature sitting exactly at the minimum stays unlabeled.
pub fn should_label(area: f64, min_label_area: f64) -> bool {
    area > min_label_area
}

/// Even-odd point-in-polygon test over a path's rings.
pub fn point_in_rings(pos: Pos2, rings: &[Vec<Pos2>]) -> bool {
    rings.iter().any(|ring| point_in_ring(pos, ring))
}

fn point_in_ring(pos: Pos2, ring: &[Pos2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = ring[i];
        let pj = ring[j];
        if (pi.y > pos.y) != (pj.y > pos.y)
            && pos.x < (pj.x - pi.x) * (pos.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
