//! Map rendering: background disc, country fills, and labels.
//!
//! Pure painting over pre-projected paths; nothing here mutates state and
//! nothing is cached between frames.

use super::{path, CountryFeature, FeaturePath, GlobeProjection};
use crate::state::ViewMode;
use eframe::egui::{Color32, FontId, Painter, Pos2, Shape, Stroke};

/// Background disc behind the globe.
const DISC_COLOR: Color32 = Color32::from_rgb(242, 242, 242);
/// Country fill, alpha scaled per feature index.
const FILL_RGB: (u8, u8, u8) = (38, 50, 56);
/// Country outline.
const STROKE_COLOR: Color32 = Color32::from_rgb(240, 248, 255);
const STROKE_WIDTH: f32 = 0.5;
const LABEL_COLOR: Color32 = Color32::WHITE;
const LABEL_FONT_SIZE: f32 = 11.0;

/// Paints the full scene: disc, one filled path per feature, then labels
/// for features whose projected area clears the threshold.
pub fn render_map(
    painter: &Painter,
    features: &[CountryFeature],
    paths: &[FeaturePath],
    projection: &GlobeProjection,
    min_label_area: f64,
) {
    if projection.view == ViewMode::Globe {
        painter.circle_filled(projection.translate, projection.disc_radius(), DISC_COLOR);
    }

    let count = features.len().max(1);
    for (index, feature_path) in paths.iter().enumerate() {
        let alpha = (255.0 * index as f32 / count as f32) as u8;
        let fill = Color32::from_rgba_unmultiplied(FILL_RGB.0, FILL_RGB.1, FILL_RGB.2, alpha);
        render_path(painter, feature_path, fill);
    }

    for (feature, feature_path) in features.iter().zip(paths) {
        render_label(painter, feature, feature_path, min_label_area);
    }
}

fn render_path(painter: &Painter, feature_path: &FeaturePath, fill: Color32) {
    let stroke = Stroke::new(STROKE_WIDTH, STROKE_COLOR);

    for ring in &feature_path.rings {
        painter.add(Shape::convex_polygon(ring.clone(), fill, Stroke::NONE));

        let mut outline = ring.clone();
        if let Some(first) = ring.first() {
            outline.push(*first);
        }
        painter.add(Shape::line(outline, stroke));
    }
}

/// Draws the country name centered on the projected centroid.
///
/// The galley measures the rendered text width; x is shifted left by half
/// of it, y stays at the raw centroid.
fn render_label(
    painter: &Painter,
    feature: &CountryFeature,
    feature_path: &FeaturePath,
    min_label_area: f64,
) {
    if feature.name.is_empty() || feature_path.is_empty() {
        return;
    }
    if !path::should_label(feature_path.area, min_label_area) {
        return;
    }

    let galley = painter.layout_no_wrap(
        feature.name.clone(),
        FontId::proportional(LABEL_FONT_SIZE),
        LABEL_COLOR,
    );
    let pos = Pos2::new(
        feature_path.centroid.x - galley.size().x / 2.0,
        feature_path.centroid.y,
    );
    painter.galley(pos, galley, LABEL_COLOR);
}
