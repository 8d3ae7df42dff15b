//! Spherical projection and coordinate transformation.
//!
//! Converts geographic coordinates (lon/lat) into screen coordinates for
//! the current rotation, scale, and translation. The projector is rebuilt
//! from scratch every frame; projecting is cheap at this data size and
//! rebuilding keeps it stateless.

use crate::state::{RotationState, ViewMode};
use eframe::egui::Pos2;
use geo_types::Coord;

/// Screen-space projector for one frame.
#[derive(Debug, Clone)]
pub struct GlobeProjection {
    /// Globe (orthographic) or atlas (equirectangular) view.
    pub view: ViewMode,
    /// Rotation applied before projecting.
    pub rotation: RotationState,
    /// Projection scale in pixels (globe radius for the orthographic view).
    pub scale: f64,
    /// Screen position the (0, 0) coordinate maps to at zero rotation.
    pub translate: Pos2,
}

impl GlobeProjection {
    pub fn new(view: ViewMode, rotation: RotationState, scale: f64, translate: Pos2) -> Self {
        Self {
            view,
            rotation,
            scale,
            translate,
        }
    }

    /// Projects a (lon, lat) coordinate to a screen position.
    ///
    /// Returns `None` for points on the far hemisphere in the globe view;
    /// the atlas view maps every coordinate.
    pub fn project(&self, coord: Coord<f64>) -> Option<Pos2> {
        match self.view {
            ViewMode::Globe => self.project_orthographic(coord),
            ViewMode::Atlas => Some(self.project_equirectangular(coord)),
        }
    }

    /// Orthographic projection with rotate-then-project semantics:
    /// longitude rotation first, then latitude rotation about the y-axis.
    fn project_orthographic(&self, coord: Coord<f64>) -> Option<Pos2> {
        let lambda = (coord.x + self.rotation.lambda).to_radians();
        let phi = coord.y.to_radians();
        let delta_phi = self.rotation.phi.to_radians();

        // Unit sphere position after the longitude rotation.
        let cos_phi = phi.cos();
        let x = lambda.cos() * cos_phi;
        let y = lambda.sin() * cos_phi;
        let z = phi.sin();

        // Latitude rotation.
        let xr = x * delta_phi.cos() - z * delta_phi.sin();
        let zr = z * delta_phi.cos() + x * delta_phi.sin();

        // xr points toward the viewer; negative means the far hemisphere.
        if xr < 0.0 {
            return None;
        }

        Some(Pos2::new(
            self.translate.x + (self.scale * y) as f32,
            self.translate.y - (self.scale * zr) as f32,
        ))
    }

    /// Flat atlas projection. Only the longitude rotation applies, so
    /// dragging pans the map horizontally.
    fn project_equirectangular(&self, coord: Coord<f64>) -> Pos2 {
        // Recenter into [-180, 180) so shapes stay contiguous.
        let lon = (coord.x + self.rotation.lambda + 180.0).rem_euclid(360.0) - 180.0;
        Pos2::new(
            self.translate.x + (self.scale * lon.to_radians()) as f32,
            self.translate.y - (self.scale * coord.y.to_radians()) as f32,
        )
    }

    /// Radius of the globe's visible disc in pixels.
    pub fn disc_radius(&self) -> f32 {
        self.scale as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn globe(rotation: RotationState) -> GlobeProjection {
        GlobeProjection::new(ViewMode::Globe, rotation, 400.0, Pos2::new(400.0, 400.0))
    }

    #[test]
    fn origin_maps_to_view_center_at_zero_rotation() {
        let proj = globe(RotationState::default());

        let pos = proj.project(Coord { x: 0.0, y: 0.0 }).expect("visible");

        assert_eq!(pos, Pos2::new(400.0, 400.0));
    }

    #[test]
    fn antipode_is_culled() {
        let proj = globe(RotationState::default());

        assert!(proj.project(Coord { x: 180.0, y: 0.0 }).is_none());
    }

    #[test]
    fn longitude_rotation_brings_far_side_into_view() {
        let proj = globe(RotationState {
            lambda: 180.0,
            phi: 0.0,
        });

        let pos = proj.project(Coord { x: 180.0, y: 0.0 }).expect("visible");
        assert!((pos.x - 400.0).abs() < 1e-3);
        assert!((pos.y - 400.0).abs() < 1e-3);

        // The old front is now the far side.
        assert!(proj.project(Coord { x: 0.0, y: 0.0 }).is_none());
    }

    #[test]
    fn north_pole_projects_above_center() {
        let proj = globe(RotationState::default());

        let pos = proj.project(Coord { x: 0.0, y: 89.9 }).expect("visible");
        assert!(pos.y < 400.0);
        assert!((pos.x - 400.0).abs() < 1.0);
    }

    #[test]
    fn latitude_rotation_recenters_a_parallel() {
        // Rotating latitude by 45 degrees centers the -45th parallel.
        let proj = globe(RotationState {
            lambda: 0.0,
            phi: 45.0,
        });

        let pos = proj.project(Coord { x: 0.0, y: -45.0 }).expect("visible");
        assert!((pos.x - 400.0).abs() < 1e-3);
        assert!((pos.y - 400.0).abs() < 1e-3);
    }

    #[test]
    fn atlas_view_maps_every_coordinate() {
        let proj = GlobeProjection::new(
            ViewMode::Atlas,
            RotationState::default(),
            100.0,
            Pos2::new(450.0, 250.0),
        );

        let center = proj.project(Coord { x: 0.0, y: 0.0 }).expect("mapped");
        assert_eq!(center, Pos2::new(450.0, 250.0));

        let west = proj.project(Coord { x: -90.0, y: 0.0 }).expect("mapped");
        assert!(west.x < center.x);

        let north = proj.project(Coord { x: 0.0, y: 45.0 }).expect("mapped");
        assert!(north.y < center.y);
    }
}
