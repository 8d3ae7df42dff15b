//! Rotation state and pointer-drag arithmetic.

use eframe::egui::Pos2;

/// The globe's orientation: a longitude and a latitude rotation angle in
/// degrees, both kept normalized into [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    /// Longitude rotation.
    pub lambda: f64,
    /// Latitude rotation.
    pub phi: f64,
}

impl RotationState {
    pub fn new(lambda: f64, phi: f64) -> Self {
        Self {
            lambda: normalize_degrees(lambda),
            phi: normalize_degrees(phi),
        }
    }

    /// Applies a pointer-drag delta. The delta convention follows the
    /// pointer handlers: `delta_x = origin_x - current_x`,
    /// `delta_y = current_y - origin_y`. Sensitivity divides the pixel
    /// delta into degrees; larger values mean slower rotation.
    pub fn apply_drag(&mut self, delta_x: f64, delta_y: f64, sensitivity: f64) {
        self.lambda = normalize_degrees(self.lambda - delta_x / sensitivity);
        self.phi = normalize_degrees(self.phi - delta_y / sensitivity);
    }

    /// Advances the longitude rotation by one animation step, wrapping
    /// past 360 back to 0.
    pub fn step_lambda(&mut self, step_degrees: f64) {
        self.lambda = normalize_degrees(self.lambda + step_degrees);
    }
}

/// Wraps an angle into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Transient pointer-drag state: created on pointer-down, consumed on
/// pointer-move, cleared on pointer-up. Its presence in an
/// `Option<DragSession>` is the "is dragging" flag.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    /// Screen position where the drag started.
    pub origin: Pos2,
}

impl DragSession {
    pub fn begin(origin: Pos2) -> Self {
        Self { origin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENSITIVITY: f64 = 50.0;

    #[test]
    fn angles_always_normalize_into_range() {
        for angle in [-720.5, -360.0, -0.1, 0.0, 359.999, 360.0, 1234.5] {
            let n = normalize_degrees(angle);
            assert!((0.0..360.0).contains(&n), "{} -> {}", angle, n);
        }
    }

    #[test]
    fn drag_updates_stay_normalized() {
        let mut rotation = RotationState::default();

        rotation.apply_drag(30.0, -30.0, SENSITIVITY);
        assert!((0.0..360.0).contains(&rotation.lambda));
        assert!((0.0..360.0).contains(&rotation.phi));

        rotation.apply_drag(-100_000.0, 100_000.0, SENSITIVITY);
        assert!((0.0..360.0).contains(&rotation.lambda));
        assert!((0.0..360.0).contains(&rotation.phi));
    }

    #[test]
    fn opposite_drags_cancel() {
        let mut rotation = RotationState::new(123.4, 56.7);
        let original = rotation;

        rotation.apply_drag(42.0, -17.0, SENSITIVITY);
        rotation.apply_drag(-42.0, 17.0, SENSITIVITY);

        assert!((rotation.lambda - original.lambda).abs() < 1e-9);
        assert!((rotation.phi - original.phi).abs() < 1e-9);
    }

    #[test]
    fn drag_sensitivity_scales_rotation() {
        let mut coarse = RotationState::default();
        let mut fine = RotationState::default();

        coarse.apply_drag(-50.0, 0.0, 50.0);
        fine.apply_drag(-50.0, 0.0, 100.0);

        assert!((coarse.lambda - 1.0).abs() < 1e-9);
        assert!((fine.lambda - 0.5).abs() < 1e-9);
    }

    #[test]
    fn drag_session_records_origin() {
        let session = DragSession::begin(Pos2::new(3.0, 4.0));
        assert_eq!(session.origin, Pos2::new(3.0, 4.0));
    }

    #[test]
    fn auto_rotate_accumulates_fixed_steps() {
        let mut rotation = RotationState::new(10.0, 0.0);

        for _ in 0..100 {
            rotation.step_lambda(0.2);
        }

        assert!((rotation.lambda - 30.0).abs() < 1e-9);
    }

    #[test]
    fn auto_rotate_wraps_past_360() {
        let mut rotation = RotationState::new(359.9, 0.0);

        rotation.step_lambda(0.2);

        assert!((rotation.lambda - 0.1).abs() < 1e-9);
        assert!((0.0..360.0).contains(&rotation.lambda));
    }
}
