use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Orbit-style camera controller storing yaw/pitch around a target. This is
/// the thin adapter the editor shell drives; the session refuses orbit input
/// while a gizmo drag is active so camera motion and object manipulation never
/// apply at once.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub yaw_radians: f32,
    pub pitch_radians: f32,
}

impl OrbitCamera {
    pub fn new(target: Vec3, radius: f32) -> Self {
        Self { target, radius: radius.max(0.01), yaw_radians: 0.0, pitch_radians: 0.0 }
    }

    pub fn eye(&self) -> Vec3 {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw_radians, self.pitch_radians, 0.0);
        self.target + rotation * Vec3::new(0.0, 0.0, self.radius)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw_radians += delta.x;
        self.pitch_radians = (self.pitch_radians + delta.y)
            .clamp(-std::f32::consts::FRAC_PI_2 + 0.01, std::f32::consts::FRAC_PI_2 - 0.01);
    }

    pub fn zoom(&mut self, factor: f32) {
        self.radius = (self.radius * factor).clamp(0.1, 10_000.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_moves_the_eye_but_keeps_the_distance() {
        let mut orbit = OrbitCamera::new(Vec3::ZERO, 5.0);
        let before = orbit.eye();
        orbit.orbit(Vec2::new(0.5, 0.25));
        let after = orbit.eye();
        assert!(before.distance(after) > 0.1);
        assert!((after.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn zoom_clamps_the_radius() {
        let mut orbit = OrbitCamera::new(Vec3::ZERO, 5.0);
        orbit.zoom(0.0001);
        assert!(orbit.radius >= 0.1);
        orbit.zoom(1.0e9);
        assert!(orbit.radius <= 10_000.0);
    }
}
