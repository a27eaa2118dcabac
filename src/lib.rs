pub mod camera3d;
pub mod color;
pub mod config;
pub mod events;
pub mod geometry;
pub mod gizmo;
pub mod node;
pub mod panel;
pub mod picking;
pub mod reconcile;
pub mod render;
pub mod scene;
pub mod session;
pub mod sync;

pub use session::EditorSession;

pub(crate) fn wrap_angle(mut radians: f32) -> f32 {
    let two_pi = 2.0 * std::f32::consts::PI;
    while radians > std::f32::consts::PI {
        radians -= two_pi;
    }
    while radians < -std::f32::consts::PI {
        radians += two_pi;
    }
    radians
}
