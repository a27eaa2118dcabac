use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("unsupported geometry kind '{0}'")]
    UnsupportedGeometryKind(String),
}

/// Closed set of primitive shapes the renderer knows how to draw. Anything
/// else must fail at construction rather than silently render a default.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryKind {
    Box { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32, width_segments: u32, height_segments: u32 },
    Cone { radius: f32, height: f32, radial_segments: u32, height_segments: u32 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32, height_segments: u32 },
    Tetrahedron { radius: f32 },
}

impl GeometryKind {
    pub fn label(&self) -> &'static str {
        match self {
            GeometryKind::Box { .. } => "Box",
            GeometryKind::Sphere { .. } => "Sphere",
            GeometryKind::Cone { .. } => "Cone",
            GeometryKind::Cylinder { .. } => "Cylinder",
            GeometryKind::Tetrahedron { .. } => "Tetrahedron",
        }
    }
}

/// Display material for a primitive. `opacity` only takes effect while
/// `transparent` is set; opaque materials ignore the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub opacity: f32,
    pub transparent: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self { color: Vec3::splat(1.0), opacity: 1.0, transparent: false }
    }
}

impl Material {
    pub fn effective_opacity(&self) -> f32 {
        if self.transparent {
            self.opacity
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub kind: GeometryKind,
    pub material: Material,
}

impl Primitive {
    pub fn new(kind: GeometryKind, material: Material) -> Self {
        Self { kind, material }
    }
}
