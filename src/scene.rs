use crate::geometry::{GeometryKind, Material, Primitive, SceneError};
use crate::node::SceneNode;
use anyhow::{Context, Result};
use glam::Mat4;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Build-time scene description: an ordered list of root node parameters,
/// consumed once to populate the tree. Editing sessions never write this back.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub nodes: Vec<NodeData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub translation: Vec3Data,
    /// Euler XYZ angles in radians.
    #[serde(default)]
    pub rotation: Vec3Data,
    #[serde(default = "Vec3Data::one")]
    pub scale: Vec3Data,
    #[serde(default)]
    pub geometry: Option<GeometryData>,
    #[serde(default)]
    pub children: Vec<NodeData>,
}

impl Default for NodeData {
    fn default() -> Self {
        Self {
            name: None,
            translation: Vec3Data::default(),
            rotation: Vec3Data::default(),
            scale: Vec3Data::one(),
            geometry: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeometryData {
    pub kind: String,
    #[serde(default)]
    pub params: GeometryParams,
    #[serde(default)]
    pub material: MaterialData,
}

/// Per-kind shape parameters; unnamed ones fall back to the defaults of the
/// corresponding kind when the tree is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeometryParams {
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub depth: Option<f32>,
    #[serde(default)]
    pub radius: Option<f32>,
    #[serde(default)]
    pub radius_top: Option<f32>,
    #[serde(default)]
    pub radius_bottom: Option<f32>,
    #[serde(default)]
    pub width_segments: Option<u32>,
    #[serde(default)]
    pub height_segments: Option<u32>,
    #[serde(default)]
    pub radial_segments: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaterialData {
    #[serde(default = "Vec3Data::one")]
    pub color: Vec3Data,
    #[serde(default = "MaterialData::default_opacity")]
    pub opacity: f32,
    #[serde(default)]
    pub transparent: bool,
}

impl MaterialData {
    const fn default_opacity() -> f32 {
        1.0
    }
}

impl Default for MaterialData {
    fn default() -> Self {
        Self { color: Vec3Data::one(), opacity: Self::default_opacity(), transparent: false }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Vec3Data {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3Data {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn one() -> Self {
        Self { x: 1.0, y: 1.0, z: 1.0 }
    }
}

impl From<Vec3Data> for glam::Vec3 {
    fn from(value: Vec3Data) -> Self {
        glam::Vec3::new(value.x, value.y, value.z)
    }
}

impl From<glam::Vec3> for Vec3Data {
    fn from(value: glam::Vec3) -> Self {
        Self { x: value.x, y: value.y, z: value.z }
    }
}

impl SceneDescription {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("Reading scene file {}", path.display()))?;
        let description = serde_json::from_slice::<SceneDescription>(&bytes)
            .with_context(|| format!("Parsing scene file {}", path.display()))?;
        Ok(description)
    }

    /// Constructs the scene tree. Fails fast on the first unrecognized
    /// geometry kind; a half-built scene is never returned.
    pub fn build(&self) -> std::result::Result<Vec<SceneNode>, SceneError> {
        let mut roots = Vec::with_capacity(self.nodes.len());
        for data in &self.nodes {
            let mut root = build_node(data)?;
            root.recompute_world(Mat4::IDENTITY);
            roots.push(root);
        }
        Ok(roots)
    }

    /// The scene the original editor shipped with: a meter icon (three box
    /// columns on a cylinder base, with a tetrahedron tucked inside the middle
    /// column) and a tipped-over cone.
    pub fn demo() -> Self {
        let column_material = MaterialData {
            color: Vec3Data::new(240.0 / 255.0, 240.0 / 255.0, 240.0 / 255.0),
            transparent: true,
            ..MaterialData::default()
        };
        let column_box = |name: &str, translation: Vec3Data, scale: Vec3Data| NodeData {
            name: Some(name.to_string()),
            translation,
            scale,
            children: vec![NodeData {
                geometry: Some(GeometryData {
                    kind: "BOX".to_string(),
                    params: GeometryParams::default(),
                    material: column_material.clone(),
                }),
                ..NodeData::default()
            }],
            ..NodeData::default()
        };

        let mut middle = column_box("Column Mid", Vec3Data::new(0.0, 1.25, 0.0), Vec3Data::new(0.7, 1.5, 0.7));
        // Shhhh it's a secret
        middle.children.push(NodeData {
            name: Some("Secret".to_string()),
            geometry: Some(GeometryData {
                kind: "TETRAHEDRON".to_string(),
                params: GeometryParams { radius: Some(0.33), ..GeometryParams::default() },
                material: MaterialData { color: Vec3Data::new(1.0, 0.0, 0.0), ..MaterialData::default() },
            }),
            ..NodeData::default()
        });

        let meter = NodeData {
            name: Some("Meter".to_string()),
            translation: Vec3Data::new(0.0, -1.0, 0.0),
            children: vec![
                NodeData {
                    name: Some("Base".to_string()),
                    geometry: Some(GeometryData {
                        kind: "CYLINDER".to_string(),
                        params: GeometryParams {
                            radius_top: Some(3.0),
                            radius_bottom: Some(3.0),
                            height: Some(0.1),
                            radial_segments: Some(32),
                            ..GeometryParams::default()
                        },
                        material: MaterialData {
                            color: Vec3Data::new(44.0 / 255.0, 58.0 / 255.0, 183.0 / 255.0),
                            transparent: true,
                            ..MaterialData::default()
                        },
                    }),
                    ..NodeData::default()
                },
                column_box("Column Left", Vec3Data::new(-0.8, 1.0, 0.0), Vec3Data::new(0.7, 2.0, 0.7)),
                middle,
                column_box("Column Right", Vec3Data::new(0.8, 1.1, 0.0), Vec3Data::new(0.7, 1.8, 0.7)),
            ],
            ..NodeData::default()
        };

        let cone = NodeData {
            name: Some("Cone".to_string()),
            translation: Vec3Data::new(0.0, 0.0, 5.0),
            rotation: Vec3Data::new(std::f32::consts::FRAC_PI_2, 1.0, 0.0),
            children: vec![NodeData {
                geometry: Some(GeometryData {
                    kind: "CONE".to_string(),
                    params: GeometryParams {
                        radius: Some(1.0),
                        height: Some(2.0),
                        radial_segments: Some(32),
                        height_segments: Some(32),
                        ..GeometryParams::default()
                    },
                    material: MaterialData {
                        color: Vec3Data::new(200.0 / 255.0, 0.0, 1.0),
                        transparent: true,
                        ..MaterialData::default()
                    },
                }),
                ..NodeData::default()
            }],
            ..NodeData::default()
        };

        Self { nodes: vec![meter, cone] }
    }
}

fn build_node(data: &NodeData) -> std::result::Result<SceneNode, SceneError> {
    let mut node = match &data.geometry {
        Some(geometry) => SceneNode::with_geometry(build_primitive(geometry)?),
        None => SceneNode::new(),
    };
    node.name = data.name.clone();
    node.translation = data.translation.into();
    node.rotation = data.rotation.into();
    node.scale = data.scale.into();
    for child in &data.children {
        node.add_child(build_node(child)?);
    }
    Ok(node)
}

fn build_primitive(data: &GeometryData) -> std::result::Result<Primitive, SceneError> {
    let kind = build_kind(&data.kind, &data.params)?;
    let material = Material {
        color: data.material.color.into(),
        opacity: data.material.opacity.clamp(0.0, 1.0),
        transparent: data.material.transparent,
    };
    Ok(Primitive::new(kind, material))
}

fn build_kind(tag: &str, params: &GeometryParams) -> std::result::Result<GeometryKind, SceneError> {
    let kind = match tag.to_ascii_uppercase().as_str() {
        "BOX" => GeometryKind::Box {
            width: params.width.unwrap_or(1.0),
            height: params.height.unwrap_or(1.0),
            depth: params.depth.unwrap_or(1.0),
        },
        "SPHERE" => GeometryKind::Sphere {
            radius: params.radius.unwrap_or(1.0),
            width_segments: params.width_segments.unwrap_or(32),
            height_segments: params.height_segments.unwrap_or(16),
        },
        "CONE" => GeometryKind::Cone {
            radius: params.radius.unwrap_or(1.0),
            height: params.height.unwrap_or(1.0),
            radial_segments: params.radial_segments.unwrap_or(32),
            height_segments: params.height_segments.unwrap_or(1),
        },
        "CYLINDER" => GeometryKind::Cylinder {
            radius_top: params.radius_top.unwrap_or(1.0),
            radius_bottom: params.radius_bottom.unwrap_or(1.0),
            height: params.height.unwrap_or(1.0),
            radial_segments: params.radial_segments.unwrap_or(32),
            height_segments: params.height_segments.unwrap_or(1),
        },
        "TETRAHEDRON" => GeometryKind::Tetrahedron { radius: params.radius.unwrap_or(1.0) },
        _ => return Err(SceneError::UnsupportedGeometryKind(tag.to_string())),
    };
    Ok(kind)
}
