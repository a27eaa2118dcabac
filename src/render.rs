use crate::color::rgb_to_hex;
use crate::geometry::GeometryKind;
use crate::node::{NodeId, SceneNode};
use glam::Mat4;

/// One drawable handed to the render adapter: a world-space model matrix plus
/// the primitive with its material resolved to display values.
#[derive(Debug, Clone)]
pub struct DrawItem {
    pub node: NodeId,
    pub model: Mat4,
    pub kind: GeometryKind,
    pub color_hex: String,
    pub opacity: f32,
    pub transparent: bool,
}

/// Flattens the scene-item collection into draw items, depth-first pre-order
/// so sibling order is render order. Inert nodes contribute nothing.
pub fn collect_draw_items(items: &[SceneNode]) -> Vec<DrawItem> {
    let mut out = Vec::new();
    for item in items {
        visit(item, &mut out);
    }
    out
}

fn visit(node: &SceneNode, out: &mut Vec<DrawItem>) {
    if let Some(primitive) = &node.geometry {
        let material = &primitive.material;
        out.push(DrawItem {
            node: node.id(),
            model: node.world_matrix(),
            kind: primitive.kind.clone(),
            color_hex: rgb_to_hex(material.color.x, material.color.y, material.color.z),
            opacity: material.effective_opacity(),
            transparent: material.transparent,
        });
    }
    for child in node.children() {
        visit(child, out);
    }
}
