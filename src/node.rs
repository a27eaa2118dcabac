use crate::geometry::{Material, Primitive};
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::fmt;
use uuid::Uuid;

/// Stable identity token assigned at node creation and never reused. Picks,
/// edit intents and reconciliation all refer to nodes through this key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entity in the editable hierarchy: an ordered, exclusively-owned child
/// list, an optional drawable primitive, a local TRS transform and the cached
/// world matrix derived from it.
///
/// Invariant: after every completed edit, `world_matrix()` equals the parent's
/// world matrix times `local_matrix()`, recursively for every descendant. All
/// mutation paths restore it before returning.
#[derive(Debug, Clone)]
pub struct SceneNode {
    id: NodeId,
    pub name: Option<String>,
    pub translation: Vec3,
    /// Euler XYZ angles in radians.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub geometry: Option<Primitive>,
    children: Vec<SceneNode>,
    world: Mat4,
}

impl SceneNode {
    pub fn new() -> Self {
        Self {
            id: NodeId::new(),
            name: None,
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            geometry: None,
            children: Vec::new(),
            world: Mat4::IDENTITY,
        }
    }

    pub fn with_geometry(primitive: Primitive) -> Self {
        let mut node = Self::new();
        node.geometry = Some(primitive);
        node
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// Appends `child`, preserving insertion order, and brings its subtree in
    /// line with this node's world matrix.
    pub fn add_child(&mut self, mut child: SceneNode) {
        child.recompute_world(self.world);
        self.children.push(child);
    }

    pub fn local_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.translation)
    }

    pub fn world_matrix(&self) -> Mat4 {
        self.world
    }

    /// Recomputes the cached world matrix for this node and every descendant.
    /// Must be called parent-before-children whenever a local transform
    /// changed; `edit_node` does so for the ordinary edit path.
    pub fn recompute_world(&mut self, parent_world: Mat4) {
        self.world = parent_world * self.local_matrix();
        let world = self.world;
        for child in &mut self.children {
            child.recompute_world(world);
        }
    }

    /// A node with no children and a primitive is drawable; with neither it is
    /// inert and renders nothing, which is degenerate but valid.
    pub fn is_drawable_leaf(&self) -> bool {
        self.children.is_empty() && self.geometry.is_some()
    }

    /// Depth-first pre-order lookup within this subtree.
    pub fn find(&self, id: NodeId) -> Option<&SceneNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    /// The material opacity edits act on: the node's own primitive if present,
    /// otherwise the first direct child that carries one. Grandchildren are
    /// deliberately out of reach.
    pub fn display_material(&self) -> Option<&Material> {
        if let Some(primitive) = &self.geometry {
            return Some(&primitive.material);
        }
        self.children.iter().find_map(|child| child.geometry.as_ref().map(|p| &p.material))
    }

    pub(crate) fn display_material_mut(&mut self) -> Option<&mut Material> {
        if self.geometry.is_some() {
            return self.geometry.as_mut().map(|p| &mut p.material);
        }
        self.children.iter_mut().find_map(|child| child.geometry.as_mut().map(|p| &mut p.material))
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order lookup across the top-level item collection.
pub fn find_node(roots: &[SceneNode], id: NodeId) -> Option<&SceneNode> {
    roots.iter().find_map(|root| root.find(id))
}

/// The top-level item whose subtree contains `id`.
pub fn root_containing(roots: &[SceneNode], id: NodeId) -> Option<&SceneNode> {
    roots.iter().find(|root| root.contains(id))
}

/// Applies `f` to the node with `id`, then restores the world-transform
/// invariant for that node and all of its descendants. Returns `false` when no
/// node carries `id`, in which case nothing was touched.
pub fn edit_node<F>(roots: &mut [SceneNode], id: NodeId, f: F) -> bool
where
    F: FnOnce(&mut SceneNode),
{
    fn visit<F>(node: &mut SceneNode, parent_world: Mat4, id: NodeId, f: &mut Option<F>) -> bool
    where
        F: FnOnce(&mut SceneNode),
    {
        if node.id == id {
            if let Some(f) = f.take() {
                f(node);
            }
            node.recompute_world(parent_world);
            return true;
        }
        // The cached world is trusted here: the invariant held before the edit.
        let world = node.world;
        for child in &mut node.children {
            if visit(child, world, id, f) {
                return true;
            }
        }
        false
    }

    let mut f = Some(f);
    for root in roots.iter_mut() {
        if visit(root, Mat4::IDENTITY, id, &mut f) {
            return true;
        }
    }
    false
}
