use crate::events::{EventBus, SceneEvent};
use crate::node::{self, NodeId, SceneNode};
use glam::Vec3;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("unknown attribute path '{0}'")]
    InvalidAttribute(String),
    #[error("edit targets unknown node {0}")]
    UnknownTarget(NodeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis3 {
    X,
    Y,
    Z,
}

impl Axis3 {
    pub const ALL: [Axis3; 3] = [Axis3::X, Axis3::Y, Axis3::Z];

    pub fn label(self) -> &'static str {
        match self {
            Axis3::X => "X",
            Axis3::Y => "Y",
            Axis3::Z => "Z",
        }
    }

    pub fn get(self, v: Vec3) -> f32 {
        match self {
            Axis3::X => v.x,
            Axis3::Y => v.y,
            Axis3::Z => v.z,
        }
    }

    pub fn set(self, v: &mut Vec3, value: f32) {
        match self {
            Axis3::X => v.x = value,
            Axis3::Y => v.y = value,
            Axis3::Z => v.z = value,
        }
    }
}

/// The attributes an edit intent may address, parsed from the panel's
/// attribute paths (`position.x`, `rotation.z`, `scale.y`, `opacity`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAttribute {
    Position(Axis3),
    Rotation(Axis3),
    Scale(Axis3),
    Opacity,
}

impl EditAttribute {
    pub fn parse(path: &str) -> Result<Self, EditError> {
        let attribute = match path {
            "position.x" => EditAttribute::Position(Axis3::X),
            "position.y" => EditAttribute::Position(Axis3::Y),
            "position.z" => EditAttribute::Position(Axis3::Z),
            "rotation.x" => EditAttribute::Rotation(Axis3::X),
            "rotation.y" => EditAttribute::Rotation(Axis3::Y),
            "rotation.z" => EditAttribute::Rotation(Axis3::Z),
            "scale.x" => EditAttribute::Scale(Axis3::X),
            "scale.y" => EditAttribute::Scale(Axis3::Y),
            "scale.z" => EditAttribute::Scale(Axis3::Z),
            "opacity" => EditAttribute::Opacity,
            other => return Err(EditError::InvalidAttribute(other.to_string())),
        };
        Ok(attribute)
    }

    pub fn path(self) -> &'static str {
        match self {
            EditAttribute::Position(Axis3::X) => "position.x",
            EditAttribute::Position(Axis3::Y) => "position.y",
            EditAttribute::Position(Axis3::Z) => "position.z",
            EditAttribute::Rotation(Axis3::X) => "rotation.x",
            EditAttribute::Rotation(Axis3::Y) => "rotation.y",
            EditAttribute::Rotation(Axis3::Z) => "rotation.z",
            EditAttribute::Scale(Axis3::X) => "scale.x",
            EditAttribute::Scale(Axis3::Y) => "scale.y",
            EditAttribute::Scale(Axis3::Z) => "scale.z",
            EditAttribute::Opacity => "opacity",
        }
    }
}

impl FromStr for EditAttribute {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One edit request against a node, produced by the panel or the gizmo and
/// consumed only by `apply_edit`. A missing value marks a field the UI left
/// undefined and is silently skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct EditIntent {
    pub target: NodeId,
    pub attribute: EditAttribute,
    pub value: Option<f32>,
}

impl EditIntent {
    pub fn new(target: NodeId, attribute: EditAttribute, value: f32) -> Self {
        Self { target, attribute, value: Some(value) }
    }

    pub fn from_path(target: NodeId, path: &str, value: f32) -> Result<Self, EditError> {
        Ok(Self::new(target, EditAttribute::parse(path)?, value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Skipped,
}

/// The only legal write path for node transforms and opacity; both the panel
/// and the gizmo route through here, which is what keeps the two observers
/// consistent with each other and with the node.
///
/// An edit is all-or-nothing: either the scalar is written and the world
/// transforms of the target and all descendants are recomputed before this
/// returns, or the tree is left in its prior state. Applied edits push
/// `SceneEvent::NodeChanged` for the reconciler.
pub fn apply_edit(
    roots: &mut [SceneNode],
    intent: &EditIntent,
    bus: &mut EventBus,
) -> Result<EditOutcome, EditError> {
    let value = match intent.value {
        Some(value) if value.is_finite() => value,
        _ => return Ok(EditOutcome::Skipped),
    };

    let target = node::find_node(roots, intent.target).ok_or(EditError::UnknownTarget(intent.target))?;
    if intent.attribute == EditAttribute::Opacity {
        let editable = target.display_material().map(|material| material.transparent).unwrap_or(false);
        if !editable {
            return Ok(EditOutcome::Skipped);
        }
    }

    node::edit_node(roots, intent.target, |target| match intent.attribute {
        EditAttribute::Position(axis) => axis.set(&mut target.translation, value),
        EditAttribute::Rotation(axis) => axis.set(&mut target.rotation, value),
        EditAttribute::Scale(axis) => axis.set(&mut target.scale, value),
        EditAttribute::Opacity => {
            if let Some(material) = target.display_material_mut() {
                material.opacity = value.clamp(0.0, 1.0);
            }
        }
    });

    bus.push(SceneEvent::NodeChanged { node: intent.target });
    Ok(EditOutcome::Applied)
}
