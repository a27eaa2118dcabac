use crate::config::EditorConfig;
use crate::node::NodeId;
use crate::sync::{Axis3, EditAttribute, EditIntent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

impl GizmoMode {
    pub fn label(self) -> &'static str {
        match self {
            GizmoMode::Translate => "Translate",
            GizmoMode::Rotate => "Rotate",
            GizmoMode::Scale => "Scale",
        }
    }

    pub fn attribute(self, axis: Axis3) -> EditAttribute {
        match self {
            GizmoMode::Translate => EditAttribute::Position(axis),
            GizmoMode::Rotate => EditAttribute::Rotation(axis),
            GizmoMode::Scale => EditAttribute::Scale(axis),
        }
    }
}

/// An in-flight handle drag on one node. The mode and the starting component
/// value are captured on drag start so switching modes mid-drag cannot smear
/// an edit across attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoDrag {
    pub target: NodeId,
    pub mode: GizmoMode,
    pub axis: Axis3,
    pub start_value: f32,
}

#[derive(Debug, Clone, Default)]
pub struct GizmoState {
    pub mode: GizmoMode,
    drag: Option<GizmoDrag>,
}

impl GizmoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_drag(&self) -> Option<&GizmoDrag> {
        self.drag.as_ref()
    }

    pub fn begin_drag(&mut self, target: NodeId, axis: Axis3, start_value: f32) {
        self.drag = Some(GizmoDrag { target, mode: self.mode, axis, start_value });
    }

    /// Converts the accumulated pointer delta of the active drag into an edit
    /// intent against the dragged attribute. The intent still goes through the
    /// transform sync engine like any panel edit.
    pub fn drag_intent(&self, pointer_delta: f32, snap: bool, config: &EditorConfig) -> Option<EditIntent> {
        let drag = self.drag.as_ref()?;
        let value = match drag.mode {
            GizmoMode::Translate => {
                let value = drag.start_value + pointer_delta * config.drag_speed;
                if snap {
                    snap_to(value, config.translate_snap)
                } else {
                    value
                }
            }
            GizmoMode::Rotate => {
                let value = drag.start_value + pointer_delta * config.drag_speed;
                let value = if snap { snap_to(value, config.rotate_snap) } else { value };
                crate::wrap_angle(value)
            }
            GizmoMode::Scale => {
                let ratio = apply_scale_ratio(1.0 + pointer_delta * config.drag_speed, config, snap);
                drag.start_value * ratio
            }
        };
        Some(EditIntent::new(drag.target, drag.mode.attribute(drag.axis), value))
    }

    pub fn end_drag(&mut self) -> Option<GizmoDrag> {
        self.drag.take()
    }
}

pub(crate) fn apply_scale_ratio(ratio: f32, config: &EditorConfig, snap: bool) -> f32 {
    let clamped = ratio.clamp(config.scale_min, config.scale_max);
    if snap {
        snap_to(clamped, config.scale_snap).clamp(config.scale_min, config.scale_max)
    } else {
        clamped
    }
}

fn snap_to(value: f32, step: f32) -> f32 {
    if step <= f32::EPSILON {
        return value;
    }
    (value / step).round() * step
}
