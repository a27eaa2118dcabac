use crate::node::{NodeId, SceneNode};
#[cfg(feature = "editor")]
use crate::sync::Axis3;
use crate::sync::{EditAttribute, EditIntent};

/// Numeric mirror of the selected node's transform and opacity. The node is
/// the single source of truth; the panel only reflects it and turns field
/// changes into edit intents for the transform sync engine. It is re-synced
/// whenever the selection changes or an edit (panel- or gizmo-driven) lands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectorPanel {
    target: Option<NodeId>,
    pub title: String,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    pub opacity: f32,
    pub opacity_editable: bool,
}

impl InspectorPanel {
    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn sync_from(&mut self, node: &SceneNode) {
        self.target = Some(node.id());
        self.title = node
            .name
            .clone()
            .or_else(|| node.geometry.as_ref().map(|p| p.kind.label().to_string()))
            .unwrap_or_else(|| "Node".to_string());
        self.position = node.translation.to_array();
        self.rotation = node.rotation.to_array();
        self.scale = node.scale.to_array();
        match node.display_material() {
            Some(material) => {
                self.opacity = material.opacity;
                self.opacity_editable = material.transparent;
            }
            None => {
                self.opacity = 1.0;
                self.opacity_editable = false;
            }
        }
    }

    /// Builds the intent for one edited field, or `None` with no selection.
    pub fn edit(&self, attribute: EditAttribute, value: f32) -> Option<EditIntent> {
        self.target.map(|target| EditIntent::new(target, attribute, value))
    }
}

/// Draws the numeric transform rows and collects intents for every field the
/// user changed this frame. The caller routes them through the session so the
/// panel never writes to the tree itself.
#[cfg(feature = "editor")]
pub fn inspector_ui(ui: &mut egui::Ui, panel: &mut InspectorPanel) -> Vec<EditIntent> {
    let mut intents = Vec::new();
    let Some(target) = panel.target() else {
        ui.label("Nothing selected");
        return intents;
    };

    ui.heading(&panel.title);
    ui.horizontal(|ui| {
        ui.label("Position");
        for (i, axis) in Axis3::ALL.into_iter().enumerate() {
            if ui.add(egui::DragValue::new(&mut panel.position[i]).speed(0.05)).changed() {
                intents.push(EditIntent::new(target, EditAttribute::Position(axis), panel.position[i]));
            }
        }
    });
    ui.horizontal(|ui| {
        ui.label("Rotation");
        for (i, axis) in Axis3::ALL.into_iter().enumerate() {
            if ui.add(egui::DragValue::new(&mut panel.rotation[i]).speed(0.01)).changed() {
                intents.push(EditIntent::new(target, EditAttribute::Rotation(axis), panel.rotation[i]));
            }
        }
    });
    ui.horizontal(|ui| {
        ui.label("Scale");
        for (i, axis) in Axis3::ALL.into_iter().enumerate() {
            if ui.add(egui::DragValue::new(&mut panel.scale[i]).speed(0.01)).changed() {
                intents.push(EditIntent::new(target, EditAttribute::Scale(axis), panel.scale[i]));
            }
        }
    });
    if panel.opacity_editable {
        ui.horizontal(|ui| {
            ui.label("Opacity");
            if ui.add(egui::Slider::new(&mut panel.opacity, 0.0..=1.0)).changed() {
                intents.push(EditIntent::new(target, EditAttribute::Opacity, panel.opacity));
            }
        });
    }
    intents
}
