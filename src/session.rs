use crate::camera3d::OrbitCamera;
use crate::config::EditorConfig;
use crate::events::{EventBus, SceneEvent};
use crate::gizmo::{GizmoMode, GizmoState};
use crate::node::{self, NodeId, SceneNode};
use crate::panel::InspectorPanel;
use crate::picking::{resolve_selection, PickEvent};
use crate::reconcile::reconcile;
use crate::render::{collect_draw_items, DrawItem};
use crate::scene::SceneDescription;
use crate::sync::{self, Axis3, EditError, EditIntent, EditOutcome};
use anyhow::Result;
use glam::{Vec2, Vec3};

/// Owns the scene tree and every piece of editor state for one session. Event
/// handlers receive it explicitly; there is no process-wide editor state.
///
/// All mutation is synchronous and single-threaded: an edit fully completes,
/// world transforms included, before the next event or frame is handled.
pub struct EditorSession {
    roots: Vec<SceneNode>,
    render_items: Vec<SceneNode>,
    selection: Option<NodeId>,
    panel: InspectorPanel,
    gizmo: GizmoState,
    orbit: OrbitCamera,
    orbit_enabled: bool,
    bus: EventBus,
    config: EditorConfig,
}

impl EditorSession {
    pub fn new(description: &SceneDescription, config: EditorConfig) -> Result<Self> {
        let roots = description.build()?;
        let render_items = roots.clone();
        Ok(Self {
            roots,
            render_items,
            selection: None,
            panel: InspectorPanel::default(),
            gizmo: GizmoState::new(),
            orbit: OrbitCamera::new(Vec3::ZERO, 20.0),
            orbit_enabled: true,
            bus: EventBus::default(),
            config,
        })
    }

    pub fn roots(&self) -> &[SceneNode] {
        &self.roots
    }

    /// Immutable per-frame snapshot for the render adapter; updated through
    /// reconciliation whenever an edit lands.
    pub fn render_items(&self) -> &[SceneNode] {
        &self.render_items
    }

    pub fn draw_items(&self) -> Vec<DrawItem> {
        collect_draw_items(&self.render_items)
    }

    pub fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    pub fn selected_node(&self) -> Option<&SceneNode> {
        self.selection.and_then(|id| node::find_node(&self.roots, id))
    }

    pub fn panel(&self) -> &InspectorPanel {
        &self.panel
    }

    #[cfg(feature = "editor")]
    pub fn panel_mut(&mut self) -> &mut InspectorPanel {
        &mut self.panel
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.orbit
    }

    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        self.bus.drain()
    }

    /// Routes a pick through the selection resolver and refreshes the panel
    /// mirror. A miss clears the selection.
    pub fn handle_pick(&mut self, event: &PickEvent) {
        let selected = resolve_selection(event);
        if selected == self.selection {
            return;
        }
        self.selection = selected;
        match selected.and_then(|id| node::find_node(&self.roots, id)) {
            Some(target) => self.panel.sync_from(target),
            None => self.panel.clear(),
        }
        self.bus.push(SceneEvent::SelectionChanged { node: selected });
    }

    /// The single edit entry point for panel and gizmo alike. On an applied
    /// edit the changed root is reconciled into the render snapshot and the
    /// panel mirror is refreshed so both observers read back the same state.
    pub fn apply_edit(&mut self, intent: &EditIntent) -> std::result::Result<EditOutcome, EditError> {
        let outcome = sync::apply_edit(&mut self.roots, intent, &mut self.bus)?;
        if outcome == EditOutcome::Applied {
            if let Some(root) = node::root_containing(&self.roots, intent.target) {
                let changed = root.clone();
                self.render_items = reconcile(&self.render_items, &changed);
            }
            if self.selection == Some(intent.target) {
                if let Some(target) = node::find_node(&self.roots, intent.target) {
                    self.panel.sync_from(target);
                }
            }
        }
        Ok(outcome)
    }

    /// Panel edits arrive as attribute paths; an unknown path is rejected
    /// before anything is touched, and with no selection the edit is a no-op.
    pub fn apply_panel_edit(&mut self, path: &str, value: f32) -> std::result::Result<EditOutcome, EditError> {
        let Some(target) = self.selection else {
            return Ok(EditOutcome::Skipped);
        };
        let intent = EditIntent::from_path(target, path, value)?;
        self.apply_edit(&intent)
    }

    pub fn gizmo_mode(&self) -> GizmoMode {
        self.gizmo.mode
    }

    pub fn set_gizmo_mode(&mut self, mode: GizmoMode) {
        self.gizmo.mode = mode;
    }

    /// Starts a handle drag on the selected node and locks out camera orbit
    /// until the drag ends. Returns `false` with no selection or while another
    /// drag is active.
    pub fn begin_gizmo_drag(&mut self, axis: Axis3) -> bool {
        let Some(target) = self.selection else {
            return false;
        };
        if self.gizmo.active_drag().is_some() {
            return false;
        }
        let Some(selected) = node::find_node(&self.roots, target) else {
            return false;
        };
        let start_value = match self.gizmo.mode {
            GizmoMode::Translate => axis.get(selected.translation),
            GizmoMode::Rotate => axis.get(selected.rotation),
            GizmoMode::Scale => axis.get(selected.scale),
        };
        self.gizmo.begin_drag(target, axis, start_value);
        self.orbit_enabled = false;
        self.bus.push(SceneEvent::GizmoDragStarted { node: target });
        true
    }

    pub fn update_gizmo_drag(
        &mut self,
        pointer_delta: f32,
        snap: bool,
    ) -> std::result::Result<EditOutcome, EditError> {
        let Some(intent) = self.gizmo.drag_intent(pointer_delta, snap, &self.config) else {
            return Ok(EditOutcome::Skipped);
        };
        self.apply_edit(&intent)
    }

    pub fn end_gizmo_drag(&mut self) {
        if let Some(drag) = self.gizmo.end_drag() {
            self.orbit_enabled = true;
            self.bus.push(SceneEvent::GizmoDragEnded { node: drag.target });
        }
    }

    pub fn orbit_enabled(&self) -> bool {
        self.orbit_enabled
    }

    /// Orbit input is refused while a gizmo drag is active so camera motion
    /// and object manipulation never apply simultaneously.
    pub fn orbit(&mut self, delta: Vec2) -> bool {
        if !self.orbit_enabled {
            return false;
        }
        self.orbit.orbit(delta * self.config.orbit_sensitivity);
        true
    }

    pub fn zoom(&mut self, factor: f32) -> bool {
        if !self.orbit_enabled {
            return false;
        }
        self.orbit.zoom(factor);
        true
    }
}
