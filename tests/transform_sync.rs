use glam::{Mat4, Vec2};
use sceneforge::config::EditorConfig;
use sceneforge::events::SceneEvent;
use sceneforge::gizmo::GizmoMode;
use sceneforge::node::SceneNode;
use sceneforge::picking::{hit_chain, HitChain, PickEvent};
use sceneforge::scene::SceneDescription;
use sceneforge::sync::{Axis3, EditAttribute, EditError, EditIntent, EditOutcome};
use sceneforge::EditorSession;

fn demo_session() -> EditorSession {
    EditorSession::new(&SceneDescription::demo(), EditorConfig::default()).expect("demo scene builds")
}

fn select_root(session: &mut EditorSession, index: usize) {
    let id = session.roots()[index].id();
    let chain: HitChain = [id].into_iter().collect();
    session.handle_pick(&PickEvent::hit(chain, false));
    session.drain_events();
}

fn assert_matrix_eq(actual: Mat4, expected: Mat4) {
    for (a, e) in actual.to_cols_array().iter().zip(expected.to_cols_array().iter()) {
        assert!((a - e).abs() < 1e-5, "matrix mismatch: actual {a}, expected {e}");
    }
}

/// Composition law: every node's world matrix is its parent's world matrix
/// times its own local matrix, recursively.
fn assert_world_consistent(node: &SceneNode, parent_world: Mat4) {
    assert_matrix_eq(node.world_matrix(), parent_world * node.local_matrix());
    for child in node.children() {
        assert_world_consistent(child, node.world_matrix());
    }
}

#[test]
fn position_x_edit_moves_only_that_translation_component() {
    let mut session = demo_session();
    select_root(&mut session, 0);
    let meter = session.roots()[0].id();
    let cone_world_before = session.roots()[1].world_matrix();

    let outcome = session.apply_panel_edit("position.x", 2.5).expect("edit applies");
    assert_eq!(outcome, EditOutcome::Applied);

    let meter_node = session.roots().iter().find(|root| root.id() == meter).expect("meter survives");
    let translation = meter_node.world_matrix().w_axis;
    assert!((translation.x - 2.5).abs() < 1e-5);
    assert!((translation.y - -1.0).abs() < 1e-5, "Y must keep its initial value");
    assert!(translation.z.abs() < 1e-5, "Z must stay untouched");
    assert_matrix_eq(session.roots()[1].world_matrix(), cone_world_before);
}

#[test]
fn edits_recompute_worlds_for_the_whole_subtree() {
    let mut session = demo_session();
    select_root(&mut session, 0);

    session.apply_panel_edit("rotation.y", 0.7).expect("rotation edit applies");
    session.apply_panel_edit("position.z", -3.0).expect("translation edit applies");

    for root in session.roots() {
        assert_world_consistent(root, Mat4::IDENTITY);
    }
    for item in session.render_items() {
        assert_world_consistent(item, Mat4::IDENTITY);
    }
}

#[test]
fn opacity_edit_on_opaque_material_is_a_no_op() {
    let mut session = demo_session();
    // The hidden tetrahedron is the only opaque primitive in the demo scene.
    let secret = session.roots()[0]
        .children()
        .iter()
        .flat_map(|column| column.children())
        .find(|node| node.name.as_deref() == Some("Secret"))
        .expect("demo scene hides a tetrahedron in the middle column")
        .id();
    let chain = hit_chain(session.roots(), secret).expect("secret node is in the tree");
    session.handle_pick(&PickEvent::hit(chain, true));
    session.drain_events();

    let before = session.selected_node().expect("secret is selected").clone();
    let outcome = session.apply_panel_edit("opacity", 0.25).expect("no-op is not an error");
    assert_eq!(outcome, EditOutcome::Skipped);

    let after = session.selected_node().expect("selection unchanged");
    assert_eq!(format!("{before:?}"), format!("{after:?}"), "node state must be untouched");
    assert!(session.drain_events().is_empty(), "skipped edits announce nothing");
}

#[test]
fn opacity_edit_reaches_the_first_child_primitive_of_a_group() {
    let mut session = demo_session();
    select_root(&mut session, 1); // the cone group; its primitive sits on the child

    let outcome = session.apply_panel_edit("opacity", 0.4).expect("edit applies");
    assert_eq!(outcome, EditOutcome::Applied);

    let cone = &session.roots()[1];
    let material = cone.display_material().expect("cone child carries a material");
    assert!((material.opacity - 0.4).abs() < 1e-6);
    assert!((session.panel().opacity - 0.4).abs() < 1e-6, "panel mirrors the applied opacity");
}

#[test]
fn unknown_attribute_path_is_rejected_without_side_effects() {
    let mut session = demo_session();
    select_root(&mut session, 0);
    let before = session.roots()[0].clone();

    let err = session.apply_panel_edit("position.w", 1.0).unwrap_err();
    assert_eq!(err, EditError::InvalidAttribute("position.w".to_string()));
    assert_eq!(format!("{before:?}"), format!("{:?}", session.roots()[0]));
}

#[test]
fn unknown_target_is_rejected() {
    let mut session = demo_session();
    let stranger = SceneNode::new().id();
    let intent = EditIntent::new(stranger, EditAttribute::Position(Axis3::X), 1.0);
    let err = session.apply_edit(&intent).unwrap_err();
    assert_eq!(err, EditError::UnknownTarget(stranger));
}

#[test]
fn missing_or_non_finite_values_are_skipped() {
    let mut session = demo_session();
    select_root(&mut session, 0);
    let target = session.selection().expect("meter is selected");

    let undefined = EditIntent { target, attribute: EditAttribute::Position(Axis3::X), value: None };
    assert_eq!(session.apply_edit(&undefined).expect("no-op"), EditOutcome::Skipped);

    let nan = EditIntent::new(target, EditAttribute::Position(Axis3::X), f32::NAN);
    assert_eq!(session.apply_edit(&nan).expect("no-op"), EditOutcome::Skipped);
    assert!(session.roots()[0].translation.x.abs() < 1e-6, "skipped edits leave the node alone");
}

#[test]
fn panel_and_gizmo_paths_agree_on_the_same_state() {
    let mut session = demo_session();
    select_root(&mut session, 0);

    session.apply_panel_edit("position.x", 2.5).expect("panel edit applies");

    // The gizmo observes the node, not the panel: its drag starts from the
    // value the panel wrote.
    assert!(session.begin_gizmo_drag(Axis3::X));
    session.update_gizmo_drag(100.0, false).expect("drag edit applies");
    session.end_gizmo_drag();

    let node = session.selected_node().expect("meter stays selected");
    let expected = 2.5 + 100.0 * session.config().drag_speed;
    assert!((node.translation.x - expected).abs() < 1e-5);
    assert!((session.panel().position[0] - expected).abs() < 1e-5, "panel reflects the gizmo edit");
    assert_world_consistent(&session.roots()[0], Mat4::IDENTITY);
}

#[test]
fn gizmo_drag_locks_out_camera_orbit() {
    let mut session = demo_session();
    select_root(&mut session, 0);

    assert!(session.orbit(Vec2::new(10.0, 0.0)), "orbit works while no drag is active");
    assert!(session.begin_gizmo_drag(Axis3::Y));
    assert!(!session.orbit_enabled());
    assert!(!session.orbit(Vec2::new(10.0, 0.0)), "orbit is refused mid-drag");
    assert!(!session.zoom(1.1), "zoom is refused mid-drag");

    session.end_gizmo_drag();
    assert!(session.orbit_enabled());
    assert!(session.orbit(Vec2::new(10.0, 0.0)));

    let target = session.selection().expect("meter selected");
    let events = session.drain_events();
    assert!(events.contains(&SceneEvent::GizmoDragStarted { node: target }));
    assert!(events.contains(&SceneEvent::GizmoDragEnded { node: target }));
}

#[test]
fn rotate_mode_drags_the_rotation_attribute() {
    let mut session = demo_session();
    select_root(&mut session, 1);
    session.set_gizmo_mode(GizmoMode::Rotate);

    assert!(session.begin_gizmo_drag(Axis3::Z));
    session.update_gizmo_drag(50.0, false).expect("drag edit applies");
    session.end_gizmo_drag();

    let cone = session.selected_node().expect("cone stays selected");
    assert!((cone.rotation.z - 0.5).abs() < 1e-5);
}

#[test]
fn applied_edits_publish_node_changed() {
    let mut session = demo_session();
    select_root(&mut session, 0);
    let target = session.selection().expect("meter selected");

    session.apply_panel_edit("scale.y", 2.0).expect("edit applies");
    let events = session.drain_events();
    assert!(events.contains(&SceneEvent::NodeChanged { node: target }), "got {events:?}");
}
