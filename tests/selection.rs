use glam::Vec3;
use sceneforge::config::EditorConfig;
use sceneforge::events::SceneEvent;
use sceneforge::geometry::{GeometryKind, Material, Primitive};
use sceneforge::node::SceneNode;
use sceneforge::picking::{hit_chain, resolve_selection, HitChain, PickEvent};
use sceneforge::scene::SceneDescription;
use sceneforge::EditorSession;

fn box_primitive() -> Primitive {
    Primitive::new(
        GeometryKind::Box { width: 1.0, height: 1.0, depth: 1.0 },
        Material { color: Vec3::splat(0.9), opacity: 1.0, transparent: true },
    )
}

/// Three sibling boxes under one group.
fn group_of_three_boxes() -> Vec<SceneNode> {
    let mut group = SceneNode::new().named("Group");
    for name in ["Left", "Mid", "Right"] {
        let mut child = SceneNode::with_geometry(box_primitive());
        child.name = Some(name.to_string());
        group.add_child(child);
    }
    vec![group]
}

#[test]
fn plain_click_bubbles_to_the_outermost_group() {
    let roots = group_of_three_boxes();
    let middle = roots[0].children()[1].id();
    let chain = hit_chain(&roots, middle).expect("middle box is in the tree");

    let selected = resolve_selection(&PickEvent::hit(chain, false));
    assert_eq!(selected, Some(roots[0].id()), "plain clicks select the containing group");
}

#[test]
fn modifier_click_selects_the_exact_leaf() {
    let roots = group_of_three_boxes();
    let middle = roots[0].children()[1].id();
    let chain = hit_chain(&roots, middle).expect("middle box is in the tree");

    let selected = resolve_selection(&PickEvent::hit(chain, true));
    assert_eq!(selected, Some(middle), "modifier clicks drill into the clicked leaf");
}

#[test]
fn three_level_chain_resolves_root_or_leaf() {
    let mut root = SceneNode::new();
    let mut mid = SceneNode::new();
    let leaf = SceneNode::with_geometry(box_primitive());
    let leaf_id = leaf.id();
    mid.add_child(leaf);
    let mid_id = mid.id();
    root.add_child(mid);
    let root_id = root.id();
    let roots = vec![root];

    let chain = hit_chain(&roots, leaf_id).expect("leaf is in the tree");
    assert_eq!(chain.as_slice(), &[leaf_id, mid_id, root_id]);
    assert_eq!(resolve_selection(&PickEvent::hit(chain.clone(), false)), Some(root_id));
    assert_eq!(resolve_selection(&PickEvent::hit(chain, true)), Some(leaf_id));
}

#[test]
fn miss_clears_the_session_selection() {
    let description = SceneDescription::demo();
    let mut session = EditorSession::new(&description, EditorConfig::default()).expect("demo scene builds");

    let meter = session.roots()[0].id();
    let chain: HitChain = [meter].into_iter().collect();
    session.handle_pick(&PickEvent::hit(chain, false));
    assert_eq!(session.selection(), Some(meter));

    session.handle_pick(&PickEvent::miss());
    assert_eq!(session.selection(), None);
    assert!(session.selected_node().is_none());
    assert_eq!(session.panel().target(), None);
}

#[test]
fn selection_changes_are_announced_and_mirrored() {
    let description = SceneDescription::demo();
    let mut session = EditorSession::new(&description, EditorConfig::default()).expect("demo scene builds");

    let cone = &session.roots()[1];
    let cone_id = cone.id();
    let cone_translation = cone.translation;
    let chain = hit_chain(session.roots(), cone_id).expect("cone root is in the tree");
    session.handle_pick(&PickEvent::hit(chain, false));

    let events = session.drain_events();
    assert!(
        events.contains(&SceneEvent::SelectionChanged { node: Some(cone_id) }),
        "selection change should be published, got {events:?}"
    );
    assert_eq!(session.panel().target(), Some(cone_id));
    assert_eq!(session.panel().position, cone_translation.to_array());
}

#[test]
fn repicking_the_same_node_is_silent() {
    let description = SceneDescription::demo();
    let mut session = EditorSession::new(&description, EditorConfig::default()).expect("demo scene builds");

    let meter = session.roots()[0].id();
    let chain: HitChain = [meter].into_iter().collect();
    session.handle_pick(&PickEvent::hit(chain.clone(), false));
    session.drain_events();

    session.handle_pick(&PickEvent::hit(chain, false));
    assert!(session.drain_events().is_empty(), "re-selecting the same node should not re-announce");
}
