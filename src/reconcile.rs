use crate::node::SceneNode;

/// Produces the next top-level scene-item collection after a node changed:
/// same length, identity order preserved, and only the entry whose id matches
/// `changed` is replaced. The render adapter treats the result as an immutable
/// list per frame instead of observing the mutable tree.
pub fn reconcile(items: &[SceneNode], changed: &SceneNode) -> Vec<SceneNode> {
    items
        .iter()
        .map(|item| if item.id() == changed.id() { changed.clone() } else { item.clone() })
        .collect()
}
