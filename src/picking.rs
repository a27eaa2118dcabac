use crate::node::{NodeId, SceneNode};
use smallvec::SmallVec;

/// Ordered node identities intersected by a click, deepest hit first, root
/// last. An empty chain is a miss.
pub type HitChain = SmallVec<[NodeId; 8]>;

#[derive(Debug, Clone, Default)]
pub struct PickEvent {
    pub chain: HitChain,
    pub modifier_held: bool,
}

impl PickEvent {
    pub fn hit(chain: HitChain, modifier_held: bool) -> Self {
        Self { chain, modifier_held }
    }

    pub fn miss() -> Self {
        Self::default()
    }

    pub fn is_miss(&self) -> bool {
        self.chain.is_empty()
    }
}

/// Resolves a pick event to the single node that becomes selected.
///
/// The event bubbles from the deepest intersected node toward the root; every
/// handler along the chain observes it and the last observer wins, so a plain
/// click lands on the outermost group containing the hit point. Only a
/// modifier-held click is consumed at the deepest node, stopping propagation
/// so the exact leaf under the cursor is selected. A miss yields `None`,
/// clearing the selection.
pub fn resolve_selection(event: &PickEvent) -> Option<NodeId> {
    let mut selected = None;
    for (depth, &node) in event.chain.iter().enumerate() {
        selected = Some(node);
        let consumed = event.modifier_held && depth == 0;
        if consumed {
            break;
        }
    }
    selected
}

/// Derives the leaf-to-root chain for `leaf` from the tree; the shape a
/// raycasting render adapter reports for an intersected node.
pub fn hit_chain(roots: &[SceneNode], leaf: NodeId) -> Option<HitChain> {
    fn visit(node: &SceneNode, leaf: NodeId, chain: &mut HitChain) -> bool {
        if node.id() == leaf {
            chain.push(node.id());
            return true;
        }
        for child in node.children() {
            if visit(child, leaf, chain) {
                chain.push(node.id());
                return true;
            }
        }
        false
    }

    for root in roots {
        let mut chain = HitChain::new();
        if visit(root, leaf, &mut chain) {
            return Some(chain);
        }
    }
    None
}
