use crate::node::NodeId;
use std::fmt;

/// Change notifications produced by the editor core. The render adapter and
/// the surrounding shell consume these instead of observing the mutable tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneEvent {
    SelectionChanged { node: Option<NodeId> },
    NodeChanged { node: NodeId },
    GizmoDragStarted { node: NodeId },
    GizmoDragEnded { node: NodeId },
}

impl fmt::Display for SceneEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneEvent::SelectionChanged { node: Some(node) } => {
                write!(f, "SelectionChanged node={node}")
            }
            SceneEvent::SelectionChanged { node: None } => write!(f, "SelectionChanged node=none"),
            SceneEvent::NodeChanged { node } => write!(f, "NodeChanged node={node}"),
            SceneEvent::GizmoDragStarted { node } => write!(f, "GizmoDragStarted node={node}"),
            SceneEvent::GizmoDragEnded { node } => write!(f, "GizmoDragEnded node={node}"),
        }
    }
}

#[derive(Default)]
pub struct EventBus {
    events: Vec<SceneEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<SceneEvent> {
        self.events.drain(..).collect()
    }
}
