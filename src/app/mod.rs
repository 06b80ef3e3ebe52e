use eframe::egui::Vec2;

mod graph;
mod graph_app;
mod physics;
mod render_utils;
mod ui;
mod viewer_app;

use graph::GraphView;
pub use graph_app::ZestGraphApp;
pub use physics::LayoutSettings;
pub use viewer_app::ZestGraphViewerApp;

/// Positioned copy of a model graph, rebuilt whenever the model changes.
#[derive(Default)]
pub(crate) struct RenderGraph {
    nodes: Vec<RenderNode>,
    edges: Vec<RenderEdge>,
    physics_scratch: PhysicsScratch,
}

#[derive(Default)]
struct PhysicsScratch {
    forces: Vec<Vec2>,
    positions: Vec<Vec2>,
}

struct RenderNode {
    id: String,
    world_pos: Vec2,
    velocity: Vec2,
    highlighted: bool,
    pinned: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RenderEdge {
    from: usize,
    to: usize,
    label: Option<String>,
}

impl RenderEdge {
    pub(crate) fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            label: None,
        }
    }

    pub(crate) fn labelled(from: usize, to: usize, label: impl Into<String>) -> Self {
        Self {
            from,
            to,
            label: Some(label.into()),
        }
    }
}

/// What the model says about one node. `highlighted: None` keeps the view's own flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeSpec {
    id: String,
    highlighted: Option<bool>,
}

impl NodeSpec {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            highlighted: None,
        }
    }

    pub(crate) fn with_highlight(mut self, highlighted: bool) -> Self {
        self.highlighted = Some(highlighted);
        self
    }
}
