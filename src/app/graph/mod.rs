use std::collections::BTreeSet;

use eframe::egui::Vec2;

use super::physics::{LayoutRun, LayoutSettings};
use super::{NodeSpec, RenderEdge, RenderGraph};

mod build;
mod interaction;
mod view;

/// How nodes and edges are labelled on the canvas.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LabelStyle {
    pub(crate) node_glyph: Option<&'static str>,
    pub(crate) edge_labels: bool,
}

/// Interactive canvas state shared by both demo programs.
pub(crate) struct GraphView {
    graph: RenderGraph,
    pan: Vec2,
    zoom: f32,
    selected: BTreeSet<usize>,
    dragging: Option<usize>,
    search: String,
    layout: LayoutRun,
    settings: LayoutSettings,
    labels: LabelStyle,
}

impl GraphView {
    pub(crate) fn new(settings: LayoutSettings, labels: LabelStyle) -> Self {
        Self {
            graph: RenderGraph::default(),
            pan: Vec2::ZERO,
            zoom: 1.0,
            selected: BTreeSet::new(),
            dragging: None,
            search: String::new(),
            layout: LayoutRun::default(),
            settings,
            labels,
        }
    }

    pub(crate) fn sync(&mut self, specs: Vec<NodeSpec>, edges: Vec<RenderEdge>) {
        self.graph.sync(specs, edges);
        let node_count = self.graph.node_count();
        self.selected.retain(|&index| index < node_count);
        if self.dragging.is_some_and(|index| index >= node_count) {
            self.dragging = None;
        }
    }

    pub(crate) fn start_layout(&mut self) {
        self.layout.start(self.settings);
    }

    pub(crate) fn is_laying_out(&self) -> bool {
        self.layout.is_running()
    }

    pub(crate) fn toggle_highlight(&mut self, indices: &[usize]) {
        self.graph.toggle_highlight(indices);
    }

    pub(crate) fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn selected(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    pub(crate) fn search_mut(&mut self) -> &mut String {
        &mut self.search
    }
}
