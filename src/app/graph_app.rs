use std::path::PathBuf;

use eframe::egui::{self, Context};
use rand::rngs::StdRng;
use tracing::{error, info};

use crate::model::DemoGraph;
use crate::model::snapshot::{self, GraphSnapshot};

use super::graph::LabelStyle;
use super::ui::{Status, action_bar, top_bar};
use super::{GraphView, LayoutSettings, NodeSpec, RenderEdge};

/// The direct graph demo: nodes are added to a [`DemoGraph`] with random connections.
pub struct ZestGraphApp {
    graph: DemoGraph,
    rng: StdRng,
    view: GraphView,
    save_path: PathBuf,
    status: Status,
}

impl ZestGraphApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        graph: DemoGraph,
        rng: StdRng,
        settings: LayoutSettings,
        save_path: PathBuf,
    ) -> Self {
        let mut app = Self {
            graph,
            rng,
            view: GraphView::new(settings, LabelStyle::default()),
            save_path,
            status: Status::Idle,
        };
        app.sync_view();
        app.view.start_layout();
        app
    }

    fn sync_view(&mut self) {
        let specs = self
            .graph
            .nodes()
            .iter()
            .map(|node| NodeSpec::new(node.name.as_str()).with_highlight(node.highlighted))
            .collect();
        let edges = self
            .graph
            .edges()
            .iter()
            .map(|&(from, to)| RenderEdge::new(from, to))
            .collect();
        self.view.sync(specs, edges);
    }

    fn add_node(&mut self) {
        let added = self.graph.add_node(&mut self.rng);
        self.sync_view();
        self.view.start_layout();
        self.status = Status::Info(format!(
            "added {} ({} connection{})",
            self.graph.nodes()[added.index].name,
            added.targets.len(),
            if added.targets.len() == 1 { "" } else { "s" }
        ));
    }

    fn toggle_highlight(&mut self, indices: &[usize]) {
        let toggled = self.graph.toggle_highlight(indices.iter().copied());
        info!(toggled, "toggled node highlight");
        self.sync_view();
    }

    fn save(&mut self) {
        let snapshot = GraphSnapshot::from(&self.graph);
        self.status = match snapshot::save(&self.save_path, &snapshot) {
            Ok(()) => Status::Info(format!("saved {}", self.save_path.display())),
            Err(err) => {
                error!(error = %format!("{err:#}"), "save failed");
                Status::Error(format!("{err:#}"))
            }
        };
    }
}

impl eframe::App for ZestGraphApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if top_bar(ctx, "Zest Graph", &mut self.view, &self.status) {
            self.save();
        }

        let actions = action_bar(ctx, "Layout");
        if actions.add_node {
            self.add_node();
        }
        if actions.layout {
            info!("layout requested");
            self.view.start_layout();
        }

        let highlight_request = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.view.show(ui))
            .inner;
        if let Some(indices) = highlight_request {
            self.toggle_highlight(&indices);
        }
    }
}
