use std::path::PathBuf;

use eframe::egui::{self, Context};
use tracing::{error, info};

use crate::model::ContentList;
use crate::model::snapshot::{self, ContentSnapshot};

use super::graph::LabelStyle;
use super::ui::{Status, action_bar, top_bar};
use super::{GraphView, LayoutSettings, NodeSpec, RenderEdge};

const NODE_GLYPH: &str = "ℹ";

/// The content-driven demo: the graph is derived from a list of node and edge names.
pub struct ZestGraphViewerApp {
    content: ContentList,
    view: GraphView,
    save_path: PathBuf,
    status: Status,
}

impl ZestGraphViewerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        content: ContentList,
        settings: LayoutSettings,
        save_path: PathBuf,
    ) -> Self {
        let mut app = Self {
            content,
            view: GraphView::new(
                settings,
                LabelStyle {
                    node_glyph: Some(NODE_GLYPH),
                    edge_labels: true,
                },
            ),
            save_path,
            status: Status::Idle,
        };
        app.refresh();
        app.view.start_layout();
        app
    }

    /// Re-reads the content list into the view.
    fn refresh(&mut self) {
        let resolved = self.content.resolve();
        let specs = resolved.nodes.into_iter().map(NodeSpec::new).collect();
        let edges = resolved
            .edges
            .into_iter()
            .map(|edge| RenderEdge::labelled(edge.from, edge.to, edge.label))
            .collect();
        self.view.sync(specs, edges);
    }

    fn add_node(&mut self) {
        let element = self.content.add_node().to_owned();
        self.refresh();
        self.view.start_layout();
        self.status = Status::Info(format!("added \"{element}\""));
    }

    fn save(&mut self) {
        let snapshot = ContentSnapshot::from(&self.content);
        self.status = match snapshot::save(&self.save_path, &snapshot) {
            Ok(()) => Status::Info(format!("saved {}", self.save_path.display())),
            Err(err) => {
                error!(error = %format!("{err:#}"), "save failed");
                Status::Error(format!("{err:#}"))
            }
        };
    }
}

impl eframe::App for ZestGraphViewerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if top_bar(ctx, "Zest GraphViewer", &mut self.view, &self.status) {
            self.save();
        }

        let actions = action_bar(ctx, "Lay Out");
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
            info!(count = indices.len(), "toggled node highlight");
            self.view.toggle_highlight(&indices);
        }
    }
}
