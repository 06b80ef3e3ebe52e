use std::collections::HashSet;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Stroke, Ui, vec2};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::super::render_utils::{blend_color, draw_background, edge_visible, world_to_screen};
use super::GraphView;

const NODE_RADIUS: f32 = 11.0;
const NODE_FILL: Color32 = Color32::from_rgb(216, 228, 248);
const BORDER_PLAIN: Color32 = Color32::BLACK;
const BORDER_HIGHLIGHT: Color32 = Color32::RED;
const EDGE_COLOR: Color32 = Color32::from_rgb(150, 156, 170);
const LABEL_COLOR: Color32 = Color32::from_gray(40);

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

impl GraphView {
    fn search_matches(&self) -> HashSet<usize> {
        let query = self.search.trim();
        if query.is_empty() {
            return HashSet::new();
        }

        let matcher = SkimMatcherV2::default();
        self.graph
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| {
                fuzzy_match_score(&matcher, &node.id, query).map(|_| index)
            })
            .collect()
    }

    fn screen_positions(&self, rect: egui::Rect) -> Vec<Pos2> {
        self.graph
            .nodes
            .iter()
            .map(|node| world_to_screen(rect, self.pan, self.zoom, node.world_pos))
            .collect()
    }

    /// Draws the canvas and handles its input. Returns the nodes whose highlight
    /// should flip when the user double-clicked a selection.
    pub(crate) fn show(&mut self, ui: &mut Ui) -> Option<Vec<usize>> {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect, self.pan, self.zoom);
        self.handle_graph_zoom(ui, rect, &response);

        let delta_seconds = ui
            .ctx()
            .input(|input| input.stable_dt)
            .clamp(1.0 / 240.0, 1.0 / 20.0);
        if self.layout.tick(&mut self.graph, self.settings, delta_seconds) {
            ui.ctx().request_repaint();
        }

        let radius = (NODE_RADIUS * self.zoom.powf(0.40)).clamp(4.0, 30.0);
        let hovered = Self::hovered_index(ui, &self.screen_positions(rect), radius);

        self.handle_node_drag(&response, hovered);
        self.handle_graph_pan(&response);
        let highlight_request = self.handle_selection(ui, &response, hovered);

        if hovered.is_some() || self.dragging.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = if self.dragging.is_some() {
                    egui::CursorIcon::Grabbing
                } else {
                    egui::CursorIcon::PointingHand
                };
            });
        }

        if self.graph.nodes.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "Press \"Add Node\" to start the graph.",
                FontId::proportional(14.0),
                LABEL_COLOR,
            );
            return highlight_request;
        }

        let screen_positions = self.screen_positions(rect);
        let matches = self.search_matches();

        for edge in &self.graph.edges {
            let start = screen_positions[edge.from];
            let end = screen_positions[edge.to];
            if !edge_visible(rect, start, end, 2.0) {
                continue;
            }

            let touches_hover = hovered.is_some_and(|index| index == edge.from || index == edge.to);
            let (width, color) = if touches_hover {
                (2.0, blend_color(EDGE_COLOR, Color32::from_rgb(40, 90, 200), 0.6))
            } else {
                (1.2, EDGE_COLOR)
            };
            painter.line_segment([start, end], Stroke::new(width, color));

            if self.labels.edge_labels
                && let Some(label) = &edge.label
            {
                painter.text(
                    start + (end - start) * 0.5,
                    Align2::CENTER_BOTTOM,
                    format!("? {label}"),
                    FontId::proportional(11.0),
                    Color32::from_gray(90),
                );
            }
        }

        let mut selection_animating = false;
        for (index, node) in self.graph.nodes.iter().enumerate() {
            let position = screen_positions[index];
            let is_hovered = hovered == Some(index);
            let is_selected = self.selected.contains(&index);

            let fill = if is_hovered {
                blend_color(NODE_FILL, Color32::WHITE, 0.5)
            } else if matches.contains(&index) {
                blend_color(NODE_FILL, Color32::from_rgb(103, 196, 255), 0.68)
            } else {
                NODE_FILL
            };
            painter.circle_filled(position, radius, fill);

            let selection_mix = ui.ctx().animate_bool(
                ui.make_persistent_id(("node-selection", node.id.as_str())),
                is_selected,
            );
            if selection_mix > 0.0 && selection_mix < 1.0 {
                selection_animating = true;
            }
            if selection_mix > 0.0 {
                let halo_alpha = (40.0 + (selection_mix * 150.0)) as u8;
                painter.circle_stroke(
                    position,
                    radius + 4.0 + ((1.0 - selection_mix) * 6.0),
                    Stroke::new(
                        1.5,
                        Color32::from_rgba_unmultiplied(245, 170, 40, halo_alpha),
                    ),
                );
            }

            let border = if node.highlighted {
                Stroke::new(2.4, BORDER_HIGHLIGHT)
            } else {
                Stroke::new(1.2, BORDER_PLAIN)
            };
            painter.circle_stroke(position, radius, border);

            let label = match self.labels.node_glyph {
                Some(glyph) => format!("{glyph} {}", node.id),
                None => node.id.clone(),
            };
            painter.text(
                position + vec2(radius + 5.0, 0.0),
                Align2::LEFT_CENTER,
                label,
                FontId::proportional(12.0),
                LABEL_COLOR,
            );
        }

        if selection_animating {
            ui.ctx().request_repaint();
        }

        if let Some(index) = hovered {
            let state = if self.graph.is_highlighted(index) {
                "highlighted"
            } else {
                "plain"
            };
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                format!(
                    "{}  |  degree {}  |  {state}",
                    self.graph.nodes[index].id,
                    self.graph.degree(index)
                ),
                FontId::proportional(13.0),
                LABEL_COLOR,
            );
        }

        highlight_request
    }
}
