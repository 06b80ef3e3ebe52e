use std::collections::BTreeSet;

use eframe::egui::{self, Pos2, Rect, Ui};

use super::super::render_utils::screen_to_world;
use super::GraphView;

/// Primary click: replace the selection with the hovered node, or add it when `additive`.
/// A plain click on a node that is already selected keeps the whole selection, so a
/// double-click acts on all of it. Clicking empty canvas without a modifier clears it.
pub(super) fn apply_click(selected: &mut BTreeSet<usize>, hovered: Option<usize>, additive: bool) {
    match (hovered, additive) {
        (Some(index), true) => {
            selected.insert(index);
        }
        (Some(index), false) if selected.contains(&index) => {}
        (Some(index), false) => {
            selected.clear();
            selected.insert(index);
        }
        (None, true) => {}
        (None, false) => selected.clear(),
    }
}

impl GraphView {
    pub(super) fn handle_graph_zoom(&mut self, ui: &Ui, rect: Rect, response: &egui::Response) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());
        let world_before = screen_to_world(rect, self.pan, self.zoom, pointer);

        let zoom_factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
        self.zoom = (self.zoom * zoom_factor).clamp(0.1, 6.0);
        self.pan = pointer - rect.center() - (world_before * self.zoom);
    }

    pub(super) fn handle_graph_pan(&mut self, response: &egui::Response) {
        let background_drag =
            self.dragging.is_none() && response.dragged_by(egui::PointerButton::Primary);
        if background_drag
            || response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            self.pan += response.drag_delta();
        }
    }

    /// Moves the grabbed node with the pointer; the node is pinned while held.
    pub(super) fn handle_node_drag(&mut self, response: &egui::Response, hovered: Option<usize>) {
        if response.drag_started_by(egui::PointerButton::Primary)
            && let Some(index) = hovered
        {
            self.dragging = Some(index);
            if let Some(node) = self.graph.nodes.get_mut(index) {
                node.pinned = true;
            }
        }

        if let Some(index) = self.dragging {
            if response.dragged_by(egui::PointerButton::Primary)
                && let Some(node) = self.graph.nodes.get_mut(index)
            {
                node.world_pos += response.drag_delta() / self.zoom;
            }

            if response.drag_stopped() {
                if let Some(node) = self.graph.nodes.get_mut(index) {
                    node.pinned = false;
                }
                self.dragging = None;
            }
        }
    }

    pub(super) fn hovered_index(
        ui: &Ui,
        screen_positions: &[Pos2],
        radius: f32,
    ) -> Option<usize> {
        let pointer = ui.input(|input| input.pointer.hover_pos())?;
        screen_positions
            .iter()
            .enumerate()
            .filter_map(|(index, position)| {
                let distance = position.distance(pointer);
                (distance <= radius).then_some((index, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }

    pub(super) fn handle_selection(
        &mut self,
        ui: &Ui,
        response: &egui::Response,
        hovered: Option<usize>,
    ) -> Option<Vec<usize>> {
        if response.clicked_by(egui::PointerButton::Primary) {
            let additive = ui.input(|input| input.modifiers.command || input.modifiers.shift);
            apply_click(&mut self.selected, hovered, additive);
        }

        if response.double_clicked() && !self.selected.is_empty() {
            return Some(self.selected());
        }
        None
    }
}
