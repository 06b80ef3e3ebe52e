use eframe::egui::{self, Align, Color32, Context, Layout, RichText};

use super::super::GraphView;

const CANVAS_HINT: &str = concat!(
    "Click selects, Ctrl/Shift-click adds, double-click toggles the selection's highlight, ",
    "drag moves, scroll zooms."
);

/// Buttons pressed in the bottom bar this frame.
#[derive(Clone, Copy, Debug, Default)]
pub(in crate::app) struct ActionBar {
    pub(in crate::app) add_node: bool,
    pub(in crate::app) layout: bool,
}

/// Last user-visible outcome, shown at the right of the top bar.
#[derive(Clone, Debug, Default)]
pub(in crate::app) enum Status {
    #[default]
    Idle,
    Info(String),
    Error(String),
}

pub(in crate::app) fn action_bar(ctx: &Context, layout_label: &str) -> ActionBar {
    let mut pressed = ActionBar::default();

    egui::TopBottomPanel::bottom("actions")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.columns(2, |columns| {
                let width = columns[0].available_width();
                pressed.add_node = columns[0]
                    .add_sized([width, 28.0], egui::Button::new("Add Node"))
                    .clicked();
                let width = columns[1].available_width();
                pressed.layout = columns[1]
                    .add_sized([width, 28.0], egui::Button::new(layout_label))
                    .clicked();
            });
            ui.add_space(4.0);
        });

    pressed
}

/// Title, counts, search box and Save. Returns whether Save was pressed.
pub(in crate::app) fn top_bar(
    ctx: &Context,
    title: &str,
    view: &mut GraphView,
    status: &Status,
) -> bool {
    let mut save_requested = false;

    egui::TopBottomPanel::top("top_bar")
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(title);
                ui.separator();
                ui.label(format!("nodes: {}", view.node_count()));
                ui.label(format!("edges: {}", view.edge_count()));
                if view.is_laying_out() {
                    ui.spinner();
                }
                ui.separator();
                ui.label("Search");
                ui.add(
                    egui::TextEdit::singleline(view.search_mut())
                        .hint_text("node name")
                        .desired_width(140.0),
                );
                if ui.button("Save").clicked() {
                    save_requested = true;
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| match status {
                    Status::Idle => {}
                    Status::Info(message) => {
                        ui.label(message.as_str());
                    }
                    Status::Error(message) => {
                        ui.label(
                            RichText::new(message.as_str()).color(Color32::from_rgb(200, 40, 40)),
                        );
                    }
                });
            });
            ui.small(CANVAS_HINT);
        });

    save_requested
}
