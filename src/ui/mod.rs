// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Top-level egui application shell for the quadrant ranking board.
//! Composes the side panel, canvas, and modals, and pumps MVU messages.

pub mod components;

use eframe::egui;

use crate::logic::store::StorePaths;
use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::{axis_settings, canvas, entry_dialog, entry_list};

/// Stateful egui application owning the model and the per-frame message inbox.
pub struct QuadRankApp {
    model: AppModel,
    inbox: Vec<Msg>,
}

impl QuadRankApp {
    /// Build the app over the given data directory, loading persisted state.
    pub fn new(paths: StorePaths) -> Self {
        Self {
            model: AppModel::load(paths),
            inbox: Vec::new(),
        }
    }
}

impl eframe::App for QuadRankApp {
    // eframe 0.34 requires `ui`, but still calls the deprecated `update` each
    // frame; all rendering happens there, so this is intentionally empty.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    #[allow(deprecated)]
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Process pending messages, running side-effect commands inline on the
        // UI thread. The pass bound keeps a message ping-pong from hogging a
        // frame; leftovers carry over to the next one.
        let mut passes = 0;
        while !self.inbox.is_empty() && passes < 8 {
            let msgs = std::mem::take(&mut self.inbox);
            for msg in msgs {
                match msg {
                    Msg::ThumbnailDecoded { id, image } => {
                        let texture = ctx.load_texture(
                            format!("entry-thumb-{id}"),
                            image,
                            egui::TextureOptions::default(),
                        );
                        self.inbox.push(Msg::ThumbnailReady { id, texture });
                    }
                    other => {
                        let mut cmds = Vec::new();
                        mvu::update(&mut self.model, other, &mut cmds);
                        for cmd in cmds {
                            self.inbox.push(mvu::run_command(cmd));
                        }
                    }
                }
            }
            passes += 1;
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("QuadRank");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(2.0);
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);
        self.render_notice_modal(ctx);
        self.render_confirm_delete(ctx);
        self.render_entry_dialogs(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::SidePanel::left("entry_panel")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                self.render_side_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let canvas_msgs = canvas::view(ui, &self.model);
            self.inbox.extend(canvas_msgs.into_iter().map(|m| match m {
                canvas::CanvasMsg::Selected(id) => Msg::EntrySelected(id),
                canvas::CanvasMsg::DragMoved { id, delta } => Msg::DragMoved { id, delta },
                canvas::CanvasMsg::DragEnded { id, x, y } => Msg::DragEnded { id, x, y },
                canvas::CanvasMsg::ThumbnailRequested(id) => Msg::ThumbnailRequested(id),
            }));
        });
    }
}

impl QuadRankApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Side panel: add button, entry list, selection actions, axis settings,
    /// and the manual save button.
    fn render_side_panel(&mut self, ui: &mut egui::Ui) {
        if ui
            .button(format!("{} Add Entry", egui_phosphor::regular::PLUS))
            .on_hover_text("Pick an image and place it at the origin")
            .clicked()
        {
            self.inbox.push(Msg::AddRequested);
        }

        ui.add_space(4.0);
        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - 280.0).max(120.0))
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let list_msgs = entry_list::view(ui, &self.model);
                self.inbox.extend(list_msgs.into_iter().map(|m| match m {
                    entry_list::ListMsg::Selected(id) => Msg::EntrySelected(id),
                    entry_list::ListMsg::EditRequested(id) => Msg::EditRequested(id),
                    entry_list::ListMsg::ThumbnailRequested(id) => Msg::ThumbnailRequested(id),
                }));
            });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Edit", egui_phosphor::regular::PENCIL_SIMPLE))
                .clicked()
            {
                self.inbox.push(self.for_selection(Msg::EditRequested));
            }
            if ui
                .button(format!("{} View", egui_phosphor::regular::EYE))
                .clicked()
            {
                self.inbox.push(self.for_selection(Msg::DetailRequested));
            }
            if ui
                .button(format!("{} Delete", egui_phosphor::regular::TRASH_SIMPLE))
                .clicked()
            {
                self.inbox.push(self.for_selection(Msg::DeleteRequested));
            }
        });

        ui.add_space(8.0);
        egui::CollapsingHeader::new("Axis Settings")
            .default_open(true)
            .show(ui, |ui| {
                let axis_msgs = axis_settings::view(ui, &self.model.axis);
                self.inbox.extend(
                    axis_msgs
                        .into_iter()
                        .map(|m| Msg::AxisLabelChanged(m.field, m.text)),
                );
            });

        ui.add_space(8.0);
        if ui
            .button(format!("{} Save Now", egui_phosphor::regular::FLOPPY_DISK))
            .on_hover_text("State is saved automatically after every change")
            .clicked()
        {
            self.inbox.push(Msg::SaveRequested);
        }
    }

    /// Route a selection-dependent action, or raise the no-selection notice.
    fn for_selection(&self, make: impl FnOnce(u64) -> Msg) -> Msg {
        match self.model.selected {
            Some(id) => make(id),
            None => Msg::NothingSelected,
        }
    }

    fn render_entry_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(dialog) = &self.model.dialog {
            let msgs = entry_dialog::edit_view(ctx, dialog);
            self.inbox.extend(msgs.into_iter().map(|m| match m {
                entry_dialog::DialogMsg::NameChanged(text) => Msg::DialogNameChanged(text),
                entry_dialog::DialogMsg::XChanged(x) => Msg::DialogXChanged(x),
                entry_dialog::DialogMsg::YChanged(y) => Msg::DialogYChanged(y),
                entry_dialog::DialogMsg::Confirmed => Msg::DialogConfirmed,
                entry_dialog::DialogMsg::Cancelled => Msg::DialogCancelled,
            }));
        }

        if let Some(id) = self.model.detail {
            let msgs = entry_dialog::detail_view(ctx, &self.model, id);
            self.inbox.extend(msgs.into_iter().map(|m| match m {
                entry_dialog::DetailMsg::Closed => Msg::DetailClosed,
            }));
        }
    }

    /// Delete confirmation prompt for the pending entry.
    fn render_confirm_delete(&mut self, ctx: &egui::Context) {
        let Some(id) = self.model.confirm_delete else {
            return;
        };
        let name = self
            .model
            .store
            .get(id)
            .map(|e| e.name.clone())
            .unwrap_or_default();

        egui::Window::new("Delete entry")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(format!("Delete \"{name}\"? Its image copy is removed as well."));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        self.inbox.push(Msg::DeleteConfirmed);
                    }
                    if ui.button("No").clicked() {
                        self.inbox.push(Msg::DeleteCancelled);
                    }
                });
            });
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Informational modal, e.g. for actions that need a selection.
    fn render_notice_modal(&mut self, ctx: &egui::Context) {
        if self.model.error.is_some() {
            return;
        }
        if let Some(message) = self.model.notice.clone() {
            egui::Window::new("Notice")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissNotice);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(110)));
        }
    }
}
