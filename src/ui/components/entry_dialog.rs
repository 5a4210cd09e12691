// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Modal dialogs for editing and inspecting a single entry.

use eframe::egui::{self, Align2};

use crate::models::entry::{COORD_MAX, COORD_MIN};
use crate::mvu::{AppModel, EntryDialogState};
use crate::ui::components::thumbs;

/// Messages emitted by the edit dialog.
pub enum DialogMsg {
    NameChanged(String),
    XChanged(i32),
    YChanged(i32),
    Confirmed,
    Cancelled,
}

/// Render the centered edit modal, pre-filled from the dialog buffer.
///
/// Nothing is applied to the entry until the user confirms.
pub fn edit_view(ctx: &egui::Context, dialog: &EntryDialogState) -> Vec<DialogMsg> {
    let mut msgs = Vec::new();

    egui::Window::new("Entry Details")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Grid::new("entry_dialog_grid")
                .num_columns(2)
                .spacing(egui::vec2(8.0, 8.0))
                .min_col_width(110.0)
                .show(ui, |ui| {
                    ui.label("Name");
                    let mut name = dialog.name.clone();
                    if ui.add(egui::TextEdit::singleline(&mut name)).changed() {
                        msgs.push(DialogMsg::NameChanged(name));
                    }
                    ui.end_row();

                    ui.label(format!("X ({COORD_MIN}..{COORD_MAX})"));
                    let mut x = dialog.x;
                    if ui
                        .add(egui::DragValue::new(&mut x).range(COORD_MIN..=COORD_MAX))
                        .changed()
                    {
                        msgs.push(DialogMsg::XChanged(x));
                    }
                    ui.end_row();

                    ui.label(format!("Y ({COORD_MIN}..{COORD_MAX})"));
                    let mut y = dialog.y;
                    if ui
                        .add(egui::DragValue::new(&mut y).range(COORD_MIN..=COORD_MAX))
                        .changed()
                    {
                        msgs.push(DialogMsg::YChanged(y));
                    }
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .button(format!("{} Save", egui_phosphor::regular::CHECK))
                    .clicked()
                {
                    msgs.push(DialogMsg::Confirmed);
                }
                if ui
                    .button(format!("{} Cancel", egui_phosphor::regular::X))
                    .clicked()
                {
                    msgs.push(DialogMsg::Cancelled);
                }
            });
        });

    msgs
}

/// Messages emitted by the detail dialog.
pub enum DetailMsg {
    Closed,
}

/// Render the read-only detail modal: larger image, name, position, and path.
pub fn detail_view(ctx: &egui::Context, model: &AppModel, id: u64) -> Vec<DetailMsg> {
    let mut msgs = Vec::new();
    let Some(entry) = model.store.get(id) else {
        return vec![DetailMsg::Closed];
    };

    egui::Window::new("Entry")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            if let Some(texture) = model.thumbnails.get(&id) {
                let size = thumbs::fit_texture(texture, 200.0);
                ui.add(egui::Image::new((texture.id(), size)));
                ui.add_space(8.0);
            }
            ui.heading(&entry.name);
            ui.label(format!("x = {}, y = {}", entry.x, entry.y));
            ui.label(
                egui::RichText::new(entry.image_path.to_string_lossy())
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                msgs.push(DetailMsg::Closed);
            }
        });

    msgs
}
