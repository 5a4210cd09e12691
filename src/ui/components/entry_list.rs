// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Entry list: one row per entry in insertion order with thumbnail and position.

use eframe::egui::{self, Color32};

use crate::mvu::AppModel;
use crate::ui::components::thumbs;

const ROW_THUMB: f32 = 40.0;

/// Messages emitted by the list view.
pub enum ListMsg {
    Selected(u64),
    /// Double-clicked row; opens the same dialog as "Edit Selected".
    EditRequested(u64),
    ThumbnailRequested(u64),
}

/// Render the entry list and return any messages triggered by interaction.
pub fn view(ui: &mut egui::Ui, model: &AppModel) -> Vec<ListMsg> {
    let mut msgs = Vec::new();

    if model.store.is_empty() {
        ui.label(egui::RichText::new("No entries yet").color(Color32::from_gray(150)));
        return msgs;
    }

    for entry in model.store.iter() {
        let is_selected = model.selected == Some(entry.id);
        let fill = if is_selected {
            ui.visuals().selection.bg_fill.gamma_multiply(0.3)
        } else {
            Color32::TRANSPARENT
        };

        let row = egui::Frame::new()
            .fill(fill)
            .inner_margin(4.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    match model.thumbnails.get(&entry.id) {
                        Some(texture) => {
                            let size = thumbs::fit_texture(texture, ROW_THUMB);
                            ui.add(egui::Image::new((texture.id(), size)));
                        }
                        None => {
                            if !model.thumbnail_failures.contains(&entry.id)
                                && !model.thumbnail_pending.contains(&entry.id)
                            {
                                msgs.push(ListMsg::ThumbnailRequested(entry.id));
                            }
                            ui.allocate_space(egui::vec2(ROW_THUMB, ROW_THUMB));
                        }
                    }
                    ui.vertical(|ui| {
                        ui.label(&entry.name);
                        ui.label(
                            egui::RichText::new(format!("x = {}, y = {}", entry.x, entry.y))
                                .small()
                                .color(Color32::from_gray(110)),
                        );
                    });
                });
            });

        let response = row
            .response
            .interact(egui::Sense::click())
            .on_hover_text("Double-click to edit");
        if response.double_clicked() {
            msgs.push(ListMsg::EditRequested(entry.id));
        } else if response.clicked() {
            msgs.push(ListMsg::Selected(entry.id));
        }
    }

    msgs
}
