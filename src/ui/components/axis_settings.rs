// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Axis settings form: six free-text labels consumed by the canvas renderer.

use eframe::egui;

use crate::models::axis::{AxisConfig, AxisField};

/// A single edited label field.
pub struct AxisMsg {
    pub field: AxisField,
    pub text: String,
}

/// Render the axis label editor and return changed fields.
///
/// Any string is accepted; changes take effect on the next canvas redraw.
pub fn view(ui: &mut egui::Ui, axis: &AxisConfig) -> Vec<AxisMsg> {
    let mut msgs = Vec::new();

    egui::Grid::new("axis_settings_grid")
        .num_columns(2)
        .spacing(egui::vec2(8.0, 6.0))
        .min_col_width(110.0)
        .show(ui, |ui| {
            field(ui, &mut msgs, "X axis name", AxisField::XName, &axis.x_name);
            field(ui, &mut msgs, "Left side label", AxisField::XLeft, &axis.x_left);
            field(ui, &mut msgs, "Right side label", AxisField::XRight, &axis.x_right);
            field(ui, &mut msgs, "Y axis name", AxisField::YName, &axis.y_name);
            field(ui, &mut msgs, "Top label", AxisField::YTop, &axis.y_top);
            field(ui, &mut msgs, "Bottom label", AxisField::YBottom, &axis.y_bottom);
        });

    msgs
}

fn field(
    ui: &mut egui::Ui,
    msgs: &mut Vec<AxisMsg>,
    label: &str,
    field: AxisField,
    value: &str,
) {
    ui.label(label);
    let mut text = value.to_string();
    if ui.add(egui::TextEdit::singleline(&mut text)).changed() {
        msgs.push(AxisMsg { field, text });
    }
    ui.end_row();
}
