// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Quadrant canvas: crosshair axes, axis labels, and draggable entry icons.

use eframe::egui::{self, Align2, Color32, CornerRadius, FontId, Pos2, Rect, pos2, vec2};

use crate::logic::plane::PlaneMapper;
use crate::models::axis::AxisConfig;
use crate::mvu::AppModel;
use crate::ui::components::thumbs;

/// Pixel inset between the plane extents and the canvas edge.
pub const MARGIN: f32 = 40.0;
/// Side length of an entry icon on the canvas.
pub const ICON_SIZE: f32 = 48.0;

/// Messages emitted by the canvas view.
pub enum CanvasMsg {
    Selected(u64),
    DragMoved { id: u64, delta: egui::Vec2 },
    DragEnded { id: u64, x: i32, y: i32 },
    ThumbnailRequested(u64),
}

/// Render the quadrant plane and return any messages triggered by interaction.
///
/// The mapper is rebuilt from the current rect every frame, so a resize
/// repositions every icon while logical coordinates stay put.
pub fn view(ui: &mut egui::Ui, model: &AppModel) -> Vec<CanvasMsg> {
    let mut msgs = Vec::new();

    let (rect, _bg) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let mapper = PlaneMapper::new(rect, MARGIN);

    draw_axes(ui, &painter, rect, &model.axis);

    for entry in model.store.iter() {
        let mut center = mapper.to_screen(entry.x, entry.y);
        if let Some(drag) = &model.drag {
            if drag.id == entry.id {
                center += drag.offset;
            }
        }
        let icon_rect = Rect::from_center_size(center, vec2(ICON_SIZE, ICON_SIZE));

        let response = ui.interact(
            icon_rect,
            ui.id().with(("entry-icon", entry.id)),
            egui::Sense::click_and_drag(),
        );
        if response.clicked() {
            msgs.push(CanvasMsg::Selected(entry.id));
        }
        if response.dragged() {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                msgs.push(CanvasMsg::DragMoved {
                    id: entry.id,
                    delta,
                });
            }
        }
        if response.drag_stopped() {
            // The icon center is recovered from the tracked offset plus any
            // delta from the release frame, then inverse-mapped and clamped.
            let released = center + response.drag_delta();
            let (x, y) = mapper.to_logical(released);
            msgs.push(CanvasMsg::DragEnded {
                id: entry.id,
                x,
                y,
            });
        }

        draw_icon(ui, &painter, model, entry.id, &entry.name, center, icon_rect, &mut msgs);
    }

    msgs
}

fn draw_axes(ui: &egui::Ui, painter: &egui::Painter, rect: Rect, axis: &AxisConfig) {
    let visuals = ui.visuals();
    let stroke = egui::Stroke::new(1.0, visuals.weak_text_color());
    let center = rect.center();

    painter.line_segment(
        [pos2(center.x, rect.top()), pos2(center.x, rect.bottom())],
        stroke,
    );
    painter.line_segment(
        [pos2(rect.left(), center.y), pos2(rect.right(), center.y)],
        stroke,
    );

    let name_font = FontId::proportional(14.0);
    let side_font = FontId::proportional(12.0);
    let color = visuals.text_color();

    label(painter, pos2(center.x - 10.0, rect.bottom() - 6.0), Align2::RIGHT_BOTTOM, &axis.x_name, &name_font, color);
    label(painter, pos2(rect.left() + 6.0, center.y - 4.0), Align2::LEFT_BOTTOM, &axis.x_left, &side_font, color);
    label(painter, pos2(rect.right() - 6.0, center.y - 4.0), Align2::RIGHT_BOTTOM, &axis.x_right, &side_font, color);
    label(painter, pos2(rect.left() + 6.0, rect.top() + 6.0), Align2::LEFT_TOP, &axis.y_name, &name_font, color);
    label(painter, pos2(center.x + 10.0, rect.top() + 6.0), Align2::LEFT_TOP, &axis.y_top, &side_font, color);
    label(painter, pos2(center.x + 10.0, rect.bottom() - 6.0), Align2::LEFT_BOTTOM, &axis.y_bottom, &side_font, color);
}

fn label(
    painter: &egui::Painter,
    pos: Pos2,
    anchor: Align2,
    text: &str,
    font: &FontId,
    color: Color32,
) {
    if !text.is_empty() {
        painter.text(pos, anchor, text, font.clone(), color);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_icon(
    ui: &egui::Ui,
    painter: &egui::Painter,
    model: &AppModel,
    id: u64,
    name: &str,
    center: Pos2,
    icon_rect: Rect,
    msgs: &mut Vec<CanvasMsg>,
) {
    match model.thumbnails.get(&id) {
        Some(texture) => {
            let size = thumbs::fit_texture(texture, ICON_SIZE);
            let image_rect = Rect::from_center_size(center, size);
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), image_rect, uv, Color32::WHITE);
        }
        None => {
            if !model.thumbnail_failures.contains(&id) && !model.thumbnail_pending.contains(&id) {
                msgs.push(CanvasMsg::ThumbnailRequested(id));
            }
            painter.rect_filled(icon_rect, CornerRadius::same(4), ui.visuals().extreme_bg_color);
            let initial = name.chars().next().unwrap_or('?');
            painter.text(
                center,
                Align2::CENTER_CENTER,
                initial,
                FontId::proportional(20.0),
                ui.visuals().text_color(),
            );
        }
    }

    if model.selected == Some(id) {
        painter.rect_stroke(
            icon_rect.expand(2.0),
            CornerRadius::same(4),
            egui::Stroke::new(2.0, ui.visuals().selection.stroke.color),
            egui::StrokeKind::Outside,
        );
    }

    painter.text(
        pos2(center.x, icon_rect.bottom() + 2.0),
        Align2::CENTER_TOP,
        name,
        FontId::proportional(12.0),
        ui.visuals().text_color(),
    );
}
