// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Linear mapping between logical quadrant coordinates and canvas pixels.

use egui::{Pos2, Rect, pos2};

use crate::models::entry::clamp_coord;

/// Maps logical coordinates in [-100, 100] onto a canvas rect.
///
/// The origin sits at the rect center, positive y renders upward, and ±100
/// lands on the margin-inset half extents. Built fresh from the current rect
/// every frame, so resizing the canvas only changes pixel placement.
#[derive(Clone, Copy, Debug)]
pub struct PlaneMapper {
    center: Pos2,
    /// Pixels per 100 logical units along x.
    half_width: f32,
    /// Pixels per 100 logical units along y.
    half_height: f32,
}

impl PlaneMapper {
    pub fn new(rect: Rect, margin: f32) -> Self {
        Self {
            center: rect.center(),
            half_width: rect.width() / 2.0 - margin,
            half_height: rect.height() / 2.0 - margin,
        }
    }

    /// Pixel position of a logical coordinate pair.
    pub fn to_screen(&self, x: i32, y: i32) -> Pos2 {
        pos2(
            self.center.x + (x as f32 / 100.0) * self.half_width,
            self.center.y - (y as f32 / 100.0) * self.half_height,
        )
    }

    /// Logical coordinates for a pixel position, rounded to the nearest
    /// integer and clamped into [-100, 100].
    pub fn to_logical(&self, pos: Pos2) -> (i32, i32) {
        let x = (pos.x - self.center.x) / self.half_width * 100.0;
        let y = (self.center.y - pos.y) / self.half_height * 100.0;
        (
            clamp_coord(x.round() as i32),
            clamp_coord(y.round() as i32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Rect, pos2, vec2};

    fn rect(w: f32, h: f32) -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(w, h))
    }

    #[test]
    fn origin_maps_to_center() {
        let mapper = PlaneMapper::new(rect(800.0, 600.0), 40.0);
        assert_eq!(mapper.to_screen(0, 0), pos2(400.0, 300.0));
    }

    #[test]
    fn extremes_map_to_margin_insets() {
        let mapper = PlaneMapper::new(rect(800.0, 600.0), 40.0);
        assert_eq!(mapper.to_screen(100, 0).x, 760.0);
        assert_eq!(mapper.to_screen(-100, 0).x, 40.0);
        // Positive y renders upward.
        assert_eq!(mapper.to_screen(0, 100).y, 40.0);
        assert_eq!(mapper.to_screen(0, -100).y, 560.0);
    }

    #[test]
    fn round_trip_is_exact_for_all_logical_values() {
        let viewports = [
            (800.0, 600.0, 40.0),
            (1000.0, 700.0, 40.0),
            (301.0, 217.0, 25.0),
            (120.0, 90.0, 10.0),
        ];
        for (w, h, margin) in viewports {
            let mapper = PlaneMapper::new(rect(w, h), margin);
            for v in -100..=100 {
                assert_eq!(
                    mapper.to_logical(mapper.to_screen(v, -v)),
                    (v, -v),
                    "round trip failed for v={v} at {w}x{h} margin {margin}"
                );
            }
        }
    }

    #[test]
    fn to_logical_clamps_positions_outside_the_plane() {
        let mapper = PlaneMapper::new(rect(800.0, 600.0), 40.0);
        assert_eq!(mapper.to_logical(pos2(5000.0, -5000.0)), (100, 100));
        assert_eq!(mapper.to_logical(pos2(-5000.0, 5000.0)), (-100, -100));
    }

    #[test]
    fn offset_rect_keeps_center_relative_mapping() {
        let mapper = PlaneMapper::new(
            Rect::from_min_size(pos2(320.0, 24.0), vec2(600.0, 500.0)),
            40.0,
        );
        let center = mapper.to_screen(0, 0);
        assert_eq!(center, pos2(620.0, 274.0));
        assert_eq!(mapper.to_logical(center), (0, 0));
    }
}
