// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Thumbnail decoding for entry images.

use std::path::Path;

use eframe::egui;

/// Extensions accepted by the add-entry file picker.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Largest edge of a decoded thumbnail in pixels.
pub const THUMB_MAX: u32 = 256;

/// Load and resize an entry image to a thumbnail-friendly `ColorImage`.
pub fn load_thumbnail(path: &Path) -> Result<egui::ColorImage, String> {
    let dyn_img = image::open(path).map_err(|e| e.to_string())?;
    let resized = dyn_img.thumbnail(THUMB_MAX, THUMB_MAX).to_rgba8();
    let size = [resized.width() as usize, resized.height() as usize];
    let pixels = resized.into_raw();
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &pixels))
}

/// Fit a texture's size into a square box, preserving aspect ratio.
pub fn fit_texture(texture: &egui::TextureHandle, max: f32) -> egui::Vec2 {
    let size = texture.size_vec2();
    let scale = (max / size.x).min(max / size.y).min(1.0);
    size * scale
}

#[cfg(test)]
mod tests {
    use std::fs;

    use image::{ImageBuffer, Rgba};
    use tempfile::TempDir;

    use super::load_thumbnail;

    // Thumbnails keep aspect ratio and stay within the max bounds.
    #[test]
    fn load_thumbnail_scales_raster_image() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("thumb.png");
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(10, 12, Rgba([0, 255, 0, 255]));
        img.save(&path).expect("png saved");

        let thumb = load_thumbnail(&path).expect("thumbnail created");

        assert!(thumb.size[0] <= 256 && thumb.size[1] <= 256);
        let aspect = thumb.size[0] as f32 / thumb.size[1] as f32;
        assert!((aspect - 10.0 / 12.0).abs() < 0.05);
    }

    #[test]
    fn load_thumbnail_errors_on_invalid_image() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("invalid.png");
        fs::write(&path, b"not an image").expect("file written");

        assert!(load_thumbnail(&path).is_err());
    }
}
