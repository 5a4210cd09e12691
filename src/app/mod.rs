// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Application entry point wiring egui/eframe to launch the QuadRank UI.

use anyhow::{Context, Result};
use eframe::egui;
use egui_phosphor::Variant;

use crate::logic::store::StorePaths;
use crate::ui::QuadRankApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> Result<()> {
    let paths = StorePaths::new("data");
    paths.ensure_dirs()?;

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "QuadRank",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(QuadRankApp::new(paths)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("Failed to run the event loop")
}
