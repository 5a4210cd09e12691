// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Reusable egui components structured for MVU-style updates.

pub mod axis_settings;
pub mod canvas;
pub mod entry_dialog;
pub mod entry_list;
pub mod thumbs;
