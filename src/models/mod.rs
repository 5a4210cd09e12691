// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Domain layer: pure data types shared between UI, persistence, and the MVU kernel.

pub mod axis;
pub mod entry;
