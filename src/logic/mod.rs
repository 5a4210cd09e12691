// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Business logic: coordinate mapping and on-disk persistence.

pub mod plane;
pub mod store;
