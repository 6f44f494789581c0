// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable egui pieces of the thickness form. Views return messages instead of mutating state.

pub mod measurement_form;
pub mod readout;

/// Panel background of the form.
pub const BRAND_RED: egui::Color32 = egui::Color32::from_rgb(0xd0, 0x00, 0x00);
