// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the thickness form.

use egui_phosphor::Variant;

use crate::config::AppSettings;
use crate::ui::{ThicknessApp, apply_form_style};
use crate::utils::try_load_icon;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run(settings: AppSettings) -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(settings.window_title.clone())
        .with_inner_size(settings.inner_size)
        .with_min_inner_size(settings.min_inner_size);
    if let Some(icon) = try_load_icon(&settings.icon_path) {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let title = settings.window_title.clone();
    tracing::info!(%title, "starting thickness calculator");

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            apply_form_style(&cc.egui_ctx);
            Ok(Box::new(ThicknessApp::new(&settings)))
        }),
    )
}
