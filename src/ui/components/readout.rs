// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Calculate button, sunken result readout, and confidence footnote.

use crate::mvu::{AppModel, Msg};

/// Render the trigger and the latest readout text.
pub fn view(ui: &mut egui::Ui, model: &AppModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    ui.vertical_centered(|ui| {
        let button = egui::Button::new(
            egui::RichText::new(format!(
                "{} Calculate",
                egui_phosphor::regular::CALCULATOR
            ))
            .size(20.0)
            .strong(),
        )
        .min_size(egui::vec2(160.0, 36.0));
        if ui.add(button).on_hover_text("Or press Enter").clicked() {
            msgs.push(Msg::CalculateRequested);
        }

        ui.add_space(12.0);

        egui::Frame::new()
            .stroke(egui::Stroke::new(2.0, egui::Color32::from_gray(60)))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(280.0, 48.0));
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new(&model.readout)
                            .size(22.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                });
            });

        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(model.conditions.ci_footnote())
                .size(16.0)
                .italics()
                .color(egui::Color32::WHITE),
        );
    });

    msgs
}
