// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Input grid: editable shots and pressure plus the fixed deposition conditions.

use crate::mvu::{AppModel, Msg};

const FIELD_WIDTH: f32 = 150.0;
const LABEL_SIZE: f32 = 16.0;

/// Render the four labelled rows and return edits as messages.
pub fn view(ui: &mut egui::Ui, model: &AppModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::Grid::new("measurement_grid")
        .num_columns(3)
        .spacing(egui::vec2(8.0, 8.0))
        .show(ui, |ui| {
            label(ui, "# of laser shots:");
            let mut shots = model.input.shots.clone();
            if entry(ui, &mut shots, "e.g., 1000").changed() {
                msgs.push(Msg::ShotsChanged(shots));
            }
            unit(ui, "shots");
            ui.end_row();

            label(ui, "O₂ growth pressure:");
            let mut pressure = model.input.pressure.clone();
            if entry(ui, &mut pressure, "mTorr").changed() {
                msgs.push(Msg::PressureChanged(pressure));
            }
            unit(ui, "mTorr");
            ui.end_row();

            label(ui, "Growth temperature:");
            fixed(ui, &model.conditions.temperature_c.to_string())
                .on_disabled_hover_text("The calibration assumes this temperature");
            unit(ui, "°C");
            ui.end_row();

            label(ui, "Laser energy:");
            fixed(ui, &model.conditions.laser_energy_mj.to_string())
                .on_disabled_hover_text("The calibration assumes this pulse energy");
            unit(ui, "mJ");
            ui.end_row();
        });

    msgs
}

fn label(ui: &mut egui::Ui, text: &str) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        ui.label(
            egui::RichText::new(text)
                .size(LABEL_SIZE)
                .color(egui::Color32::WHITE),
        );
    });
}

fn unit(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(LABEL_SIZE)
            .color(egui::Color32::WHITE),
    );
}

fn entry(ui: &mut egui::Ui, text: &mut String, hint: &str) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(text)
            .hint_text(hint)
            .font(egui::FontId::proportional(LABEL_SIZE))
            .desired_width(FIELD_WIDTH),
    )
}

/// Read-only entry showing a value the user cannot change.
fn fixed(ui: &mut egui::Ui, value: &str) -> egui::Response {
    let mut text = value.to_string();
    ui.add_enabled(
        false,
        egui::TextEdit::singleline(&mut text)
            .font(egui::FontId::proportional(LABEL_SIZE))
            .desired_width(FIELD_WIDTH),
    )
}
