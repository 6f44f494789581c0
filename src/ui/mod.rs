// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the thickness form.
//! Handles layout and the Enter-key shortcut, and feeds view messages into the MVU loop.

pub mod components;

use crate::config::AppSettings;
use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::{BRAND_RED, measurement_form, readout};

/// Stateful egui application wrapping the form model.
pub struct ThicknessApp {
    model: AppModel,
    inbox: Vec<Msg>,
}

impl ThicknessApp {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            model: AppModel::new(settings),
            inbox: Vec::new(),
        }
    }

    /// Apply queued messages in arrival order.
    fn drain_inbox(&mut self) {
        for msg in std::mem::take(&mut self.inbox) {
            mvu::update(&mut self.model, msg);
        }
    }
}

impl Default for ThicknessApp {
    fn default() -> Self {
        Self::new(&AppSettings::default())
    }
}

impl eframe::App for ThicknessApp {
    /// Required by eframe 0.34; all rendering happens in `update`, which eframe still calls.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single frame: applies pending messages, renders the form, and queues
    /// whatever the views emit for the next frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_inbox();

        let panel = egui::Frame::new()
            .fill(BRAND_RED)
            .inner_margin(egui::Margin::symmetric(20, 10));

        egui::CentralPanel::default().frame(panel).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Film Thickness Estimator")
                        .size(24.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
            });
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                let form_msgs = measurement_form::view(ui, &self.model);
                self.inbox.extend(form_msgs);
            });
            ui.add_space(16.0);

            let readout_msgs = readout::view(ui, &self.model);
            self.inbox.extend(readout_msgs);
        });

        // Enter anywhere in the window is an alias for the Calculate button.
        if ctx.input(|inp| inp.key_pressed(egui::Key::Enter))
            && !self.inbox.contains(&Msg::CalculateRequested)
        {
            self.inbox.push(Msg::CalculateRequested);
        }

        if !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }
}

/// Install the form's look on a context: roomier grid rows, a padded button,
/// and the black hover/press fill of the Calculate button.
///
/// Call once at startup; egui keeps the style across frames.
///
/// # Examples
///
/// ```no_run
/// // Inside the eframe creation closure:
/// // crate::ui::apply_form_style(&cc.egui_ctx);
/// ```
pub fn apply_form_style(ctx: &egui::Context) {
    ctx.all_styles_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(14.0, 6.0);
        style.visuals.widgets.hovered.weak_bg_fill = egui::Color32::BLACK;
        style.visuals.widgets.active.weak_bg_fill = egui::Color32::BLACK;
        style.visuals.widgets.active.fg_stroke.color = BRAND_RED;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbox_messages_apply_in_order() {
        let mut app = ThicknessApp::default();
        app.inbox.push(Msg::ShotsChanged("100".into()));
        app.inbox.push(Msg::CalculateRequested);
        app.inbox.push(Msg::ShotsChanged("-1".into()));

        app.drain_inbox();

        assert!(app.inbox.is_empty());
        assert_eq!(app.model.readout, "0.58 nm");
        assert_eq!(app.model.input.shots, "-1");
    }

    #[test]
    fn form_style_applies_spacing_and_black_press_fill() {
        let ctx = egui::Context::default();
        apply_form_style(&ctx);

        let style = ctx.style();
        assert_eq!(style.spacing.item_spacing, egui::vec2(8.0, 8.0));
        assert_eq!(
            style.visuals.widgets.active.weak_bg_fill,
            egui::Color32::BLACK
        );
    }
}
