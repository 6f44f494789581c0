// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel for the thickness form.

use crate::config::AppSettings;
use crate::logic::controller::{ResultSink, calculate_thickness};
use crate::models::calibration::{AssumedConditions, CalibrationConstants};
use crate::models::measurement::MeasurementInput;

/// Top-level application state.
#[derive(Clone, Debug, PartialEq)]
pub struct AppModel {
    /// Raw text of the shot count and pressure entries.
    pub input: MeasurementInput,
    /// Latest result or error message; empty until the first calculation.
    pub readout: String,
    pub constants: CalibrationConstants,
    pub conditions: AssumedConditions,
}

impl AppModel {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            input: MeasurementInput::new("", settings.default_pressure.clone()),
            readout: String::new(),
            constants: settings.constants,
            conditions: settings.conditions,
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(&AppSettings::default())
    }
}

impl ResultSink for AppModel {
    fn report(&mut self, text: &str) {
        self.readout.report(text);
    }
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    ShotsChanged(String),
    PressureChanged(String),
    /// Calculate button or Enter key.
    CalculateRequested,
}

/// Update the application model.
pub fn update(model: &mut AppModel, msg: Msg) {
    match msg {
        Msg::ShotsChanged(text) => model.input.shots = text,
        Msg::PressureChanged(text) => model.input.pressure = text,
        Msg::CalculateRequested => {
            let input = model.input.clone();
            let constants = model.constants;
            calculate_thickness(&constants, &input, model);
        }
    }
}
