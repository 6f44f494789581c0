// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Raw and validated measurement inputs plus the thickness value they produce.

use std::fmt;

/// Input fields the form collects, in validation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Shots,
    Pressure,
}

impl Field {
    /// Human-readable name used in readout messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Shots => "laser shots",
            Self::Pressure => "O₂ pressure",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text exactly as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeasurementInput {
    pub shots: String,
    pub pressure: String,
}

impl MeasurementInput {
    pub fn new(shots: impl Into<String>, pressure: impl Into<String>) -> Self {
        Self {
            shots: shots.into(),
            pressure: pressure.into(),
        }
    }

    /// Raw text for a given field.
    pub fn raw(&self, field: Field) -> &str {
        match field {
            Field::Shots => &self.shots,
            Field::Pressure => &self.pressure,
        }
    }
}

/// Validated inputs: `shots >= 0` and `pressure > 0`, both finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub shots: f64,
    /// O₂ growth pressure in mTorr.
    pub pressure: f64,
}

/// Predicted film thickness in nanometers.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Thickness(pub f64);

impl Thickness {
    pub fn nanometers(self) -> f64 {
        self.0
    }

    /// Value rounded to two decimal places, half away from zero.
    pub fn rounded(self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

impl fmt::Display for Thickness {
    /// Two-decimal rounding printed in shortest form with the unit suffix:
    /// `0.58 nm`, `2.0 nm`, `0.0 nm`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} nm", self.rounded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thickness_display_rounds_and_appends_unit() {
        assert_eq!(Thickness(0.5845506277068986).to_string(), "0.58 nm");
        assert_eq!(Thickness(1.9951820603016275).to_string(), "2.0 nm");
        assert_eq!(Thickness(2.6497490513150335).to_string(), "2.65 nm");
        assert_eq!(Thickness(0.0).to_string(), "0.0 nm");
    }

    #[test]
    fn rounding_drops_trailing_zeros_only() {
        assert_eq!(Thickness(12.3).to_string(), "12.3 nm");
        assert_eq!(Thickness(12.304).to_string(), "12.3 nm");
        assert_eq!(Thickness(0.004).to_string(), "0.0 nm");
        assert_eq!(Thickness(1.5).rounded(), 1.5);
    }

    #[test]
    fn raw_returns_field_text() {
        let input = MeasurementInput::new("100", "70");
        assert_eq!(input.raw(Field::Shots), "100");
        assert_eq!(input.raw(Field::Pressure), "70");
    }

    #[test]
    fn field_labels_match_readout_wording() {
        assert_eq!(Field::Shots.to_string(), "laser shots");
        assert_eq!(Field::Pressure.to_string(), "O₂ pressure");
    }
}
