// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Validate form input, run the predictor, and report exactly one message.

use crate::logic::validate::{InputError, validate};
use crate::models::calibration::CalibrationConstants;
use crate::models::measurement::{MeasurementInput, Thickness};

/// Output surface for the controller. Each call replaces what was shown before.
pub trait ResultSink {
    fn report(&mut self, text: &str);
}

impl ResultSink for String {
    fn report(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Validate and predict without touching any output.
pub fn compute(
    constants: &CalibrationConstants,
    input: &MeasurementInput,
) -> Result<Thickness, InputError> {
    let measurement = validate(input)?;
    Ok(constants.thickness(measurement)?)
}

/// Handle one Calculate action: write the thickness or the input error to `sink`.
///
/// The sink receives exactly one `report` per call, so a `String` readout is
/// overwritten rather than appended to.
///
/// # Examples
///
/// ```ignore
/// use crate::models::calibration::CalibrationConstants;
/// use crate::models::measurement::MeasurementInput;
///
/// let mut readout = String::new();
/// calculate_thickness(
///     &CalibrationConstants::HFO2,
///     &MeasurementInput::new("100", "70"),
///     &mut readout,
/// );
/// assert_eq!(readout, "0.58 nm");
///
/// calculate_thickness(
///     &CalibrationConstants::HFO2,
///     &MeasurementInput::new("abc", "70"),
///     &mut readout,
/// );
/// assert_eq!(readout, "invalid laser shots");
/// ```
pub fn calculate_thickness(
    constants: &CalibrationConstants,
    input: &MeasurementInput,
    sink: &mut impl ResultSink,
) {
    let text = match compute(constants, input) {
        Ok(thickness) => {
            tracing::debug!(
                shots = %input.shots,
                pressure = %input.pressure,
                nm = thickness.nanometers(),
                "thickness computed"
            );
            thickness.to_string()
        }
        Err(err) => {
            tracing::debug!(
                shots = %input.shots,
                pressure = %input.pressure,
                field = %err.field(),
                "rejected input: {err}"
            );
            err.to_string()
        }
    };
    sink.report(&text);
}
