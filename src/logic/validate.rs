// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Classification of raw form text into a validated [`Measurement`].

use thiserror::Error;

use crate::logic::predictor::PredictError;
use crate::models::measurement::{Field, Measurement, MeasurementInput};

/// Why a field was rejected. `Display` is the text shown in the readout.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("missing {0}")]
    Missing(Field),
    #[error("invalid {0}")]
    InvalidFormat(Field),
    #[error("invalid {0}")]
    OutOfRange(Field),
}

impl InputError {
    /// Field the error concerns.
    pub fn field(&self) -> Field {
        match *self {
            Self::Missing(field) | Self::InvalidFormat(field) | Self::OutOfRange(field) => field,
        }
    }
}

impl From<PredictError> for InputError {
    fn from(err: PredictError) -> Self {
        Self::OutOfRange(err.field())
    }
}

/// Validate shots first, then pressure. The first failure wins, so pressure
/// text is never parsed when the shot count is rejected.
///
/// # Examples
///
/// ```ignore
/// use crate::models::measurement::{Field, MeasurementInput};
///
/// let err = validate(&MeasurementInput::new("", "")).unwrap_err();
/// assert_eq!(err, InputError::Missing(Field::Shots));
/// ```
pub fn validate(input: &MeasurementInput) -> Result<Measurement, InputError> {
    let shots = parse_field(input, Field::Shots)?;
    let pressure = parse_field(input, Field::Pressure)?;
    Ok(Measurement { shots, pressure })
}

/// Parse one field and apply its range rule.
///
/// Only an empty string counts as missing; whitespace-only text is invalid.
pub fn parse_field(input: &MeasurementInput, field: Field) -> Result<f64, InputError> {
    let raw = input.raw(field);
    if raw.is_empty() {
        return Err(InputError::Missing(field));
    }

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidFormat(field))?;

    if in_range(field, value) {
        // -0 becomes +0
        Ok(value + 0.0)
    } else {
        Err(InputError::OutOfRange(field))
    }
}

fn in_range(field: Field, value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    match field {
        Field::Shots => value >= 0.0,
        Field::Pressure => value > 0.0,
    }
}
