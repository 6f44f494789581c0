// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Closed-form thickness model for pulsed-laser deposited doped:HfO₂ films.
//!
//! With `a = αp` and `b = a / (βp + γ)` the predicted thickness is
//! `d = (b / a) · sqrt(n (n + 2a))`. Inputs are the shot count `n` and the
//! O₂ growth pressure `p` in mTorr; the result is in nanometers.

use thiserror::Error;

use crate::models::calibration::CalibrationConstants;
use crate::models::measurement::{Field, Measurement, Thickness};

/// Reasons the checked predictor refuses to evaluate the model.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PredictError {
    #[error("growth pressure must be greater than zero (got {0})")]
    NonPositivePressure(f64),
    #[error("shot count must not be negative (got {0})")]
    NegativeShots(f64),
    #[error("{0} must be a finite number")]
    NonFinite(Field),
    #[error("{0} is too large for the model")]
    Overflow(Field),
}

impl PredictError {
    /// Input the error concerns.
    pub fn field(&self) -> Field {
        match *self {
            Self::NonPositivePressure(_) => Field::Pressure,
            Self::NegativeShots(_) => Field::Shots,
            Self::NonFinite(field) | Self::Overflow(field) => field,
        }
    }
}

impl CalibrationConstants {
    /// Evaluate the model as fitted.
    ///
    /// Only meaningful for `p != 0`: at `p = 0` the `b / a` factor is `0 / 0`
    /// and the result is NaN. Huge inputs overflow to NaN or infinity as well.
    /// Callers enforce `p > 0`; use [`Self::try_predict`] when the inputs have
    /// not been validated.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use crate::models::calibration::CalibrationConstants;
    ///
    /// let d = CalibrationConstants::HFO2.predict(100.0, 70.0);
    /// assert!((d - 0.5846).abs() < 1e-4);
    /// ```
    pub fn predict(&self, n: f64, p: f64) -> f64 {
        let a = self.alpha * p;
        let b = a / (self.beta * p + self.gamma);
        (b / a) * (n * (n + 2.0 * a)).sqrt()
    }

    /// Range-checked prediction for unvalidated inputs.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError`] when either input is non-finite, `n < 0`, `p <= 0`,
    /// or the evaluation overflows. An overflow is charged to pressure when `2αp`
    /// itself overflows or dominates `n`, otherwise to the shot count.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use crate::models::calibration::CalibrationConstants;
    ///
    /// let c = CalibrationConstants::HFO2;
    /// assert_eq!(c.try_predict(1000.0, 70.0)?.to_string(), "2.0 nm");
    /// assert!(c.try_predict(100.0, 0.0).is_err());
    /// ```
    pub fn try_predict(&self, n: f64, p: f64) -> Result<Thickness, PredictError> {
        if !n.is_finite() {
            return Err(PredictError::NonFinite(Field::Shots));
        }
        if !p.is_finite() {
            return Err(PredictError::NonFinite(Field::Pressure));
        }
        if n < 0.0 {
            return Err(PredictError::NegativeShots(n));
        }
        if p <= 0.0 {
            return Err(PredictError::NonPositivePressure(p));
        }

        let d = self.predict(n, p);
        if d.is_finite() {
            return Ok(Thickness(d));
        }
        let two_a = 2.0 * self.alpha * p;
        let field = if !two_a.is_finite() || two_a > n {
            Field::Pressure
        } else {
            Field::Shots
        };
        Err(PredictError::Overflow(field))
    }

    /// Checked prediction for a [`Measurement`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::try_predict`]; never fails for output of the validator.
    pub fn thickness(&self, measurement: Measurement) -> Result<Thickness, PredictError> {
        self.try_predict(measurement.shots, measurement.pressure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn predict(n: f64, p: f64) -> f64 {
        CalibrationConstants::HFO2.predict(n, p)
    }

    #[test]
    fn reference_point_matches_hand_computation() {
        // a = 2677.5, βp + γ = 1263.5, sqrt(100 * 5455) / 1263.5
        let expected = (100.0_f64 * (100.0 + 2.0 * 2677.5)).sqrt() / 1263.5;
        let d = predict(100.0, 70.0);
        assert!((d - expected).abs() < 1e-12);
        assert!((d - 0.584_550_627_706_898_6).abs() < 1e-12);
        assert_eq!(Thickness(d).to_string(), "0.58 nm");
    }

    #[test]
    fn other_reference_points() {
        assert!((predict(1000.0, 70.0) - 1.995_182_060_301_627_5).abs() < 1e-12);
        assert!((predict(2500.0, 150.0) - 2.649_749_051_315_033_5).abs() < 1e-12);
    }

    #[test]
    fn zero_shots_gives_zero_thickness() {
        assert_eq!(predict(0.0, 70.0), 0.0);
        assert_eq!(predict(0.0, 0.001), 0.0);
    }

    #[test]
    fn zero_pressure_is_nan_in_raw_model() {
        assert!(predict(100.0, 0.0).is_nan());
    }

    #[test]
    fn try_predict_rejects_out_of_domain_inputs() {
        let c = CalibrationConstants::HFO2;
        assert_eq!(
            c.try_predict(100.0, 0.0),
            Err(PredictError::NonPositivePressure(0.0))
        );
        assert_eq!(
            c.try_predict(100.0, -3.0),
            Err(PredictError::NonPositivePressure(-3.0))
        );
        assert_eq!(
            c.try_predict(-1.0, 70.0),
            Err(PredictError::NegativeShots(-1.0))
        );
        assert_eq!(
            c.try_predict(f64::NAN, 70.0),
            Err(PredictError::NonFinite(Field::Shots))
        );
        assert_eq!(
            c.try_predict(100.0, f64::INFINITY),
            Err(PredictError::NonFinite(Field::Pressure))
        );
    }

    #[test]
    fn try_predict_reports_overflowing_field() {
        let c = CalibrationConstants::HFO2;
        assert_eq!(
            c.try_predict(100.0, 1e308),
            Err(PredictError::Overflow(Field::Pressure))
        );
        assert_eq!(
            c.try_predict(100.0, 1e306),
            Err(PredictError::Overflow(Field::Pressure))
        );
        assert_eq!(
            c.try_predict(1e200, 70.0),
            Err(PredictError::Overflow(Field::Shots))
        );
        assert_eq!(
            PredictError::Overflow(Field::Shots).to_string(),
            "laser shots is too large for the model"
        );
    }

    #[test]
    fn try_predict_agrees_with_raw_model_in_domain() {
        let c = CalibrationConstants::HFO2;
        let checked = c.try_predict(500.0, 10.0).expect("valid inputs");
        assert_eq!(checked.nanometers(), c.predict(500.0, 10.0));
    }

    #[test]
    fn thickness_uses_measurement_fields() {
        let c = CalibrationConstants::HFO2;
        let m = Measurement {
            shots: 100.0,
            pressure: 70.0,
        };
        assert_eq!(c.thickness(m), Ok(Thickness(c.predict(100.0, 70.0))));
    }

    #[test]
    fn errors_name_their_field() {
        assert_eq!(PredictError::NegativeShots(-1.0).field(), Field::Shots);
        assert_eq!(
            PredictError::NonPositivePressure(0.0).field(),
            Field::Pressure
        );
        assert_eq!(
            PredictError::NonFinite(Field::Pressure).to_string(),
            "O₂ pressure must be a finite number"
        );
    }

    proptest! {
        #[test]
        fn prediction_is_non_negative(n in 0.0f64..1.0e7, p in 1.0e-3f64..1.0e4) {
            prop_assert!(predict(n, p) >= 0.0);
        }

        #[test]
        fn prediction_is_non_decreasing_in_shots(
            n in 0.0f64..1.0e6,
            dn in 0.0f64..1.0e5,
            p in 1.0e-3f64..1.0e4,
        ) {
            prop_assert!(predict(n + dn, p) >= predict(n, p));
        }

        #[test]
        fn checked_prediction_is_finite_and_non_negative_or_overflow(
            n in 0.0f64..f64::MAX,
            p in f64::MIN_POSITIVE..f64::MAX,
        ) {
            match CalibrationConstants::HFO2.try_predict(n, p) {
                Ok(d) => prop_assert!(d.nanometers().is_finite() && d.nanometers() >= 0.0),
                Err(err) => prop_assert!(matches!(err, PredictError::Overflow(_))),
            }
        }

        #[test]
        fn prediction_is_deterministic(n in 0.0f64..1.0e6, p in 1.0e-3f64..1.0e4) {
            prop_assert_eq!(predict(n, p).to_bits(), predict(n, p).to_bits());
        }
    }
}
