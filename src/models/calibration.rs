// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Fixed regression coefficients and the deposition conditions they were fit under.

/// Coefficients of the hyperbolic thickness model `d = sqrt(n(n + 2αp)) / (βp + γ)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalibrationConstants {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl CalibrationConstants {
    /// Fit for doped:HfO₂ grown at 890 °C with 195 mJ pulses.
    pub const HFO2: Self = Self {
        alpha: 38.25,
        beta: 12.09,
        gamma: 417.2,
    };
}

impl Default for CalibrationConstants {
    fn default() -> Self {
        Self::HFO2
    }
}

/// Conditions assumed by the fit. Displayed in the form, never fed to the model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AssumedConditions {
    /// Growth temperature in °C.
    pub temperature_c: u32,
    /// Laser pulse energy in mJ.
    pub laser_energy_mj: u32,
    /// Half-width of the fit's 95% confidence interval, in nm.
    pub ci95_nm: f64,
}

impl AssumedConditions {
    pub const HFO2: Self = Self {
        temperature_c: 890,
        laser_energy_mj: 195,
        ci95_nm: 1.11,
    };

    /// Footnote shown under the readout, e.g. `95% CI: ± 1.11 nm`.
    pub fn ci_footnote(&self) -> String {
        format!("95% CI: ± {:.2} nm", self.ci95_nm)
    }
}

impl Default for AssumedConditions {
    fn default() -> Self {
        Self::HFO2
    }
}
