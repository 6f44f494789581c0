// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Thickness prediction and the controller that turns form text into a readout.

pub mod controller;
pub mod predictor;
pub mod validate;
