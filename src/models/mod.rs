// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types shared between the form and the thickness logic.

pub mod calibration;
pub mod measurement;
