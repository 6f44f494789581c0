// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities used at startup.

pub mod icon;

/// Load the optional window icon, logging instead of failing.
pub use icon::try_load_icon;
