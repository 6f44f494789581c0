// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Window icon loading.

use std::path::Path;

use anyhow::{Context, Result};

/// Decode a PNG into RGBA pixels for the window icon.
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not a decodable image.
///
/// # Examples
///
/// ```rust,ignore
/// use std::path::Path;
/// let icon = load_icon(Path::new("assets/icon.png"))?;
/// assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
/// ```
pub fn load_icon(path: &Path) -> Result<egui::IconData> {
    let image = image::open(path)
        .with_context(|| format!("Failed to load window icon: {:?}", path))?
        .into_rgba8();
    let (width, height) = image.dimensions();
    Ok(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}

/// Like [`load_icon`], but a missing or broken icon is logged and skipped.
pub fn try_load_icon(path: &Path) -> Option<egui::IconData> {
    match load_icon(path) {
        Ok(icon) => {
            tracing::info!(path = %path.display(), "window icon loaded");
            Some(icon)
        }
        Err(err) => {
            tracing::warn!("{err:#}; continuing without a window icon");
            None
        }
    }
}
