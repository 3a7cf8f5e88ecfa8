//! Shared color constants for the UI.

use egui::Color32;

/// Red color for error/unavailable/failed status.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Secondary text, e.g. the range line under the table.
pub const COLOR_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
