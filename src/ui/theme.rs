//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors - dark modern theme
pub const BOARD_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const CELL_BG: Color32 = Color32::from_rgb(45, 48, 53);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(235, 110, 100);
pub const O_MARK: Color32 = Color32::from_rgb(100, 170, 235);

// Markers
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(120, 220, 120);

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Game-over banner
pub const BANNER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const BUTTON_BG: Color32 = Color32::from_rgb(60, 100, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const CELL_GAP: f32 = 10.0;
pub const CELL_CORNER_RADIUS: u8 = 6;
pub const MARK_INSET_RATIO: f32 = 0.24;
pub const MARK_STROKE_RATIO: f32 = 0.09;
pub const WIN_LINE_WIDTH: f32 = 6.0;

// Functions for colors that can't be const
pub fn mark_preview(mark: Color32) -> Color32 {
    mark.gamma_multiply(0.35)
}
