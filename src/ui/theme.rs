//! Theme constants for the Towers GUI

use egui::Color32;

use crate::Color;

// Board colors - muted slate squares
pub const BOARD_BG: Color32 = Color32::from_rgb(46, 52, 64);
pub const SQUARE_LIGHT: Color32 = Color32::from_rgb(216, 222, 233);
pub const SQUARE_DARK: Color32 = Color32::from_rgb(180, 190, 206);
pub const COORD_TEXT: Color32 = Color32::from_rgb(200, 205, 215);

// Block colors
pub const RED_BLOCK: Color32 = Color32::from_rgb(200, 55, 60);
pub const RED_BLOCK_EDGE: Color32 = Color32::from_rgb(120, 25, 30);
pub const BLUE_BLOCK: Color32 = Color32::from_rgb(50, 100, 200);
pub const BLUE_BLOCK_EDGE: Color32 = Color32::from_rgb(20, 45, 120);
pub const HEIGHT_TEXT: Color32 = Color32::from_rgb(250, 250, 252);

// Markers
pub const SELECTED: Color32 = Color32::from_rgb(250, 200, 40);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 140, 0);
pub const CAPTURE_TARGET: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn legal_target() -> Color32 {
    Color32::from_rgba_unmultiplied(60, 200, 90, 140)
}

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

pub fn block_fill(color: Color) -> Color32 {
    match color {
        Color::Red => RED_BLOCK,
        Color::Blue => BLUE_BLOCK,
    }
}

pub fn block_edge(color: Color) -> Color32 {
    match color {
        Color::Red => RED_BLOCK_EDGE,
        Color::Blue => BLUE_BLOCK_EDGE,
    }
}

// Panel text colors
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const BLOCK_INSET_RATIO: f32 = 0.14;
/// Vertical offset between drawn layers of a stack, as a share of a cell
pub const LAYER_OFFSET_RATIO: f32 = 0.035;
pub const MAX_DRAWN_LAYERS: usize = 6;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
