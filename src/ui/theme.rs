//! Theme constants for the Gomoku GUI

use egui::Color32;

use crate::persona::Mood;

// Board colors - night sky
pub const BOARD_BG: Color32 = Color32::from_rgb(26, 27, 38);
pub const GRID_LINE: Color32 = Color32::from_rgba_premultiplied(60, 60, 70, 160);
pub const STAR_POINT: Color32 = Color32::from_rgb(150, 150, 170);
pub const COORD_LABEL: Color32 = Color32::from_rgb(120, 125, 140);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(20, 20, 20, 80)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const ACCENT: Color32 = Color32::from_rgb(99, 102, 241);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_LOSS: Color32 = Color32::from_rgb(255, 70, 70);

/// Text color for MiMiu's chat lines
pub fn mood_color(mood: Mood) -> Color32 {
    match mood {
        Mood::Normal => TEXT_PRIMARY,
        Mood::Shy => Color32::from_rgb(255, 170, 200),
        Mood::Tsundere => Color32::from_rgb(255, 140, 120),
        Mood::Gentle => Color32::from_rgb(170, 210, 255),
        Mood::Sad => Color32::from_rgb(150, 150, 180),
    }
}

// Sizes
pub const BOARD_MARGIN: f32 = 32.0;
pub const STONE_RADIUS_RATIO: f32 = 0.42;
pub const STAR_POINT_RADIUS: f32 = 3.5;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

// Star point positions on a 15x15 board (0-indexed)
pub const STAR_POINTS: [(u8, u8); 5] = [(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)];
