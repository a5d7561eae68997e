use eframe::egui::{self, Color32};
use roster::RoleTone;

pub const APP_BG: Color32 = Color32::from_rgb(2, 6, 23);
pub const PANEL_BG: Color32 = Color32::from_rgb(30, 41, 59);
pub const SIDEBAR_BG: Color32 = Color32::from_rgb(15, 23, 42);
pub const ROW_HOVER: Color32 = Color32::from_rgb(55, 65, 81);
pub const TEXT: Color32 = Color32::from_rgb(241, 245, 249);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(156, 163, 175);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(74, 222, 128);
pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);

/// Background and foreground for a role badge.
pub fn role_colors(tone: RoleTone) -> (Color32, Color32) {
    match tone {
        RoleTone::Blue => (
            Color32::from_rgb(219, 234, 254),
            Color32::from_rgb(29, 78, 216),
        ),
        RoleTone::Green => (
            Color32::from_rgb(220, 252, 231),
            Color32::from_rgb(21, 128, 61),
        ),
        RoleTone::Purple => (
            Color32::from_rgb(243, 232, 255),
            Color32::from_rgb(126, 34, 206),
        ),
        RoleTone::Red => (
            Color32::from_rgb(254, 226, 226),
            Color32::from_rgb(185, 28, 28),
        ),
        RoleTone::Neutral => (
            Color32::from_rgb(243, 244, 246),
            Color32::from_rgb(31, 41, 55),
        ),
    }
}

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = APP_BG;
    visuals.window_fill = PANEL_BG;
    visuals.override_text_color = Some(TEXT);
    visuals.widgets.hovered.weak_bg_fill = ROW_HOVER;
    visuals
}
