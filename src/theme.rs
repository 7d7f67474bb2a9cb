//! Colors, sizes and global style for the product grid window

use egui::Color32;

// =============================================================================
// COLORS - Surfaces
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_GRID: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_TOOLTIP: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1e);

// Hidden cells are solid black, gray on hover
pub const CELL_HIDDEN: Color32 = Color32::BLACK;
pub const CELL_HOVER: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// COLORS - Highlights
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400, drop target
pub const ACCENT_MUTED: Color32 = Color32::from_rgba_premultiplied(0x1F, 0x95, 0x86, 0xB3); // drag source
pub const FOCUS_OUTLINE: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6); // blue-500

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400
pub const STAR_FILLED: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_CELL: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200, grid lines

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;
pub const FONT_CAPTION: f32 = 10.0;

// =============================================================================
// DIMENSIONS - Grid
// =============================================================================
pub const CELL_MIN: (f32, f32) = (80.0, 100.0);
pub const CELL_IMAGE_FRACTION: f32 = 0.7;
pub const GRID_MIN_WIDTH: f32 = 400.0;
pub const GRID_RADIUS: f32 = 8.0;

pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_THICK: f32 = 2.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

/// Dark visuals with the grid's panel color and a soft tooltip shadow.
/// Cells are painted by hand, so widget state styling stays at egui's defaults.
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        panel_fill: BG_BASE,
        window_fill: BG_TOOLTIP,
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
        popup_shadow: egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(80),
        },
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| style.interaction.selectable_labels = false);
}

pub fn grid_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_GRID)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(GRID_RADIUS)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}
