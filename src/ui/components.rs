//! Product detail helpers: star rating text, price formatting and the
//! hover card shown over revealed cells

use crate::theme;
use crate::types::Product;
use eframe::egui;

/// Render a five-star rating display, rounded to the nearest whole star
pub fn render_stars(rate: f64) -> String {
    let filled = rate.round().clamp(0.0, 5.0) as usize;
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

/// Format a price in dollars with two decimals
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Cut text to at most `max_chars` characters, ending with an ellipsis when shortened
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// Hover card for a revealed product
pub fn product_tooltip(ui: &mut egui::Ui, product: &Product) {
    ui.set_max_width(260.0);
    ui.label(
        egui::RichText::new(&product.title)
            .size(theme::FONT_LABEL)
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(theme::SPACING_SM);
    ui.label(
        egui::RichText::new(format!("{}  {}", egui_phosphor::regular::TAG, product.category))
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_MUTED),
    );
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format_price(product.price))
                .size(theme::FONT_BODY)
                .color(theme::ACCENT),
        );
        ui.label(
            egui::RichText::new(render_stars(product.rating.rate))
                .size(theme::FONT_SMALL)
                .color(theme::STAR_FILLED),
        );
        ui.label(
            egui::RichText::new(format!("({})", product.rating.count))
                .size(theme::FONT_CAPTION)
                .color(theme::TEXT_DIM),
        );
    });
    if !product.description.is_empty() {
        ui.add_space(theme::SPACING_SM);
        ui.label(
            egui::RichText::new(truncate_chars(&product.description, 160))
                .size(theme::FONT_CAPTION)
                .color(theme::TEXT_MUTED),
        );
    }
}
