//! View rendering (loading, error, product grid)

use super::App;
use crate::constants::{GRID_COLS, GRID_ROWS};
use crate::grid::{Cell, GridKey};
use crate::theme;
use crate::types::LoadState;
use crate::ui::components;
use crate::utils::fit_rect;
use eframe::egui;
use tracing::debug;

pub(crate) fn cell_id(cell: Cell) -> egui::Id {
    egui::Id::new(("grid_cell", cell.row, cell.col))
}

impl App {
    /// Whole-window content for the current load state
    pub(crate) fn render_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| match self.load_state.clone() {
                LoadState::Loading => self.render_loading(ui),
                LoadState::Failed(message) => self.render_error(ui, &message),
                LoadState::Loaded => self.render_grid(ui, ctx),
            });
    }

    fn render_loading(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.spinner();
            ui.add_space(theme::SPACING_MD);
            ui.label(
                egui::RichText::new("Loading...")
                    .size(theme::FONT_HEADING)
                    .color(theme::TEXT_MUTED),
            );
        });
    }

    fn render_error(&self, ui: &mut egui::Ui, message: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.label(
                egui::RichText::new(message)
                    .size(theme::FONT_HEADING)
                    .color(theme::STATUS_ERROR),
            );
        });
    }

    fn render_grid(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        // Keys first so this frame already paints the moved focus
        self.handle_grid_keys(ctx);

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .id_salt("grid_scroll")
            .show(ui, |ui| {
                theme::grid_frame().show(ui, |ui| {
                    self.render_cells(ui, ctx);
                });

                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(format!(
                        "{} products  •  {} revealed",
                        self.products.len(),
                        self.grid.visibility().revealed_count()
                    ))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
                );
            });
    }

    fn handle_grid_keys(&mut self, ctx: &egui::Context) {
        if self.grid.focused().is_none() || ctx.wants_keyboard_input() {
            return;
        }
        let keys: Vec<GridKey> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, .. } => Some(GridKey::from(*key)),
                    _ => None,
                })
                .collect()
        });
        for key in keys {
            self.grid.key(key);
        }
    }

    fn render_cells(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let spacing = theme::SPACING_SM;
        let (cols, rows) = (GRID_COLS as f32, GRID_ROWS as f32);
        let available = ui.available_size();
        let width = available.x.max(theme::GRID_MIN_WIDTH);
        let cell_w = ((width - spacing * (cols - 1.0)) / cols)
            .floor()
            .max(theme::CELL_MIN.0);
        let cell_h = ((available.y - spacing * (rows - 1.0)) / rows)
            .floor()
            .max(theme::CELL_MIN.1);
        let grid_size = egui::vec2(
            cell_w * cols + spacing * (cols - 1.0),
            cell_h * rows + spacing * (rows - 1.0),
        );
        let (grid_rect, _) = ui.allocate_exact_size(grid_size, egui::Sense::hover());

        let mut dropped = false;

        for cell in Cell::all() {
            let min = grid_rect.min
                + egui::vec2(
                    cell.col as f32 * (cell_w + spacing),
                    cell.row as f32 * (cell_h + spacing),
                );
            let rect = egui::Rect::from_min_size(min, egui::vec2(cell_w, cell_h));
            // Pointer-only: a focusable cell would turn Space/Enter into clicks
            let response = ui.interact(rect, cell_id(cell), egui::Sense::CLICK | egui::Sense::DRAG);

            if response.drag_started() {
                self.grid.drag_start(cell);
                egui::DragAndDrop::set_payload(ctx, cell);
            }
            if response.dnd_release_payload::<Cell>().is_some() {
                self.grid.drop_on(cell, &mut self.products);
                dropped = true;
            }
            if response.clicked() {
                self.grid.click(cell);
            }

            self.paint_cell(ui, ctx, cell, &response);

            if let Some(product) = self.grid.revealed_product(cell, &self.products).cloned() {
                response.on_hover_ui(|ui| components::product_tooltip(ui, &product));
            }
        }

        if self.grid.dragging().is_some() {
            if !dropped && ui.input(|i| i.pointer.any_released()) {
                debug!("Drag released outside the grid");
                self.grid.cancel_drag();
            } else {
                ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
            }
        }
    }

    fn paint_cell(
        &mut self,
        ui: &egui::Ui,
        ctx: &egui::Context,
        cell: Cell,
        response: &egui::Response,
    ) {
        let rect = response.rect;
        let drop_hover = response.dnd_hover_payload::<Cell>().is_some();
        let is_source = self.grid.dragging() == Some(cell);

        let fill = if response.hovered() || drop_hover {
            theme::CELL_HOVER
        } else {
            theme::CELL_HIDDEN
        };
        ui.painter().rect_filled(rect, 0.0, fill);

        if let Some(product) = self.grid.revealed_product(cell, &self.products).cloned() {
            let painter = ui.painter_at(rect);
            let inner = rect.shrink(theme::SPACING_SM);
            let image_h = inner.height() * theme::CELL_IMAGE_FRACTION;
            let image_area = egui::Rect::from_min_size(inner.min, egui::vec2(inner.width(), image_h));
            let title_top = image_area.bottom() + theme::SPACING_SM;

            match self.product_texture(ctx, product.id) {
                Some(tex) => {
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(tex.id(), fit_rect(tex.size_vec2(), image_area), uv, egui::Color32::WHITE);
                }
                None => {
                    painter.text(
                        image_area.center(),
                        egui::Align2::CENTER_CENTER,
                        egui_phosphor::regular::IMAGE,
                        egui::FontId::proportional(image_h * 0.4),
                        theme::TEXT_DIM,
                    );
                }
            }

            let galley = painter.layout(
                product.title.clone(),
                egui::FontId::proportional(theme::FONT_CAPTION),
                theme::TEXT_PRIMARY,
                inner.width(),
            );
            let title_pos = egui::pos2(inner.center().x - galley.size().x / 2.0, title_top);
            painter.galley(title_pos, galley, theme::TEXT_PRIMARY);
        }

        ui.painter().rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_CELL),
            egui::StrokeKind::Inside,
        );

        if is_source && egui::DragAndDrop::has_any_payload(ctx) {
            ui.painter().rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(theme::STROKE_THICK, theme::ACCENT_MUTED),
                egui::StrokeKind::Inside,
            );
        } else if drop_hover {
            ui.painter().rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(theme::STROKE_THICK, theme::ACCENT),
                egui::StrokeKind::Inside,
            );
        }

        if self.grid.is_focused(cell) {
            ui.painter().rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(theme::STROKE_THICK, theme::FOCUS_OUTLINE),
                egui::StrokeKind::Outside,
            );
        }
    }
}
