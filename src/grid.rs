//! Grid interaction state: reveal flags, keyboard focus and drag-to-swap
//!
//! The three pieces of state are independent. Each input handler touches only
//! its own piece, and the matrix and cell types are plain `Copy` values that are
//! rebuilt and reinstalled on every change.

use crate::constants::{GRID_COLS, GRID_ROWS};
use crate::types::Product;
use tracing::debug;

/// A position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major offset into the product list
    pub const fn linear_index(self) -> usize {
        self.row * GRID_COLS + self.col
    }

    /// Every cell in row-major order
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..GRID_ROWS).flat_map(|row| (0..GRID_COLS).map(move |col| Cell { row, col }))
    }

    fn step(self, key: GridKey) -> Self {
        let Self { row, col } = self;
        match key {
            GridKey::ArrowUp => Self::new(row.saturating_sub(1), col),
            GridKey::ArrowDown => Self::new((row + 1).min(GRID_ROWS - 1), col),
            GridKey::ArrowLeft => Self::new(row, col.saturating_sub(1)),
            GridKey::ArrowRight => Self::new(row, (col + 1).min(GRID_COLS - 1)),
            GridKey::Enter | GridKey::Other => self,
        }
    }
}

/// Keys the grid reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Other,
}

impl From<egui::Key> for GridKey {
    fn from(key: egui::Key) -> Self {
        match key {
            egui::Key::ArrowUp => GridKey::ArrowUp,
            egui::Key::ArrowDown => GridKey::ArrowDown,
            egui::Key::ArrowLeft => GridKey::ArrowLeft,
            egui::Key::ArrowRight => GridKey::ArrowRight,
            egui::Key::Enter => GridKey::Enter,
            _ => GridKey::Other,
        }
    }
}

/// Reveal flags, one per cell, independent of how many products exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityMatrix([[bool; GRID_COLS]; GRID_ROWS]);

impl VisibilityMatrix {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, cell: Cell) -> bool {
        self.0[cell.row][cell.col]
    }

    pub fn toggled(self, cell: Cell) -> Self {
        let mut flags = self.0;
        flags[cell.row][cell.col] = !flags[cell.row][cell.col];
        Self(flags)
    }

    pub fn revealed_count(&self) -> usize {
        self.0.iter().flatten().filter(|v| **v).count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GridController {
    visibility: VisibilityMatrix,
    focused: Option<Cell>,
    dragging: Option<Cell>,
}

impl GridController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear everything back to the freshly loaded state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn visibility(&self) -> VisibilityMatrix {
        self.visibility
    }

    pub fn focused(&self) -> Option<Cell> {
        self.focused
    }

    pub fn dragging(&self) -> Option<Cell> {
        self.dragging
    }

    pub fn is_focused(&self, cell: Cell) -> bool {
        self.focused == Some(cell)
    }

    /// Pointer click: focus the cell and flip its reveal flag
    pub fn click(&mut self, cell: Cell) {
        self.focused = Some(cell);
        self.visibility = self.visibility.toggled(cell);
        debug!(row = cell.row, col = cell.col, visible = self.visibility.is_visible(cell), "Cell clicked");
    }

    /// Keyboard input. Ignored until some cell has focus.
    pub fn key(&mut self, key: GridKey) {
        let Some(current) = self.focused else {
            return;
        };
        match key {
            GridKey::Enter => self.visibility = self.visibility.toggled(current),
            GridKey::Other => {}
            _ => self.focused = Some(current.step(key)),
        }
    }

    pub fn drag_start(&mut self, cell: Cell) {
        self.dragging = Some(cell);
    }

    /// Drag released away from every cell
    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    /// Drop onto `target`, swapping the two products in place.
    ///
    /// Without a prior drag start this does nothing. If either position has no
    /// product behind it the list is left alone, but the drag still ends.
    /// Returns whether a swap happened.
    pub fn drop_on(&mut self, target: Cell, products: &mut [Product]) -> bool {
        let Some(source) = self.dragging.take() else {
            return false;
        };
        let (src, dst) = (source.linear_index(), target.linear_index());
        if src >= products.len() || dst >= products.len() {
            debug!(src, dst, len = products.len(), "Drop outside product range ignored");
            return false;
        }
        products.swap(src, dst);
        debug!(src, dst, "Products swapped");
        true
    }

    /// The product a cell shows, if it is revealed and one exists there
    pub fn revealed_product<'a>(&self, cell: Cell, products: &'a [Product]) -> Option<&'a Product> {
        if self.visibility.is_visible(cell) {
            products.get(cell.linear_index())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| Product {
                id: i as u64 + 1,
                title: format!("Product {}", i + 1),
                price: 10.0 + i as f64,
                description: String::new(),
                category: "electronics".into(),
                image: format!("https://example.com/{}.jpg", i + 1),
                rating: Rating { rate: 4.0, count: 10 },
            })
            .collect()
    }

    fn ids(list: &[Product]) -> Vec<u64> {
        list.iter().map(|p| p.id).collect()
    }

    #[test]
    fn linear_index_is_row_major() {
        assert_eq!(Cell::new(0, 0).linear_index(), 0);
        assert_eq!(Cell::new(1, 0).linear_index(), 5);
        assert_eq!(Cell::new(3, 4).linear_index(), 19);
        assert_eq!(Cell::all().count(), GRID_ROWS * GRID_COLS);
        assert!(Cell::all().enumerate().all(|(i, c)| c.linear_index() == i));
    }

    #[test]
    fn double_click_restores_every_cell() {
        let mut grid = GridController::new();
        for cell in Cell::all() {
            let before = grid.visibility();
            grid.click(cell);
            assert!(grid.visibility().is_visible(cell));
            grid.click(cell);
            assert_eq!(grid.visibility(), before);
        }
    }

    #[test]
    fn click_sets_focus_and_touches_only_that_cell() {
        let mut grid = GridController::new();
        grid.click(Cell::new(2, 3));
        assert_eq!(grid.focused(), Some(Cell::new(2, 3)));
        assert_eq!(grid.visibility().revealed_count(), 1);
    }

    #[test]
    fn keys_are_ignored_without_focus() {
        let mut grid = GridController::new();
        grid.key(GridKey::ArrowDown);
        grid.key(GridKey::Enter);
        assert_eq!(grid.focused(), None);
        assert_eq!(grid.visibility(), VisibilityMatrix::hidden());
    }

    #[test]
    fn arrows_clamp_without_wrapping() {
        let mut grid = GridController::new();
        grid.click(Cell::new(0, 0));
        grid.key(GridKey::ArrowUp);
        grid.key(GridKey::ArrowLeft);
        assert_eq!(grid.focused(), Some(Cell::new(0, 0)));

        for _ in 0..10 {
            grid.key(GridKey::ArrowDown);
            grid.key(GridKey::ArrowRight);
        }
        assert_eq!(grid.focused(), Some(Cell::new(3, 4)));

        grid.key(GridKey::ArrowUp);
        grid.key(GridKey::ArrowLeft);
        assert_eq!(grid.focused(), Some(Cell::new(2, 3)));
    }

    #[test]
    fn arbitrary_key_sequences_stay_in_bounds() {
        let keys = [GridKey::ArrowUp, GridKey::ArrowDown, GridKey::ArrowLeft, GridKey::ArrowRight];
        let mut grid = GridController::new();
        grid.click(Cell::new(1, 2));
        // Deterministic pseudo-random walk
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            grid.key(keys[(seed % 4) as usize]);
            let focus = grid.focused().unwrap();
            assert!(focus.row < GRID_ROWS);
            assert!(focus.col < GRID_COLS);
        }
    }

    #[test]
    fn enter_toggles_without_moving_focus() {
        let mut grid = GridController::new();
        grid.click(Cell::new(1, 1));
        grid.key(GridKey::ArrowRight);
        let before = grid.visibility();

        grid.key(GridKey::Enter);
        assert_eq!(grid.focused(), Some(Cell::new(1, 2)));
        assert_eq!(grid.visibility(), before.toggled(Cell::new(1, 2)));

        grid.key(GridKey::Enter);
        assert_eq!(grid.visibility(), before);
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut grid = GridController::new();
        grid.click(Cell::new(1, 1));
        let snapshot = (grid.focused(), grid.visibility());
        grid.key(GridKey::from(egui::Key::Space));
        grid.key(GridKey::from(egui::Key::A));
        assert_eq!((grid.focused(), grid.visibility()), snapshot);
    }

    #[test]
    fn drop_swaps_and_clears_drag() {
        let mut list = products(20);
        let mut grid = GridController::new();
        grid.drag_start(Cell::new(0, 1));
        assert!(grid.drop_on(Cell::new(2, 0), &mut list));
        assert_eq!(list[1].id, 11);
        assert_eq!(list[10].id, 2);
        assert_eq!(grid.dragging(), None);
    }

    #[test]
    fn swap_back_restores_order_and_leaves_other_state() {
        let mut list = products(20);
        let original = ids(&list);
        let mut grid = GridController::new();
        grid.click(Cell::new(3, 3));
        grid.click(Cell::new(0, 0));
        let (focus, visibility) = (grid.focused(), grid.visibility());

        let (a, b) = (Cell::new(0, 4), Cell::new(3, 2));
        grid.drag_start(a);
        grid.drop_on(b, &mut list);
        assert_ne!(ids(&list), original);
        grid.drag_start(b);
        grid.drop_on(a, &mut list);

        assert_eq!(ids(&list), original);
        assert_eq!(grid.focused(), focus);
        assert_eq!(grid.visibility(), visibility);
    }

    #[test]
    fn drop_without_drag_is_noop() {
        let mut list = products(20);
        let original = ids(&list);
        let mut grid = GridController::new();
        assert!(!grid.drop_on(Cell::new(1, 1), &mut list));
        assert_eq!(ids(&list), original);
    }

    #[test]
    fn drop_onto_itself_keeps_order() {
        let mut list = products(20);
        let original = ids(&list);
        let mut grid = GridController::new();
        grid.drag_start(Cell::new(2, 2));
        assert!(grid.drop_on(Cell::new(2, 2), &mut list));
        assert_eq!(ids(&list), original);
    }

    #[test]
    fn drop_past_end_of_short_list_is_noop() {
        let mut list = products(5);
        let original = ids(&list);
        let mut grid = GridController::new();
        grid.drag_start(Cell::new(0, 2));
        assert!(!grid.drop_on(Cell::new(3, 0), &mut list));
        assert_eq!(ids(&list), original);
        assert_eq!(grid.dragging(), None);

        grid.drag_start(Cell::new(1, 0));
        assert!(!grid.drop_on(Cell::new(0, 0), &mut list));
        assert_eq!(ids(&list), original);
    }

    #[test]
    fn cancelled_drag_makes_next_drop_a_noop() {
        let mut list = products(20);
        let original = ids(&list);
        let mut grid = GridController::new();
        grid.drag_start(Cell::new(0, 0));
        grid.cancel_drag();
        assert!(!grid.drop_on(Cell::new(1, 1), &mut list));
        assert_eq!(ids(&list), original);
    }

    #[test]
    fn reveal_and_hide_first_product() {
        let list = products(20);
        let mut grid = GridController::new();
        let origin = Cell::new(0, 0);
        assert!(grid.revealed_product(origin, &list).is_none());
        grid.click(origin);
        assert_eq!(grid.revealed_product(origin, &list).map(|p| p.id), Some(1));
        grid.click(origin);
        assert!(grid.revealed_product(origin, &list).is_none());
    }

    #[test]
    fn short_list_never_renders_missing_products() {
        let list = products(5);
        let mut grid = GridController::new();
        let cell = Cell::new(1, 0);
        grid.click(cell);
        assert!(grid.visibility().is_visible(cell));
        assert!(grid.revealed_product(cell, &list).is_none());
        assert!(grid.revealed_product(Cell::new(0, 4), &list).is_none());
    }

    #[test]
    fn focus_outline_follows_focus_only() {
        let mut grid = GridController::new();
        assert!(Cell::all().all(|c| !grid.is_focused(c)));
        grid.click(Cell::new(2, 2));
        grid.key(GridKey::ArrowDown);
        let focused: Vec<Cell> = Cell::all().filter(|c| grid.is_focused(*c)).collect();
        assert_eq!(focused, vec![Cell::new(3, 2)]);
    }

    #[test]
    fn new_grid_starts_hidden_and_unfocused() {
        let grid = GridController::new();
        assert_eq!(grid.visibility(), VisibilityMatrix::hidden());
        assert_eq!(grid.focused(), None);
        assert_eq!(grid.dragging(), None);
    }

    #[test]
    fn reset_hides_everything() {
        let mut grid = GridController::new();
        grid.click(Cell::new(0, 0));
        grid.drag_start(Cell::new(1, 1));
        grid.reset();
        assert_eq!(grid.visibility(), VisibilityMatrix::hidden());
        assert_eq!(grid.focused(), None);
        assert_eq!(grid.dragging(), None);
    }
}
