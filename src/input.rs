//! Shared input handling: event types, click targets and pixel-to-cell
//! conversion.
//!
//! Nothing here knows about a particular game. Games register targets with
//! semantic action IDs while rendering and receive them back as
//! [`InputEvent::Click`].

use ratzilla::ratatui::layout::Rect;

/// Input normalized from keyboard, mouse and touch sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A printable key.
    Key(char),
    /// A click/tap on a registered target, identified by its action ID.
    Click(u16),
    Enter,
    Backspace,
    Escape,
}

/// A region on screen that triggers an action when tapped.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// Hit region in terminal cells.
    pub rect: Rect,
    pub action_id: u16,
}

/// Shared between the render loop (which registers targets every frame) and
/// the mouse handler (which hit-tests them).
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    /// Start a new frame at the given terminal size.
    pub fn begin_frame(&mut self, cols: u16, rows: u16) {
        self.terminal_cols = cols;
        self.terminal_rows = rows;
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Full-width target on one row of `area`. Rows outside the area are ignored.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Targets for a row of horizontal labels.
    ///
    /// `tab_widths` holds `(display_width, action_id)` per padded label and
    /// `separator_width` the width of the string between them. Each target
    /// covers its label plus half of each neighbouring separator; the first
    /// and last reach the edges of the area so there are no dead gaps.
    pub fn register_tab_targets(
        &mut self,
        tab_widths: &[(u16, u16)],
        separator_width: u16,
        x: u16,
        y: u16,
        total_width: u16,
        height: u16,
    ) {
        let n = tab_widths.len();
        if n == 0 || total_width == 0 {
            return;
        }

        let mut starts: Vec<u16> = Vec::with_capacity(n);
        let mut cursor: u16 = 0;
        for (i, &(w, _)) in tab_widths.iter().enumerate() {
            if i > 0 {
                cursor += separator_width;
            }
            starts.push(cursor);
            cursor += w;
        }

        for (i, &(width, action_id)) in tab_widths.iter().enumerate() {
            let left = if i == 0 {
                0
            } else {
                let prev_end = starts[i - 1] + tab_widths[i - 1].0;
                prev_end + (starts[i] - prev_end) / 2
            };
            let right = if i == n - 1 {
                total_width
            } else {
                let end = starts[i] + width;
                end + (starts[i + 1] - end) / 2
            };

            let w = right.saturating_sub(left);
            if w > 0 {
                self.add_click_target(Rect::new(x + left, y, w, height), action_id);
            }
        }
    }

    /// Action ID under a terminal cell. Later targets sit on top, so the
    /// most recently registered match wins.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            let inside = col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height;
            inside.then_some(t.action_id)
        })
    }

    /// Hit-test a pixel position relative to the grid container's top-left
    /// corner, given the container's pixel size.
    pub fn hit_test_pixel(&self, x: f64, y: f64, grid_width: f64, grid_height: f64) -> Option<u16> {
        let col = pixel_x_to_col(x, grid_width, self.terminal_cols)?;
        let row = pixel_y_to_row(y, grid_height, self.terminal_rows)?;
        self.hit_test(col, row)
    }
}

/// Below this many columns the layout drops side borders.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Row under a pixel Y offset, or `None` outside the grid.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    pixel_to_cell(click_y, grid_height, terminal_rows)
}

/// Column under a pixel X offset, or `None` outside the grid.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    pixel_to_cell(click_x, grid_width, terminal_cols)
}

fn pixel_to_cell(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let cell = (offset / (extent / cells as f64)) as u16;
    (cell < cells).then_some(cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hit_test ────────────────────────────────────────────

    #[test]
    fn hit_test_rows() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), 1);
        cs.add_click_target(Rect::new(0, 11, 80, 1), 2);

        assert_eq!(cs.hit_test(5, 10), Some(1));
        assert_eq!(cs.hit_test(5, 11), Some(2));
        assert_eq!(cs.hit_test(5, 9), None);
        assert_eq!(cs.hit_test(5, 12), None);
    }

    #[test]
    fn hit_test_columns() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(10, 0, 5, 3), 7);
        assert_eq!(cs.hit_test(9, 1), None);
        assert_eq!(cs.hit_test(10, 1), Some(7));
        assert_eq!(cs.hit_test(14, 2), Some(7));
        assert_eq!(cs.hit_test(15, 1), None);
    }

    #[test]
    fn popup_targets_cover_scene_targets() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 5, 80, 1), 10); // scene row
        cs.add_click_target(Rect::new(20, 4, 40, 3), 101); // message popup
        assert_eq!(cs.hit_test(30, 5), Some(101));
        assert_eq!(cs.hit_test(5, 5), Some(10));
    }

    #[test]
    fn row_target_outside_area_ignored() {
        let mut cs = ClickState::new();
        let area = Rect::new(0, 5, 80, 3);
        cs.add_row_target(area, 4, 1);
        cs.add_row_target(area, 8, 2);
        cs.add_row_target(area, 6, 3);
        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(0, 6), Some(3));
    }

    #[test]
    fn begin_frame_resets_targets() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 0, 10, 1), 1);
        cs.begin_frame(40, 20);
        assert!(cs.targets.is_empty());
        assert_eq!((cs.terminal_cols, cs.terminal_rows), (40, 20));
    }

    #[test]
    fn narrow_layout_threshold() {
        assert!(is_narrow_layout(37));
        assert!(is_narrow_layout(59));
        assert!(!is_narrow_layout(60));
    }

    // ── Pixel conversion ────────────────────────────────────

    #[test]
    fn pixel_to_row_boundaries() {
        assert_eq!(pixel_y_to_row(0.0, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(14.9, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(15.0, 450.0, 30), Some(1));
        assert_eq!(pixel_y_to_row(449.0, 450.0, 30), Some(29));
        assert_eq!(pixel_y_to_row(450.0, 450.0, 30), None);
    }

    #[test]
    fn pixel_conversion_rejects_bad_input() {
        assert_eq!(pixel_y_to_row(-1.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 0.0, 30), None);
        assert_eq!(pixel_x_to_col(10.0, 800.0, 0), None);
    }

    #[test]
    fn pixel_to_col_fractional_cells() {
        assert_eq!(pixel_x_to_col(16.0, 400.0, 24), Some(0));
        assert_eq!(pixel_x_to_col(17.0, 400.0, 24), Some(1));
        assert_eq!(pixel_x_to_col(399.0, 400.0, 24), Some(23));
    }

    #[test]
    fn pixel_hit_test_pipeline() {
        let mut cs = ClickState::new();
        cs.begin_frame(40, 30);
        cs.add_click_target(Rect::new(0, 11, 40, 1), 12);
        cs.add_click_target(Rect::new(20, 28, 20, 1), 31);

        // 10px x 15px cells.
        assert_eq!(cs.hit_test_pixel(5.0, 11.0 * 15.0 + 7.0, 400.0, 450.0), Some(12));
        assert_eq!(cs.hit_test_pixel(250.0, 28.0 * 15.0 + 1.0, 400.0, 450.0), Some(31));
        assert_eq!(cs.hit_test_pixel(150.0, 28.0 * 15.0 + 1.0, 400.0, 450.0), None);
        assert_eq!(cs.hit_test_pixel(-3.0, 11.0 * 15.0, 400.0, 450.0), None);
    }

    #[test]
    fn tap_at_cell_centre_lands_on_that_row() {
        let rows: u16 = 50;
        let grid_height = rows as f64 * 15.0;
        for row in 0..rows {
            let y = row as f64 * 15.0 + 7.5;
            assert_eq!(pixel_y_to_row(y, grid_height, rows), Some(row));
        }
    }

    // ── register_tab_targets ────────────────────────────────

    #[test]
    fn tab_targets_split_separators() {
        // Labels 6 wide, separator 3 wide: [6][3][6][3][6].
        let mut cs = ClickState::new();
        cs.register_tab_targets(&[(6, 70), (6, 71), (6, 72)], 3, 0, 5, 80, 1);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(0, 5), Some(70));
        assert_eq!(cs.hit_test(6, 5), Some(70));
        assert_eq!(cs.hit_test(7, 5), Some(71));
        assert_eq!(cs.hit_test(15, 5), Some(71));
        assert_eq!(cs.hit_test(16, 5), Some(72));
        assert_eq!(cs.hit_test(79, 5), Some(72));
    }

    #[test]
    fn tab_targets_unequal_widths() {
        let mut cs = ClickState::new();
        cs.register_tab_targets(&[(6, 10), (11, 11), (12, 12)], 1, 0, 0, 60, 1);
        assert_eq!(cs.hit_test(5, 0), Some(10));
        assert_eq!(cs.hit_test(6, 0), Some(11));
        assert_eq!(cs.hit_test(17, 0), Some(11));
        assert_eq!(cs.hit_test(18, 0), Some(12));
        assert_eq!(cs.hit_test(59, 0), Some(12));
    }

    #[test]
    fn tab_targets_offset_and_height() {
        let mut cs = ClickState::new();
        cs.register_tab_targets(&[(3, 248), (3, 249)], 1, 5, 3, 30, 2);
        assert_eq!(cs.hit_test(5, 4), Some(248));
        assert_eq!(cs.hit_test(4, 3), None);
        assert_eq!(cs.hit_test(34, 3), Some(249));
    }

    #[test]
    fn tab_targets_empty() {
        let mut cs = ClickState::new();
        cs.register_tab_targets(&[], 3, 0, 0, 80, 1);
        assert!(cs.targets.is_empty());
    }
}
