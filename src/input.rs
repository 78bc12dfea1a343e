//! Input plumbing: normalized events, click targets, and pixel→cell conversion.
//!
//! The render pass registers a [`ClickTarget`] for every interactive region it
//! draws; the mouse handler converts the browser's pixel coordinates to a
//! terminal cell and hit-tests against those targets. Keyboard and mouse both
//! end up dispatching the same semantic action IDs (see `game::actions`).

use ratzilla::ratatui::layout::Rect;

/// A normalized input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key press.
    Key(char),
    /// A semantic action, either from a click target hit or a key binding.
    Action(u16),
}

/// A rectangular screen region (in terminal cells) bound to an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
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

    /// Drop all targets. Called at the start of every frame; also used by the
    /// dialog overlay to make itself the only clickable surface.
    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a single full-width row inside `area` as a target.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.add_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Find the action under a terminal cell. Later-registered targets are
    /// treated as topmost, matching the render order of overlays.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Convert a pixel coordinate within the grid container to a terminal cell.
///
/// `px`/`py` are relative to the container's top-left corner; `width`/`height`
/// are its pixel dimensions. Returns `None` when the point falls outside the
/// grid or the terminal has no size yet.
pub fn pixel_to_cell(
    px: f64,
    py: f64,
    width: f64,
    height: f64,
    cols: u16,
    rows: u16,
) -> Option<(u16, u16)> {
    if width <= 0.0 || height <= 0.0 || cols == 0 || rows == 0 || px < 0.0 || py < 0.0 {
        return None;
    }
    let col = (px / (width / cols as f64)) as u16;
    let row = (py / (height / rows as f64)) as u16;
    if col >= cols || row >= rows {
        return None;
    }
    Some((col, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_basic() {
        let mut cs = ClickState::new();
        cs.add_target(Rect::new(0, 10, 80, 1), 1);
        cs.add_target(Rect::new(0, 11, 80, 1), 2);

        assert_eq!(cs.hit_test(5, 10), Some(1));
        assert_eq!(cs.hit_test(5, 11), Some(2));
        assert_eq!(cs.hit_test(5, 12), None);
    }

    #[test]
    fn hit_test_respects_columns() {
        let mut cs = ClickState::new();
        cs.add_target(Rect::new(0, 5, 10, 1), 1);
        cs.add_target(Rect::new(10, 5, 10, 1), 2);

        assert_eq!(cs.hit_test(9, 5), Some(1));
        assert_eq!(cs.hit_test(10, 5), Some(2));
        assert_eq!(cs.hit_test(20, 5), None);
    }

    #[test]
    fn hit_test_multi_row_rect() {
        let mut cs = ClickState::new();
        cs.add_target(Rect::new(2, 5, 20, 3), 42);

        assert_eq!(cs.hit_test(2, 4), None);
        assert_eq!(cs.hit_test(2, 5), Some(42));
        assert_eq!(cs.hit_test(21, 7), Some(42));
        assert_eq!(cs.hit_test(2, 8), None);
    }

    #[test]
    fn hit_test_overlap_topmost_wins() {
        let mut cs = ClickState::new();
        cs.add_target(Rect::new(0, 5, 80, 1), 1);
        // Registered later → rendered on top
        cs.add_target(Rect::new(5, 5, 10, 1), 2);

        assert_eq!(cs.hit_test(7, 5), Some(2));
        assert_eq!(cs.hit_test(0, 5), Some(1));
    }

    #[test]
    fn hit_test_empty() {
        let cs = ClickState::new();
        assert_eq!(cs.hit_test(0, 0), None);
    }

    #[test]
    fn add_row_target_outside_area_ignored() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 9, 1);
        cs.add_row_target(area, 15, 2);
        assert_eq!(cs.targets.len(), 0);

        cs.add_row_target(area, 12, 3);
        assert_eq!(cs.hit_test(10, 12), Some(3));
    }

    #[test]
    fn clear_targets_resets() {
        let mut cs = ClickState::new();
        cs.add_target(Rect::new(0, 0, 10, 1), 1);
        cs.clear_targets();
        assert_eq!(cs.hit_test(0, 0), None);
    }

    #[test]
    fn pixel_to_cell_basic() {
        // 800x450px grid, 80x30 cells → 10x15px per cell
        assert_eq!(pixel_to_cell(0.0, 0.0, 800.0, 450.0, 80, 30), Some((0, 0)));
        assert_eq!(pixel_to_cell(9.0, 14.0, 800.0, 450.0, 80, 30), Some((0, 0)));
        assert_eq!(pixel_to_cell(10.0, 15.0, 800.0, 450.0, 80, 30), Some((1, 1)));
        assert_eq!(
            pixel_to_cell(799.0, 449.0, 800.0, 450.0, 80, 30),
            Some((79, 29))
        );
    }

    #[test]
    fn pixel_to_cell_out_of_bounds() {
        assert_eq!(pixel_to_cell(800.0, 10.0, 800.0, 450.0, 80, 30), None);
        assert_eq!(pixel_to_cell(10.0, 450.0, 800.0, 450.0, 80, 30), None);
        assert_eq!(pixel_to_cell(-1.0, 10.0, 800.0, 450.0, 80, 30), None);
        assert_eq!(pixel_to_cell(10.0, -1.0, 800.0, 450.0, 80, 30), None);
    }

    #[test]
    fn pixel_to_cell_degenerate_inputs() {
        assert_eq!(pixel_to_cell(10.0, 10.0, 0.0, 450.0, 80, 30), None);
        assert_eq!(pixel_to_cell(10.0, 10.0, 800.0, 0.0, 80, 30), None);
        assert_eq!(pixel_to_cell(10.0, 10.0, 800.0, 450.0, 0, 30), None);
        assert_eq!(pixel_to_cell(10.0, 10.0, 800.0, 450.0, 80, 0), None);
    }

    #[test]
    fn pixel_to_cell_fractional_cell_size() {
        // 400px / 24 rows = 16.67px per row
        assert_eq!(pixel_to_cell(0.0, 16.0, 400.0, 400.0, 40, 24), Some((0, 0)));
        assert_eq!(pixel_to_cell(0.0, 17.0, 400.0, 400.0, 40, 24), Some((0, 1)));
        assert_eq!(
            pixel_to_cell(0.0, 399.0, 400.0, 400.0, 40, 24),
            Some((0, 23))
        );
    }
}
