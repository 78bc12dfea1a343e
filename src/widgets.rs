//! Reusable clickable UI components.
//!
//! Each component co-locates rendering with click target registration so a
//! view never draws a button it forgot to make tappable.
//!
//! - [`TabBar`] — horizontal tab row (Button / Shop / Audio).
//! - [`ClickableList`] — vertical list of lines, some bound to actions.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── TabBar ─────────────────────────────────────────────────────

/// A horizontal tab bar.
///
/// Renders tabs as one row of padded labels joined by a separator, and
/// registers a click target per tab covering its label plus half of each
/// adjacent separator; the first and last tabs extend to the area edges so
/// the whole row is tappable.
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, u16)>,
    separator: &'a str,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
        }
    }

    /// Add a tab with its label, style, and action ID.
    pub fn tab(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.tabs.push((label.into(), style, action_id));
        self
    }

    /// Render the tabs and register their click targets.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let n = self.tabs.len();
        if n == 0 || area.width == 0 {
            return;
        }

        let sep_width = Line::from(self.separator).width() as u16;
        let mut spans: Vec<Span> = Vec::new();
        // (label start column, label width) relative to area.x
        let mut extents: Vec<(u16, u16)> = Vec::with_capacity(n);
        let mut cursor: u16 = 0;

        for (i, (label, style, _)) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.separator,
                    Style::default().fg(Color::DarkGray),
                ));
                cursor += sep_width;
            }
            let padded = format!(" {} ", label);
            let w = Line::from(padded.as_str()).width() as u16;
            extents.push((cursor, w));
            cursor += w;
            spans.push(Span::styled(padded, *style));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);

        for i in 0..n {
            let (start, w) = extents[i];
            let left = if i == 0 {
                0
            } else {
                let prev_end = extents[i - 1].0 + extents[i - 1].1;
                prev_end + (start - prev_end) / 2
            };
            let right = if i == n - 1 {
                area.width
            } else {
                let end = start + w;
                end + (extents[i + 1].0 - end) / 2
            };
            let width = right.saturating_sub(left);
            if width > 0 {
                cs.add_target(
                    Rect::new(area.x + left, area.y, width, area.height.max(1)),
                    self.tabs[i].2,
                );
            }
        }
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// A list of lines where individual rows can be bound to actions.
///
/// Lines are assumed to occupy one visual row each (no wrapping). Call
/// [`register_targets`](ClickableList::register_targets) after laying out the
/// widget; row positions follow the line order, so inserting a header shifts
/// every target below it automatically.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line index, action_id)` pairs.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a line bound to a semantic action ID.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines.
    ///
    /// `top_offset` is the number of rows before the first line (1 for a top
    /// border); targets falling past the bottom border are clipped.
    pub fn register_targets(&self, area: Rect, cs: &mut ClickState, top_offset: u16) {
        let content_y = area.y + top_offset;
        let content_end = (area.y + area.height).saturating_sub(top_offset.min(1));
        for &(line_idx, action_id) in &self.actions {
            let row = content_y + line_idx;
            if row >= content_end {
                continue;
            }
            cs.add_row_target(area, row, action_id);
        }
    }
}
