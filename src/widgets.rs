//! Clickable UI components.
//!
//! Each component renders itself and registers its own click targets, so a
//! row can never be drawn in one place and made clickable somewhere else.
//!
//! - [`TabBar`]: a single row of labels, one target per label.
//! - [`ClickableList`]: vertical lines, some of them bound to an action.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── TabBar ─────────────────────────────────────────────────────

/// A horizontal row of labels, each bound to an action ID.
///
/// Targets follow the rendered text widths, CJK and emoji included.
///
/// ```ignore
/// TabBar::new(" │ ")
///     .tab("💬 WeChat", style, LAPTOP_APP_BASE)
///     .tab("🔍 Search", style, LAPTOP_APP_BASE + 1)
///     .render(f, area, &mut cs);
/// ```
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, u16)>,
    separator: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
            block: None,
        }
    }

    pub fn tab(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.tabs.push((label.into(), style, action_id));
        self
    }

    /// Wrap in a [`Block`]. Targets are placed inside its borders.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let sep_width = Line::from(self.separator).width() as u16;
        let mut spans: Vec<Span> = Vec::with_capacity(self.tabs.len() * 2);
        let mut tab_widths: Vec<(u16, u16)> = Vec::with_capacity(self.tabs.len());

        for (i, (label, style, action_id)) in self.tabs.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.separator, Style::default().fg(Color::DarkGray)));
            }
            let padded = format!(" {} ", label);
            tab_widths.push((Line::from(padded.as_str()).width() as u16, action_id));
            spans.push(Span::styled(padded, style));
        }

        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };

        let paragraph = Paragraph::new(Line::from(spans));
        let paragraph = match self.block {
            Some(block) => paragraph.block(block),
            None => paragraph,
        };
        f.render_widget(paragraph, area);

        // Inner x/width for accuracy; the full outer height is easier to tap.
        cs.register_tab_targets(
            &tab_widths,
            sep_width,
            inner.x,
            area.y,
            inner.width,
            area.height.max(1),
        );
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// Lines paired with optional click actions.
///
/// Targets are bound to line indices, so inserting a line above a clickable
/// one moves its target along with it.
///
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("房門前"));
/// cl.push_clickable(Line::from(" [1] 房門"), HOTSPOT_BASE);
/// cl.register_targets(area, &mut cs, 1, 1, 0, 0);
/// f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)`
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register targets for every clickable line.
    ///
    /// * `top_offset` / `bottom_offset`: rows taken by borders or padding.
    /// * `scroll`: vertical scroll in visual rows.
    /// * `inner_width`: content width when the paragraph wraps, or `0` when
    ///   every line is exactly one row.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        // Visual row span of each line.
        let w = inner_width as usize;
        let mut spans: Vec<(u16, u16)> = Vec::with_capacity(self.lines.len());
        let mut cumulative: u16 = 0;
        for line in &self.lines {
            let lw = line.width();
            let h = if w == 0 || lw <= w { 1 } else { lw.div_ceil(w) as u16 };
            spans.push((cumulative, h));
            cumulative += h;
        }

        for &(line_idx, action_id) in &self.actions {
            let Some(&(start, height)) = spans.get(line_idx as usize) else {
                continue;
            };
            for vr in start..start + height {
                if vr < scroll {
                    continue;
                }
                let row = content_y + (vr - scroll);
                if row >= content_end {
                    break;
                }
                cs.add_row_target(area, row, action_id);
            }
        }
    }
}
