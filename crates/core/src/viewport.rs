//! Scrolling window over a list of entries.
//!
//! The window has a fixed number of rows. When entries are hidden above or
//! below it, one row at that edge is given to a "more entries" indicator
//! instead of an entry. The top indicator is reserved first and the bottom
//! one is decided with the rows that are left, so a list that only
//! overflows by the top indicator's row never gets a bogus bottom indicator
//! and never silently drops its last entry.

use std::ops::Range;

/// Fewest rows that can hold both indicators and one entry. Smaller
/// windows scroll without indicators.
pub const MIN_ROWS_FOR_INDICATORS: usize = 3;

/// Result of one viewport computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleWindow {
    /// Index of the first visible entry; feed it back into the next call
    pub scroll_offset: usize,
    /// Entries to draw, in order
    pub visible: Range<usize>,
    /// Draw a "more above" row before the entries
    pub top_indicator: bool,
    /// Draw a "more below" row after the entries
    pub bottom_indicator: bool,
}

impl VisibleWindow {
    /// Rows left for entries once indicators have taken theirs
    pub fn effective_rows(&self) -> usize {
        self.visible.len()
    }

    /// Entries hidden above the window
    pub fn hidden_above(&self) -> usize {
        self.visible.start
    }

    /// Entries hidden below the window
    pub fn hidden_below(&self, total_count: usize) -> usize {
        total_count.saturating_sub(self.visible.end)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }
}

/// Viewport of a fixed height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollViewport {
    rows: usize,
}

impl ScrollViewport {
    /// Create a viewport showing `rows` lines of entries and indicators
    pub fn new(rows: usize) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Update the viewport height (terminal resize)
    pub fn resize(&mut self, rows: usize) {
        self.rows = rows;
    }

    fn uses_indicators(&self, total_count: usize) -> bool {
        self.rows >= MIN_ROWS_FOR_INDICATORS && total_count > self.rows
    }

    /// Largest scroll offset that still fills the window.
    ///
    /// When indicators are in use the last page starts with the top
    /// indicator, which leaves `rows - 1` rows for entries.
    pub fn max_scroll_offset(&self, total_count: usize) -> usize {
        if self.uses_indicators(total_count) {
            total_count - self.rows + 1
        } else {
            total_count.saturating_sub(self.rows)
        }
    }

    /// Entry range and indicators for a given offset, without moving it
    pub fn layout_at(&self, total_count: usize, scroll_offset: usize) -> VisibleWindow {
        let (top_indicator, bottom_indicator) = if self.uses_indicators(total_count) {
            let top = scroll_offset > 0;
            let rows_after_top = self.rows - usize::from(top);
            (top, total_count > scroll_offset + rows_after_top)
        } else {
            (false, false)
        };

        let effective_rows =
            self.rows - usize::from(top_indicator) - usize::from(bottom_indicator);
        let start = scroll_offset.min(total_count);
        let end = (scroll_offset + effective_rows).min(total_count);

        VisibleWindow {
            scroll_offset,
            visible: start..end,
            top_indicator,
            bottom_indicator,
        }
    }

    /// Move `scroll_offset` so `selected` is visible and lay out the window.
    pub fn compute(
        &self,
        total_count: usize,
        selected: usize,
        scroll_offset: usize,
    ) -> VisibleWindow {
        if total_count == 0 || self.rows == 0 {
            return VisibleWindow {
                scroll_offset: 0,
                visible: 0..0,
                top_indicator: false,
                bottom_indicator: false,
            };
        }

        let selected = selected.min(total_count - 1);
        let mut offset = scroll_offset;

        if selected < offset {
            // Selection moved above the window
            offset = selected;
        } else if selected + 1 >= offset + self.rows {
            // Selection moved to or below the last row
            offset = selected + 1 - self.rows;
        }
        offset = offset.min(self.max_scroll_offset(total_count));

        // Indicator rows can push the selection out again; slide down until
        // it shows. Terminates at the latest when offset reaches the
        // selection or the last page.
        let mut window = self.layout_at(total_count, offset);
        while !window.contains(selected) && offset < selected {
            offset += 1;
            window = self.layout_at(total_count, offset);
        }
        window
    }
}
