//! Vertical scroll controller.
//!
//! `scroll_offset` is the first visible row. It is recomputed after every input from the caret
//! row, the pane height and the previous frame's implied window start. Editing code never sets
//! it directly; only [`ViewportState::center_on`] does, for file open, line jumps and search
//! hits.
//!
//! The update evaluates three branches in priority order:
//! 1. Scroll up: the window is not at row 0 and the caret is inside the top margin band. The
//!    window moves up so the caret sits exactly `margin` rows below the top.
//! 2. Scroll down: the caret is inside the bottom margin band, its implied window start grew
//!    since the previous frame, and the document continues below the window. The window moves
//!    down by the caret's forward delta.
//! 3. Snap forward: the caret's implied window start is past the current start (the caret left
//!    the window downwards, e.g. a page move). The window jumps so the caret is on the last row.
//!
//! Branch 2's forward-delta guard is what keeps the window still while the caret moves up
//! inside the bottom band.

use core_config::ScrollMemo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    pub scroll_offset: usize,
    /// Implied window start (`caret_row - (visible - 1)`) seen on the previous update.
    pub previous_scroll_offset: isize,
    pub visible: usize,
}

impl ViewportState {
    pub fn new(visible: usize) -> Self {
        Self {
            scroll_offset: 0,
            previous_scroll_offset: 0,
            visible,
        }
    }

    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible;
    }

    /// Recompute `scroll_offset` for the current caret row. Returns true if it changed.
    pub fn update(&mut self, caret_row: usize, line_count: usize, margin: usize) -> bool {
        if self.visible == 0 {
            return false;
        }
        let before = self.scroll_offset;
        let span = (self.visible - 1) as isize;
        let margin_i = margin as isize;
        let row = caret_row as isize;
        let current = self.scroll_offset as isize;
        let implied = row - span;

        let next = if current > 0 && row < current + margin_i {
            row - margin_i
        } else if implied + margin_i > current
            && implied > self.previous_scroll_offset
            && current + span + 1 < line_count as isize
        {
            current + (implied - self.previous_scroll_offset)
        } else if implied > current {
            implied
        } else {
            current
        };

        // Keep the caret on screen whatever the branches produced.
        let next = next.clamp(implied, row).max(0) as usize;
        self.scroll_offset = next;
        self.previous_scroll_offset = implied;
        if next != before {
            tracing::trace!(target: "model.viewport", caret_row, from = before, to = next, "scrolled");
        }
        next != before
    }

    /// Put the caret row in the middle of the pane.
    pub fn center_on(&mut self, caret_row: usize) {
        self.scroll_offset = caret_row.saturating_sub(self.visible / 2);
    }

    /// Rows currently on screen.
    pub fn visible_range(&self, line_count: usize) -> std::ops::Range<usize> {
        let start = self.scroll_offset.min(line_count);
        let end = (self.scroll_offset + self.visible).min(line_count);
        start..end
    }

    pub fn memo(&self, last_x: usize) -> ScrollMemo {
        ScrollMemo {
            scroll_offset: self.scroll_offset,
            previous_scroll_offset: self.previous_scroll_offset,
            last_x,
        }
    }

    pub fn restore(&mut self, memo: ScrollMemo) {
        self.scroll_offset = memo.scroll_offset;
        self.previous_scroll_offset = memo.previous_scroll_offset;
    }
}
