//! Ordered collection of panes with a single focus.
//!
//! Invariants (after every public call):
//! * `panes` is never empty.
//! * `focused < panes.len()`.
//! * Pane ids are never reused within a session.

use crate::layout::Layout;
use crate::pane::{MAX_WEIGHT, Pane, PaneId};

#[derive(Debug)]
pub struct PaneStack {
    panes: Vec<Pane>,
    focused: usize,
    next_id: usize,
    width: u16,
    height: u16,
}

impl Default for PaneStack {
    fn default() -> Self {
        Self::new(Pane::editor())
    }
}

impl PaneStack {
    pub fn new(mut initial: Pane) -> Self {
        initial.set_id(PaneId(0));
        Self {
            panes: vec![initial],
            focused: 0,
            next_id: 1,
            width: 0,
            height: 0,
        }
    }

    pub fn focused(&self) -> &Pane {
        debug_assert!(self.focused < self.panes.len(), "focused index in range");
        &self.panes[self.focused]
    }

    pub fn focused_mut(&mut self) -> &mut Pane {
        debug_assert!(self.focused < self.panes.len(), "focused index in range");
        &mut self.panes[self.focused]
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn panes_mut(&mut self) -> &mut [Pane] {
        &mut self.panes
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Append a pane at the bottom and focus it.
    pub fn add(&mut self, mut pane: Pane) -> PaneId {
        let id = PaneId(self.next_id);
        self.next_id += 1;
        pane.set_id(id);
        self.panes.push(pane);
        self.focused = self.panes.len() - 1;
        tracing::info!(target: "model.panes", pane = id.0, count = self.panes.len(), "pane_added");
        self.relayout();
        id
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.panes.len();
        tracing::debug!(target: "model.panes", focused = self.focused, "focus_changed");
    }

    pub fn focus_previous(&mut self) {
        self.focused = (self.focused + self.panes.len() - 1) % self.panes.len();
        tracing::debug!(target: "model.panes", focused = self.focused, "focus_changed");
    }

    /// Close the focused pane unless it is the last one. Focus moves to the pane that followed
    /// it (wrapping to the top).
    pub fn remove_focused(&mut self) -> Option<Pane> {
        if self.panes.len() <= 1 {
            return None;
        }
        let mut removed = self.panes.remove(self.focused);
        removed.close();
        if self.focused >= self.panes.len() {
            self.focused = 0;
        }
        tracing::info!(
            target: "model.panes",
            pane = removed.id().0,
            count = self.panes.len(),
            "pane_removed"
        );
        self.relayout();
        Some(removed)
    }

    pub fn grow_focused(&mut self) {
        let pane = self.focused_mut();
        let w = pane.weight();
        pane.set_weight(w.saturating_add(1).min(MAX_WEIGHT));
        self.relayout();
    }

    pub fn shrink_focused(&mut self) {
        let pane = self.focused_mut();
        let w = pane.weight();
        pane.set_weight(w.saturating_sub(1));
        self.relayout();
    }

    pub fn layout(&self) -> Layout {
        let weights: Vec<u16> = self.panes.iter().map(Pane::weight).collect();
        Layout::stacked(self.width, self.height, &weights)
    }

    /// Set the area shared by all panes and resize their viewports.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.relayout();
    }

    fn relayout(&mut self) {
        let layout = self.layout();
        for (pane, region) in self.panes.iter_mut().zip(layout.regions()) {
            pane.viewport_mut().set_visible(usize::from(region.height));
        }
    }
}
