//! Pane-level editor model.
//!
//! A [`Pane`] bundles everything one editing surface owns: its `LineBuffer`, `Caret`, `Mode`,
//! [`ViewportState`] and the highlight tokens derived from the buffer. An optional process
//! stream turns a pane into a read-mostly output view. [`PaneStack`] orders panes vertically,
//! tracks focus and hands each pane its share of the screen height.
//!
//! Core invariants (must hold after every public call):
//! * The stack is never empty and the focus index is in range.
//! * A pane's caret is clamped to its buffer.
//! * `tokens.len() == buffer.line_count()` for every pane.
//! * `scroll_offset` only changes through the viewport controller or an explicit center.
//!
//! Nothing here draws. A renderer reads [`RenderState`] and the status line built by
//! [`status::build_status`].

mod layout;
pub mod navigation;
mod pane;
mod stack;
pub mod status;
pub mod viewport;

pub use layout::{Layout, LayoutRegion};
pub use pane::{DEFAULT_WEIGHT, MAX_WEIGHT, Pane, PaneId, RenderState};
pub use stack::PaneStack;
pub use status::{StatusContext, StatusView, build_status};
pub use viewport::ViewportState;
