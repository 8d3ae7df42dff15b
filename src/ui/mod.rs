//! UI modules for the globe viewer.
//!
//! The UI is split into distinct panels:
//! - Top bar: title and status
//! - Side panel: view/interaction controls
//! - Central canvas: the projected map itself

mod canvas;
mod side_panel;
mod top_bar;

pub use canvas::render_canvas;
pub use side_panel::render_side_panel;
pub use top_bar::render_top_bar;
