//! TUI pane rendering modules
//!
//! Each pane module exports a `render_*` function that draws read-only
//! state handed to it by [`App`](crate::ui::App). No pane mutates the
//! visualizer.
//!
//! # Pane Modules
//!
//! - [`tree`]: heap drawn as a binary tree with compare/swap/extract highlights
//! - [`sorted`]: the descending sort output
//! - [`sidebar`]: stats, add-person input, playback state and node details
//! - [`status`]: status bar with keybindings and state indicators

pub mod sidebar;
pub mod sorted;
pub mod status;
pub mod tree;

pub use sidebar::{
    render_details_pane, render_input_pane, render_playback_pane, render_stats_pane,
    InputRenderData,
};
pub use sorted::render_sorted_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use tree::{render_tree_pane, TreeRenderData};
