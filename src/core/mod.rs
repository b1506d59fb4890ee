//! Core functionality for the gitgrep tool.
//!
//! This module provides the building blocks: result grouping, tree navigation,
//! row rendering, the display/input seams and their terminal implementations,
//! the git search backend, configuration and error handling.

pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod navigator;
pub mod output;
pub mod render;
pub mod result_index;
pub mod surface;
pub mod terminal;

// === Error handling ===
pub use error::{GitGrepError, Result};

// === Search ===
// Repository discovery and the git grep backend
pub use git::{DiscoverLocator, GitGrepBackend, GitRepo, RepoLocator, SearchBackend};

// === Result tree ===
// file -> matches grouping and visible-row arithmetic
pub use result_index::{FileGroup, MatchRecord, OpenSet, ResultIndex, RowRef};

// === Navigation ===
// Keystroke state machine and the blocking input loop
pub use navigator::{
    InputSource, KeyInput, Location, NavigatorPhase, NavigatorState, Outcome, Redraw, Step,
    TreeNavigator,
};

// === Display ===
pub use render::{add_line_marker, colorize_row, strip_ansi_codes, visible_rows, LINE_MARKER};
pub use surface::{BufferSurface, DisplaySurface};
pub use terminal::{TerminalInput, TerminalSurface};

// === Configuration ===
pub use config::GrepConfig;

// === Output formatting ===
pub use output::{print_error, print_info, print_location, print_row};
