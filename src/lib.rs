//! gitgrep - browse `git grep` results as a collapsible file tree.
//!
//! Matches are grouped by file; the user expands files and moves a marker with
//! single keystrokes, and confirming a match hands its `(file, line)` back to the
//! caller. The navigation core works against the [`core::DisplaySurface`] and
//! [`core::InputSource`] traits, so it runs the same on a terminal or in tests.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Result grouping and row resolution
//! - The tree navigator state machine
//! - Display surfaces and row rendering
//! - Repository discovery and the search backend
//! - Error handling and result types

pub mod commands;
pub mod core;

pub use core::{
    // Search
    DiscoverLocator,
    GitGrepBackend,
    // Error handling
    GitGrepError,
    GrepConfig,
    // Navigation
    KeyInput,
    Location,
    Outcome,
    RepoLocator,
    // Result tree
    ResultIndex,
    Result,
    RowRef,
    SearchBackend,
    TreeNavigator,
};
