//! Interactive navigation over a [`ResultIndex`].
//!
//! [`TreeNavigator`] owns the cursor and the set of expanded file groups. Each key
//! is turned into a [`Step`]: either the loop continues with a [`Redraw`] request,
//! or it finishes with an [`Outcome`]. Cursor movement only rewrites the two rows
//! whose marker changed; expanding or collapsing a group repaints everything,
//! since all rows below the toggled header move.
//!
//! # Public API
//! - [`TreeNavigator`]: state machine plus the blocking [`TreeNavigator::run`] loop
//! - [`KeyInput`] / [`InputSource`]: semantic keys and where they come from
//! - [`Location`]: the `(filename, line_number)` handed back on confirm

use crate::core::{
    error::Result,
    render::{add_line_marker, visible_rows},
    result_index::{OpenSet, ResultIndex, RowRef},
    surface::DisplaySurface,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Semantic key events understood by the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    MoveDown,
    MoveUp,
    Confirm,
    Cancel,
    /// Interrupt from the environment, handled like [`KeyInput::Cancel`]
    Interrupt,
    Unrecognized,
}

/// Blocking source of key events
pub trait InputSource {
    fn next_key(&mut self) -> Result<KeyInput>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub filename: String,
    pub line_number: String,
}

impl Location {
    /// Filename joined onto the repository root
    pub fn path(&self, root: &Path) -> PathBuf {
        root.join(&self.filename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Confirmed(Location),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorPhase {
    Idle,
    Browsing,
    Confirmed(Location),
    Cancelled,
}

/// What the display needs after a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redraw {
    None,
    /// Rewrite only these rows
    Patch(Vec<usize>),
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(Redraw),
    Finished(Outcome),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigatorState {
    pub selected_row: usize,
    pub open_set: OpenSet,
}

pub struct TreeNavigator<'a> {
    index: &'a ResultIndex,
    state: NavigatorState,
    phase: NavigatorPhase,
    rows: Vec<String>,
}

impl<'a> TreeNavigator<'a> {
    pub fn new(index: &'a ResultIndex) -> Self {
        let state = NavigatorState::default();
        let rows = visible_rows(index, &state.open_set);
        Self {
            index,
            state,
            phase: NavigatorPhase::Idle,
            rows,
        }
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn phase(&self) -> &NavigatorPhase {
        &self.phase
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn max_row(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    pub fn is_open(&self, group: usize) -> bool {
        self.state.open_set.contains(&group)
    }

    /// Text of a row as displayed, with the marker on the selected row
    pub fn row_text(&self, row: usize) -> Option<String> {
        self.rows.get(row).map(|text| {
            if row == self.state.selected_row {
                add_line_marker(text)
            } else {
                text.clone()
            }
        })
    }

    /// Every visible row as displayed
    pub fn frame(&self) -> Vec<String> {
        (0..self.rows.len())
            .filter_map(|row| self.row_text(row))
            .collect()
    }

    pub fn handle_key(&mut self, key: KeyInput) -> Step {
        if let Some(outcome) = self.outcome() {
            return Step::Finished(outcome);
        }
        self.phase = NavigatorPhase::Browsing;

        match key {
            KeyInput::MoveDown if self.state.selected_row < self.max_row() => {
                self.move_to(self.state.selected_row + 1)
            }
            KeyInput::MoveUp if self.state.selected_row > 0 => {
                self.move_to(self.state.selected_row - 1)
            }
            KeyInput::Confirm if !self.rows.is_empty() => self.confirm(),
            KeyInput::Cancel | KeyInput::Interrupt => {
                log::debug!("Navigation cancelled ({key:?})");
                self.phase = NavigatorPhase::Cancelled;
                Step::Finished(Outcome::Cancelled)
            }
            _ => Step::Continue(Redraw::None),
        }
    }

    /// Draw the initial view, then process keys until the user confirms a match
    /// or cancels.
    pub fn run<I, S>(&mut self, input: &mut I, surface: &mut S) -> Result<Outcome>
    where
        I: InputSource + ?Sized,
        S: DisplaySurface + ?Sized,
    {
        if self.rows.is_empty() {
            self.phase = NavigatorPhase::Cancelled;
            return Ok(Outcome::Cancelled);
        }

        self.phase = NavigatorPhase::Browsing;
        surface.redraw_all(&self.frame())?;
        surface.show_at_top(0)?;
        surface.set_cursor(self.state.selected_row)?;
        surface.flush()?;

        loop {
            let key = input.next_key()?;
            match self.handle_key(key) {
                Step::Continue(redraw) => self.present(&redraw, surface)?,
                Step::Finished(outcome) => return Ok(outcome),
            }
        }
    }

    /// Apply a redraw request to a surface
    pub fn present<S>(&self, redraw: &Redraw, surface: &mut S) -> Result<()>
    where
        S: DisplaySurface + ?Sized,
    {
        match redraw {
            Redraw::None => return Ok(()),
            Redraw::Patch(rows) => {
                for &row in rows {
                    if let Some(text) = self.row_text(row) {
                        surface.set_row(row, &text)?;
                    }
                }
            }
            Redraw::Full => surface.redraw_all(&self.frame())?,
        }
        surface.set_cursor(self.state.selected_row)?;
        surface.flush()
    }

    fn outcome(&self) -> Option<Outcome> {
        match &self.phase {
            NavigatorPhase::Confirmed(location) => Some(Outcome::Confirmed(location.clone())),
            NavigatorPhase::Cancelled => Some(Outcome::Cancelled),
            _ => None,
        }
    }

    fn move_to(&mut self, row: usize) -> Step {
        let previous = self.state.selected_row;
        self.state.selected_row = row;
        Step::Continue(Redraw::Patch(vec![previous, row]))
    }

    fn confirm(&mut self) -> Step {
        let row = self.state.selected_row;
        let target = match self.index.resolve(row, &self.state.open_set) {
            Ok(target) => target,
            Err(e) => {
                // selected_row is kept below row_count, so this is a bug
                log::error!("Cannot resolve selected row: {e}");
                debug_assert!(false, "{e}");
                return Step::Continue(Redraw::None);
            }
        };

        match target {
            RowRef::Header(group) => {
                self.toggle(group);
                Step::Continue(Redraw::Full)
            }
            RowRef::Match(group, entry) => match self.index.record(group, entry) {
                Some(record) => {
                    let location = Location {
                        filename: record.filename.clone(),
                        line_number: record.line_number.clone(),
                    };
                    log::debug!(
                        "Selected {}:{}",
                        location.filename,
                        location.line_number
                    );
                    self.phase = NavigatorPhase::Confirmed(location.clone());
                    Step::Finished(Outcome::Confirmed(location))
                }
                None => Step::Continue(Redraw::None),
            },
        }
    }

    fn toggle(&mut self, group: usize) {
        if !self.state.open_set.remove(&group) {
            self.state.open_set.insert(group);
        }
        self.rows = visible_rows(self.index, &self.state.open_set);
        log::debug!(
            "Toggled group {group} ({}), {} visible rows",
            if self.is_open(group) { "open" } else { "closed" },
            self.rows.len()
        );
    }
}
