//! Terminal implementations of the display and input seams.
//!
//! [`TerminalSurface`] draws rows on the alternate screen in raw mode and keeps a
//! viewport that follows the cursor. Entering saves the user's screen and
//! dropping the surface restores it, whether the loop ended by confirm, cancel
//! or an error. [`TerminalInput`] reads crossterm key events and maps them to
//! [`KeyInput`].

use crate::core::{
    error::{GitGrepError, Result},
    navigator::{InputSource, KeyInput},
    render::colorize_row,
    surface::DisplaySurface,
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

const HELP_LINE: &str = "j/k: move  enter: open/close or jump  q: quit";

pub struct TerminalSurface<W: Write> {
    out: W,
    rows: Vec<String>,
    top: usize,
    cursor: usize,
    width: usize,
    height: usize,
    active: bool,
}

impl TerminalSurface<io::Stdout> {
    /// Switch stdout to the alternate screen in raw mode
    pub fn enter() -> Result<Self> {
        let (width, height) = terminal::size().map_err(GitGrepError::terminal)?;
        terminal::enable_raw_mode().map_err(GitGrepError::terminal)?;

        let mut surface = Self::with_size(io::stdout(), width as usize, height as usize);
        surface.active = true;
        queue!(surface.out, EnterAlternateScreen, Hide).map_err(GitGrepError::terminal)?;
        log::debug!("Entered alternate screen ({width}x{height})");
        Ok(surface)
    }
}

impl<W: Write> TerminalSurface<W> {
    /// Surface over any writer, without touching terminal modes. The last line
    /// of `height` is reserved for the key help.
    pub fn with_size(out: W, width: usize, height: usize) -> Self {
        Self {
            out,
            rows: Vec::new(),
            top: 0,
            cursor: 0,
            width: width.max(1),
            height: height.saturating_sub(1).max(1),
            active: false,
        }
    }

    fn paint_row(&mut self, index: usize) -> io::Result<()> {
        if index < self.top || index >= self.top + self.height {
            return Ok(());
        }
        let screen_row = (index - self.top) as u16;
        queue!(self.out, MoveTo(0, screen_row), Clear(ClearType::CurrentLine))?;
        if let Some(text) = self.rows.get(index) {
            let text = colorize_row(&truncate_to_width(&printable(text), self.width));
            queue!(self.out, Print(text))?;
        }
        Ok(())
    }

    fn paint_all(&mut self) -> io::Result<()> {
        for index in self.top..self.top + self.height {
            self.paint_row(index)?;
        }
        queue!(
            self.out,
            MoveTo(0, self.height as u16),
            Clear(ClearType::CurrentLine),
            Print(truncate_to_width(HELP_LINE, self.width))
        )?;
        Ok(())
    }

    fn clamp_top(&mut self) {
        let max_top = self.rows.len().saturating_sub(self.height);
        self.top = self.top.min(max_top);
    }

    fn restore(&mut self) -> io::Result<()> {
        queue!(self.out, Show, LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn redraw_all(&mut self, rows: &[String]) -> Result<()> {
        self.rows = rows.to_vec();
        self.clamp_top();
        self.paint_all().map_err(GitGrepError::terminal)
    }

    fn set_row(&mut self, index: usize, text: &str) -> Result<()> {
        match self.rows.get_mut(index) {
            Some(row) => *row = text.to_string(),
            None => return Ok(()),
        }
        self.paint_row(index).map_err(GitGrepError::terminal)
    }

    fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    fn show_at_top(&mut self, row: usize) -> Result<()> {
        let previous = self.top;
        self.top = row;
        self.clamp_top();
        if self.top == previous {
            return Ok(());
        }
        self.paint_all().map_err(GitGrepError::terminal)
    }

    fn set_cursor(&mut self, row: usize) -> Result<()> {
        self.cursor = row;
        if row < self.top {
            self.show_at_top(row)?;
        } else if row >= self.top + self.height {
            self.show_at_top(row + 1 - self.height)?;
        }
        let screen_row = (self.cursor - self.top) as u16;
        queue!(self.out, MoveTo(0, screen_row)).map_err(GitGrepError::terminal)
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(GitGrepError::terminal)
    }
}

impl<W: Write> Drop for TerminalSurface<W> {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = self.restore() {
                log::warn!("Failed to restore terminal: {e}");
            }
        }
    }
}

/// Cut a row to the terminal width so it never wraps
fn truncate_to_width(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Replace control characters other than tab, which would otherwise move the
/// cursor or start escape sequences in the middle of a row
fn printable(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() && c != '\t' { '\u{fffd}' } else { c })
        .collect()
}

/// Blocking key reader over crossterm events
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn next_key(&mut self) -> Result<KeyInput> {
        match event::read() {
            Ok(Event::Key(key)) => Ok(map_key_event(key)),
            Ok(_) => Ok(KeyInput::Unrecognized),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(KeyInput::Interrupt),
            Err(e) => Err(GitGrepError::terminal(e)),
        }
    }
}

pub fn map_key_event(key: KeyEvent) -> KeyInput {
    if key.kind == KeyEventKind::Release {
        return KeyInput::Unrecognized;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyInput::Interrupt
        }
        KeyCode::Char('j') | KeyCode::Down => KeyInput::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => KeyInput::MoveUp,
        KeyCode::Enter => KeyInput::Confirm,
        KeyCode::Char('q') | KeyCode::Esc => KeyInput::Cancel,
        _ => KeyInput::Unrecognized,
    }
}
