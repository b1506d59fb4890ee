//! Display surface abstraction.
//!
//! The navigator never draws directly. It hands rows to a [`DisplaySurface`],
//! which owns an addressable sequence of text rows plus a viewport. The terminal
//! implementation lives in `core::terminal`; [`BufferSurface`] keeps everything in
//! memory and records how it was driven, which makes redraw behavior testable.

use crate::core::error::Result;

pub trait DisplaySurface {
    /// Replace every row and repaint the visible region
    fn redraw_all(&mut self, rows: &[String]) -> Result<()>;

    /// Overwrite a single existing row
    fn set_row(&mut self, index: usize, text: &str) -> Result<()>;

    /// Current text of a row, if it exists
    fn row(&self, index: usize) -> Option<&str>;

    /// Scroll so that `row` is the first visible row
    fn show_at_top(&mut self, row: usize) -> Result<()>;

    /// Move the cursor to `row`, scrolling if it is outside the viewport
    fn set_cursor(&mut self, row: usize) -> Result<()>;

    /// Push pending output to the device
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// In-memory surface with draw counters
#[derive(Debug, Default, Clone)]
pub struct BufferSurface {
    pub rows: Vec<String>,
    pub top: usize,
    pub cursor: usize,
    pub full_redraws: usize,
    pub row_writes: Vec<usize>,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<&str> {
        self.rows.iter().map(String::as_str).collect()
    }
}

impl DisplaySurface for BufferSurface {
    fn redraw_all(&mut self, rows: &[String]) -> Result<()> {
        self.rows = rows.to_vec();
        self.full_redraws += 1;
        Ok(())
    }

    fn set_row(&mut self, index: usize, text: &str) -> Result<()> {
        if let Some(row) = self.rows.get_mut(index) {
            *row = text.to_string();
            self.row_writes.push(index);
        } else {
            log::warn!("Ignoring write to missing row {index}");
        }
        Ok(())
    }

    fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    fn show_at_top(&mut self, row: usize) -> Result<()> {
        self.top = row;
        Ok(())
    }

    fn set_cursor(&mut self, row: usize) -> Result<()> {
        self.cursor = row;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_surface_tracks_writes() {
        let mut surface = BufferSurface::new();
        surface
            .redraw_all(&["a".to_string(), "b".to_string()])
            .unwrap();
        surface.set_row(1, "B").unwrap();

        assert_eq!(surface.lines(), vec!["a", "B"]);
        assert_eq!(surface.full_redraws, 1);
        assert_eq!(surface.row_writes, vec![1]);
        assert_eq!(surface.row(1), Some("B"));
    }

    #[test]
    fn test_buffer_surface_ignores_missing_rows() {
        let mut surface = BufferSurface::new();
        surface.set_row(3, "nope").unwrap();
        assert!(surface.rows.is_empty());
        assert!(surface.row_writes.is_empty());
    }
}
