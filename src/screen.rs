//! Character-grid drawing surface
//!
//! `Surface` is the boundary dialogs draw through. `Screen` is an in-memory
//! grid of cells that implements it; the live console uses one as its back
//! buffer and diff-flushes it to the terminal.

use std::io;

use crate::terminal::Terminal;

/// Cell rendition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Attr {
    #[default]
    Normal,
    /// Standout: focused button, selected list entry, title bar
    Reversed,
}

/// A single cell on the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub attr: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ch: ' ', attr: Attr::Normal }
    }
}

impl Cell {
    pub fn new(ch: char, attr: Attr) -> Self {
        Self { ch, attr }
    }
}

/// Something dialogs can draw on. Coordinates are 0-based (row, col);
/// writes outside the surface are clipped.
pub trait Surface {
    /// Surface dimensions as (rows, cols)
    fn size(&self) -> (u16, u16);

    /// Set one cell
    fn put_char(&mut self, row: u16, col: u16, ch: char, attr: Attr);

    /// Write a string starting at the given position, clipped at the right edge
    fn put_str(&mut self, row: u16, col: u16, text: &str, attr: Attr) {
        let (_, cols) = self.size();
        let mut c = col;
        for ch in text.chars() {
            if c >= cols {
                break;
            }
            self.put_char(row, c, ch, attr);
            c += 1;
        }
    }

    /// Blank a rectangle
    fn clear_region(&mut self, row: u16, col: u16, height: u16, width: u16) {
        for r in row..row.saturating_add(height) {
            for c in col..col.saturating_add(width) {
                self.put_char(r, c, ' ', Attr::Normal);
            }
        }
    }

    /// Make everything drawn so far visible
    fn refresh(&mut self) -> io::Result<()>;
}

/// Double-buffered screen
pub struct Screen {
    rows: u16,
    cols: u16,
    front: Vec<Cell>, // Last presented frame
    back: Vec<Cell>,  // Being drawn to
    refreshes: usize,
}

impl Screen {
    /// Create a new screen with given dimensions
    pub fn new(rows: u16, cols: u16) -> Self {
        let size = (rows as usize) * (cols as usize);
        Self {
            rows,
            cols,
            front: vec![Cell::new('\0', Attr::Normal); size], // Force initial draw
            back: vec![Cell::default(); size],
            refreshes: 0,
        }
    }

    fn index(&self, row: u16, col: u16) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some((row as usize) * (self.cols as usize) + (col as usize))
        } else {
            None
        }
    }

    /// Get a cell from the back buffer
    pub fn get(&self, row: u16, col: u16) -> Option<Cell> {
        self.index(row, col).map(|idx| self.back[idx])
    }

    /// Text of one row of the back buffer
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|c| self.get(row, c))
            .map(|cell| cell.ch)
            .collect()
    }

    /// A cell of the last presented frame
    pub fn displayed(&self, row: u16, col: u16) -> Option<Cell> {
        self.index(row, col).map(|idx| self.front[idx])
    }

    /// Text of one row of the last presented frame
    pub fn displayed_row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|c| self.displayed(row, c))
            .map(|cell| cell.ch)
            .collect()
    }

    /// Number of times `refresh` was called
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    /// Flush changes to the terminal (only updates changed cells)
    pub fn flush(&mut self, term: &mut Terminal) -> io::Result<()> {
        let mut last_attr: Option<Attr> = None;
        let mut last_pos: Option<(u16, u16)> = None;

        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = (row as usize) * (self.cols as usize) + (col as usize);
                let back = self.back[idx];
                if self.front[idx] == back {
                    continue;
                }

                if last_pos != Some((row, col.wrapping_sub(1))) {
                    term.goto(row, col)?;
                }
                if last_attr != Some(back.attr) {
                    term.set_attr(back.attr)?;
                    last_attr = Some(back.attr);
                }
                term.write_char(back.ch)?;

                self.front[idx] = back;
                last_pos = Some((row, col));
            }
        }

        term.flush()
    }
}

impl Surface for Screen {
    fn size(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    /// Control characters are stored as `?` so nothing drawn can reach
    /// the terminal as an escape sequence or move its cursor.
    fn put_char(&mut self, row: u16, col: u16, ch: char, attr: Attr) {
        let ch = if ch.is_control() { '?' } else { ch };
        if let Some(idx) = self.index(row, col) {
            self.back[idx] = Cell::new(ch, attr);
        }
    }

    /// Present the back buffer in memory. A screen flushed to a terminal
    /// with `flush` does not go through here.
    fn refresh(&mut self) -> io::Result<()> {
        self.front.copy_from_slice(&self.back);
        self.refreshes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_clips_at_right_edge() {
        let mut screen = Screen::new(2, 5);
        screen.put_str(0, 3, "abcdef", Attr::Reversed);
        assert_eq!(screen.row_text(0), "   ab");
        assert_eq!(screen.get(0, 4), Some(Cell::new('b', Attr::Reversed)));
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut screen = Screen::new(2, 2);
        screen.put_char(5, 5, 'x', Attr::Normal);
        assert_eq!(screen.get(5, 5), None);
        assert_eq!(screen.row_text(0), "  ");
    }

    #[test]
    fn test_clear_region_blanks_only_the_rectangle() {
        let mut screen = Screen::new(3, 4);
        for r in 0..3 {
            screen.put_str(r, 0, "xxxx", Attr::Reversed);
        }
        screen.clear_region(1, 1, 1, 2);
        assert_eq!(screen.row_text(0), "xxxx");
        assert_eq!(screen.row_text(1), "x  x");
        assert_eq!(screen.get(1, 1), Some(Cell::default()));
    }

    #[test]
    fn test_refresh_counts_frames() {
        let mut screen = Screen::new(1, 1);
        screen.refresh().unwrap();
        screen.refresh().unwrap();
        assert_eq!(screen.refreshes(), 2);
    }

    #[test]
    fn test_refresh_presents_the_back_buffer() {
        let mut screen = Screen::new(1, 4);
        screen.put_str(0, 0, "ab", Attr::Normal);
        screen.refresh().unwrap();
        screen.clear_region(0, 0, 1, 4);
        assert_eq!(screen.row_text(0), "    ");
        assert_eq!(screen.displayed_row_text(0), "ab  ");
        assert_eq!(screen.displayed(0, 0), Some(Cell::new('a', Attr::Normal)));
    }

    #[test]
    fn test_control_characters_are_replaced() {
        let mut screen = Screen::new(1, 8);
        screen.put_str(0, 0, "a\x1b[2Jb\t\n", Attr::Normal);
        assert_eq!(screen.row_text(0), "a?[2Jb??");
    }
}
