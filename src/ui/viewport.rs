//! Scrolling window over a list with a cursor
//!
//! The viewport keeps the cursor entry on screen. When entries are hidden
//! above or below, a `...` marker row takes the place of one entry at that
//! edge, so the number of entries actually shown (the effective capacity)
//! depends on where the window starts.

use crate::input::Command;

/// What one frame of the list shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// Index of the first entry drawn
    pub start: usize,
    /// Entries drawn (less than `capacity` only at the end of the list)
    pub rows: usize,
    /// Entry slots left after the marker rows; never zero
    pub capacity: usize,
    pub more_above: bool,
    pub more_below: bool,
}

/// Cursor and scroll position over `total` entries shown in `capacity` rows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListViewport {
    cursor: usize,
    start: usize,
    capacity: usize,
    total: usize,
}

impl ListViewport {
    /// A viewport with the cursor on `cursor` (clamped into the list)
    pub fn new(total: usize, capacity: usize, cursor: usize) -> Self {
        let mut viewport = Self {
            cursor: cursor.min(total.saturating_sub(1)),
            start: 0,
            capacity: capacity.max(1),
            total,
        };
        viewport.ensure_visible();
        viewport
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Layout for the current scroll position
    pub fn window(&self) -> Window {
        self.layout_at(self.start)
    }

    fn layout_at(&self, start: usize) -> Window {
        let remaining = self.total.saturating_sub(start);
        let more_above = start > 0 && self.capacity >= 2;
        let avail = self.capacity - usize::from(more_above);
        let more_below = remaining > avail && avail >= 2;
        let capacity = avail - usize::from(more_below);
        Window {
            start,
            rows: capacity.min(remaining),
            capacity,
            more_above,
            more_below,
        }
    }

    /// Last scroll position worth showing: the one whose window ends
    /// exactly at the last entry
    fn max_start(&self) -> usize {
        if self.total <= self.capacity {
            0
        } else if self.capacity >= 2 {
            self.total - (self.capacity - 1)
        } else {
            self.total - 1
        }
    }

    /// Bring the cursor back inside the window, re-centring on it when it
    /// has left
    fn ensure_visible(&mut self) {
        if self.total == 0 {
            self.cursor = 0;
            self.start = 0;
            return;
        }

        let window = self.window();
        if self.cursor < self.start || self.cursor >= self.start + window.capacity {
            self.start = self.cursor.saturating_sub(window.capacity / 2);
        }
        self.start = self.start.min(self.max_start());

        // Marker rows appearing or vanishing change the capacity; nudge
        // until the cursor fits
        loop {
            let window = self.layout_at(self.start);
            if self.cursor < self.start {
                self.start = self.cursor;
            } else if self.cursor >= self.start + window.capacity {
                self.start += 1;
            } else {
                break;
            }
        }
    }

    /// Move the cursor to `index`, clamped into the list
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(self.total.saturating_sub(1));
        self.ensure_visible();
    }

    fn move_by(&mut self, delta: isize) {
        let target = (self.cursor as isize).saturating_add(delta).max(0) as usize;
        self.set_cursor(target);
    }

    /// Apply a navigation command. Returns false for commands that are not
    /// list navigation.
    pub fn navigate<S: AsRef<str>>(&mut self, cmd: Command, labels: &[S]) -> bool {
        let page = self.window().capacity as isize;
        match cmd {
            Command::Up => self.move_by(-1),
            Command::Down => self.move_by(1),
            Command::PageUp => self.move_by(-page),
            Command::PageDown => self.move_by(page),
            Command::Home => self.set_cursor(0),
            Command::End => self.set_cursor(self.total.saturating_sub(1)),
            Command::Char(c) => {
                if let Some(found) = find_by_initial(labels, self.cursor, c as char) {
                    self.set_cursor(found);
                }
            }
            _ => return false,
        }
        true
    }
}

/// First entry after `cursor` whose label starts with `key` (ignoring
/// case), wrapping round to the top. The cursor entry itself is checked
/// last of all, so repeated presses cycle through the matches.
pub fn find_by_initial<S: AsRef<str>>(labels: &[S], cursor: usize, key: char) -> Option<usize> {
    let key = key.to_ascii_lowercase();
    let matches = |i: &usize| {
        labels[*i]
            .as_ref()
            .chars()
            .next()
            .is_some_and(|c| c.to_ascii_lowercase() == key)
    };
    (cursor + 1..labels.len())
        .find(matches)
        .or_else(|| (0..cursor.min(labels.len())).find(matches))
}
