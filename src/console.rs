//! Live terminal surface
//!
//! Pairs the raw-mode `Terminal` with a `Screen` back buffer. Dialogs draw
//! into the buffer and `refresh` sends only the changed cells. Keystrokes
//! are read separately through `Keyboard`.

use std::io;

use crate::screen::{Attr, Screen, Surface};
use crate::terminal::Terminal;

pub struct Console {
    terminal: Terminal,
    screen: Screen,
}

impl Console {
    /// Take over the terminal. It is restored when the console is dropped.
    pub fn new() -> io::Result<Self> {
        let terminal = Terminal::new()?;
        let (rows, cols) = terminal.size();
        log::debug!("console is {}x{}", rows, cols);
        Ok(Self { terminal, screen: Screen::new(rows, cols) })
    }
}

impl Surface for Console {
    fn size(&self) -> (u16, u16) {
        self.screen.size()
    }

    fn put_char(&mut self, row: u16, col: u16, ch: char, attr: Attr) {
        self.screen.put_char(row, col, ch, attr);
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.screen.flush(&mut self.terminal)
    }
}
