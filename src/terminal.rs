//! Terminal handling with raw ANSI escape sequences
//! Output goes through `Terminal`, keystrokes come from `Keyboard`

use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::time::Duration;

use crate::input::ByteSource;
use crate::screen::Attr;

/// Terminal state manager
///
/// Puts stdin into raw mode on creation and restores the saved settings
/// when dropped.
pub struct Terminal {
    stdout: io::Stdout,
    stdin: io::Stdin,
    rows: u16,
    cols: u16,
    orig_termios: Option<libc::termios>,
}

impl Terminal {
    /// Initialize terminal in raw mode
    pub fn new() -> io::Result<Self> {
        let mut term = Self {
            stdout: io::stdout(),
            stdin: io::stdin(),
            rows: 24,
            cols: 80,
            orig_termios: None,
        };

        term.update_size();
        term.enable_raw_mode()?;

        term.write_raw("\x1b[?25l")?; // Hide cursor
        term.write_raw("\x1b[2J")?; // Clear screen
        term.write_raw("\x1b[H")?; // Home cursor
        term.flush()?;

        Ok(term)
    }

    /// Get terminal dimensions as (rows, cols)
    pub fn size(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    /// Update terminal size from ioctl
    pub fn update_size(&mut self) {
        unsafe {
            let mut ws: libc::winsize = std::mem::zeroed();
            if libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) == 0 && ws.ws_row > 0 {
                self.rows = ws.ws_row;
                self.cols = ws.ws_col;
            }
        }
    }

    /// Enable raw mode (disable canonical mode, echo, etc.)
    fn enable_raw_mode(&mut self) -> io::Result<()> {
        let fd = self.stdin.as_raw_fd();
        unsafe {
            let mut termios: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(fd, &mut termios) != 0 {
                return Err(io::Error::last_os_error());
            }

            self.orig_termios = Some(termios);

            termios.c_lflag &= !(libc::ECHO | libc::ICANON | libc::ISIG | libc::IEXTEN);
            termios.c_iflag &= !(libc::IXON | libc::ICRNL | libc::BRKINT | libc::INPCK | libc::ISTRIP);
            termios.c_oflag &= !libc::OPOST;
            termios.c_cflag |= libc::CS8;

            // VMIN=1, VTIME=0: read blocks until one byte arrives
            termios.c_cc[libc::VMIN] = 1;
            termios.c_cc[libc::VTIME] = 0;

            if libc::tcsetattr(fd, libc::TCSAFLUSH, &termios) != 0 {
                return Err(io::Error::last_os_error());
            }
        }
        Ok(())
    }

    /// Disable raw mode (restore original settings)
    fn disable_raw_mode(&mut self) -> io::Result<()> {
        if let Some(orig) = self.orig_termios.take() {
            let fd = self.stdin.as_raw_fd();
            unsafe {
                if libc::tcsetattr(fd, libc::TCSAFLUSH, &orig) != 0 {
                    return Err(io::Error::last_os_error());
                }
            }
        }
        Ok(())
    }

    /// Write raw bytes to terminal
    pub fn write_raw(&mut self, s: &str) -> io::Result<()> {
        self.stdout.write_all(s.as_bytes())
    }

    /// Flush output buffer
    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    /// Move cursor to position (0-based; converted to ANSI's 1-based)
    pub fn goto(&mut self, row: u16, col: u16) -> io::Result<()> {
        write!(self.stdout, "\x1b[{};{}H", row + 1, col + 1)
    }

    /// Select the rendition for following characters
    pub fn set_attr(&mut self, attr: Attr) -> io::Result<()> {
        match attr {
            Attr::Normal => self.write_raw("\x1b[0m"),
            Attr::Reversed => self.write_raw("\x1b[0;7m"),
        }
    }

    /// Clear entire screen
    pub fn clear(&mut self) -> io::Result<()> {
        self.write_raw("\x1b[0m\x1b[2J\x1b[H")
    }

    /// Show cursor
    pub fn show_cursor(&mut self) -> io::Result<()> {
        self.write_raw("\x1b[?25h")
    }

    /// Write a character at current position
    pub fn write_char(&mut self, c: char) -> io::Result<()> {
        write!(self.stdout, "{}", c)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.show_cursor();
        let _ = self.clear();
        let _ = self.flush();
        let _ = self.disable_raw_mode();
    }
}

/// Keystroke source reading stdin directly
///
/// Independent of `Terminal` so a dialog can borrow the screen and the
/// keyboard at the same time. Raw mode must already be on for bytes to
/// arrive one at a time.
pub struct Keyboard {
    stdin: io::Stdin,
}

impl Keyboard {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }

    /// Wait up to `timeout` for stdin to become readable
    fn wait_readable(&self, timeout: Duration) -> io::Result<bool> {
        let mut fds = libc::pollfd {
            fd: self.stdin.as_raw_fd(),
            events: libc::POLLIN,
            revents: 0,
        };
        let millis = timeout.as_millis().min(libc::c_int::MAX as u128) as libc::c_int;
        let rc = unsafe { libc::poll(&mut fds, 1, millis) };
        if rc < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(rc > 0 && (fds.revents & libc::POLLIN) != 0)
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for Keyboard {
    fn read_byte(&mut self) -> io::Result<u8> {
        // Bypass std's stdin buffer so `poll` sees every pending byte
        let mut byte = 0u8;
        loop {
            let n = unsafe {
                libc::read(self.stdin.as_raw_fd(), &mut byte as *mut u8 as *mut libc::c_void, 1)
            };
            match n {
                1 => return Ok(byte),
                0 => return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed")),
                _ => {
                    let err = io::Error::last_os_error();
                    if err.kind() != io::ErrorKind::Interrupted {
                        return Err(err);
                    }
                }
            }
        }
    }

    fn read_byte_timeout(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        if self.wait_readable(timeout)? {
            self.read_byte().map(Some)
        } else {
            Ok(None)
        }
    }
}
