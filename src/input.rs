//! Keystroke decoding
//!
//! Turns raw terminal bytes into the small set of logical commands the
//! dialogs understand. Cursor keys arrive as ANSI escape sequences; the
//! decoder reads exactly the bytes of one keystroke and keeps at most one
//! byte of lookahead for the next. Keys it has no command for (function
//! keys, Delete, modified arrows) decode to `Noop`.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use log::{debug, trace};

const ESC: u8 = 0x1b;
const BS: u8 = 0x08;
const DEL: u8 = 0x7f;

/// Parameter bytes kept from one CSI sequence; longer ones are still
/// consumed in full
const MAX_CSI_PARAMS: usize = 16;

/// How long to wait for the rest of an escape sequence before treating a
/// lone ESC as the escape key
pub const ESCAPE_TIMEOUT: Duration = Duration::from_millis(50);

/// Logical commands produced from keystrokes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    /// Enter / Return
    Select,
    Escape,
    PageUp,
    PageDown,
    Home,
    End,
    Backspace,
    /// Printable ASCII character, space included
    Char(u8),
    /// Unrecognised input; changes nothing
    Noop,
}

impl Command {
    /// The character carried by a `Char` command
    pub fn as_char(self) -> Option<char> {
        match self {
            Command::Char(b) => Some(b as char),
            _ => None,
        }
    }
}

/// A byte-at-a-time input stream
pub trait ByteSource {
    /// Block until a byte is available
    fn read_byte(&mut self) -> io::Result<u8>;

    /// Wait at most `timeout` for a byte
    fn read_byte_timeout(&mut self, timeout: Duration) -> io::Result<Option<u8>>;
}

/// Canned input, for driving dialogs without a terminal
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    bytes: VecDeque<u8>,
}

impl ScriptedInput {
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self { bytes: bytes.as_ref().iter().copied().collect() }
    }

    /// Bytes not consumed yet
    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl ByteSource for ScriptedInput {
    fn read_byte(&mut self) -> io::Result<u8> {
        self.bytes
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted"))
    }

    fn read_byte_timeout(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        Ok(self.bytes.pop_front())
    }
}

/// Escape-sequence decoder
#[derive(Debug)]
pub struct KeyDecoder {
    /// Byte read while probing for an optional terminator that turned out
    /// to start the next keystroke
    lookahead: Option<u8>,
    escape_timeout: Duration,
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self { lookahead: None, escape_timeout: ESCAPE_TIMEOUT }
    }

    pub fn with_escape_timeout(mut self, timeout: Duration) -> Self {
        self.escape_timeout = timeout;
        self
    }

    /// Read one keystroke and decode it. Blocks for the first byte.
    pub fn next_command<S: ByteSource + ?Sized>(&mut self, src: &mut S) -> io::Result<Command> {
        let byte = match self.lookahead.take() {
            Some(b) => b,
            None => src.read_byte()?,
        };

        let cmd = match byte {
            b'\n' | b'\r' => Command::Select,
            // Bracket keys double as home/end on keyboards without them
            b'[' => Command::Home,
            b']' => Command::End,
            ESC => self.decode_escape(src)?,
            DEL | BS => Command::Backspace,
            0x20..=0x7e => Command::Char(byte),
            _ => Command::Noop,
        };
        trace!("decoded {:#04x} -> {:?}", byte, cmd);
        Ok(cmd)
    }

    /// Next byte of a sequence already in progress
    fn follow<S: ByteSource + ?Sized>(&mut self, src: &mut S) -> io::Result<Option<u8>> {
        if let Some(b) = self.lookahead.take() {
            return Ok(Some(b));
        }
        src.read_byte_timeout(self.escape_timeout)
    }

    fn decode_escape<S: ByteSource + ?Sized>(&mut self, src: &mut S) -> io::Result<Command> {
        let cmd = match self.follow(src)? {
            None | Some(ESC) => Command::Escape,
            Some(b'[') => self.decode_csi(src)?,
            Some(b'O') => self.decode_ss3(src)?,
            Some(other) => {
                debug!("unrecognised escape sequence: ESC {:#04x}", other);
                Command::Noop
            }
        };
        Ok(cmd)
    }

    /// ESC [ <parameters> <final>. The whole sequence is read before it
    /// is matched, so unknown keys never leak bytes as typed text.
    fn decode_csi<S: ByteSource + ?Sized>(&mut self, src: &mut S) -> io::Result<Command> {
        let mut params = Vec::new();
        let final_byte = loop {
            match self.follow(src)? {
                Some(b @ 0x20..=0x3f) => {
                    if params.len() < MAX_CSI_PARAMS {
                        params.push(b);
                    }
                }
                Some(b @ 0x40..=0x7e) => break Some(b),
                // Not part of any CSI sequence: the next keystroke
                Some(other) => {
                    self.lookahead = Some(other);
                    break None;
                }
                None => break None,
            }
        };

        let cmd = match (params.as_slice(), final_byte) {
            ([], Some(b'A')) => Command::Up,
            ([], Some(b'B')) => Command::Down,
            ([], Some(b'C')) => Command::Right,
            ([], Some(b'D')) => Command::Left,
            ([], Some(b'H')) => Command::Home,
            ([], Some(b'F')) => Command::End,
            // VT keys; some terminals leave off the `~`
            ([b'5'], Some(b'~') | None) => Command::PageUp,
            ([b'6'], Some(b'~') | None) => Command::PageDown,
            ([b'1'] | [b'7'], Some(b'~') | None) => Command::Home,
            ([b'4'] | [b'8'], Some(b'~') | None) => Command::End,
            _ => {
                debug!(
                    "unrecognised CSI sequence: ESC [ {:?} {:?}",
                    String::from_utf8_lossy(&params),
                    final_byte.map(char::from)
                );
                Command::Noop
            }
        };
        Ok(cmd)
    }

    /// ESC O <final>
    fn decode_ss3<S: ByteSource + ?Sized>(&mut self, src: &mut S) -> io::Result<Command> {
        let cmd = match self.follow(src)? {
            Some(b'H') => Command::Home,
            Some(b'F') => Command::End,
            Some(b'A') => Command::Up,
            Some(b'B') => Command::Down,
            Some(b'C') => Command::Right,
            Some(b'D') => Command::Left,
            other => {
                debug!("unrecognised SS3 sequence: ESC O {:?}", other);
                Command::Noop
            }
        };
        Ok(cmd)
    }
}
