//! Single-line text accumulator for entry dialogs
//!
//! Editing happens only at the end of the text. When the text is wider
//! than the field, the field shows its tail.

use crate::input::Command;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryBuffer {
    value: String,
}

impl EntryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }

    pub fn push(&mut self, ch: char) {
        self.value.push(ch);
    }

    /// Remove the last character; nothing happens on an empty buffer
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Apply an editing command. Returns false for anything that is not
    /// typing or backspace.
    pub fn edit(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Char(b) => self.push(b as char),
            Command::Backspace => self.backspace(),
            _ => return false,
        }
        true
    }

    /// The part of the value that fits in `width` columns, right-anchored
    pub fn visible(&self, width: usize) -> &str {
        let len = self.value.chars().count();
        if len <= width {
            return &self.value;
        }
        let skip = len - width;
        match self.value.char_indices().nth(skip) {
            Some((idx, _)) => &self.value[idx..],
            None => "",
        }
    }
}
