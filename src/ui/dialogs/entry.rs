//! Text entry dialog.

use crate::error::Result;
use crate::input::{ByteSource, Command, KeyDecoder};
use crate::screen::{Attr, Surface};
use crate::ui::entry_buffer::EntryBuffer;
use crate::ui::frame::{ButtonRow, DialogFrame, Geometry};
use crate::ui::wrap::wrap_lines;

use super::{run_dialog, DialogController, DialogOutcome};

/// Wrapped prompt followed by a one-line input field
pub struct EntryDialog {
    frame: DialogFrame,
    decoder: KeyDecoder,
}

/// Where the input field sits inside the dialog interior
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Field {
    row: u16,
    col: u16,
    width: u16,
}

impl Field {
    /// The field starts right after the last prompt character, or on the
    /// next row when the prompt fills its line or ends with a newline. It
    /// never moves onto the button row.
    fn after_prompt(lines: &[String], inner_width: u16, last_text_row: u16, newline: bool) -> Self {
        let (row, col) = match lines.last() {
            None => (0, 0),
            Some(last) => {
                let row = (lines.len() - 1) as u16;
                let len = last.chars().count() as u16;
                if len < inner_width && !newline {
                    (row, len)
                } else if row < last_text_row {
                    (row + 1, 0)
                } else {
                    (row, len.min(inner_width.saturating_sub(1)))
                }
            }
        };
        Self { row, col, width: inner_width.saturating_sub(col) }
    }
}

struct EntryBody {
    prompt: Vec<String>,
    field: Field,
    buffer: EntryBuffer,
}

impl DialogController for EntryBody {
    type Value = String;

    const FULL_REDRAW: bool = true;

    fn draw(&self, surface: &mut dyn Surface, frame: &DialogFrame) {
        for (row, line) in self.prompt.iter().enumerate() {
            frame.put_text(surface, row as u16, 0, line, Attr::Normal);
        }
        let shown = self.buffer.visible(self.field.width as usize);
        frame.put_text(surface, self.field.row, self.field.col, shown, Attr::Normal);
    }

    fn handle(&mut self, cmd: Command) -> bool {
        self.buffer.edit(cmd)
    }

    fn value(&self) -> String {
        self.buffer.value().to_string()
    }
}

impl EntryDialog {
    pub fn new(geometry: Geometry, title: impl Into<String>) -> Self {
        Self {
            frame: DialogFrame::new(geometry, title),
            decoder: KeyDecoder::new(),
        }
    }

    pub fn with_decoder(mut self, decoder: KeyDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// Show `prompt` and collect a line of text. Confirming returns what
    /// was typed, possibly empty.
    pub fn show<S: AsRef<str>>(
        &mut self,
        surface: &mut dyn Surface,
        keys: &mut dyn ByteSource,
        buttons: &[S],
        prompt: &str,
        default: usize,
    ) -> Result<DialogOutcome<String>> {
        let buttons = ButtonRow::new(buttons, default)?;
        let geometry = self.frame.geometry();
        geometry.validate(surface.size())?;

        let text_rows = self.frame.button_row();
        let newline = prompt.ends_with('\n');
        let prompt = wrap_lines(prompt, geometry.inner_width() as usize, text_rows as usize);
        let field = Field::after_prompt(&prompt, geometry.inner_width(), text_rows - 1, newline);
        let mut body = EntryBody { prompt, field, buffer: EntryBuffer::new() };
        run_dialog(surface, keys, &mut self.decoder, &self.frame, buttons, &mut body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::screen::Screen;

    fn interior(screen: &Screen, row: u16) -> String {
        screen.displayed_row_text(row + 1).chars().skip(1).take(18).collect::<String>().trim_end().to_string()
    }

    /// 4 rows tall like the MDI box: one prompt row and the buttons
    fn mdi() -> EntryDialog {
        EntryDialog::new(Geometry::new(0, 0, 4, 20), "MDI Command")
    }

    #[test]
    fn test_typed_text_is_returned() {
        let mut screen = Screen::new(24, 80);
        let mut keys = ScriptedInput::new(b"G10\x7f0 L2\n");
        let outcome = mdi().show(&mut screen, &mut keys, &["Send", "Cancel"], "MDI:", 0).unwrap();
        assert_eq!(outcome, DialogOutcome::Confirmed { button: 0, value: "G10 L2".to_string() });
        assert_eq!(interior(&screen, 0), "MDI:G10 L2");
    }

    #[test]
    fn test_edit_round_trip() {
        let mut screen = Screen::new(24, 80);
        let mut keys = ScriptedInput::new(b"G10\x080\n");
        let outcome = mdi().show(&mut screen, &mut keys, &["Send"], "MDI:", 0).unwrap();
        assert_eq!(outcome.into_value().as_deref(), Some("G10"));
    }

    #[test]
    fn test_escape_discards_text() {
        let mut screen = Screen::new(24, 80);
        let mut keys = ScriptedInput::new(b"G0 X1\x1b\x1bmore");
        let outcome = mdi().show(&mut screen, &mut keys, &["Send"], "MDI:", 0).unwrap();
        assert!(outcome.is_cancelled());
        // Nothing after the escape was read
        assert_eq!(keys.remaining(), 4);
    }

    #[test]
    fn test_button_choice_with_empty_text() {
        let mut screen = Screen::new(24, 80);
        let mut keys = ScriptedInput::new(b"\x1b[C\n");
        let outcome = mdi().show(&mut screen, &mut keys, &["Send", "Cancel"], "MDI:", 0).unwrap();
        assert_eq!(outcome, DialogOutcome::Confirmed { button: 1, value: String::new() });
    }

    #[test]
    fn test_long_input_scrolls_to_show_the_tail() {
        let mut screen = Screen::new(24, 80);
        let mut keys = ScriptedInput::new(b"G1 X10 Y20 Z30 F100\n");
        let outcome = mdi().show(&mut screen, &mut keys, &["Send"], "MDI:", 0).unwrap();
        assert_eq!(outcome.into_value().as_deref(), Some("G1 X10 Y20 Z30 F100"));
        // Field is 18 - 4 = 14 wide
        assert_eq!(interior(&screen, 0), "MDI:0 Y20 Z30 F100");
    }

    #[test]
    fn test_field_moves_below_a_full_prompt_line() {
        let lines = vec!["Set current pos:".to_string(), "abcdefghij".to_string()];
        assert_eq!(
            Field::after_prompt(&lines, 10, 3, false),
            Field { row: 2, col: 0, width: 10 }
        );
        assert_eq!(
            Field::after_prompt(&lines, 10, 1, false),
            Field { row: 1, col: 9, width: 1 }
        );
        assert_eq!(Field::after_prompt(&[], 10, 1, false), Field { row: 0, col: 0, width: 10 });
    }

    #[test]
    fn test_multi_line_prompt() {
        let mut screen = Screen::new(24, 80);
        let mut keys = ScriptedInput::new(b"X4.5\n");
        let mut dialog = EntryDialog::new(Geometry::new(0, 0, 6, 20), "Set Current Position");
        let outcome = dialog
            .show(&mut screen, &mut keys, &["Set", "Cancel"], "Enter axis and value\nSet:", 0)
            .unwrap();
        assert_eq!(outcome.into_value().as_deref(), Some("X4.5"));
        assert_eq!(interior(&screen, 0), "Enter axis and");
        assert_eq!(interior(&screen, 1), "value");
        assert_eq!(interior(&screen, 2), "Set:X4.5");
    }

    #[test]
    fn test_trailing_newline_puts_field_on_next_row() {
        let lines = vec!["Value:".to_string()];
        assert_eq!(Field::after_prompt(&lines, 10, 3, true), Field { row: 1, col: 0, width: 10 });
        // No row left above the buttons: stay after the text
        assert_eq!(Field::after_prompt(&lines, 10, 0, true), Field { row: 0, col: 6, width: 4 });

        let mut screen = Screen::new(24, 80);
        let mut keys = ScriptedInput::new(b"Z-1\n");
        let mut dialog = EntryDialog::new(Geometry::new(0, 0, 6, 20), "Set Current Position");
        let outcome = dialog.show(&mut screen, &mut keys, &["Set"], "New Z value:\n", 0).unwrap();
        assert_eq!(outcome.into_value().as_deref(), Some("Z-1"));
        assert_eq!(interior(&screen, 0), "New Z value:");
        assert_eq!(interior(&screen, 1), "Z-1");
    }

    #[test]
    fn test_unhandled_keys_do_not_change_the_value() {
        let mut screen = Screen::new(24, 80);
        // Delete, F5 and Ctrl+Up between typing and Enter
        let mut keys = ScriptedInput::new(b"G1\x1b[3~\x1b[15~\x1b[1;5A\n");
        let outcome = mdi().show(&mut screen, &mut keys, &["Send"], "MDI:", 0).unwrap();
        assert_eq!(outcome, DialogOutcome::Confirmed { button: 0, value: "G1".to_string() });
        assert_eq!(keys.remaining(), 0);
    }

    #[test]
    fn test_window_is_erased_on_return() {
        let mut screen = Screen::new(24, 80);
        let mut keys = ScriptedInput::new(b"G0\n");
        mdi().show(&mut screen, &mut keys, &["Send"], "MDI:", 0).unwrap();
        assert_eq!(screen.row_text(0).trim(), "");
        assert!(screen.displayed_row_text(0).starts_with("┌─MDI"));
    }
}
