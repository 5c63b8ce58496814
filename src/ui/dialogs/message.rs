//! Message dialog.

use crate::error::Result;
use crate::input::{ByteSource, Command, KeyDecoder};
use crate::screen::{Attr, Surface};
use crate::ui::frame::{ButtonRow, DialogFrame, Geometry};
use crate::ui::wrap::wrap_lines;

use super::{run_dialog, DialogController, DialogOutcome};

/// Word-wrapped text above a row of buttons
pub struct MessageDialog {
    frame: DialogFrame,
    decoder: KeyDecoder,
}

struct MessageBody {
    lines: Vec<String>,
}

impl DialogController for MessageBody {
    type Value = ();

    // The text never changes while the dialog is up
    const FULL_REDRAW: bool = false;

    fn draw(&self, surface: &mut dyn Surface, frame: &DialogFrame) {
        for (row, line) in self.lines.iter().enumerate() {
            frame.put_text(surface, row as u16, 0, line, Attr::Normal);
        }
    }

    fn handle(&mut self, _cmd: Command) -> bool {
        false
    }

    fn value(&self) {}
}

impl MessageDialog {
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

    /// Show `text` until a button is chosen or the dialog is cancelled.
    /// Text that does not fit is cut off.
    pub fn show<S: AsRef<str>>(
        &mut self,
        surface: &mut dyn Surface,
        keys: &mut dyn ByteSource,
        buttons: &[S],
        text: &str,
        default: usize,
    ) -> Result<DialogOutcome<()>> {
        let buttons = ButtonRow::new(buttons, default)?;
        let geometry = self.frame.geometry();
        geometry.validate(surface.size())?;

        let mut body = MessageBody {
            lines: wrap_lines(
                text,
                geometry.inner_width() as usize,
                self.frame.button_row() as usize,
            ),
        };
        run_dialog(surface, keys, &mut self.decoder, &self.frame, buttons, &mut body)
    }
}
