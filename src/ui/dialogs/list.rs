//! List selection dialog.

use crate::error::{DialogError, Result};
use crate::input::{ByteSource, Command, KeyDecoder};
use crate::screen::{Attr, Surface};
use crate::ui::frame::{ButtonRow, DialogFrame, Geometry};
use crate::ui::viewport::ListViewport;

use super::{run_dialog, DialogController, DialogOutcome};

/// Marker drawn in place of entries scrolled out of view
const MORE: &str = "...";

/// Scrollable single-select list above a row of buttons. Arrow keys, page
/// keys and home/end move the highlight; typing a letter jumps to the next
/// entry starting with it.
pub struct ListDialog {
    frame: DialogFrame,
    decoder: KeyDecoder,
}

struct ListBody {
    labels: Vec<String>,
    viewport: ListViewport,
}

impl DialogController for ListBody {
    type Value = usize;

    const FULL_REDRAW: bool = true;

    fn draw(&self, surface: &mut dyn Surface, frame: &DialogFrame) {
        let window = self.viewport.window();
        let mut row = 0u16;
        if window.more_above {
            frame.put_text(surface, row, 0, MORE, Attr::Normal);
            row += 1;
        }
        for index in window.start..window.start + window.rows {
            let attr = if index == self.viewport.cursor() { Attr::Reversed } else { Attr::Normal };
            frame.put_text(surface, row, 0, &self.labels[index], attr);
            row += 1;
        }
        if window.more_below {
            // Bottom marker sits on the last list row, just above the buttons
            frame.put_text(surface, frame.button_row().saturating_sub(1), 0, MORE, Attr::Normal);
        }
    }

    fn handle(&mut self, cmd: Command) -> bool {
        self.viewport.navigate(cmd, &self.labels)
    }

    fn value(&self) -> usize {
        self.viewport.cursor()
    }
}

impl ListDialog {
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

    /// Show `items` with the highlight on `start_index`. Confirming returns
    /// the index of the highlighted item. An empty list is refused with
    /// [`DialogError::EmptyList`] before anything is drawn.
    pub fn show<B: AsRef<str>, I: AsRef<str>>(
        &mut self,
        surface: &mut dyn Surface,
        keys: &mut dyn ByteSource,
        buttons: &[B],
        items: &[I],
        default: usize,
        start_index: usize,
    ) -> Result<DialogOutcome<usize>> {
        let buttons = ButtonRow::new(buttons, default)?;
        self.frame.geometry().validate(surface.size())?;
        if items.is_empty() {
            return Err(DialogError::EmptyList);
        }

        let labels: Vec<String> = items.iter().map(|i| i.as_ref().to_string()).collect();
        let capacity = self.frame.button_row() as usize;
        let mut body = ListBody {
            viewport: ListViewport::new(labels.len(), capacity, start_index),
            labels,
        };
        run_dialog(surface, keys, &mut self.decoder, &self.frame, buttons, &mut body)
    }
}
