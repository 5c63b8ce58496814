//! Shared modal loop for all dialogs.
//!
//! Each dialog kind supplies a `DialogController` for its payload (wrapped
//! text, a list, an entry field). The loop owns everything common: button
//! focus, select/escape, and when to repaint.

use log::{debug, trace};

use crate::error::Result;
use crate::input::{ByteSource, Command, KeyDecoder};
use crate::screen::Surface;
use crate::ui::frame::{ButtonRow, DialogFrame};

/// How a dialog ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    /// A button was chosen with Enter
    Confirmed { button: usize, value: T },
    /// Escape was pressed
    Cancelled,
}

impl<T> DialogOutcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DialogOutcome::Cancelled)
    }

    /// Index of the chosen button
    pub fn button(&self) -> Option<usize> {
        match self {
            DialogOutcome::Confirmed { button, .. } => Some(*button),
            DialogOutcome::Cancelled => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            DialogOutcome::Confirmed { value, .. } => Some(value),
            DialogOutcome::Cancelled => None,
        }
    }
}

/// Payload side of a dialog
pub trait DialogController {
    type Value;

    /// Repaint everything on each accepted key. When false only the button
    /// row is repainted after the first frame.
    const FULL_REDRAW: bool;

    /// Draw the payload inside the frame's interior
    fn draw(&self, surface: &mut dyn Surface, frame: &DialogFrame);

    /// Handle a command the loop does not own. Returns false if the command
    /// means nothing to this payload.
    fn handle(&mut self, cmd: Command) -> bool;

    /// Result handed back when a button is chosen
    fn value(&self) -> Self::Value;
}

fn paint<C: DialogController>(
    surface: &mut dyn Surface,
    frame: &DialogFrame,
    buttons: &ButtonRow,
    controller: &C,
) -> Result<()> {
    frame.draw(surface);
    controller.draw(surface, frame);
    buttons.draw(surface, frame);
    surface.refresh()?;
    Ok(())
}

/// Blank the dialog's window. Not refreshed; the caller repaints what was
/// underneath and refreshes.
fn erase(surface: &mut dyn Surface, frame: &DialogFrame) {
    let g = frame.geometry();
    surface.clear_region(g.row, g.col, g.height, g.width);
}

/// Run a dialog until the user confirms or cancels. On return the dialog's
/// window is blank; the caller repaints whatever was underneath.
pub fn run_dialog<C: DialogController>(
    surface: &mut dyn Surface,
    keys: &mut dyn ByteSource,
    decoder: &mut KeyDecoder,
    frame: &DialogFrame,
    mut buttons: ButtonRow,
    controller: &mut C,
) -> Result<DialogOutcome<C::Value>> {
    paint(surface, frame, &buttons, controller)?;

    loop {
        let cmd = decoder.next_command(keys)?;
        match cmd {
            Command::Left => buttons.prev(),
            Command::Right => buttons.next(),
            Command::Select => {
                let button = buttons.current();
                debug!("dialog confirmed with button {} ({})", button, buttons.labels()[button]);
                erase(surface, frame);
                return Ok(DialogOutcome::Confirmed { button, value: controller.value() });
            }
            Command::Escape => {
                debug!("dialog cancelled");
                erase(surface, frame);
                return Ok(DialogOutcome::Cancelled);
            }
            Command::Noop => continue,
            other => {
                if !controller.handle(other) {
                    continue;
                }
            }
        }

        trace!("redraw after {:?}", cmd);
        if C::FULL_REDRAW {
            paint(surface, frame, &buttons, controller)?;
        } else {
            buttons.draw(surface, frame);
            surface.refresh()?;
        }
    }
}
