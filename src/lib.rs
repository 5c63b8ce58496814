//! Modal dialogs for character-grid terminals
//!
//! Message boxes, scrolling list boxes and single-line entry boxes drawn
//! into any [`Surface`] and driven by keystrokes from any [`ByteSource`].
//! [`Console`] and [`Keyboard`] provide them for a real terminal; [`Screen`] and
//! [`ScriptedInput`] stand in for them off-line.

pub mod console;
pub mod error;
pub mod input;
pub mod screen;
pub mod terminal;
pub mod ui;

pub use console::Console;
pub use error::{DialogError, Result};
pub use input::{ByteSource, Command, KeyDecoder, ScriptedInput};
pub use screen::{Attr, Screen, Surface};
pub use terminal::{Keyboard, Terminal};
pub use ui::{DialogOutcome, EntryDialog, FilePicker, Geometry, ListDialog, MessageDialog};
