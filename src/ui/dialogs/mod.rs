//! Modal dialogs
//!
//! Every dialog runs through `run_dialog`, which owns the button row and
//! the select/escape keys. A dialog only supplies its payload.

mod dialog_controller;
mod entry;
mod file_picker;
mod list;
mod message;

pub use dialog_controller::{run_dialog, DialogController, DialogOutcome};
pub use entry::EntryDialog;
pub use file_picker::{list_directory, FilePicker};
pub use list::ListDialog;
pub use message::MessageDialog;
