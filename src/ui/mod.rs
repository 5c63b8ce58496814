//! Dialog building blocks

pub mod dialogs;
pub mod entry_buffer;
pub mod frame;
pub mod viewport;
pub mod wrap;

pub use dialogs::{DialogOutcome, EntryDialog, FilePicker, ListDialog, MessageDialog};
pub use frame::{ButtonRow, DialogFrame, Geometry};
pub use viewport::ListViewport;
pub use wrap::{wrap, wrap_lines};
