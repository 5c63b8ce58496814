//! Error types for dialog operations

use std::io;

use thiserror::Error;

/// Why a dialog could not be shown or finished
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("dialog needs at least one button")]
    NoButtons,

    #[error("list dialog has no entries")]
    EmptyList,

    #[error("dialog geometry {height}x{width} is smaller than the minimum {min_height}x{min_width}")]
    GeometryTooSmall {
        height: u16,
        width: u16,
        min_height: u16,
        min_width: u16,
    },

    #[error("dialog at ({row},{col}) size {height}x{width} does not fit a {rows}x{cols} surface")]
    GeometryOutOfBounds {
        row: u16,
        col: u16,
        height: u16,
        width: u16,
        rows: u16,
        cols: u16,
    },

    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DialogError>;
