//! Command line arguments.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Show a modal dialog on the terminal and print the answer.
#[derive(Debug, Parser)]
#[command(name = "termdialog", version)]
pub struct Args {
    /// Append log records to this file. Nothing is logged without it.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Dialog height in rows, including the border.
    #[arg(long)]
    pub height: Option<u16>,

    /// Dialog width in columns, including the border.
    #[arg(long)]
    pub width: Option<u16>,

    /// How long a lone ESC waits for the rest of a key sequence.
    #[arg(long = "escape-ms", default_value_t = 50)]
    pub escape_ms: u64,

    #[command(subcommand)]
    pub dialog: Dialog,
}

#[derive(Debug, ClapArgs)]
pub struct Common {
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Button label; repeat for more buttons.
    #[arg(short, long = "button", value_name = "LABEL")]
    pub buttons: Vec<String>,

    /// Index of the button focused at start.
    #[arg(short, long, default_value_t = 0)]
    pub default: usize,
}

#[derive(Debug, Subcommand)]
pub enum Dialog {
    /// Show a message.
    Message {
        #[command(flatten)]
        common: Common,
        text: String,
    },
    /// Pick one item; prints the item.
    List {
        #[command(flatten)]
        common: Common,
        /// Index highlighted at start.
        #[arg(short, long, default_value_t = 0)]
        start: usize,
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Ask for a line of text; prints the text.
    Entry {
        #[command(flatten)]
        common: Common,
        prompt: String,
    },
    /// Browse for a file; prints its path.
    Open {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

impl Common {
    /// Buttons to show, falling back to `fallback` when none were given
    pub fn buttons_or(&self, fallback: &[&str]) -> Vec<String> {
        if self.buttons.is_empty() {
            fallback.iter().map(|s| s.to_string()).collect()
        } else {
            self.buttons.clone()
        }
    }
}
