//! termdialog
//!
//! Shows one dialog on the terminal and prints the answer once the
//! terminal has been restored. Exits with status 1 when the dialog is
//! cancelled.

mod cli;

use std::fs::OpenOptions;
use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

use termdialog::{
    Console, DialogOutcome, EntryDialog, FilePicker, Geometry, KeyDecoder, Keyboard,
    ListDialog, MessageDialog, Result, Surface,
};

use cli::{Args, Dialog};

fn init_logging(args: &Args) -> io::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    // The terminal is in raw mode, so records go to a file only
    let log_file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

/// Dialog size: the command line wins, otherwise a per-dialog default
fn geometry(args: &Args, console: &Console, height: u16, width: u16) -> Geometry {
    let (rows, cols) = console.size();
    Geometry::centered(
        rows,
        cols,
        args.height.unwrap_or(height),
        args.width.unwrap_or(width),
    )
}

/// Run the dialog and return what to print, or `None` if cancelled
fn run(args: &Args) -> Result<Option<String>> {
    let mut console = Console::new()?;
    let mut keys = Keyboard::new();
    let decoder = KeyDecoder::new().with_escape_timeout(Duration::from_millis(args.escape_ms));

    let answer = match &args.dialog {
        Dialog::Message { common, text } => {
            let buttons = common.buttons_or(&["OK"]);
            let mut dialog = MessageDialog::new(geometry(args, &console, 8, 50), common.title.as_str())
                .with_decoder(decoder);
            match dialog.show(&mut console, &mut keys, &buttons, text, common.default)? {
                DialogOutcome::Confirmed { button, .. } => Some(buttons[button].clone()),
                DialogOutcome::Cancelled => None,
            }
        }
        Dialog::List { common, start, items } => {
            let buttons = common.buttons_or(&["OK", "Cancel"]);
            let (rows, cols) = console.size();
            let mut dialog = ListDialog::new(
                geometry(args, &console, rows.saturating_sub(4), cols.saturating_sub(4)),
                common.title.as_str(),
            )
            .with_decoder(decoder);
            match dialog.show(&mut console, &mut keys, &buttons, items, common.default, *start)? {
                DialogOutcome::Confirmed { value, .. } => Some(items[value].clone()),
                DialogOutcome::Cancelled => None,
            }
        }
        Dialog::Entry { common, prompt } => {
            let buttons = common.buttons_or(&["OK", "Cancel"]);
            let mut dialog = EntryDialog::new(geometry(args, &console, 4, 70), common.title.as_str())
                .with_decoder(decoder);
            dialog.show(&mut console, &mut keys, &buttons, prompt, common.default)?.into_value()
        }
        Dialog::Open { dir } => {
            let (rows, cols) = console.size();
            let mut picker = FilePicker::new(geometry(
                args,
                &console,
                rows.saturating_sub(4),
                cols.saturating_sub(4),
            ))
            .with_decoder(decoder);
            picker
                .pick(&mut console, &mut keys, dir)?
                .map(|path| path.display().to_string())
        }
    };
    Ok(answer)
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_logging(&args) {
        eprintln!("termdialog: cannot open log file: {}", e);
        return ExitCode::from(2);
    }
    info!("starting termdialog");

    // The console is dropped inside `run`, so the terminal is back to
    // normal before anything is printed.
    match run(&args) {
        Ok(Some(answer)) => {
            println!("{}", answer);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            info!("cancelled");
            ExitCode::from(1)
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("termdialog: {}", e);
            ExitCode::from(2)
        }
    }
}
