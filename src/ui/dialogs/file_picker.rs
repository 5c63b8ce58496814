//! "Open Program File" directory browser.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Result;
use crate::input::{ByteSource, KeyDecoder};
use crate::screen::Surface;
use crate::ui::frame::Geometry;

use super::ListDialog;

const OPEN: usize = 0;

/// Names in `dir` for the picker: hidden entries skipped, `..` added, sorted
pub fn list_directory(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = vec!["..".to_string()];
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        match entry.file_name().into_string() {
            Ok(name) if !name.starts_with('.') => names.push(name),
            Ok(_) => {}
            Err(raw) => debug!("skipping non UTF-8 name {:?}", raw),
        }
    }
    names.sort();
    Ok(names)
}

pub struct FilePicker {
    dialog: ListDialog,
}

impl FilePicker {
    pub fn new(geometry: Geometry) -> Self {
        Self { dialog: ListDialog::new(geometry, "Open Program File") }
    }

    pub fn with_decoder(mut self, decoder: KeyDecoder) -> Self {
        self.dialog = self.dialog.with_decoder(decoder);
        self
    }

    /// Browse from `start_dir` until a file is opened. Directories are
    /// entered in place. Returns `None` on Cancel or Escape.
    pub fn pick(
        &mut self,
        surface: &mut dyn Surface,
        keys: &mut dyn ByteSource,
        start_dir: &Path,
    ) -> Result<Option<PathBuf>> {
        let mut cwd = start_dir.to_path_buf();
        loop {
            let names = list_directory(&cwd)?;
            let outcome = self.dialog.show(surface, keys, &["Open", "Cancel"], &names, OPEN, 0)?;
            let index = match (outcome.button(), outcome.into_value()) {
                (Some(OPEN), Some(index)) => index,
                _ => return Ok(None),
            };

            let chosen = cwd.join(&names[index]);
            if chosen.is_dir() {
                cwd = chosen.canonicalize().unwrap_or(chosen);
                debug!("entering {}", cwd.display());
                continue;
            }
            info!("opening {}", chosen.display());
            return Ok(Some(chosen));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::screen::Screen;

    /// Scratch directory removed on drop
    struct Scratch(PathBuf);

    impl Scratch {
        fn new(tag: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("termdialog-{}-{}", tag, std::process::id()));
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(dir.join("sub")).unwrap();
            fs::write(dir.join("b.ngc"), "G0 X0\n").unwrap();
            fs::write(dir.join("a.ngc"), "G1 X1\n").unwrap();
            fs::write(dir.join(".hidden"), "").unwrap();
            fs::write(dir.join("sub").join("part.ngc"), "M2\n").unwrap();
            Self(dir)
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn picker() -> FilePicker {
        FilePicker::new(Geometry::new(0, 0, 10, 40))
    }

    #[test]
    fn test_listing_skips_hidden_and_sorts() {
        let scratch = Scratch::new("list");
        let names = list_directory(&scratch.0).unwrap();
        assert_eq!(names, vec!["..", "a.ngc", "b.ngc", "sub"]);
    }

    #[test]
    fn test_listing_missing_dir_fails() {
        let missing = std::env::temp_dir().join("termdialog-does-not-exist-here");
        assert!(list_directory(&missing).is_err());
    }

    #[test]
    fn test_pick_file() {
        let scratch = Scratch::new("file");
        let mut screen = Screen::new(24, 80);
        // "..", "a.ngc", "b.ngc", "sub": two downs lands on b.ngc
        let mut keys = ScriptedInput::new(b"\x1b[B\x1b[B\n");
        let picked = picker().pick(&mut screen, &mut keys, &scratch.0).unwrap();
        assert_eq!(picked, Some(scratch.0.join("b.ngc")));
    }

    #[test]
    fn test_descend_into_directory() {
        let scratch = Scratch::new("descend");
        let mut screen = Screen::new(24, 80);
        // Jump to "sub", enter it, then pick the second entry there
        let mut keys = ScriptedInput::new(b"s\n\x1b[B\n");
        let picked = picker().pick(&mut screen, &mut keys, &scratch.0).unwrap().unwrap();
        assert_eq!(picked.file_name().and_then(|n| n.to_str()), Some("part.ngc"));
        assert!(picked.is_file());
    }

    #[test]
    fn test_cancel_button_and_escape() {
        let scratch = Scratch::new("cancel");
        let mut screen = Screen::new(24, 80);
        let mut keys = ScriptedInput::new(b"\x1b[C\n");
        assert_eq!(picker().pick(&mut screen, &mut keys, &scratch.0).unwrap(), None);

        let mut keys = ScriptedInput::new(b"\x1b\x1b");
        assert_eq!(picker().pick(&mut screen, &mut keys, &scratch.0).unwrap(), None);
    }
}
