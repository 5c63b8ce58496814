//! Dialog chrome: window geometry, border, title bar and button row

use log::warn;

use crate::error::{DialogError, Result};
use crate::screen::{Attr, Surface};

/// Smallest usable dialog: border, one content row, one button row
pub const MIN_HEIGHT: u16 = 4;
pub const MIN_WIDTH: u16 = 6;

/// Placement of a dialog window on the surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub row: u16,
    pub col: u16,
    pub height: u16,
    pub width: u16,
}

impl Geometry {
    pub fn new(row: u16, col: u16, height: u16, width: u16) -> Self {
        Self { row, col, height, width }
    }

    /// A window of the requested size centred on a `rows` x `cols`
    /// surface, shrunk to fit if needed
    pub fn centered(rows: u16, cols: u16, height: u16, width: u16) -> Self {
        let height = height.min(rows);
        let width = width.min(cols);
        Self {
            row: (rows - height) / 2,
            col: (cols - width) / 2,
            height,
            width,
        }
    }

    /// Rows inside the border
    pub fn inner_height(&self) -> u16 {
        self.height.saturating_sub(2)
    }

    /// Columns inside the border
    pub fn inner_width(&self) -> u16 {
        self.width.saturating_sub(2)
    }

    /// Check the window is big enough and lies on a surface of the given size
    pub fn validate(&self, (rows, cols): (u16, u16)) -> Result<()> {
        if self.height < MIN_HEIGHT || self.width < MIN_WIDTH {
            return Err(DialogError::GeometryTooSmall {
                height: self.height,
                width: self.width,
                min_height: MIN_HEIGHT,
                min_width: MIN_WIDTH,
            });
        }
        let fits = self.row as u32 + self.height as u32 <= rows as u32
            && self.col as u32 + self.width as u32 <= cols as u32;
        if !fits {
            return Err(DialogError::GeometryOutOfBounds {
                row: self.row,
                col: self.col,
                height: self.height,
                width: self.width,
                rows,
                cols,
            });
        }
        Ok(())
    }
}

/// Border and title of one dialog window. All drawing goes through
/// interior coordinates and is clipped at the border.
#[derive(Clone, Debug)]
pub struct DialogFrame {
    geometry: Geometry,
    title: String,
}

impl DialogFrame {
    pub fn new(geometry: Geometry, title: impl Into<String>) -> Self {
        Self { geometry, title: title.into() }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Interior row used by the button row
    pub fn button_row(&self) -> u16 {
        self.geometry.inner_height().saturating_sub(1)
    }

    /// Erase the window and draw border and title
    pub fn draw(&self, surface: &mut dyn Surface) {
        let g = self.geometry;
        surface.clear_region(g.row, g.col, g.height, g.width);

        let bottom = g.row + g.height - 1;
        let right = g.col + g.width - 1;
        surface.put_char(g.row, g.col, '┌', Attr::Normal);
        surface.put_char(g.row, right, '┐', Attr::Normal);
        surface.put_char(bottom, g.col, '└', Attr::Normal);
        surface.put_char(bottom, right, '┘', Attr::Normal);
        for c in g.col + 1..right {
            surface.put_char(g.row, c, '─', Attr::Normal);
            surface.put_char(bottom, c, '─', Attr::Normal);
        }
        for r in g.row + 1..bottom {
            surface.put_char(r, g.col, '│', Attr::Normal);
            surface.put_char(r, right, '│', Attr::Normal);
        }

        // Title sits on the top border, two columns in
        let room = g.width.saturating_sub(4) as usize;
        let title: String = self.title.chars().take(room).collect();
        surface.put_str(g.row, g.col + 2, &title, Attr::Reversed);
    }

    /// Write text at an interior position, clipped at the right border
    pub fn put_text(&self, surface: &mut dyn Surface, row: u16, col: u16, text: &str, attr: Attr) {
        let g = self.geometry;
        if row >= g.inner_height() || col >= g.inner_width() {
            return;
        }
        let room = (g.inner_width() - col) as usize;
        let clipped: String = text.chars().take(room).collect();
        surface.put_str(g.row + 1 + row, g.col + 1 + col, &clipped, attr);
    }

    /// Blank one interior row
    pub fn clear_row(&self, surface: &mut dyn Surface, row: u16) {
        let g = self.geometry;
        if row < g.inner_height() {
            surface.clear_region(g.row + 1 + row, g.col + 1, 1, g.inner_width());
        }
    }
}

/// Labels along the bottom of a dialog with one focused button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonRow {
    labels: Vec<String>,
    current: usize,
}

impl ButtonRow {
    /// Fails on an empty label list; an out-of-range default is clamped
    pub fn new<S: AsRef<str>>(labels: &[S], default: usize) -> Result<Self> {
        if labels.is_empty() {
            return Err(DialogError::NoButtons);
        }
        let labels: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
        let current = if default >= labels.len() {
            warn!("default button {} out of range, using {}", default, labels.len() - 1);
            labels.len() - 1
        } else {
            default
        };
        Ok(Self { labels, current })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Focus the previous button, wrapping to the last
    pub fn prev(&mut self) {
        self.current = (self.current + self.labels.len() - 1) % self.labels.len();
    }

    /// Focus the next button, wrapping to the first
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.labels.len();
    }

    /// Interior column of each `<label>`: buttons are centred in equal
    /// slots across the row
    pub fn columns(&self, inner_width: u16) -> Vec<u16> {
        let slot = inner_width as usize / self.labels.len();
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let center = i * slot + slot / 2;
                let half = (label.chars().count() + 2) / 2;
                center.saturating_sub(half) as u16
            })
            .collect()
    }

    /// Repaint the button row of `frame`
    pub fn draw(&self, surface: &mut dyn Surface, frame: &DialogFrame) {
        let row = frame.button_row();
        frame.clear_row(surface, row);
        let columns = self.columns(frame.geometry().inner_width());
        for (i, (label, col)) in self.labels.iter().zip(columns).enumerate() {
            let attr = if i == self.current { Attr::Reversed } else { Attr::Normal };
            frame.put_text(surface, row, col, &format!("<{}>", label), attr);
        }
    }
}
