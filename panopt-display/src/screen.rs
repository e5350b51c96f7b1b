//! Character screen buffer
//!
//! A 4x20 text buffer the text-mode renderer composes into before the
//! rows are pushed to the backend. Rendering into the buffer first keeps
//! the row layout testable without any display attached.

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError};

/// Number of character rows on the standard panel LCD
pub const SCREEN_ROWS: usize = 4;

/// Number of character columns on the standard panel LCD
pub const SCREEN_COLS: usize = 20;

/// Text buffer for one full screen
#[derive(Clone)]
pub struct Screen {
    lines: [String<SCREEN_COLS>; SCREEN_ROWS],
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            dirty: true,
        }
    }

    /// Clear the entire buffer
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.dirty = true;
    }

    /// Set the content of a row, truncated to the screen width
    pub fn set_line(&mut self, row: usize, text: &str) {
        if row < SCREEN_ROWS {
            self.lines[row].clear();
            let _ = self.lines[row].push_str(truncate(text, SCREEN_COLS));
            self.dirty = true;
        }
    }

    /// Write text starting at a byte column, space-padding any gap
    ///
    /// Columns are byte offsets throughout, so the return value (bytes
    /// written) composes with the column for the next field. A multibyte
    /// character straddling the column is replaced by padding rather
    /// than split.
    pub fn write_at(&mut self, row: usize, col: usize, text: &str) -> usize {
        if row >= SCREEN_ROWS || col >= SCREEN_COLS {
            return 0;
        }
        // Anything already past the column is overwritten
        if self.lines[row].len() > col {
            let mut cut = col;
            while cut > 0 && !self.lines[row].is_char_boundary(cut) {
                cut -= 1;
            }
            self.lines[row].truncate(cut);
        }
        while self.lines[row].len() < col {
            let _ = self.lines[row].push(' ');
        }
        let text = truncate(text, SCREEN_COLS - col);
        let _ = self.lines[row].push_str(text);
        self.dirty = true;
        text.len()
    }

    /// Get the content of a row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Whether the buffer changed since the last `mark_clean`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as rendered
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Push every row to the backend, space-padded to the full width
    ///
    /// Padding clears stale characters left from the previous frame.
    pub fn blit(&self, lcd: &mut impl DisplayBackend) -> Result<(), DisplayError> {
        for (row, line) in self.lines.iter().enumerate() {
            let mut padded: String<SCREEN_COLS> = String::new();
            let _ = padded.push_str(line);
            while padded.len() < SCREEN_COLS {
                let _ = padded.push(' ');
            }
            lcd.set_cursor(0, row as u8)?;
            lcd.write_text(&padded)?;
        }
        Ok(())
    }
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
