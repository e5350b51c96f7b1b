//! Display backend trait
//!
//! One trait covers every LCD the panel supports. Character operations
//! are mandatory; the pixel-level operations have default implementations
//! answering `Unsupported`, which a text-only driver simply keeps. The
//! renderer consults the capability flags before taking a graphics path,
//! so a well-behaved screen never hits those defaults.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display
    Communication,
    /// Coordinates or dimensions outside the panel
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
    /// Pixel operation on a display without graphics support
    Unsupported,
}

/// Indicator LEDs some panels carry next to the LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lamp {
    /// Bed heater has a target set
    BedOn,
    /// Any hot-end has a target set
    HotendOn,
    /// Anything on the machine reads over the "hot" threshold
    Hot,
    /// Part-cooling fan is on
    FanOn,
}

/// A fixed-size monochrome bitmap resource
///
/// `data` is row-major, one bit per pixel, `stride` bytes per row. Blits
/// may take a window out of a taller strip via the source offsets.
#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    /// Bitmap width in pixels
    pub width: u16,
    /// Bitmap height in pixels
    pub height: u16,
    /// Bytes per bitmap row
    pub stride: usize,
    /// Packed pixel data, MSB first within each byte
    pub data: &'static [u8],
}

/// Hardware-agnostic rendering target for panel screens
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the text cursor, in character cells (col, row)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Write text at the current cursor, advancing it
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Set an indicator lamp; ignored by panels without lamps
    fn set_lamp(&mut self, lamp: Lamp, on: bool);

    /// Read back an indicator lamp state
    fn lamp(&self, lamp: Lamp) -> bool {
        let _ = lamp;
        false
    }

    /// Push any buffered content to the hardware
    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    /// Display supports at least glyph blits and pixel cursor placement
    fn has_graphics(&self) -> bool {
        false
    }

    /// Display supports the full pixel surface (lines, boxes, fills)
    fn has_full_graphics(&self) -> bool {
        false
    }

    /// Move the text cursor to a pixel position
    fn set_cursor_px(&mut self, x: u16, y: u16) -> Result<(), DisplayError> {
        let _ = (x, y);
        Err(DisplayError::Unsupported)
    }

    /// Draw a horizontal line
    fn draw_hline(&mut self, x: u16, y: u16, length: u16) -> Result<(), DisplayError> {
        let _ = (x, y, length);
        Err(DisplayError::Unsupported)
    }

    /// Draw a vertical line
    fn draw_vline(&mut self, x: u16, y: u16, length: u16) -> Result<(), DisplayError> {
        let _ = (x, y, length);
        Err(DisplayError::Unsupported)
    }

    /// Draw a rectangle outline
    fn draw_box(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
        let _ = (x, y, width, height);
        Err(DisplayError::Unsupported)
    }

    /// Fill a rectangle
    fn fill_box(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
        let _ = (x, y, width, height);
        Err(DisplayError::Unsupported)
    }

    /// Blit a `width` x `height` window of a glyph at pixel (x, y)
    ///
    /// The source window starts at (`src_x`, `src_y`) inside the bitmap;
    /// icon strips stack several glyphs and select one via `src_y`.
    #[allow(clippy::too_many_arguments)]
    fn blt_glyph(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        glyph: &Glyph,
        src_x: u16,
        src_y: u16,
    ) -> Result<(), DisplayError> {
        let _ = (x, y, width, height, glyph, src_x, src_y);
        Err(DisplayError::Unsupported)
    }
}
