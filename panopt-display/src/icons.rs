//! Icon bitmap resources for the graphics-mode watch screen
//!
//! All bitmaps are monochrome, row-major, MSB-first. The 16x16 icons come
//! in off/on pairs: the renderer always blits the off glyph and overdraws
//! the on glyph when the subsystem is active. `STATUS_STRIP` stacks five
//! 16x16 glyphs (three hot-ends, bed, fan) for partial-graphics displays
//! that can only blit below the text area.

use crate::backend::Glyph;

const HOT_OFF_DATA: [u8; 32] = [
    0x00, 0x00, 0x01, 0x80, 0x02, 0x40, 0x02, 0x40, //
    0x04, 0x20, 0x04, 0x20, 0x08, 0x10, 0x08, 0x10, //
    0x10, 0x08, 0x10, 0x08, 0x10, 0x08, 0x08, 0x10, //
    0x04, 0x20, 0x03, 0xc0, 0x01, 0x80, 0x00, 0x00,
];

const HOT_ON_DATA: [u8; 32] = [
    0x00, 0x00, 0x01, 0x80, 0x03, 0xc0, 0x03, 0xc0, //
    0x07, 0xe0, 0x07, 0xe0, 0x0f, 0xf0, 0x0f, 0xf0, //
    0x1f, 0xf8, 0x1f, 0xf8, 0x1f, 0xf8, 0x0f, 0xf0, //
    0x07, 0xe0, 0x03, 0xc0, 0x01, 0x80, 0x00, 0x00,
];

const BED_OFF_DATA: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x7f, 0xfe, 0x40, 0x02, //
    0x40, 0x02, 0x7f, 0xfe, 0x00, 0x00, 0x00, 0x00,
];

const BED_ON_DATA: [u8; 32] = [
    0x00, 0x00, 0x12, 0x48, 0x12, 0x48, 0x24, 0x90, //
    0x24, 0x90, 0x12, 0x48, 0x12, 0x48, 0x24, 0x90, //
    0x24, 0x90, 0x00, 0x00, 0x7f, 0xfe, 0x7f, 0xfe, //
    0x7f, 0xfe, 0x7f, 0xfe, 0x00, 0x00, 0x00, 0x00,
];

const FAN_OFF_DATA: [u8; 32] = [
    0x07, 0xe0, 0x18, 0x18, 0x20, 0x04, 0x40, 0x02, //
    0x40, 0x02, 0x80, 0x01, 0x80, 0x01, 0x81, 0x81, //
    0x81, 0x81, 0x80, 0x01, 0x80, 0x01, 0x40, 0x02, //
    0x40, 0x02, 0x20, 0x04, 0x18, 0x18, 0x07, 0xe0,
];

const FAN_ON_DATA: [u8; 32] = [
    0x07, 0xe0, 0x18, 0x18, 0x23, 0x04, 0x47, 0x02, //
    0x47, 0x82, 0x83, 0xc1, 0x80, 0xe1, 0x9d, 0xb9, //
    0x9d, 0xb9, 0x87, 0x01, 0x83, 0xc1, 0x41, 0xe2, //
    0x40, 0xe2, 0x20, 0xc4, 0x18, 0x18, 0x07, 0xe0,
];

const TIME_DATA: [u8; 8] = [
    0x3c, 0x42, 0x91, 0x91, 0x9d, 0x81, 0x42, 0x3c,
];

const FEED_RATE_DATA: [u8; 8] = [
    0x00, 0x7e, 0x40, 0x7c, 0x40, 0x40, 0x40, 0x00,
];

const FLASH_DATA: [u8; 8] = [
    0x06, 0x0c, 0x18, 0x3e, 0x0c, 0x18, 0x30, 0x20,
];

const SPEED_DATA: [u8; 8] = [
    0x00, 0x08, 0x0c, 0x7e, 0x7e, 0x0c, 0x08, 0x00,
];

const fn stack5(blocks: [[u8; 32]; 5]) -> [u8; 160] {
    let mut out = [0u8; 160];
    let mut i = 0;
    while i < 5 {
        let mut j = 0;
        while j < 32 {
            out[i * 32 + j] = blocks[i][j];
            j += 1;
        }
        i += 1;
    }
    out
}

// Hot-end 1..3, bed, fan. Each glyph starts at src_y = slot * 16.
const STATUS_STRIP_DATA: [u8; 160] = stack5([
    HOT_ON_DATA,
    HOT_ON_DATA,
    HOT_ON_DATA,
    BED_ON_DATA,
    FAN_ON_DATA,
]);

/// Hot-end icon, heater off
pub static HOT_OFF: Glyph = Glyph {
    width: 16,
    height: 16,
    stride: 2,
    data: &HOT_OFF_DATA,
};

/// Hot-end icon, heater on
pub static HOT_ON: Glyph = Glyph {
    width: 16,
    height: 16,
    stride: 2,
    data: &HOT_ON_DATA,
};

/// Bed icon, heater off
pub static BED_OFF: Glyph = Glyph {
    width: 16,
    height: 16,
    stride: 2,
    data: &BED_OFF_DATA,
};

/// Bed icon, heater on
pub static BED_ON: Glyph = Glyph {
    width: 16,
    height: 16,
    stride: 2,
    data: &BED_ON_DATA,
};

/// Fan icon, fan off
pub static FAN_OFF: Glyph = Glyph {
    width: 16,
    height: 16,
    stride: 2,
    data: &FAN_OFF_DATA,
};

/// Fan icon, fan on
pub static FAN_ON: Glyph = Glyph {
    width: 16,
    height: 16,
    stride: 2,
    data: &FAN_ON_DATA,
};

/// 8x8 clock icon next to the elapsed time
pub static TIME: Glyph = Glyph {
    width: 8,
    height: 8,
    stride: 1,
    data: &TIME_DATA,
};

/// 8x8 feed-rate icon next to the speed override percent
pub static FEED_RATE: Glyph = Glyph {
    width: 8,
    height: 8,
    stride: 1,
    data: &FEED_RATE_DATA,
};

/// 8x8 flash icon next to the played percent
pub static FLASH: Glyph = Glyph {
    width: 8,
    height: 8,
    stride: 1,
    data: &FLASH_DATA,
};

/// 8x8 speed icon under the progress bar
pub static SPEED: Glyph = Glyph {
    width: 8,
    height: 8,
    stride: 1,
    data: &SPEED_DATA,
};

/// Stacked status glyph strip for partial-graphics displays
///
/// Slots top to bottom: hot-end 1, hot-end 2, hot-end 3, bed, fan.
pub static STATUS_STRIP: Glyph = Glyph {
    width: 16,
    height: 80,
    stride: 2,
    data: &STATUS_STRIP_DATA,
};

/// Pixel height of one slot in `STATUS_STRIP`
pub const STATUS_STRIP_SLOT: u16 = 16;
