//! Fixed-width formatting helpers for LCD fields

use core::fmt::Write;

use heapless::String;

/// Upper bound for a displayed temperature; keeps the field 3 chars wide
pub const MAX_DISPLAY_TEMP: i32 = 999;

/// Round a float to the nearest integer (core has no `round`)
pub fn round_i32(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

/// Temperature as displayed: rounded, clamped at 999, never negative width
pub fn display_temp(celsius: f32) -> i32 {
    round_i32(celsius).min(MAX_DISPLAY_TEMP)
}

/// Playback percent as displayed: rounded to an integer, clamped to 0-100
pub fn display_percent(percent: f32) -> u8 {
    round_i32(percent).clamp(0, 100) as u8
}

/// Elapsed seconds as `HH:MM:SS` with zero-padded 2-digit fields
///
/// The hours field widens past two digits rather than wrapping; any u32
/// elapsed time fits the buffer.
pub fn hms(total_secs: u32) -> String<16> {
    let mut s: String<16> = String::new();
    let _ = write!(
        s,
        "{:02}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    );
    s
}

/// Truncate a string to at most `max` bytes without splitting a char
pub fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
