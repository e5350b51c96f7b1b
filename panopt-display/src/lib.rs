//! Display abstraction for Panopt panels
//!
//! This crate provides:
//! - `DisplayBackend` trait covering character LCDs and graphical LCDs
//! - `Lamp` indicator LEDs and capability flags
//! - `Screen` 4x20 character buffer for the text-mode renderer
//! - Icon bitmap resources for the graphics-mode renderer
//!
//! # Architecture
//!
//! Panel hardware implements `DisplayBackend` with its driver-specific
//! code. Screens render through the trait without caring whether the
//! target is a plain character LCD, a partial-graphics display that only
//! supports glyph blits below the text area, or a full 128x64 pixel
//! display. The capability flags (`has_graphics`, `has_full_graphics`)
//! select which rendering path a screen takes; graphics calls on a
//! text-only backend answer `DisplayError::Unsupported`.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod icons;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError, Glyph, Lamp};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
