//! Board-agnostic logic for the Panopt watch screen
//!
//! This crate contains everything the watch screen does that does not
//! depend on a concrete display or a concrete firmware kernel:
//!
//! - Query traits for reading subsystem state (heaters, playback, network)
//! - Command submission trait and the speed-override command format
//! - Rotary control (encoder dial) model with delta accumulation
//! - Speed-change coalescing state machine
//! - Status line precedence resolution
//! - Fixed-width formatting helpers for LCD fields
//!
//! All queries are best-effort: a subsystem that is absent or not ready
//! answers `None`, and the screen renders a documented default instead.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod format;
pub mod input;
pub mod query;
pub mod speed;
pub mod status;
