//! Read-only state queries against the surrounding firmware
//!
//! The watch screen never talks to the temperature controllers, the SD
//! player, or the network stack directly. It reads everything through
//! `StateQuery`, which the host firmware implements on top of whatever
//! registry or module system it has. Every accessor is best-effort:
//! `None` means "subsystem absent or not ready", never an error.

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of temperature controllers the screen tracks
pub const MAX_CONTROLLERS: usize = 8;

/// Maximum designator length ("T", "T1", "B", "hotend2", ...)
pub const MAX_DESIGNATOR: usize = 7;

/// Maximum playback filename length the screen displays
pub const MAX_FILENAME: usize = 20;

/// Role of a temperature controller on the machine
///
/// Resolved once when the controllers are enumerated, from the
/// conventional first character of the designator ('B' bed, 'T' hot-end).
/// Per-tick code matches on the role and never re-parses the designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeaterRole {
    /// Heated bed
    Bed,
    /// Hot-end / extruder heater
    HotEnd,
    /// Chamber, PSU, or anything else; enumerable but no lamp or icon
    Other,
}

impl HeaterRole {
    /// Classify a controller by the first character of its designator
    pub fn from_designator(designator: &str) -> Self {
        match designator.as_bytes().first() {
            Some(b'B') => HeaterRole::Bed,
            Some(b'T') => HeaterRole::HotEnd,
            _ => HeaterRole::Other,
        }
    }
}

/// A configured temperature controller, as enumerated on screen entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerInfo {
    /// Opaque controller identifier used for per-tick temperature queries
    pub id: u16,
    /// Display designator ("T", "T1", "B", ...)
    pub designator: String<MAX_DESIGNATOR>,
    /// Role resolved from the designator at enumeration time
    pub role: HeaterRole,
}

impl ControllerInfo {
    /// Build a controller record, resolving the role from the designator
    pub fn new(id: u16, designator: &str) -> Self {
        let mut d: String<MAX_DESIGNATOR> = String::new();
        let _ = d.push_str(crate::format::truncate(designator, MAX_DESIGNATOR));
        let role = HeaterRole::from_designator(designator);
        Self {
            id,
            designator: d,
            role,
        }
    }
}

/// Current and target temperature of one controller
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemperatureReading {
    /// Measured temperature in degrees Celsius
    pub current: f32,
    /// Target temperature in degrees Celsius (0 = heater off)
    pub target: f32,
}

/// State of the part-cooling fan switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FanState {
    /// Whether the fan is switched on
    pub on: bool,
    /// Fan PWM value, 0-255
    pub speed: u8,
}

/// Progress of the current SD/file playback
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaybackProgress {
    /// Seconds since playback started
    pub elapsed_secs: u32,
    /// Percent complete; may be fractional, displayed as an integer
    pub percent: f32,
    /// Name of the file being played
    pub filename: String<MAX_FILENAME>,
}

/// Best-effort read access to the subsystems the watch screen displays
pub trait StateQuery {
    /// Enumerate configured temperature controllers, in display order.
    /// An empty list is valid ("no heaters configured").
    fn controllers(&self) -> Vec<ControllerInfo, MAX_CONTROLLERS>;

    /// Current/target temperature for one controller
    fn temperature(&self, id: u16) -> Option<TemperatureReading>;

    /// Fan switch state; `None` when no fan is configured
    fn fan(&self) -> Option<FanState>;

    /// Playback progress; `None` when nothing is playing from SD
    fn playback(&self) -> Option<PlaybackProgress>;

    /// Current extruder position in millimeters
    fn extruder_position(&self) -> Option<f32>;

    /// Device network address; `None` when no network is up
    fn network_address(&self) -> Option<[u8; 4]>;

    /// Current machine position, X/Y/Z in millimeters
    fn position(&self) -> [f32; 3];

    /// Authoritative speed override in percent (may change via M220)
    fn speed_override(&self) -> f32;

    /// Motion system is halted and needs a reset
    fn is_halted(&self) -> bool;

    /// Playback is suspended (M600 or pause)
    fn is_suspended(&self) -> bool;

    /// A file is currently playing
    fn is_playing(&self) -> bool;

    /// The command conveyor has nothing queued
    fn is_queue_idle(&self) -> bool;

    /// Externally posted panel message, if any
    fn message(&self) -> Option<&str>;

    /// Panel option: show extruder position instead of X/Y while playing
    fn extruder_display_enabled(&self) -> bool {
        false
    }
}
