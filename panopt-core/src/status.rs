//! Status line resolution
//!
//! The bottom line of the watch screen shows exactly one thing, picked by
//! strict precedence: a posted message beats a halt, a halt beats a
//! suspend, and so on down to the "ready" fallback. The network address
//! is formatted once into an inline buffer and reused until the address
//! actually changes.

use core::fmt::Write;

use heapless::String;

/// Status shown when the motion system is halted
pub const STATUS_HALTED: &str = "HALTED Reset or M999";

/// Status shown when playback is suspended
pub const STATUS_SUSPENDED: &str = "Suspended";

/// Status shown when the queue is busy but nothing is playing
pub const STATUS_PRINTING: &str = "Printing";

/// Fallback status when nothing else applies
pub const STATUS_READY: &str = "Smoothie ready";

/// Everything the status line can be resolved from, already fetched
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusInputs<'a> {
    /// Externally posted panel message
    pub message: Option<&'a str>,
    /// Motion system halted
    pub halted: bool,
    /// Playback suspended
    pub suspended: bool,
    /// File currently playing
    pub playing_file: Option<&'a str>,
    /// Command queue has nothing to do
    pub queue_idle: bool,
    /// Formatted network address ("IP a.b.c.d")
    pub network: Option<&'a str>,
}

/// Resolve the status line by strict precedence
pub fn resolve<'a>(inputs: StatusInputs<'a>) -> &'a str {
    if let Some(msg) = inputs.message {
        return msg;
    }
    if inputs.halted {
        return STATUS_HALTED;
    }
    if inputs.suspended {
        return STATUS_SUSPENDED;
    }
    if let Some(file) = inputs.playing_file {
        return file;
    }
    if !inputs.queue_idle {
        return STATUS_PRINTING;
    }
    inputs.network.unwrap_or(STATUS_READY)
}

/// Cached "IP a.b.c.d" string, reformatted only when the address changes
///
/// Lives inline in the controller; there is no heap allocation to manage
/// and nothing to free on navigation away.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NetAddrCache {
    addr: Option<[u8; 4]>,
    text: String<20>,
}

impl NetAddrCache {
    /// Create an empty cache (no address seen yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the latest query result; returns true when reformatted
    pub fn update(&mut self, addr: [u8; 4]) -> bool {
        if self.addr == Some(addr) {
            return false;
        }
        self.addr = Some(addr);
        self.text.clear();
        let _ = write!(
            self.text,
            "IP {}.{}.{}.{}",
            addr[0], addr[1], addr[2], addr[3]
        );
        true
    }

    /// Formatted address, if one has ever been seen
    pub fn as_str(&self) -> Option<&str> {
        self.addr.map(|_| self.text.as_str())
    }
}
