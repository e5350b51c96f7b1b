//! Rotary control and click input model
//!
//! The panel encoder feeds raw detents into a `ControlDial`. In control
//! mode the dial maps detents onto a value with a configurable per-detent
//! step: `value = base + counter * step`. Detents accumulate in the
//! counter between polls, so the screen sees one coalesced delta per tick
//! however fast the operator spins.
//!
//! `set_value` force-writes the base (after clamping, or to resync with
//! an externally changed value) and `reset_counter` zeroes the
//! accumulator so future detents are relative to the new base.

/// Rotary encoder mapped onto a stepped value
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlDial {
    /// Value the dial was last seeded/resynced to
    base: f32,
    /// Value change per encoder detent
    step: f32,
    /// Detents accumulated since the last reset
    counter: i32,
    /// Counter position at the last `take_change` poll
    polled: i32,
}

impl ControlDial {
    /// Create a dial with a 1.0 step and no accumulated detents
    pub fn new() -> Self {
        Self {
            base: 0.0,
            step: 1.0,
            counter: 0,
            polled: 0,
        }
    }

    /// Enter control mode with the given per-detent step
    ///
    /// Clears any accumulated detents; the caller seeds the value next.
    pub fn enter_control_mode(&mut self, step: f32) {
        self.step = step;
        self.counter = 0;
        self.polled = 0;
    }

    /// Feed raw detents from the encoder (positive = clockwise)
    pub fn turn(&mut self, detents: i32) {
        self.counter += detents;
    }

    /// Whether the dial moved since the last poll; consumes the change
    pub fn take_change(&mut self) -> bool {
        let moved = self.counter != self.polled;
        self.polled = self.counter;
        moved
    }

    /// Current dial value
    pub fn value(&self) -> f32 {
        self.base + self.counter as f32 * self.step
    }

    /// Force-write the base value (accumulated detents stay applied)
    pub fn set_value(&mut self, value: f32) {
        self.base = value;
    }

    /// Zero the delta accumulator so future detents are relative to base
    pub fn reset_counter(&mut self) {
        self.counter = 0;
        self.polled = 0;
    }
}

/// The input surface a screen sees each tick: the dial plus a click latch
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelInput {
    /// Rotary control in control mode
    pub dial: ControlDial,
    clicked: bool,
}

impl PanelInput {
    /// Create an idle input surface
    pub fn new() -> Self {
        Self {
            dial: ControlDial::new(),
            clicked: false,
        }
    }

    /// Latch a click event (called from the button driver)
    pub fn press(&mut self) {
        self.clicked = true;
    }

    /// Whether the button was clicked since the last poll; consumes it
    pub fn take_click(&mut self) -> bool {
        core::mem::take(&mut self.clicked)
    }
}
