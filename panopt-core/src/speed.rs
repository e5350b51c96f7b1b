//! Speed-override change coalescing
//!
//! The operator can spin the dial far faster than the command pipeline
//! should see M220s. `SpeedChange` is a two-flag machine that coalesces
//! dial movement into at most one committed change per slow tick, and at
//! most one command in flight at a time:
//!
//! - dial moved    -> `changed` set (newest value always wins)
//! - slow tick     -> `changed` promotes to `pending_issue`, one commit
//! - main loop     -> `pending_issue` consumed, one command submitted
//!
//! While neither flag is set the screen resyncs the dial from the
//! authoritative value, so an M220 issued from elsewhere shows up here.

/// Two-flag state machine for the speed-override control
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedChange {
    changed: bool,
    pending_issue: bool,
}

impl SpeedChange {
    /// Create with no change recorded and nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the operator moved the dial since the last tick
    pub fn operator_moved(&mut self) {
        self.changed = true;
    }

    /// Slow-tick commit: promote a recorded change to a pending command
    ///
    /// Returns true when a change was committed this tick. Intermediate
    /// moves within the window were already coalesced by the caller
    /// keeping only the latest value.
    pub fn commit(&mut self) -> bool {
        if self.changed {
            self.pending_issue = true;
            self.changed = false;
            true
        } else {
            false
        }
    }

    /// Whether a committed change still awaits issue from the main loop
    pub fn is_pending(&self) -> bool {
        self.pending_issue
    }

    /// Whether the dial may be resynced from the authoritative value
    ///
    /// Only when no change is recorded and none is in flight; otherwise
    /// a resync would clobber the operator's input.
    pub fn idle(&self) -> bool {
        !self.changed && !self.pending_issue
    }

    /// Main-loop consume: true exactly once per committed change
    pub fn take_pending(&mut self) -> bool {
        core::mem::take(&mut self.pending_issue)
    }
}
