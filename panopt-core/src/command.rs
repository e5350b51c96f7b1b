//! Command submission towards the motion pipeline
//!
//! The screen never executes anything itself. Committed speed changes
//! become a single G-code string handed to a `CommandSink`, which the
//! host firmware routes into its command queue for asynchronous
//! execution. No response is awaited.

use core::fmt::Write;

use heapless::{Deque, String};

/// Maximum length of a command the screen ever submits
pub const MAX_COMMAND: usize = 24;

/// Fire-and-forget command submission
pub trait CommandSink {
    /// Enqueue one textual command for asynchronous execution
    fn submit(&mut self, command: &str);
}

/// Format the speed-override command for a committed percent value
pub fn speed_override_command(percent: i32) -> String<MAX_COMMAND> {
    let mut cmd: String<MAX_COMMAND> = String::new();
    let _ = write!(cmd, "M220 S{}", percent);
    cmd
}

/// Small FIFO of commands a screen has queued for the main-loop flush
///
/// Screens must not submit commands from within a rendering pass, so
/// anything produced during refresh is parked here and drained from the
/// lower-frequency main-loop hook.
#[derive(Default)]
pub struct CommandQueue<const N: usize> {
    queue: Deque<String<MAX_COMMAND>, N>,
}

impl<const N: usize> CommandQueue<N> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            queue: Deque::new(),
        }
    }

    /// Queue a command; returns false when the queue is full
    pub fn push(&mut self, command: &str) -> bool {
        let mut s: String<MAX_COMMAND> = String::new();
        if s.push_str(command).is_err() {
            return false;
        }
        self.queue.push_back(s).is_ok()
    }

    /// Number of commands waiting
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether anything is waiting
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drain every queued command into the sink, oldest first
    pub fn flush(&mut self, sink: &mut impl CommandSink) {
        while let Some(cmd) = self.queue.pop_front() {
            sink.submit(&cmd);
        }
    }
}
