//! The Panopt watch screen
//!
//! One screen of the panel's menu system: a status/watch view that polls
//! the machine's subsystems at a fixed tick cadence and renders them to
//! whatever LCD the panel carries, while relaying the rotary
//! speed-override input back into the command stream.
//!
//! The host menu loop drives the three hooks:
//!
//! - [`WatchScreen::on_enter`] when the user navigates in
//! - [`WatchScreen::on_refresh`] every UI tick (~20/s)
//! - [`WatchScreen::on_main_loop`] from the lower-frequency command hook
//!
//! All collaborators are injected: state comes in through
//! `panopt_core::query::StateQuery`, committed speed changes go out
//! through `panopt_core::command::CommandSink`, and rendering targets a
//! `panopt_display::DisplayBackend`.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

mod graphics;
mod text;
pub mod watch;

#[cfg(test)]
pub(crate) mod testutil;

pub use watch::{Action, WatchScreen};
