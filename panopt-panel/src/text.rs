//! Text-mode rendering: four fixed rows on the 4x20 LCD
//!
//! Row 0: temperature readings, cycling in pairs when more than two
//!        controllers are configured
//! Row 1: position (X/Y/Z, or extruder + Z while playing)
//! Row 2: speed override, elapsed time, played percent
//! Row 3: status line, right-aligned in 19 characters

use core::fmt::Write;

use heapless::String;

use panopt_core::format::{display_temp, hms, round_i32, truncate};
use panopt_core::query::StateQuery;
use panopt_display::screen::Screen;

use crate::watch::{WatchScreen, CYCLE_TICKS};

/// Status column width on row 3
const STATUS_WIDTH: usize = 19;

impl WatchScreen {
    /// Compose the four text rows into a screen buffer
    pub(crate) fn render_text(&self, query: &impl StateQuery) -> Screen {
        let mut screen = Screen::new();
        self.render_temperatures(query, &mut screen);
        self.render_position(query, &mut screen);
        self.render_progress(&mut screen);
        self.render_status(query, &mut screen);
        screen
    }

    /// Row 0: `T:201/210 B:060/060 `, cycling pairs every 100 ticks
    fn render_temperatures(&self, query: &impl StateQuery, screen: &mut Screen) {
        let tm = &self.controllers;
        if tm.is_empty() {
            // No heaters configured; a blank row is valid
            return;
        }

        let mut pair = 0;
        if tm.len() > 2 {
            // More than two temps: advance the displayed pair every 5 s
            let npairs = tm.len().div_ceil(2);
            pair = (self.update_counts / CYCLE_TICKS) as usize % npairs;
        }

        let mut off = 0;
        for i in 0..2 {
            let o = i + pair * 2;
            if o >= tm.len() {
                break;
            }
            let Some(t) = query.temperature(tm[o].id) else {
                continue;
            };
            let mut field: String<12> = String::new();
            let _ = write!(
                field,
                "{}:{:03}/{:03} ",
                truncate(&tm[o].designator, 2),
                display_temp(t.current),
                round_i32(t.target)
            );
            off += screen.write_at(0, off, &field);
        }
    }

    /// Row 1: extruder + Z while playing (when enabled), else X/Y/Z
    fn render_position(&self, query: &impl StateQuery, screen: &mut Screen) {
        let extruder = if query.extruder_display_enabled() && query.is_playing() {
            query.extruder_position()
        } else {
            None
        };

        let mut line: String<20> = String::new();
        if let Some(e) = extruder {
            let _ = write!(line, "E {:.2}", e);
            screen.set_line(1, &line);
            let mut z: String<8> = String::new();
            let _ = write!(z, "Z{:7.2}", self.pos[2]);
            screen.write_at(1, 12, &z);
        } else {
            let _ = write!(
                line,
                "X{:4} Y{:4} Z{:7.2}",
                round_i32(self.pos[0]),
                round_i32(self.pos[1]),
                self.pos[2]
            );
            screen.set_line(1, &line);
        }
    }

    /// Row 2: `100%  01:01:01   45%`
    fn render_progress(&self, screen: &mut Screen) {
        let mut line: String<20> = String::new();
        let _ = write!(
            line,
            "{:3}%  {}  {:3}%",
            self.current_speed,
            hms(self.elapsed_secs),
            self.pcnt_played
        );
        screen.set_line(2, &line);
    }

    /// Row 3: status right-aligned in 19 characters
    fn render_status(&self, query: &impl StateQuery, screen: &mut Screen) {
        let mut line: String<20> = String::new();
        let _ = write!(
            line,
            "{:>width$}",
            truncate(self.status(query), STATUS_WIDTH),
            width = STATUS_WIDTH
        );
        screen.set_line(3, &line);
    }
}
