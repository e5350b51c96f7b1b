//! Watch screen controller
//!
//! Owns the per-tick display state and the speed-override state machine.
//! Everything here is driven by the host menu loop on a single cooperative
//! thread; the only scheduling is cadence gating (slow path every 20th
//! tick, temperature-pair cycling every 100th) so the expensive queries
//! and the command pipeline are not flooded.

use heapless::{String, Vec};

use panopt_core::command::{speed_override_command, CommandQueue, CommandSink};
use panopt_core::format::round_i32;
use panopt_core::input::PanelInput;
use panopt_core::query::{
    ControllerInfo, FanState, HeaterRole, StateQuery, MAX_CONTROLLERS, MAX_FILENAME,
};
use panopt_core::speed::SpeedChange;
use panopt_core::status::{self, NetAddrCache, StatusInputs};
use panopt_display::backend::{DisplayBackend, DisplayError, Lamp};
use panopt_display::icons;

/// Ticks between slow-path updates, about one second at 20 ticks/s
pub const SLOW_TICKS: u32 = 20;

/// Ticks each temperature pair holds on row 0, about five seconds
pub const CYCLE_TICKS: u32 = 100;

/// Lowest speed override the dial can select, percent
pub const MIN_SPEED_PERCENT: i32 = 10;

/// Speed override dial granularity, percent per detent
pub const SPEED_STEP_PERCENT: f32 = 0.5;

/// Above this reading anything on the machine counts as "hot"
pub const HOT_THRESHOLD_C: f32 = 50.0;

/// Commands a screen can park before the main-loop flush
const QUEUED_COMMANDS: usize = 4;

/// What the host menu loop should do after a refresh tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Stay on this screen
    None,
    /// The operator clicked; navigate back to the parent screen
    ExitToParent,
}

/// Per-slow-tick heater roll-up used for lamps and status icons
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct HeaterSummary {
    /// Bed heater has a target set
    pub bed_on: bool,
    /// Any hot-end has a target set
    pub hotend_on: bool,
    /// Anything reads over the hot threshold
    pub is_hot: bool,
    /// Bit per hot-end slot (enumeration order); slots 0-2 draw icons
    pub hotend_mask: u8,
}

/// The status/watch screen
pub struct WatchScreen {
    pub(crate) current_speed: i32,
    pub(crate) pos: [f32; 3],
    pub(crate) elapsed_secs: u32,
    pub(crate) pcnt_played: u8,
    pub(crate) fan: Option<FanState>,
    pub(crate) controllers: Vec<ControllerInfo, MAX_CONTROLLERS>,
    pub(crate) playing_file: String<MAX_FILENAME>,
    pub(crate) update_counts: u32,
    speed: SpeedChange,
    net: NetAddrCache,
    queue: CommandQueue<QUEUED_COMMANDS>,
}

impl Default for WatchScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchScreen {
    /// Create the screen; state is seeded on `on_enter`
    pub fn new() -> Self {
        Self {
            current_speed: 100,
            pos: [0.0; 3],
            elapsed_secs: 0,
            pcnt_played: 0,
            fan: None,
            controllers: Vec::new(),
            playing_file: String::new(),
            update_counts: 0,
            speed: SpeedChange::new(),
            net: NetAddrCache::new(),
            queue: CommandQueue::new(),
        }
    }

    /// Navigation-in hook: seed state, the dial, and the first frame
    pub fn on_enter<Q: StateQuery, B: DisplayBackend>(
        &mut self,
        query: &Q,
        lcd: &mut B,
        input: &mut PanelInput,
    ) -> Result<(), DisplayError> {
        lcd.clear()?;
        self.fetch_status(query);
        self.pos = query.position();
        self.fetch_playback(query);
        self.current_speed = round_i32(query.speed_override());
        self.controllers = query.controllers();
        self.redraw(query, lcd)?;

        input.dial.enter_control_mode(SPEED_STEP_PERCENT);
        input.dial.set_value(self.current_speed as f32);
        Ok(())
    }

    /// UI tick hook, ~20 ticks/second
    pub fn on_refresh<Q: StateQuery, B: DisplayBackend>(
        &mut self,
        query: &Q,
        lcd: &mut B,
        input: &mut PanelInput,
    ) -> Result<Action, DisplayError> {
        // Exit if the button is clicked; nothing else happens this tick
        if input.take_click() {
            return Ok(Action::ExitToParent);
        }

        // See if the speed is being changed. The floor is checked on the
        // raw dial value: 9.5% is below the floor even though it would
        // round to 10.
        if input.dial.take_change() {
            if input.dial.value() < MIN_SPEED_PERCENT as f32 {
                self.current_speed = MIN_SPEED_PERCENT;
                input.dial.set_value(MIN_SPEED_PERCENT as f32);
                input.dial.reset_counter();
            } else {
                // Flag the change for the slow tick so we don't issue
                // hundreds of M220s, but show the new value right away
                self.current_speed = round_i32(input.dial.value());
                self.speed.operator_moved();
                self.redraw(query, lcd)?;
            }
        }

        self.update_counts += 1;
        if self.update_counts % SLOW_TICKS == 0 {
            self.fetch_playback(query);
            self.pos = query.position();
            self.fetch_status(query);

            if !self.speed.commit() && self.speed.idle() {
                // Read it back in case it was changed via M220
                self.current_speed = round_i32(query.speed_override());
                input.dial.set_value(self.current_speed as f32);
                input.dial.reset_counter();
            }

            self.redraw(query, lcd)?;

            let summary = self.heater_summary(query);
            let fan_on = self.fan.map(|f| f.on).unwrap_or(false);
            lcd.set_lamp(Lamp::BedOn, summary.bed_on);
            lcd.set_lamp(Lamp::HotendOn, summary.hotend_on);
            lcd.set_lamp(Lamp::Hot, summary.is_hot);
            lcd.set_lamp(Lamp::FanOn, fan_on);

            if lcd.has_graphics() && !lcd.has_full_graphics() {
                self.draw_status_icons(lcd, &summary, fan_on)?;
            }
        }

        Ok(Action::None)
    }

    /// Command hook: issuing commands must not happen from a render pass
    pub fn on_main_loop(&mut self, commands: &mut impl CommandSink) {
        if self.speed.take_pending() {
            commands.submit(&speed_override_command(self.current_speed));
        }
        // Flush anything else the screen queued
        self.queue.flush(commands);
    }

    /// Park a command for the next main-loop flush
    pub fn queue_command(&mut self, command: &str) -> bool {
        self.queue.push(command)
    }

    /// Speed override as currently displayed, percent
    pub fn current_speed(&self) -> i32 {
        self.current_speed
    }

    /// Resolve the status line by precedence
    pub fn status<'a, Q: StateQuery>(&'a self, query: &'a Q) -> &'a str {
        status::resolve(StatusInputs {
            message: query.message(),
            halted: query.is_halted(),
            suspended: query.is_suspended(),
            playing_file: if query.is_playing() {
                Some(self.playing_file.as_str())
            } else {
                None
            },
            queue_idle: query.is_queue_idle(),
            network: self.net.as_str(),
        })
    }

    /// Render to whichever backend capability is available
    pub(crate) fn redraw<Q: StateQuery, B: DisplayBackend>(
        &self,
        query: &Q,
        lcd: &mut B,
    ) -> Result<(), DisplayError> {
        if lcd.has_full_graphics() {
            self.render_graphics(query, lcd)?;
        } else {
            // Partial-graphics displays still use the text rows; their
            // icons are drawn separately on the slow tick
            self.render_text(query).blit(lcd)?;
        }
        lcd.flush()
    }

    /// Fan state and network address; both best-effort
    fn fetch_status(&mut self, query: &impl StateQuery) {
        self.fan = query.fan();
        if let Some(addr) = query.network_address() {
            self.net.update(addr);
        }
    }

    /// Playback progress; absent playback renders as zero progress
    fn fetch_playback(&mut self, query: &impl StateQuery) {
        if let Some(p) = query.playback() {
            self.elapsed_secs = p.elapsed_secs;
            self.pcnt_played = panopt_core::format::display_percent(p.percent);
            self.playing_file = p.filename;
        } else {
            self.elapsed_secs = 0;
            self.pcnt_played = 0;
        }
    }

    /// Roll up the heaters for lamps and icons
    ///
    /// Hot-end slots advance in enumeration order whether or not the
    /// heater is on, so icon positions stay stable.
    pub(crate) fn heater_summary(&self, query: &impl StateQuery) -> HeaterSummary {
        let mut summary = HeaterSummary::default();
        let mut slot_bit: u8 = 0x01;
        for c in &self.controllers {
            let reading = query.temperature(c.id);
            if let Some(t) = reading {
                if t.current > HOT_THRESHOLD_C {
                    summary.is_hot = true;
                }
                match c.role {
                    HeaterRole::Bed => {
                        if t.target > 0.0 {
                            summary.bed_on = true;
                        }
                    }
                    HeaterRole::HotEnd => {
                        if t.target > 0.0 {
                            summary.hotend_on = true;
                            summary.hotend_mask |= slot_bit;
                        }
                    }
                    HeaterRole::Other => {}
                }
            }
            if c.role == HeaterRole::HotEnd {
                slot_bit <<= 1;
            }
        }
        summary
    }

    /// Fixed-position status icons for partial-graphics displays
    ///
    /// Only hot-end slots 0-2 have icon positions; further hot-ends are
    /// tracked in the mask but not drawn.
    fn draw_status_icons<B: DisplayBackend>(
        &self,
        lcd: &mut B,
        summary: &HeaterSummary,
        fan_on: bool,
    ) -> Result<(), DisplayError> {
        let strip = &icons::STATUS_STRIP;
        let slot = icons::STATUS_STRIP_SLOT;
        if summary.hotend_mask & 0x01 != 0 {
            lcd.blt_glyph(0, 42, 16, 16, strip, 0, 0)?;
        }
        if summary.hotend_mask & 0x02 != 0 {
            lcd.blt_glyph(27, 42, 16, 16, strip, 0, slot)?;
        }
        if summary.hotend_mask & 0x04 != 0 {
            lcd.blt_glyph(55, 42, 16, 16, strip, 0, 2 * slot)?;
        }
        if summary.bed_on {
            lcd.blt_glyph(83, 42, 16, 16, strip, 0, 3 * slot)?;
        }
        if fan_on {
            lcd.blt_glyph(111, 42, 16, 16, strip, 0, 4 * slot)?;
        }
        Ok(())
    }
}
