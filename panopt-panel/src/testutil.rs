//! Mock collaborators for exercising the screen without hardware

use std::string::{String as StdString, ToString};
use std::vec::Vec as StdVec;

use heapless::Vec;

use panopt_core::command::CommandSink;
use panopt_core::query::{
    ControllerInfo, FanState, PlaybackProgress, StateQuery, TemperatureReading, MAX_CONTROLLERS,
};
use panopt_display::backend::{DisplayBackend, DisplayError, Glyph, Lamp};

/// Scriptable machine state
pub struct MockState {
    pub controllers: Vec<ControllerInfo, MAX_CONTROLLERS>,
    pub temps: StdVec<(u16, TemperatureReading)>,
    pub fan: Option<FanState>,
    pub playback: Option<PlaybackProgress>,
    pub extruder: Option<f32>,
    pub network: Option<[u8; 4]>,
    pub position: [f32; 3],
    pub speed_override: f32,
    pub halted: bool,
    pub suspended: bool,
    pub playing: bool,
    pub queue_idle: bool,
    pub message: Option<StdString>,
    pub extruder_display: bool,
}

impl MockState {
    pub fn new() -> Self {
        Self {
            controllers: Vec::new(),
            temps: StdVec::new(),
            fan: None,
            playback: None,
            extruder: None,
            network: None,
            position: [0.0; 3],
            speed_override: 100.0,
            halted: false,
            suspended: false,
            playing: false,
            queue_idle: true,
            message: None,
            extruder_display: false,
        }
    }

    /// Add a controller together with its current reading
    pub fn add_controller(&mut self, id: u16, designator: &str, current: f32, target: f32) {
        self.controllers
            .push(ControllerInfo::new(id, designator))
            .unwrap();
        self.temps
            .push((id, TemperatureReading { current, target }));
    }
}

impl StateQuery for MockState {
    fn controllers(&self) -> Vec<ControllerInfo, MAX_CONTROLLERS> {
        self.controllers.clone()
    }

    fn temperature(&self, id: u16) -> Option<TemperatureReading> {
        self.temps.iter().find(|(i, _)| *i == id).map(|(_, t)| *t)
    }

    fn fan(&self) -> Option<FanState> {
        self.fan
    }

    fn playback(&self) -> Option<PlaybackProgress> {
        self.playback.clone()
    }

    fn extruder_position(&self) -> Option<f32> {
        self.extruder
    }

    fn network_address(&self) -> Option<[u8; 4]> {
        self.network
    }

    fn position(&self) -> [f32; 3] {
        self.position
    }

    fn speed_override(&self) -> f32 {
        self.speed_override
    }

    fn is_halted(&self) -> bool {
        self.halted
    }

    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn is_queue_idle(&self) -> bool {
        self.queue_idle
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn extruder_display_enabled(&self) -> bool {
        self.extruder_display
    }
}

/// One recorded backend operation
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear,
    Cursor(u8, u8),
    CursorPx(u16, u16),
    Text(StdString),
    HLine(u16, u16, u16),
    VLine(u16, u16, u16),
    Box(u16, u16, u16, u16),
    FillBox(u16, u16, u16, u16),
    Glyph {
        x: u16,
        y: u16,
        src_y: u16,
        data: &'static [u8],
    },
    Flush,
}

/// Recording LCD with configurable capabilities
pub struct MockLcd {
    pub ops: StdVec<Op>,
    pub graphics: bool,
    pub full_graphics: bool,
    lamps: StdVec<(Lamp, bool)>,
}

impl MockLcd {
    pub fn text_only() -> Self {
        Self {
            ops: StdVec::new(),
            graphics: false,
            full_graphics: false,
            lamps: StdVec::new(),
        }
    }

    pub fn partial_graphics() -> Self {
        Self {
            graphics: true,
            ..Self::text_only()
        }
    }

    pub fn full_graphics() -> Self {
        Self {
            graphics: true,
            full_graphics: true,
            ..Self::text_only()
        }
    }

    /// Last state a lamp was set to, if ever
    pub fn lamp_state(&self, lamp: Lamp) -> Option<bool> {
        self.lamps
            .iter()
            .rev()
            .find(|(l, _)| *l == lamp)
            .map(|(_, on)| *on)
    }
}

impl DisplayBackend for MockLcd {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        self.ops.push(Op::Cursor(col, row));
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        self.ops.push(Op::Text(text.to_string()));
        Ok(())
    }

    fn set_lamp(&mut self, lamp: Lamp, on: bool) {
        self.lamps.push((lamp, on));
    }

    fn lamp(&self, lamp: Lamp) -> bool {
        self.lamp_state(lamp).unwrap_or(false)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.ops.push(Op::Flush);
        Ok(())
    }

    fn has_graphics(&self) -> bool {
        self.graphics
    }

    fn has_full_graphics(&self) -> bool {
        self.full_graphics
    }

    fn set_cursor_px(&mut self, x: u16, y: u16) -> Result<(), DisplayError> {
        if !self.graphics {
            return Err(DisplayError::Unsupported);
        }
        self.ops.push(Op::CursorPx(x, y));
        Ok(())
    }

    fn draw_hline(&mut self, x: u16, y: u16, length: u16) -> Result<(), DisplayError> {
        if !self.full_graphics {
            return Err(DisplayError::Unsupported);
        }
        self.ops.push(Op::HLine(x, y, length));
        Ok(())
    }

    fn draw_vline(&mut self, x: u16, y: u16, length: u16) -> Result<(), DisplayError> {
        if !self.full_graphics {
            return Err(DisplayError::Unsupported);
        }
        self.ops.push(Op::VLine(x, y, length));
        Ok(())
    }

    fn draw_box(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
        if !self.full_graphics {
            return Err(DisplayError::Unsupported);
        }
        self.ops.push(Op::Box(x, y, width, height));
        Ok(())
    }

    fn fill_box(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
        if !self.full_graphics {
            return Err(DisplayError::Unsupported);
        }
        self.ops.push(Op::FillBox(x, y, width, height));
        Ok(())
    }

    fn blt_glyph(
        &mut self,
        x: u16,
        y: u16,
        _width: u16,
        _height: u16,
        glyph: &Glyph,
        _src_x: u16,
        src_y: u16,
    ) -> Result<(), DisplayError> {
        if !self.graphics {
            return Err(DisplayError::Unsupported);
        }
        self.ops.push(Op::Glyph {
            x,
            y,
            src_y,
            data: glyph.data,
        });
        Ok(())
    }
}

/// Command sink that remembers everything submitted
pub struct Recorder {
    pub sent: StdVec<StdString>,
}

impl Recorder {
    pub fn new() -> Self {
        Self { sent: StdVec::new() }
    }
}

impl CommandSink for Recorder {
    fn submit(&mut self, command: &str) {
        self.sent.push(command.to_string());
    }
}
