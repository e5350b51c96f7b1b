//! Graphics-mode rendering: fixed 128x64 layout for full-graphics LCDs
//!
//! Layout, left to right: hot-end readout with its icon, the position
//! box, the bed readout with its icon, and the fan corner; below them
//! speed/time/played figures with their small icons and the playback
//! progress bar. Targets sit above current readings. The off icon is
//! always drawn and the on icon overdrawn when the subsystem is active,
//! so icon pixels never need clearing.

use core::fmt::Write;

use heapless::String;

use panopt_core::format::{display_temp, hms, round_i32, truncate};
use panopt_core::query::{HeaterRole, StateQuery};
use panopt_display::backend::{DisplayBackend, DisplayError, Glyph};
use panopt_display::icons;

use crate::watch::WatchScreen;

/// Progress bar width in pixels at 100%
const PROGRESS_BAR_PX: u16 = 83;

/// Degree glyph in the LCD character set
const DEGREE: char = '\u{00f8}';

impl WatchScreen {
    /// Draw the full-graphics watch layout
    pub(crate) fn render_graphics<Q: StateQuery, B: DisplayBackend>(
        &self,
        query: &Q,
        lcd: &mut B,
    ) -> Result<(), DisplayError> {
        lcd.clear()?;

        lcd.set_cursor(4, 7)?;
        print(lcd, format_args!("{}", truncate(self.status(query), 19)))?;

        // Temperature readouts pinned per role: target above, current below
        for c in &self.controllers {
            let Some(t) = query.temperature(c.id) else {
                continue;
            };
            let cur = display_temp(t.current);
            let tgt = round_i32(t.target);
            match c.role {
                HeaterRole::HotEnd => {
                    lcd.set_cursor_px(3, 1)?;
                    print(lcd, format_args!("{:03}{}", tgt, DEGREE))?;
                    lcd.set_cursor_px(3, 19)?;
                    print(lcd, format_args!("{:03}{}", cur, DEGREE))?;
                }
                HeaterRole::Bed => {
                    lcd.set_cursor_px(78, 1)?;
                    print(lcd, format_args!("{:03}{}", tgt, DEGREE))?;
                    lcd.set_cursor_px(78, 19)?;
                    print(lcd, format_args!("{:03}{}", cur, DEGREE))?;
                }
                HeaterRole::Other => {}
            }
        }

        let summary = self.heater_summary(query);

        // Fan corner: percent while running, OFF otherwise
        if let Some(fan) = self.fan {
            if fan.on {
                lcd.set_cursor_px(102, 1)?;
                print(
                    lcd,
                    format_args!("{:3}%", fan.speed as u32 * 100 / 255),
                )?;
            } else {
                lcd.set_cursor_px(105, 1)?;
                print(lcd, format_args!("OFF"))?;
            }
            blt(lcd, 107, 10, &icons::FAN_OFF)?;
            if fan.on {
                blt(lcd, 107, 10, &icons::FAN_ON)?;
            }
        }

        blt(lcd, 7, 9, &icons::HOT_OFF)?;
        if summary.hotend_on {
            blt(lcd, 7, 9, &icons::HOT_ON)?;
        }

        blt(lcd, 80, 9, &icons::BED_OFF)?;
        if summary.bed_on {
            blt(lcd, 80, 9, &icons::BED_ON)?;
        }

        // Frame around the progress bar and the position box
        lcd.draw_hline(40, 48, 84)?;
        lcd.draw_hline(40, 54, 84)?;
        lcd.draw_vline(40, 48, 7)?;
        lcd.draw_vline(124, 48, 7)?;
        lcd.draw_box(3, 27, 122, 11)?;

        lcd.set_cursor_px(11, 29)?;
        print(
            lcd,
            format_args!(
                "X{:3} Y{:3} Z {:3.2}",
                round_i32(self.pos[0]),
                round_i32(self.pos[1]),
                self.pos[2]
            ),
        )?;

        lcd.fill_box(
            41,
            48,
            self.pcnt_played as u16 * PROGRESS_BAR_PX / 100,
            5,
        )?;

        blt(lcd, 50, 40, &icons::TIME)?;
        lcd.set_cursor(10, 5)?;
        print(lcd, format_args!("{}", hms(self.elapsed_secs)))?;

        blt(lcd, 3, 40, &icons::FEED_RATE)?;
        lcd.set_cursor(2, 5)?;
        print(lcd, format_args!("{:3}%", self.current_speed))?;

        blt(lcd, 3, 48, &icons::FLASH)?;
        lcd.set_cursor(2, 6)?;
        print(lcd, format_args!("{:3}%", self.pcnt_played))?;

        blt(lcd, 3, 56, &icons::SPEED)?;
        Ok(())
    }
}

/// Format into a stack buffer and write at the current cursor
fn print(lcd: &mut impl DisplayBackend, args: core::fmt::Arguments<'_>) -> Result<(), DisplayError> {
    let mut s: String<24> = String::new();
    let _ = s.write_fmt(args);
    lcd.write_text(&s)
}

/// Blit a whole glyph at (x, y)
fn blt(lcd: &mut impl DisplayBackend, x: u16, y: u16, glyph: &Glyph) -> Result<(), DisplayError> {
    lcd.blt_glyph(x, y, glyph.width, glyph.height, glyph, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{MockLcd, MockState, Op};
    use panopt_core::input::PanelInput;
    use panopt_core::query::{FanState, PlaybackProgress};

    fn render(q: &MockState) -> (WatchScreen, MockLcd) {
        let mut screen = WatchScreen::new();
        let mut lcd = MockLcd::full_graphics();
        let mut input = PanelInput::new();
        screen.on_enter(q, &mut lcd, &mut input).unwrap();
        lcd.ops.clear();
        screen.render_graphics(q, &mut lcd).unwrap();
        (screen, lcd)
    }

    fn texts(lcd: &MockLcd) -> std::vec::Vec<&str> {
        lcd.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_progress_bar_scales_to_83px() {
        let mut q = MockState::new();
        let mut filename: String<20> = String::new();
        let _ = filename.push_str("x.gco");
        q.playback = Some(PlaybackProgress {
            elapsed_secs: 90,
            percent: 50.0,
            filename,
        });
        q.playing = true;

        let (_screen, lcd) = render(&q);
        assert!(lcd
            .ops
            .iter()
            .any(|op| matches!(op, Op::FillBox(41, 48, 41, 5))));
    }

    #[test]
    fn test_temperature_regions_target_above_current() {
        let mut q = MockState::new();
        q.add_controller(1, "T", 201.0, 210.0);
        q.add_controller(2, "B", 60.0, 65.0);

        let (_screen, lcd) = render(&q);

        // Hot-end column at x=3, bed column at x=78; target row above
        let mut cursor = None;
        let mut seen = std::vec::Vec::new();
        for op in &lcd.ops {
            match op {
                Op::CursorPx(x, y) => cursor = Some((*x, *y)),
                Op::Text(s) if s.contains('\u{00f8}') => {
                    seen.push((cursor.unwrap(), s.clone()));
                }
                _ => {}
            }
        }
        assert!(seen.contains(&((3, 1), std::format!("210\u{00f8}"))));
        assert!(seen.contains(&((3, 19), std::format!("201\u{00f8}"))));
        assert!(seen.contains(&((78, 1), std::format!("065\u{00f8}"))));
        assert!(seen.contains(&((78, 19), std::format!("060\u{00f8}"))));
    }

    #[test]
    fn test_current_temperature_clamped_at_999() {
        let mut q = MockState::new();
        q.add_controller(1, "T", 1350.0, 210.0);
        let (_screen, lcd) = render(&q);
        assert!(texts(&lcd).iter().any(|s| s.starts_with("999")));
    }

    #[test]
    fn test_fan_off_shows_off_and_single_glyph() {
        let mut q = MockState::new();
        q.fan = Some(FanState { on: false, speed: 0 });

        let (_screen, lcd) = render(&q);
        assert!(texts(&lcd).contains(&"OFF"));

        let fan_glyphs: std::vec::Vec<_> = lcd
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Glyph { x: 107, y: 10, .. }))
            .collect();
        assert_eq!(fan_glyphs.len(), 1);
    }

    #[test]
    fn test_fan_on_shows_percent_and_overdraws() {
        let mut q = MockState::new();
        q.fan = Some(FanState { on: true, speed: 255 });

        let (_screen, lcd) = render(&q);
        assert!(texts(&lcd).contains(&"100%"));

        // Off icon first, on icon overdrawn
        let fan_glyphs: std::vec::Vec<_> = lcd
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Glyph { x: 107, y: 10, data, .. } => Some(*data),
                _ => None,
            })
            .collect();
        assert_eq!(fan_glyphs.len(), 2);
        assert!(core::ptr::eq(fan_glyphs[0], icons::FAN_OFF.data));
        assert!(core::ptr::eq(fan_glyphs[1], icons::FAN_ON.data));
    }

    #[test]
    fn test_no_fan_configured_draws_no_fan_corner() {
        let q = MockState::new();
        let (_screen, lcd) = render(&q);
        assert!(!texts(&lcd).contains(&"OFF"));
        assert!(!lcd
            .ops
            .iter()
            .any(|op| matches!(op, Op::Glyph { x: 107, y: 10, .. })));
    }

    #[test]
    fn test_static_frame_is_drawn() {
        let q = MockState::new();
        let (_screen, lcd) = render(&q);
        assert!(lcd.ops.iter().any(|op| matches!(op, Op::HLine(40, 48, 84))));
        assert!(lcd.ops.iter().any(|op| matches!(op, Op::HLine(40, 54, 84))));
        assert!(lcd.ops.iter().any(|op| matches!(op, Op::VLine(40, 48, 7))));
        assert!(lcd.ops.iter().any(|op| matches!(op, Op::VLine(124, 48, 7))));
        assert!(lcd
            .ops
            .iter()
            .any(|op| matches!(op, Op::Box(3, 27, 122, 11))));
    }

    #[test]
    fn test_status_written_at_cell_4_7() {
        let q = MockState::new();
        let (_screen, lcd) = render(&q);

        let mut cursor = None;
        let mut found = false;
        for op in &lcd.ops {
            match op {
                Op::Cursor(c, r) => cursor = Some((*c, *r)),
                Op::Text(s) if s == "Smoothie ready" => {
                    assert_eq!(cursor, Some((4, 7)));
                    found = true;
                }
                _ => {}
            }
        }
        assert!(found);
    }

    #[test]
    fn test_small_icons_and_figures() {
        let mut q = MockState::new();
        q.speed_override = 100.0;
        let (_screen, lcd) = render(&q);

        for (x, y, data) in [
            (50u16, 40u16, icons::TIME.data),
            (3, 40, icons::FEED_RATE.data),
            (3, 48, icons::FLASH.data),
            (3, 56, icons::SPEED.data),
        ] {
            assert!(lcd.ops.iter().any(|op| match op {
                Op::Glyph { x: gx, y: gy, data: d, .. } =>
                    *gx == x && *gy == y && core::ptr::eq(*d, data),
                _ => false,
            }));
        }
        assert!(texts(&lcd).contains(&"00:00:00"));
        assert!(texts(&lcd).contains(&"100%"));
    }
}
