//! Frame rendering with `embedded-graphics`.
//!
//! The navigator produces a fixed four-row, twenty-column text
//! [`DisplayFrame`]; this module draws it with a 6×10 monospace font so
//! the OLED behaves like the character module it replaces.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::Text,
};

use fascia::menu::{DisplayFrame, FRAME_ROWS};

// ── FrameStyle ───────────────────────────────────────────────────────────

/// Layout geometry and refresh rate for the rendered frame.
///
/// All tuning lives here — there are no module-level layout constants.
/// [`FrameStyle::default()`] reproduces the production panel: 20 columns
/// of 6 px glyphs centred on a 128 px display, four text baselines, 30 Hz.
pub struct FrameStyle {
    /// Display refresh rate in Hz. The update task only flushes changed
    /// frames, so this is a ceiling, not a constant load. Default: 30.
    pub update_frequency_hz: u32,
    /// X coordinate of the first glyph column. Default: 4, centring
    /// 120 px of text on the 128 px panel.
    pub origin_x: i32,
    /// Text baseline Y coordinate for each of the four rows.
    pub row_baselines: [i32; FRAME_ROWS],
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            update_frequency_hz: 30,
            origin_x: 4,
            row_baselines: [10, 24, 44, 58],
        }
    }
}

impl FrameStyle {
    /// The configured refresh rate as a timer period in milliseconds.
    pub fn update_period_ms(&self) -> u64 {
        1000 / self.update_frequency_hz as u64
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Draw a [`DisplayFrame`] into a frame buffer.
///
/// Rows that are entirely blank are skipped — drawing space glyphs over a
/// cleared buffer would only burn time.
///
/// # Example
///
/// ```no_run
/// # use fascia_oled_display_rs::{render_frame, FrameStyle};
/// # use fascia::menu::DisplayFrame;
/// # fn example(display: &mut impl embedded_graphics::draw_target::DrawTarget<Color = embedded_graphics::pixelcolor::BinaryColor>) {
/// let mut frame = DisplayFrame::blank();
/// frame.write_str(0, 0, "Oscillator 1");
/// render_frame(display, &frame, &FrameStyle::default()).ok();
/// # }
/// ```
pub fn render_frame<D>(
    display: &mut D,
    frame: &DisplayFrame,
    style: &FrameStyle,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

    for row in 0..FRAME_ROWS {
        let text = frame.row_str(row);
        if text.bytes().all(|b| b == b' ') {
            continue;
        }
        Text::new(
            text,
            Point::new(style.origin_x, style.row_baselines[row]),
            text_style,
        )
        .draw(display)?;
    }

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn canvas() -> MockDisplay<BinaryColor> {
        let mut d = MockDisplay::new();
        // The mock canvas is 64×64; the real panel is wider.
        d.set_allow_out_of_bounds_drawing(true);
        d.set_allow_overdraw(true);
        d
    }

    #[test]
    fn default_style_values() {
        let s = FrameStyle::default();
        assert_eq!(s.update_frequency_hz, 30);
        assert_eq!(s.origin_x, 4);
        assert_eq!(s.row_baselines, [10, 24, 44, 58]);
    }

    #[test]
    fn update_period_30hz() {
        assert_eq!(FrameStyle::default().update_period_ms(), 33);
    }

    #[test]
    fn update_period_60hz() {
        let s = FrameStyle {
            update_frequency_hz: 60,
            ..FrameStyle::default()
        };
        assert_eq!(s.update_period_ms(), 16);
    }

    #[test]
    fn blank_frame_draws_nothing() {
        let mut d = canvas();
        render_frame(&mut d, &DisplayFrame::blank(), &FrameStyle::default()).unwrap();
        assert_eq!(d.affected_area().size, Size::zero());
    }

    #[test]
    fn text_lands_on_its_row_baseline() {
        let mut d = canvas();
        let mut frame = DisplayFrame::blank();
        frame.write_str(0, 0, "X");
        render_frame(&mut d, &frame, &FrameStyle::default()).unwrap();

        let area = d.affected_area();
        // FONT_6X10 caps sit a few px above the baseline at y = 10, and
        // the glyph starts at or just right of the 4 px origin.
        assert!(area.top_left.y >= 2 && area.top_left.y <= 10);
        assert!(area.top_left.x >= 4 && area.top_left.x <= 6);
    }

    #[test]
    fn all_four_rows_render() {
        let mut d = canvas();
        let mut frame = DisplayFrame::blank();
        for row in 0..FRAME_ROWS {
            frame.write_str(row, 0, "X");
        }
        render_frame(&mut d, &frame, &FrameStyle::default()).unwrap();

        // The affected area spans from the first row's glyphs down past
        // the last baseline region.
        let area = d.affected_area();
        assert!(area.size.height > 40);
    }
}
