//! Pattern renderer — solid fills, progress bars, on/off masks.
//!
//! [`LedBarRenderer`] sits above [`LedBar`] and keeps its own shadow copy
//! of the bar. The two layers coalesce independently: the renderer avoids
//! calling into the bar at all for unchanged LEDs, and the bar's cache
//! remains a second safety net for callers that mix layers.

use std::fmt;

use crate::bar::LedBar;
use crate::bus::Bus;
use crate::color::Color;
use crate::error::{LedbarError, Result};
use crate::protocol::NUM_LEDS;

/// Progress-bar fill direction.
///
/// `Bottom` renders like `Left` and `Right` like `Top`; the aliases exist
/// because the bar may be mounted either horizontally or vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillStyle {
    #[default]
    Left,
    Bottom,
    Top,
    Right,
    /// Grow symmetrically outward from the center.
    Middle,
}

impl FillStyle {
    /// Parse a style name. Unrecognized names fall back to `Left`, the
    /// bottom-up fill.
    pub fn from_name(name: &str) -> FillStyle {
        match name.to_lowercase().as_str() {
            "top" => FillStyle::Top,
            "right" => FillStyle::Right,
            "middle" => FillStyle::Middle,
            "bottom" => FillStyle::Bottom,
            _ => FillStyle::Left,
        }
    }
}

impl fmt::Display for FillStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FillStyle::Left => "left",
            FillStyle::Bottom => "bottom",
            FillStyle::Top => "top",
            FillStyle::Right => "right",
            FillStyle::Middle => "middle",
        };
        write!(f, "{name}")
    }
}

/// High-level pattern interface over one LED bar.
pub struct LedBarRenderer<B: Bus> {
    bar: LedBar<B>,
    shadow: [Color; NUM_LEDS],
    error_state: bool,
}

impl<B: Bus> LedBarRenderer<B> {
    pub fn new(bar: LedBar<B>) -> Self {
        LedBarRenderer {
            bar,
            shadow: [Color::OFF; NUM_LEDS],
            error_state: false,
        }
    }

    /// Number of LEDs on the bar.
    pub fn num_leds(&self) -> usize {
        NUM_LEDS
    }

    /// Externally-signaled error state. While set, `turn_off_leds` clears
    /// this layer's shadow but leaves the physical device untouched, so
    /// whatever the bar was showing survives error recovery.
    pub fn set_error_state(&mut self, error_state: bool) {
        self.error_state = error_state;
    }

    pub fn in_error_state(&self) -> bool {
        self.error_state
    }

    /// Zero the shadow copy; forward the hardware all-off unless in error
    /// state.
    pub fn turn_off_leds(&mut self) -> Result<()> {
        self.shadow = [Color::OFF; NUM_LEDS];
        if self.error_state {
            return Ok(());
        }
        self.bar.turn_off_leds()
    }

    /// Set every LED to the same color.
    pub fn set_all_leds(&mut self, color: Color) -> Result<()> {
        for index in 0..NUM_LEDS {
            self.set_led(index, color)?;
        }
        Ok(())
    }

    /// Set one LED. A color matching this layer's shadow returns without
    /// calling into the bar; otherwise the bar call happens first and the
    /// shadow records the color only on success.
    pub fn set_led(&mut self, index: usize, color: Color) -> Result<()> {
        if index >= NUM_LEDS {
            return Err(LedbarError::Range(index));
        }
        if self.shadow[index] == color {
            return Ok(());
        }
        self.bar.set_led(index, color)?;
        self.shadow[index] = color;
        Ok(())
    }

    /// Render `val` in `[0, 1]` as a progress bar; values outside the
    /// range are clamped. An all-zero `color` resolves to the default
    /// white fill.
    pub fn set_progress(&mut self, val: f32, style: FillStyle, color: Color) -> Result<()> {
        let val = val.clamp(0.0, 1.0);
        let lit = (val * NUM_LEDS as f32).round() as usize;
        let color = resolve_fill_color(color);

        match style {
            FillStyle::Top | FillStyle::Right => {
                for a in 0..lit {
                    self.set_led(NUM_LEDS - 1 - a, color)?;
                }
                for a in lit..NUM_LEDS {
                    self.set_led(NUM_LEDS - 1 - a, Color::OFF)?;
                }
            }
            FillStyle::Middle => {
                let mid = NUM_LEDS / 2;
                let half = lit / 2;
                for a in 0..half {
                    self.set_led_clipped(mid + a, color)?;
                    self.set_led_clipped(mid - a, color)?;
                }
                for a in half..NUM_LEDS / 2 {
                    self.set_led_clipped(mid + a, Color::OFF)?;
                    self.set_led_clipped(mid - a, Color::OFF)?;
                }
            }
            FillStyle::Left | FillStyle::Bottom => {
                for a in 0..lit {
                    self.set_led(a, color)?;
                }
                for a in lit..NUM_LEDS {
                    self.set_led(a, Color::OFF)?;
                }
            }
        }
        Ok(())
    }

    /// Set LEDs on or off according to a boolean mask. Indices past the
    /// end of the mask are forced off. An all-zero `color` resolves to
    /// the default white fill.
    pub fn set_on_off_pattern(&mut self, pattern: &[bool], color: Color) -> Result<()> {
        let color = resolve_fill_color(color);
        for index in 0..NUM_LEDS {
            if pattern.get(index).copied().unwrap_or(false) {
                self.set_led(index, color)?;
            } else {
                self.set_led(index, Color::OFF)?;
            }
        }
        Ok(())
    }

    /// Current shadow copy — the sampling hook for visualizers.
    pub fn snapshot(&self) -> [Color; NUM_LEDS] {
        self.shadow
    }

    /// The underlying bar handle, for operations the renderer does not
    /// mirror (ramp). Writes made through it bypass this layer's shadow.
    pub fn bar_mut(&mut self) -> &mut LedBar<B> {
        &mut self.bar
    }

    pub fn bar(&self) -> &LedBar<B> {
        &self.bar
    }

    /// Center-fill index arithmetic can land outside the bar; skip those
    /// slots instead of clamping or wrapping.
    fn set_led_clipped(&mut self, index: usize, color: Color) -> Result<()> {
        if index >= NUM_LEDS {
            return Ok(());
        }
        self.set_led(index, color)
    }
}

fn resolve_fill_color(color: Color) -> Color {
    if color.is_off() {
        Color::DEFAULT_FILL
    } else {
        color
    }
}
