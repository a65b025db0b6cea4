//! Wire protocol for the LED bar controller.
//!
//! Each frame is an opcode byte followed by 0–4 payload bytes. Per-LED
//! opcodes carry the device slot in the low nibble; the device addresses
//! slots in reverse, so logical index `i` maps to slot `15 - i`. Color
//! channels are supplied as logical 0–255 values and scaled to the
//! device's native 0–60 range on encode.

use crate::color::Color;

/// Number of LEDs on the bar.
pub const NUM_LEDS: usize = 16;

/// Device-native maximum per color channel.
pub const MAX_CHANNEL: u8 = 60;

// ── Opcodes (top nibble) ──

/// Stop any running animation.
pub const CMD_STOP_ANIMATION: u8 = 0x10;

/// Turn all LEDs off.
pub const CMD_ALL_OFF: u8 = 0x20;

/// Set one LED to an RGB color: `0x40 | slot`, 3 payload bytes.
pub const CMD_SET_RGB: u8 = 0x40;

/// Ramp one LED to an RGB color over time: `0x50 | slot`,
/// 4 payload bytes (time, r, g, b).
pub const CMD_RAMP_RGB: u8 = 0x50;

/// Set one LED to an RGBW color: `0x60 | slot`, 4 payload bytes.
pub const CMD_SET_RGBW: u8 = 0x60;

/// Device slot for a logical LED index. The bar is wired in reverse:
/// logical index 0 is physical slot 15.
///
/// Callers validate `index < NUM_LEDS` before encoding.
pub fn slot(index: usize) -> u8 {
    debug_assert!(index < NUM_LEDS);
    (NUM_LEDS - 1 - index) as u8
}

/// Scale a logical 0–255 channel value to the device's 0–60 range.
///
/// Integer truncation, clamped to [`MAX_CHANNEL`]: `scale(255) == 60`,
/// `scale(128) == 30`, `scale(0) == 0`.
pub fn scale_channel(v: u8) -> u8 {
    ((u16::from(v) * u16::from(MAX_CHANNEL) / 255) as u8).min(MAX_CHANNEL)
}

/// Scale a ramp duration in seconds to the device's time byte.
///
/// Full scale (255) at 2.55 s; rounded, clamped to [0, 255].
pub fn scale_ramp_time(seconds: f32) -> u8 {
    (seconds * 255.0 / 2.55).round().clamp(0.0, 255.0) as u8
}

/// One wire-level command, ready to encode.
///
/// Per-LED variants carry the logical index and unscaled channel values;
/// [`DeviceCommand::encode`] applies slot inversion and channel scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceCommand {
    StopAnimation,
    AllOff,
    /// Set one LED. Encodes as set-RGBW when `color.w != 0`, otherwise
    /// as set-RGB with the white byte omitted from the frame entirely.
    Set { index: usize, color: Color },
    /// Ramp one LED to an RGB color. The white channel is not supported.
    Ramp {
        index: usize,
        seconds: f32,
        r: u8,
        g: u8,
        b: u8,
    },
}

impl DeviceCommand {
    /// Encode into the byte frame transmitted on the bus.
    pub fn encode(&self) -> Vec<u8> {
        match *self {
            DeviceCommand::StopAnimation => vec![CMD_STOP_ANIMATION],
            DeviceCommand::AllOff => vec![CMD_ALL_OFF],
            DeviceCommand::Set { index, color } => {
                if color.w != 0 {
                    vec![
                        CMD_SET_RGBW | slot(index),
                        scale_channel(color.r),
                        scale_channel(color.g),
                        scale_channel(color.b),
                        scale_channel(color.w),
                    ]
                } else {
                    vec![
                        CMD_SET_RGB | slot(index),
                        scale_channel(color.r),
                        scale_channel(color.g),
                        scale_channel(color.b),
                    ]
                }
            }
            DeviceCommand::Ramp {
                index,
                seconds,
                r,
                g,
                b,
            } => vec![
                CMD_RAMP_RGB | slot(index),
                scale_ramp_time(seconds),
                scale_channel(r),
                scale_channel(g),
                scale_channel(b),
            ],
        }
    }
}
