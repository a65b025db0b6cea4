//! LED bar handle — shadow-state cache plus command encoder.
//!
//! [`LedBar`] owns the per-LED cache of the last color known to have been
//! sent to the device and suppresses writes that would not change
//! anything. Construction selects between a connected bus and an explicit
//! detached (no-hardware) mode once; operations never re-probe.

use crate::bus::Bus;
use crate::color::Color;
use crate::error::{LedbarError, Result};
use crate::protocol::{DeviceCommand, NUM_LEDS};

enum Link<B> {
    Connected(B),
    Detached,
}

/// Handle to one 16-LED RGBW bar on a fixed bus address.
pub struct LedBar<B: Bus> {
    link: Link<B>,
    shadow: [Color; NUM_LEDS],
}

impl<B: Bus> LedBar<B> {
    /// Open a bar on the given bus. Stops any running animation and turns
    /// every LED off so the cache (all-zero) matches the device.
    pub fn new(bus: B) -> Result<Self> {
        let mut bar = LedBar {
            link: Link::Connected(bus),
            shadow: [Color::OFF; NUM_LEDS],
        };
        bar.send(DeviceCommand::StopAnimation)?;
        bar.turn_off_leds()?;
        Ok(bar)
    }

    /// Degraded mode for systems without the bus hardware: every
    /// operation succeeds as a no-op and the cache is never updated.
    pub fn detached() -> Self {
        log::warn!("no LED bar transport; all device operations become no-ops");
        LedBar {
            link: Link::Detached,
            shadow: [Color::OFF; NUM_LEDS],
        }
    }

    /// True when running without a bus.
    pub fn is_detached(&self) -> bool {
        matches!(self.link, Link::Detached)
    }

    /// Set one LED. Skips the bus write entirely when `color` matches the
    /// cached value for `index`; otherwise transmits one frame and then
    /// records `color` in the cache. On a transport failure the cache is
    /// left unchanged — it only ever records what reached the bus.
    pub fn set_led(&mut self, index: usize, color: Color) -> Result<()> {
        if self.is_detached() {
            return Ok(());
        }
        check_index(index)?;
        if self.shadow[index] == color {
            return Ok(());
        }
        self.send(DeviceCommand::Set { index, color })?;
        self.shadow[index] = color;
        Ok(())
    }

    /// Ramp one LED to an RGB color over `seconds` (full scale 2.55 s).
    /// The white channel is not supported by the ramp command. The cache
    /// is not updated: the device ends at a color this layer never sent
    /// as a set, so the next `set_led` always transmits.
    pub fn ramp_led(&mut self, index: usize, seconds: f32, r: u8, g: u8, b: u8) -> Result<()> {
        if self.is_detached() {
            return Ok(());
        }
        check_index(index)?;
        self.send(DeviceCommand::Ramp {
            index,
            seconds,
            r,
            g,
            b,
        })
    }

    /// Transmit the all-off command unconditionally. Does not touch the
    /// cache: callers that mirror state (the renderer layer) reset their
    /// own shadow copy.
    pub fn turn_off_leds(&mut self) -> Result<()> {
        if self.is_detached() {
            return Ok(());
        }
        self.send(DeviceCommand::AllOff)
    }

    /// Last color known to have been sent for `index` (all-zero before
    /// the first set). Verification accessor; not part of the render path.
    pub fn cached(&self, index: usize) -> Result<Color> {
        check_index(index)?;
        Ok(self.shadow[index])
    }

    fn send(&mut self, cmd: DeviceCommand) -> Result<()> {
        match self.link {
            Link::Connected(ref mut bus) => Ok(bus.write(&cmd.encode())?),
            Link::Detached => Ok(()),
        }
    }
}

fn check_index(index: usize) -> Result<()> {
    if index >= NUM_LEDS {
        return Err(LedbarError::Range(index));
    }
    Ok(())
}
