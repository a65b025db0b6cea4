//! `set` / `all` / `ramp` subcommands — direct LED control.

use super::{Result, Rig, parse_color};

pub(super) fn cmd_set(led: usize, color: &str) -> Result<()> {
    let color = parse_color(color)?;
    let mut rig = Rig::open()?;
    rig.renderer.set_led(led, color)?;
    rig.report();
    Ok(())
}

pub(super) fn cmd_all(color: &str) -> Result<()> {
    let color = parse_color(color)?;
    let mut rig = Rig::open()?;
    rig.renderer.set_all_leds(color)?;
    rig.report();
    Ok(())
}

pub(super) fn cmd_ramp(led: usize, seconds: f32, color: &str) -> Result<()> {
    let color = parse_color(color)?;
    if color.w != 0 {
        log::warn!("the ramp command has no white channel; ignoring it");
    }
    let mut rig = Rig::open()?;
    rig.renderer
        .bar_mut()
        .ramp_led(led, seconds, color.r, color.g, color.b)?;
    rig.report();
    Ok(())
}
