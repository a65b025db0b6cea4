//! `off` subcommand — turn every LED off.

use super::{Result, Rig};

pub(super) fn cmd_off() -> Result<()> {
    let mut rig = Rig::open()?;
    rig.renderer.turn_off_leds()?;
    rig.report();
    Ok(())
}
