//! `progress` subcommand — render a progress-bar fill.

use super::{FillStyle, Result, Rig};

pub(super) fn cmd_progress(val: f32, style: &str, color: Option<&str>) -> Result<()> {
    let mut rig = Rig::open()?;
    let color = rig.resolve_color(color)?;
    rig.renderer
        .set_progress(val, FillStyle::from_name(style), color)?;
    rig.report();
    Ok(())
}
