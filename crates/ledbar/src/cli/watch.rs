//! `watch` subcommand — progress sweep under the console visualizer.

use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{FillStyle, RUNNING, Result, Rig, debug};

pub(super) fn cmd_watch(interval_ms: Option<u64>, style: &str, color: Option<&str>) -> Result<()> {
    let rig = Rig::open()?;
    let interval = Duration::from_millis(interval_ms.unwrap_or(rig.config.debug_interval_ms));
    let color = rig.resolve_color(color)?;
    let style = FillStyle::from_name(style);

    let renderer = Arc::new(Mutex::new(rig.renderer));
    let sampler = Arc::clone(&renderer);
    let console = debug::ConsoleDebug::start(interval, move || sampler.lock().unwrap().snapshot());

    println!("Watching (Ctrl+C to stop)...");
    let mut val = 0.0f32;
    let mut step = 0.0625f32; // one LED per tick
    while RUNNING.load(Ordering::SeqCst) {
        renderer.lock().unwrap().set_progress(val, style, color)?;
        val += step;
        if val >= 1.0 {
            val = 1.0;
            step = -step;
        } else if val <= 0.0 {
            val = 0.0;
            step = -step;
        }
        std::thread::sleep(interval);
    }

    console.stop();
    renderer.lock().unwrap().turn_off_leds()?;
    Ok(())
}
