//! CLI subcommands — pattern rendering, ramp, watch loop, config.

mod config_cmd;
mod off;
mod pattern;
mod progress;
mod set;
mod watch;

use clap::Subcommand;
use serde::Serialize;

pub(super) use crate::RUNNING;
pub(super) use ledbar_lib::bus::mock::MockBus;
pub(super) use ledbar_lib::{
    Color, Config, FillStyle, LedBar, LedBarRenderer, Result, debug, parse_color,
};

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub config_file: Option<String>,
    pub config_file_exists: bool,
    pub settings: Config,
    pub problems: Vec<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Turn every LED off
    Off,

    /// Set a single LED to a color
    Set {
        /// LED index (0-15)
        led: usize,
        /// Color: #RRGGBB, #RRGGBBWW or a name (red, white, ...)
        color: String,
    },

    /// Set every LED to the same color
    All { color: String },

    /// Ramp one LED to an RGB color over a duration
    Ramp {
        /// LED index (0-15)
        led: usize,
        /// Ramp duration in seconds (full scale at 2.55)
        seconds: f32,
        color: String,
    },

    /// Render a progress bar
    Progress {
        /// Progress value in [0, 1]
        val: f32,
        /// Fill direction: left, bottom, top, right or middle
        #[arg(long, default_value = "left")]
        style: String,
        /// Fill color (defaults to the configured default color)
        #[arg(long)]
        color: Option<String>,
    },

    /// Light LEDs from a bit mask, e.g. 1011
    Pattern {
        /// One character per LED: 1 = on, 0 = off
        bits: String,
        /// Fill color (defaults to the configured default color)
        #[arg(long)]
        color: Option<String>,
    },

    /// Animate a progress sweep under the periodic console visualizer
    Watch {
        /// Sampling interval in milliseconds (default from config)
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Fill direction for the sweep
        #[arg(long, default_value = "middle")]
        style: String,
        #[arg(long)]
        color: Option<String>,
    },

    /// Show current configuration and file paths
    Config,
}

/// Warn if `--json` was passed to a command that doesn't support it.
fn warn_json_unsupported(cmd_name: &str) {
    log::warn!("--json is not supported for `{cmd_name}` (ignored)");
}

pub fn run(cmd: Command, json: bool) -> Result<()> {
    match cmd {
        Command::Off => {
            if json {
                warn_json_unsupported("off");
            }
            off::cmd_off()
        }
        Command::Set { led, color } => {
            if json {
                warn_json_unsupported("set");
            }
            set::cmd_set(led, &color)
        }
        Command::All { color } => {
            if json {
                warn_json_unsupported("all");
            }
            set::cmd_all(&color)
        }
        Command::Ramp {
            led,
            seconds,
            color,
        } => {
            if json {
                warn_json_unsupported("ramp");
            }
            set::cmd_ramp(led, seconds, &color)
        }
        Command::Progress { val, style, color } => {
            if json {
                warn_json_unsupported("progress");
            }
            progress::cmd_progress(val, &style, color.as_deref())
        }
        Command::Pattern { bits, color } => {
            if json {
                warn_json_unsupported("pattern");
            }
            pattern::cmd_pattern(&bits, color.as_deref())
        }
        Command::Watch {
            interval_ms,
            style,
            color,
        } => {
            if json {
                warn_json_unsupported("watch");
            }
            watch::cmd_watch(interval_ms, &style, color.as_deref())
        }
        Command::Config => config_cmd::cmd_config(json),
    }
}

// ── Simulated device rig ──

/// A renderer over an in-memory bus plus a handle onto the bus's write
/// log, so commands can show the frames they produced.
pub(super) struct Rig {
    pub config: Config,
    pub bus: MockBus,
    pub renderer: LedBarRenderer<MockBus>,
    /// Frames emitted by construction (stop-animation + all-off).
    baseline: usize,
}

impl Rig {
    pub fn open() -> Result<Rig> {
        let config = Config::load();
        let bus = MockBus::new();
        let bar = LedBar::new(bus.clone())?;
        let baseline = bus.write_count();
        Ok(Rig {
            config,
            bus,
            renderer: LedBarRenderer::new(bar),
            baseline,
        })
    }

    /// Resolve an optional color argument against the configured default.
    pub fn resolve_color(&self, color: Option<&str>) -> Result<Color> {
        match color {
            Some(s) => parse_color(s),
            None => parse_color(&self.config.default_color),
        }
    }

    /// Print the frames produced since construction and the level line.
    pub fn report(&self) {
        let frames = self.bus.writes_since(self.baseline);
        println!("{:<9}{} (simulated bus)", "Frames", frames.len());
        for frame in &frames {
            let hex: Vec<String> = frame.iter().map(|b| format!("{b:02X}")).collect();
            println!("  {}", hex.join(" "));
        }
        println!("{:<9}{}", "Levels", debug::level_line(&self.renderer.snapshot()));
    }
}
