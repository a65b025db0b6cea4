//! Driver and pattern renderer for a 16-LED RGBW I2C bar.
//!
//! The bar controller speaks a small opcode-per-frame protocol over I2C
//! ([`protocol`]). [`LedBar`] wraps a [`bus::Bus`] transport with a
//! per-LED shadow cache so repeated identical writes never reach the
//! wire; [`LedBarRenderer`] layers pattern operations (solid fill,
//! progress bar, on/off mask) on top with its own coalescing shadow.
//!
//! ## Example
//!
//! ```no_run
//! use ledbar_lib::{Color, FillStyle, LedBar, LedBarRenderer};
//! use ledbar_lib::bus::mock::MockBus;
//!
//! fn main() -> ledbar_lib::Result<()> {
//!     // Swap MockBus for an I2cBus over your platform's embedded-hal
//!     // I2C implementation to drive real hardware.
//!     let bar = LedBar::new(MockBus::new())?;
//!     let mut renderer = LedBarRenderer::new(bar);
//!
//!     renderer.set_all_leds(Color::new(255, 0, 0, 0))?;
//!     renderer.set_progress(0.5, FillStyle::Top, Color::OFF)?;
//!     Ok(())
//! }
//! ```

pub mod bar;
pub mod bus;
pub mod color;
pub mod config;
pub mod debug;
pub mod error;
pub mod protocol;
pub mod render;

pub use bar::LedBar;
pub use bus::{Bus, BusError, I2cBus};
pub use color::{Color, parse_color};
pub use config::Config;
pub use error::{LedbarError, Result};
pub use protocol::NUM_LEDS;
pub use render::{FillStyle, LedBarRenderer};
