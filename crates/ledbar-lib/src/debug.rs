//! Console visualizer — textual dump of the renderer's shadow state.
//!
//! A development aid for running without the physical bar: one hex digit
//! per LED, brightest at `f`. [`ConsoleDebug`] samples a snapshot source
//! on an interval and prints the line; the sampling hook is
//! [`LedBarRenderer::snapshot`](crate::render::LedBarRenderer::snapshot).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::color::Color;
use crate::protocol::NUM_LEDS;

/// Render one snapshot as a 16-character line, one hex digit per LED.
/// The digit is the RGB average mapped to 0–15; the white channel does
/// not contribute.
pub fn level_line(snapshot: &[Color; NUM_LEDS]) -> String {
    snapshot
        .iter()
        .map(|c| {
            let avg = (u16::from(c.r) + u16::from(c.g) + u16::from(c.b)) / 3;
            char::from_digit(u32::from(avg / 16), 16).unwrap_or('0')
        })
        .collect()
}

/// Periodic console dump of LED state. Started with a snapshot source,
/// stopped explicitly or on drop.
pub struct ConsoleDebug {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ConsoleDebug {
    /// Spawn the sampler thread. `sample` is called once per interval;
    /// the resulting line is printed to stdout.
    pub fn start<F>(interval: Duration, sample: F) -> ConsoleDebug
    where
        F: Fn() -> [Color; NUM_LEDS] + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let handle = std::thread::spawn(move || {
            while !thread_stop.load(Ordering::SeqCst) {
                println!("{}", level_line(&sample()));
                std::thread::sleep(interval);
            }
        });
        ConsoleDebug {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the sampler and wait for its thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("console debug thread panicked");
            }
        }
    }
}

impl Drop for ConsoleDebug {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn level_line_all_off() {
        let snap = [Color::OFF; NUM_LEDS];
        assert_eq!(level_line(&snap), "0000000000000000");
    }

    #[test]
    fn level_line_full_brightness() {
        let snap = [Color::DEFAULT_FILL; NUM_LEDS];
        assert_eq!(level_line(&snap), "ffffffffffffffff");
    }

    #[test]
    fn level_line_mixed() {
        let mut snap = [Color::OFF; NUM_LEDS];
        snap[0] = Color::new(255, 255, 255, 0); // avg 255 → f
        snap[1] = Color::new(128, 128, 128, 0); // avg 128 → 8
        snap[15] = Color::new(16, 16, 16, 0); // avg 16 → 1
        assert_eq!(level_line(&snap), "f800000000000001");
    }

    #[test]
    fn level_line_ignores_white_channel() {
        let mut snap = [Color::OFF; NUM_LEDS];
        snap[0] = Color::new(0, 0, 0, 255);
        assert_eq!(level_line(&snap), "0000000000000000");
    }

    #[test]
    fn level_line_averages_channels() {
        let mut snap = [Color::OFF; NUM_LEDS];
        snap[0] = Color::new(255, 0, 0, 0); // avg 85 → 5
        assert_eq!(&level_line(&snap)[0..1], "5");
    }

    #[test]
    fn console_debug_samples_until_stopped() {
        let calls = Arc::new(AtomicUsize::new(0));
        let thread_calls = Arc::clone(&calls);
        let dbg = ConsoleDebug::start(Duration::from_millis(1), move || {
            thread_calls.fetch_add(1, Ordering::SeqCst);
            [Color::OFF; NUM_LEDS]
        });
        while calls.load(Ordering::SeqCst) < 3 {
            std::thread::sleep(Duration::from_millis(1));
        }
        dbg.stop();
        let after_stop = calls.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(calls.load(Ordering::SeqCst), after_stop, "no samples after stop");
    }
}
