//! Bus transport seam — trait, I2C backend, in-memory mock.
//!
//! The LED bar is a single fixed-address I2C peripheral; the transport
//! contract is one `write` primitive with the address bound at
//! construction. [`I2cBus`] adapts any [`embedded_hal::i2c::I2c`]
//! implementation; [`mock::MockBus`] records frames for tests and for
//! running without hardware.

use std::fmt;

// ── Error type ──

/// Bus transport errors.
///
/// String payloads follow the convention **"context: details"** where
/// *context* identifies the operation (e.g. `"I2C write"`) and *details*
/// describes what went wrong.
#[derive(Debug)]
pub enum BusError {
    /// No bus device present on this system.
    NotFound,
    /// Bus device exists but could not be opened.
    OpenFailed(String),
    /// A frame write failed at the transport level.
    WriteFailed(String),
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::NotFound => write!(f, "LED bar bus not found"),
            BusError::OpenFailed(e) => write!(f, "Failed to open bus: {e}"),
            BusError::WriteFailed(e) => write!(f, "Bus write failed: {e}"),
        }
    }
}

impl std::error::Error for BusError {}

pub type Result<T> = std::result::Result<T, BusError>;

// ── Trait ──

/// Byte transport to the LED bar controller.
///
/// One frame per call; the device address is bound when the bus is
/// constructed. A frame either fully transmits or the call fails — there
/// is no partial-frame recovery at this layer.
pub trait Bus {
    fn write(&mut self, bytes: &[u8]) -> Result<()>;
}

// ── embedded-hal I2C backend ──

/// [`Bus`] over any blocking [`embedded_hal::i2c::I2c`] implementation.
///
/// The 7-bit device address is fixed at construction (the controller
/// answers on one address only).
pub struct I2cBus<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: embedded_hal::i2c::I2c> I2cBus<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        I2cBus { i2c, address }
    }
}

impl<I2C: embedded_hal::i2c::I2c> Bus for I2cBus<I2C> {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.i2c
            .write(self.address, bytes)
            .map_err(|e| BusError::WriteFailed(format!("I2C write: {e:?}")))
    }
}

// ── Mock ──

pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// In-memory bus for unit tests and hardware-free runs. Records every
    /// frame; handles are cheap clones sharing the same log, so a test can
    /// keep one handle and move the other into the device.
    #[derive(Clone, Default)]
    pub struct MockBus {
        writes: Arc<Mutex<Vec<Vec<u8>>>>,
        fail_writes: Arc<AtomicBool>,
    }

    impl MockBus {
        pub fn new() -> Self {
            Self::default()
        }

        /// All frames written so far, oldest first.
        pub fn writes(&self) -> Vec<Vec<u8>> {
            self.writes.lock().unwrap().clone()
        }

        /// Number of frames written so far.
        pub fn write_count(&self) -> usize {
            self.writes.lock().unwrap().len()
        }

        /// Frames written after the first `skip` entries.
        pub fn writes_since(&self, skip: usize) -> Vec<Vec<u8>> {
            self.writes.lock().unwrap()[skip..].to_vec()
        }

        /// When set, every `write` returns `BusError::WriteFailed`.
        pub fn set_fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }
    }

    impl Bus for MockBus {
        fn write(&mut self, bytes: &[u8]) -> Result<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(BusError::WriteFailed("mock: failure injected".into()));
            }
            self.writes.lock().unwrap().push(bytes.to_vec());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockBus;
    use super::*;

    #[test]
    fn mock_records_writes_in_order() {
        let mut bus = MockBus::new();
        bus.write(&[0x10]).unwrap();
        bus.write(&[0x20]).unwrap();
        assert_eq!(bus.writes(), vec![vec![0x10], vec![0x20]]);
        assert_eq!(bus.write_count(), 2);
    }

    #[test]
    fn mock_handles_share_log() {
        let bus = MockBus::new();
        let mut handle = bus.clone();
        handle.write(&[0x4F, 1, 2, 3]).unwrap();
        assert_eq!(bus.write_count(), 1);
    }

    #[test]
    fn mock_failure_injection() {
        let mut bus = MockBus::new();
        bus.set_fail_writes(true);
        let err = bus.write(&[0x20]).unwrap_err();
        assert!(matches!(err, BusError::WriteFailed(_)));
        assert_eq!(bus.write_count(), 0, "failed write must not be recorded");

        bus.set_fail_writes(false);
        bus.write(&[0x20]).unwrap();
        assert_eq!(bus.write_count(), 1);
    }

    #[test]
    fn mock_writes_since_skips_prefix() {
        let mut bus = MockBus::new();
        bus.write(&[0x10]).unwrap();
        bus.write(&[0x20]).unwrap();
        bus.write(&[0x4F, 0, 0, 0]).unwrap();
        assert_eq!(bus.writes_since(2), vec![vec![0x4F, 0, 0, 0]]);
    }

    #[test]
    fn display_not_found() {
        assert_eq!(BusError::NotFound.to_string(), "LED bar bus not found");
    }

    #[test]
    fn display_write_failed() {
        let e = BusError::WriteFailed("I2C write: Nack".into());
        assert_eq!(e.to_string(), "Bus write failed: I2C write: Nack");
    }

    // ── I2cBus adapter ──

    /// Minimal embedded-hal I2C fake: records (address, bytes) pairs.
    struct FakeI2c {
        sent: Vec<(u8, Vec<u8>)>,
    }

    impl embedded_hal::i2c::ErrorType for FakeI2c {
        type Error = core::convert::Infallible;
    }

    impl embedded_hal::i2c::I2c for FakeI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [embedded_hal::i2c::Operation<'_>],
        ) -> std::result::Result<(), Self::Error> {
            for op in operations {
                if let embedded_hal::i2c::Operation::Write(bytes) = op {
                    self.sent.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn i2c_bus_writes_to_bound_address() {
        let mut bus = I2cBus::new(FakeI2c { sent: Vec::new() }, 0x10);
        bus.write(&[0x20]).unwrap();
        bus.write(&[0x4F, 0, 0, 0]).unwrap();
        assert_eq!(bus.i2c.sent[0], (0x10, vec![0x20]));
        assert_eq!(bus.i2c.sent[1], (0x10, vec![0x4F, 0, 0, 0]));
    }
}
