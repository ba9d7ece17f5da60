//! # Serial Link Module
//!
//! Trait abstraction over the serial line so the transmit path stays
//! testable.
//!
//! The raw termios work in [`tty`] is Linux-specific; everything above it
//! drives the [`SerialLink`] trait instead and can run against the scripted
//! mock in [`mocks`]. The trait is a platform seam only; the one real
//! implementation is the local tty device.

pub mod tty;

pub use tty::TtyLink;

use std::io;

use crate::error::LinkError;

/// Capability trait for the serial line the transmitter drives
pub trait SerialLink {
    /// Put the line into raw 8N1 local mode at `baud_rate`
    ///
    /// Implementations must verify the applied rate by reading the settings
    /// back, and leave both queues flushed on success.
    fn configure(&mut self, baud_rate: u32) -> Result<(), LinkError>;

    /// Write a single byte to the line
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;
}
