//! # Wire Protocol Constants and Types
//!
//! Core protocol definitions for the mini-PC LED controller.
//!
//! The controller understands a single fixed-format command: a 5-byte frame
//! carrying a header byte, the mode, the brightness and effect speed on the
//! device's inverted scale, and an additive checksum. The frame layout and
//! the inverted scale were worked out by the community on r/MiniPCs (thread
//! "T9 Plus N100 - How to control LED", Dec 2023).

pub mod encoder;

use std::fmt;
use std::time::Duration;

/// Frame header byte (always 0xFA)
pub const FRAME_HEADER: u8 = 0xFA;

/// Command frame length: header + mode + brightness + speed + checksum
pub const FRAME_LEN: usize = 5;

/// Highest light mode number
pub const MAX_MODE: u8 = 5;

/// Highest brightness level on the user-facing scale
pub const MAX_BRIGHTNESS: u8 = 5;

/// Highest effect speed on the user-facing scale
pub const MAX_SPEED: u8 = 5;

/// The mode that turns the lights off; its frame always carries maximum levels
pub const MODE_OFF: u8 = 4;

/// Delay observed after every frame byte
///
/// The controller's UART has no input buffering to speak of; a full-rate
/// burst loses bytes. See the glossary term "pacing delay".
pub const PACING_DELAY: Duration = Duration::from_millis(5);

/// Mode names, indexed by mode number - 1
pub const MODE_NAMES: [&str; MAX_MODE as usize] =
    ["Rainbow", "Breathing", "Cycle", "Off", "Auto"];

/// Look up the display name of a mode number
///
/// Returns `None` for anything outside `1..=MAX_MODE`.
///
/// # Examples
///
/// ```
/// use nuclight::protocol::mode_name;
///
/// assert_eq!(mode_name(1), Some("Rainbow"));
/// assert_eq!(mode_name(4), Some("Off"));
/// assert_eq!(mode_name(0), None);
/// ```
pub fn mode_name(mode: u8) -> Option<&'static str> {
    (1..=MAX_MODE)
        .contains(&mode)
        .then(|| MODE_NAMES[mode as usize - 1])
}

/// A light command on the user-facing scale
///
/// All three fields must be in `[1, 5]`; the encoder rejects anything else,
/// treating 0 as "not set". Brightness and speed run 1 = lowest to
/// 5 = highest as a user would expect; the inversion to the device scale
/// happens during encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightCommand {
    /// Light mode, 1..=5 (see [`MODE_NAMES`])
    pub mode: u8,

    /// Brightness level, 1..=5
    pub brightness: u8,

    /// Effect speed, 1..=5
    pub speed: u8,
}

/// An encoded command frame, immutable once built
///
/// Layout: `{0xFA, mode, 6 - brightness, 6 - speed, checksum}` with the
/// checksum being the mod-256 sum of the preceding four bytes. Obtained from
/// [`encoder::encode_command_frame`] and transmitted exactly once.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    pub(crate) fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw frame bytes in transmission order
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({:02X?})", self.0)
    }
}
