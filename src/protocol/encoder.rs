//! # Command Frame Encoder
//!
//! Validates a [`LightCommand`] and encodes it into the 5-byte wire frame.
//!
//! Validation happens here, before any device I/O: every level must be in
//! `[1, 5]`, with 0 doubling as the "not set" sentinel from the CLI layer.
//! The one exception is mode 4 ("Off"), which pins brightness and speed to
//! their maximum before validation so the lights can be switched off without
//! supplying either level.

use super::{
    Frame, LightCommand, FRAME_HEADER, FRAME_LEN, MAX_BRIGHTNESS, MAX_MODE, MAX_SPEED, MODE_OFF,
};
use crate::error::TransmitError;

/// Additive checksum over a byte slice
///
/// The controller expects the plain mod-256 sum of all preceding frame
/// bytes; no polynomial, no reflection.
///
/// # Examples
///
/// ```
/// use nuclight::protocol::encoder::checksum;
///
/// assert_eq!(checksum(&[0xFA, 0x01, 0x05, 0x05]), 0x05);
/// assert_eq!(checksum(&[]), 0x00);
/// ```
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, &byte| sum.wrapping_add(byte))
}

/// Encode a light command into a complete frame
///
/// Levels are validated against `[1, 5]`, brightness and speed are flipped
/// onto the device scale (`6 - level`; the device treats 1 as strongest),
/// and the checksum byte is appended.
///
/// # Errors
///
/// Returns [`TransmitError::InvalidParameter`] naming the offending field if
/// any level is 0 or above its maximum. No I/O is performed.
///
/// # Examples
///
/// ```
/// use nuclight::protocol::encoder::encode_command_frame;
/// use nuclight::protocol::LightCommand;
///
/// let command = LightCommand { mode: 1, brightness: 1, speed: 1 };
/// let frame = encode_command_frame(command).unwrap();
/// assert_eq!(frame.as_bytes(), &[0xFA, 0x01, 0x05, 0x05, 0x05]);
/// ```
pub fn encode_command_frame(command: LightCommand) -> Result<Frame, TransmitError> {
    let mode = check_level("mode", command.mode, MAX_MODE)?;

    // Off ignores the requested levels; the controller wants them pinned at
    // maximum for that mode. Applied before validation so a bare "off"
    // command with unset levels goes through.
    let (brightness, speed) = if mode == MODE_OFF {
        (MAX_BRIGHTNESS, MAX_SPEED)
    } else {
        (
            check_level("brightness", command.brightness, MAX_BRIGHTNESS)?,
            check_level("speed", command.speed, MAX_SPEED)?,
        )
    };

    // The device scale runs opposite to the user scale: 1 is the strongest
    // setting, 5 the weakest.
    let brightness = MAX_BRIGHTNESS + 1 - brightness;
    let speed = MAX_SPEED + 1 - speed;

    let mut bytes = [FRAME_HEADER, mode, brightness, speed, 0];
    bytes[FRAME_LEN - 1] = checksum(&bytes[..FRAME_LEN - 1]);

    Ok(Frame::from_bytes(bytes))
}

fn check_level(field: &'static str, value: u8, max: u8) -> Result<u8, TransmitError> {
    if value == 0 || value > max {
        return Err(TransmitError::InvalidParameter { field, value, max });
    }
    Ok(value)
}
