//! # Lights Module
//!
//! Transmit path for light commands: encode, open the device, configure
//! the line, and clock the frame out byte by byte.
//!
//! Controllers lose bytes when a frame arrives back to back, so every
//! byte is followed by a [`PACING_DELAY`] pause. The link is consumed by
//! [`send_frame`] and dropped on every exit path, which closes the
//! descriptor exactly once whether the transfer succeeded or not.

use std::thread;

use tracing::debug;

use crate::config::SerialLinkConfig;
use crate::error::TransmitError;
use crate::link::{SerialLink, TtyLink};
use crate::protocol::encoder::encode_command_frame;
use crate::protocol::{Frame, LightCommand, FRAME_LEN, PACING_DELAY};

/// Encode `command` and transmit it to the device named in `config`
///
/// Validation happens before the device is touched, so an invalid
/// command never opens the port.
pub fn send_light_command(
    config: &SerialLinkConfig,
    command: LightCommand,
) -> Result<(), TransmitError> {
    let frame = encode_command_frame(command)?;

    let link = TtyLink::open(&config.device_path).map_err(|source| TransmitError::OpenFailed {
        path: config.device_path.clone(),
        source,
    })?;

    send_frame(link, config.baud_rate, &frame)
}

/// Configure `link` and clock `frame` out one byte at a time
///
/// Takes the link by value so the descriptor is released on every exit
/// path, including mid-frame write failures.
pub fn send_frame<L: SerialLink>(
    mut link: L,
    baud_rate: u32,
    frame: &Frame,
) -> Result<(), TransmitError> {
    link.configure(baud_rate)?;

    debug!(?frame, baud_rate, "transmitting");
    for (written, &byte) in frame.as_bytes().iter().enumerate() {
        link.write_byte(byte)
            .map_err(|source| TransmitError::WriteFailed {
                written,
                total: FRAME_LEN,
                source,
            })?;
        thread::sleep(PACING_DELAY);
    }

    debug!("frame on the wire");
    Ok(())
}
