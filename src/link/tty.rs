//! Linux tty backend for the serial link.
//!
//! The 10 kbaud rate the light controllers speak is not one of the POSIX
//! `Bnnn` constants, so the port is programmed through the kernel's
//! `termios2` interface with `BOTHER` instead of the portable
//! `cfsetspeed` path. Settings are read back after applying them because
//! drivers may silently round the rate to whatever the hardware can do.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::{AsRawFd, RawFd};

use tracing::{debug, error, warn};

use crate::error::LinkError;
use crate::link::SerialLink;

/// Serial link backed by a local tty device
#[derive(Debug)]
pub struct TtyLink {
    file: File,
}

impl TtyLink {
    /// Open the device write-only
    ///
    /// The line is left untouched until [`SerialLink::configure`] runs.
    pub fn open(path: &str) -> io::Result<Self> {
        let file = OpenOptions::new().write(true).open(path)?;
        Ok(Self { file })
    }
}

fn query_settings(fd: RawFd) -> io::Result<libc::termios2> {
    // Safety: TCGETS2 fills the struct, it is only read on rc == 0
    let mut settings: libc::termios2 = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::ioctl(fd, libc::TCGETS2, &mut settings) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(settings)
}

impl SerialLink for TtyLink {
    fn configure(&mut self, baud_rate: u32) -> Result<(), LinkError> {
        let fd = self.file.as_raw_fd();

        let mut settings = query_settings(fd).map_err(LinkError::QueryFailed)?;

        // Raw byte stream: no input mangling, no line discipline, no echo,
        // no output post-processing
        settings.c_iflag &= !(libc::ISTRIP
            | libc::INLCR
            | libc::IGNCR
            | libc::ICRNL
            | libc::IXON
            | libc::IXOFF);
        settings.c_lflag &= !(libc::ICANON | libc::ECHO | libc::ECHOE | libc::ISIG);
        settings.c_oflag &= !libc::OPOST;

        // 8N1, modem lines ignored, rate taken from c_ispeed/c_ospeed
        settings.c_cflag &= !(libc::PARENB
            | libc::CSTOPB
            | libc::CSIZE
            | libc::CBAUD
            | libc::CIBAUD);
        settings.c_cflag |= libc::CS8 | libc::CLOCAL | libc::BOTHER;
        settings.c_ispeed = baud_rate;
        settings.c_ospeed = baud_rate;

        let rc = unsafe { libc::ioctl(fd, libc::TCSETS2, &settings) };
        if rc != 0 {
            error!("unsupported baud rate {}", baud_rate);
            return Err(LinkError::BaudUnsupported {
                baud: baud_rate,
                source: io::Error::last_os_error(),
            });
        }

        let applied = query_settings(fd).map_err(LinkError::QueryFailed)?;
        if applied.c_ispeed != baud_rate || applied.c_ospeed != baud_rate {
            error!(
                "failed to set baud rate: line reports {}/{}",
                applied.c_ispeed, applied.c_ospeed
            );
            return Err(LinkError::BaudMismatch {
                requested: baud_rate,
                input: applied.c_ispeed,
                output: applied.c_ospeed,
            });
        }

        // Drop anything queued before our frame; not worth failing over
        let rc = unsafe { libc::ioctl(fd, libc::TCFLSH, libc::TCIOFLUSH) };
        if rc != 0 {
            warn!(
                "could not flush serial queues: {}",
                io::Error::last_os_error()
            );
        }

        debug!(baud_rate, "serial link configured");
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.file.write_all(&[byte])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::NamedTempFile;

    #[test]
    fn test_open_missing_device_fails() {
        let result = TtyLink::open("/dev/nuclight-test-does-not-exist");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_configure_requires_a_terminal() {
        let scratch = NamedTempFile::new().unwrap();
        let mut link = TtyLink::open(scratch.path().to_str().unwrap()).unwrap();

        // TCGETS2 on a regular file fails with ENOTTY
        let err = link.configure(10_000).unwrap_err();
        assert!(matches!(err, LinkError::QueryFailed(_)));
    }

    #[test]
    fn test_write_byte_appends_to_the_descriptor() {
        let scratch = NamedTempFile::new().unwrap();
        let mut link = TtyLink::open(scratch.path().to_str().unwrap()).unwrap();

        link.write_byte(0xFA).unwrap();
        link.write_byte(0x03).unwrap();

        let mut written = Vec::new();
        File::open(scratch.path())
            .unwrap()
            .read_to_end(&mut written)
            .unwrap();
        assert_eq!(written, vec![0xFA, 0x03]);
    }

    // Needs a controller attached on /dev/ttyUSB0
    #[test]
    #[ignore]
    fn test_configure_real_device() {
        let mut link = TtyLink::open("/dev/ttyUSB0").unwrap();
        link.configure(10_000).unwrap();
    }
}
