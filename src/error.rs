//! # Error Types
//!
//! Custom error types for nuclight using `thiserror`.
//!
//! The transmit pipeline has its own taxonomy: parameter validation and
//! device I/O surface as [`TransmitError`], with the line-discipline errors
//! nested inside it as [`LinkError`]. Config-file handling fails with
//! [`ConfigError`]. Every variant is terminal for the invocation; nothing is
//! retried.

use std::io;
use thiserror::Error;

/// Errors from configuring the serial line discipline
#[derive(Debug, Error)]
pub enum LinkError {
    /// The current line settings could not be read back
    #[error("failed to query serial line settings")]
    QueryFailed(#[source] io::Error),

    /// The device rejected the requested configuration outright
    #[error("serial device rejected {baud} baud")]
    BaudUnsupported {
        baud: u32,
        #[source]
        source: io::Error,
    },

    /// The ioctl was accepted but the read-back rates differ from the request
    #[error("baud rate not applied: requested {requested}, line reports input {input} / output {output}")]
    BaudMismatch {
        requested: u32,
        input: u32,
        output: u32,
    },
}

/// Errors from encoding and transmitting a light command
#[derive(Debug, Error)]
pub enum TransmitError {
    /// A command level was outside [1, max]; 0 doubles as "not set"
    #[error("{field} out of range or not set (got {value}, expected 1..={max})")]
    InvalidParameter {
        field: &'static str,
        value: u8,
        max: u8,
    },

    /// The serial device node could not be opened
    #[error("failed to open {path}")]
    OpenFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Link configuration failed before any frame byte was written
    #[error("serial link configuration failed")]
    LinkConfigFailed(#[from] LinkError),

    /// A single-byte write failed partway through the frame
    #[error("write aborted after {written} of {total} frame bytes")]
    WriteFailed {
        written: usize,
        total: usize,
        #[source]
        source: io::Error,
    },
}

/// Errors from loading the optional configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML for [`crate::config::SerialLinkConfig`]
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),

    /// The parsed values fail validation
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
