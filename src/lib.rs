//! # nuclight Library
//!
//! Set the LED lights of a T9 Plus style mini PC over its serial link.
//!
//! The light controller speaks a five-byte frame protocol at a
//! non-standard 10 kbaud rate. This library encodes light commands into
//! wire frames and clocks them out over a raw local tty.

pub mod cli;
pub mod config;
pub mod error;
pub mod lights;
pub mod link;
pub mod protocol;
