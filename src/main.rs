//! # nuclight
//!
//! Set the LED lights of a T9 Plus style mini PC from the command line.
//!
//! The binary parses the flags, merges them with the optional TOML
//! config file, and hands one light command to the library's transmit
//! path.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use nuclight::cli::{self, Args};
use nuclight::config::SerialLinkConfig;
use nuclight::lights::send_light_command;
use nuclight::protocol::{mode_name, LightCommand};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG directives win over the -v flag
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli::verbosity_level(args.verbose).into()),
        )
        .init();

    info!("nuclight v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = resolve_config(&args)?;
    info!(
        "Using serial port {} at {} baud",
        config.device_path, config.baud_rate
    );

    // Unset levels stay 0 here; the encoder decides whether that is
    // acceptable for the requested mode
    let command = LightCommand {
        mode: args.mode,
        brightness: args.brightness.unwrap_or(0),
        speed: args.speed.unwrap_or(0),
    };

    if let Some(name) = mode_name(command.mode) {
        info!(
            "Setting lights to mode {name}, brightness {}, speed {}",
            command.brightness, command.speed
        );
    }

    send_light_command(&config, command).context("failed to set lights")?;

    info!("Lights set");
    Ok(())
}

/// Merge built-in defaults, the optional config file and flag overrides
fn resolve_config(args: &Args) -> Result<SerialLinkConfig> {
    let mut config = match &args.config {
        Some(path) => SerialLinkConfig::load(path)
            .with_context(|| format!("could not load config {}", path.display()))?,
        None => SerialLinkConfig::default(),
    };

    if let Some(port) = &args.serial_port {
        config.device_path = port.clone();
    }
    if let Some(baud) = args.serial_speed {
        config.baud_rate = baud;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}
