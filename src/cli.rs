//! # CLI Module
//!
//! Command-line surface of the `nuclight` binary.
//!
//! The flags only parse; range checking of the light levels happens in
//! the encoder so the rules are the same for every caller of the
//! library.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Set the LED lights of a T9 Plus style mini PC over the serial link
#[derive(Debug, Parser)]
#[command(author, version)]
pub struct Args {
    /// Serial link rate in baud
    #[arg(short = 'a', long = "serial-speed", value_name = "BAUD")]
    pub serial_speed: Option<u32>,

    /// Brightness level, 1 (dimmest) to 5 (brightest)
    #[arg(short, long, value_name = "NUM")]
    pub brightness: Option<u8>,

    /// Light mode: 1=Rainbow, 2=Breathing, 3=Cycle, 4=Off, 5=Auto
    #[arg(short, long, value_name = "MODE")]
    pub mode: u8,

    /// Serial device the light controller answers on
    #[arg(short = 'p', long = "serial-port", value_name = "PORT")]
    pub serial_port: Option<String>,

    /// Effect speed, 1 (slowest) to 5 (fastest)
    #[arg(short, long, value_name = "NUM")]
    pub speed: Option<u8>,

    /// Verbosity: 0=errors, 1=warnings, 2=info, 3=debug
    #[arg(short, long, value_name = "LEVEL", default_value_t = 1)]
    pub verbose: u8,

    /// TOML configuration file, read before the flag overrides
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Map the numeric verbosity flag to a tracing level
pub fn verbosity_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        _ => Level::DEBUG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parses_full_invocation() {
        let args = Args::try_parse_from([
            "nuclight", "-m", "3", "-b", "2", "-s", "4", "-p", "/dev/ttyS1", "-a", "9600", "-v",
            "2",
        ])
        .unwrap();

        assert_eq!(args.mode, 3);
        assert_eq!(args.brightness, Some(2));
        assert_eq!(args.speed, Some(4));
        assert_eq!(args.serial_port.as_deref(), Some("/dev/ttyS1"));
        assert_eq!(args.serial_speed, Some(9_600));
        assert_eq!(args.verbose, 2);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_mode_is_required() {
        assert!(Args::try_parse_from(["nuclight", "-b", "2"]).is_err());
    }

    #[test]
    fn test_optional_flags_default_to_unset() {
        let args = Args::try_parse_from(["nuclight", "-m", "4"]).unwrap();

        assert_eq!(args.verbose, 1);
        assert!(args.brightness.is_none());
        assert!(args.speed.is_none());
        assert!(args.serial_port.is_none());
        assert!(args.serial_speed.is_none());
    }

    #[test]
    fn test_help_names_the_modes() {
        let help = Args::command().render_long_help().to_string();
        for name in ["Rainbow", "Breathing", "Cycle", "Off", "Auto"] {
            assert!(help.contains(name), "help should mention {name}");
        }
    }

    #[test]
    fn test_verbosity_mapping() {
        assert_eq!(verbosity_level(0), Level::ERROR);
        assert_eq!(verbosity_level(1), Level::WARN);
        assert_eq!(verbosity_level(2), Level::INFO);
        assert_eq!(verbosity_level(3), Level::DEBUG);
        assert_eq!(verbosity_level(9), Level::DEBUG);
    }
}
