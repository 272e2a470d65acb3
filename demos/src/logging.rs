//! Logger setup for the command-line tools.

use flexi_logger::{Logger, LoggerHandle};

/// Log level spec for a `-v` count, or `"off"` when quiet.
/// `RUST_LOG` takes precedence when set.
pub fn level_spec(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "off";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Start logging to stderr. The returned handle must be kept alive for the
/// lifetime of the program.
pub fn init(verbose: u8, quiet: bool) -> Result<LoggerHandle, flexi_logger::FlexiLoggerError> {
    Logger::try_with_env_or_str(level_spec(verbose, quiet))?
        .format(flexi_logger::default_format)
        .start()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_spec(0, false), "warn");
        assert_eq!(level_spec(1, false), "info");
        assert_eq!(level_spec(2, false), "debug");
        assert_eq!(level_spec(9, false), "trace");
        assert_eq!(level_spec(3, true), "off");
    }
}
