//! Logging setup.
//!
//! Logs go to stderr so command output on stdout stays machine readable.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing.
///
/// `RUST_LOG` wins when set; otherwise `log_level` (debug, info, warn,
/// error) picks the maximum level.
pub fn init(log_level: &str) {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
        return;
    }

    fmt()
        .with_max_level(parse_level(log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_level(log_level: &str) -> Level {
    match log_level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("error"), Level::ERROR);
        assert_eq!(parse_level("bogus"), Level::WARN);
    }
}
