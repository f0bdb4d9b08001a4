//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Hue bridge HTTP API server.
#[derive(Debug, Parser)]
#[command(name = "huebridged", version, about)]
pub struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, default_value = crate::config::DEFAULT_PATH)]
    pub config: PathBuf,

    /// How long to wait for in-flight requests on shutdown (e.g. 15s or 1m).
    #[arg(long, default_value = "15s", value_parser = parse_duration)]
    pub graceful_timeout: Duration,
}

/// Parse `<number><unit>` where unit is one of `ms`, `s`, `m`, `h`.
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| format!("missing unit in duration {value:?} (use ms, s, m or h)"))?;
    let (amount, unit) = value.split_at(split);
    let amount: u64 = amount
        .parse()
        .map_err(|_| format!("invalid duration {value:?}"))?;
    match unit {
        "ms" => Ok(Duration::from_millis(amount)),
        "s" => Ok(Duration::from_secs(amount)),
        "m" => Ok(Duration::from_secs(amount.saturating_mul(60))),
        "h" => Ok(Duration::from_secs(amount.saturating_mul(3600))),
        other => Err(format!("unknown duration unit {other:?} (use ms, s, m or h)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_seconds() {
        assert_eq!(parse_duration("15s"), Ok(Duration::from_secs(15)));
    }

    #[test]
    fn should_parse_minutes() {
        assert_eq!(parse_duration("1m"), Ok(Duration::from_secs(60)));
    }

    #[test]
    fn should_parse_milliseconds_and_hours() {
        assert_eq!(parse_duration("250ms"), Ok(Duration::from_millis(250)));
        assert_eq!(parse_duration("2h"), Ok(Duration::from_secs(7200)));
    }

    #[test]
    fn should_reject_missing_unit() {
        assert!(parse_duration("15").is_err());
    }

    #[test]
    fn should_reject_unknown_unit() {
        assert!(parse_duration("15d").is_err());
    }

    #[test]
    fn should_reject_missing_amount() {
        assert!(parse_duration("s").is_err());
    }

    #[test]
    fn should_use_defaults_without_arguments() {
        let cli = Cli::try_parse_from(["huebridged"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("server-conf.yml"));
        assert_eq!(cli.graceful_timeout, Duration::from_secs(15));
    }

    #[test]
    fn should_parse_arguments() {
        let cli = Cli::try_parse_from([
            "huebridged",
            "--config",
            "/etc/huebridge.yml",
            "--graceful-timeout",
            "1m",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("/etc/huebridge.yml"));
        assert_eq!(cli.graceful_timeout, Duration::from_secs(60));
    }
}
