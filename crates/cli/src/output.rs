//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output: colored status
//! symbols and human-readable durations.

use clap::ValueEnum;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

pub mod symbols {
    pub const SUCCESS: &str = "✓";
    pub const SKIP: &str = "-";
    pub const INFO: &str = "•";
    pub const ARROW: &str = "→";
}

/// Format a duration for end-of-command summaries
///
/// Sub-second durations keep millisecond precision; anything longer is
/// rounded to whole seconds.
pub fn format_duration(duration: Duration) -> String {
    if duration.as_secs() == 0 {
        format!("{}ms", duration.as_millis())
    } else {
        humantime::format_duration(Duration::from_secs(duration.as_secs())).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_subsecond() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
    }

    #[test]
    fn test_format_duration_rounds_to_seconds() {
        assert_eq!(format_duration(Duration::from_millis(2750)), "2s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
    }
}
