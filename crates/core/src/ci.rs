//! Automation output
//!
//! The `changed` command publishes its result as a JSON array. Inside an
//! automation environment (the output file path env var is set) the line
//! is appended to that file; otherwise it is printed to stdout.

use crate::error::CoreError;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// Environment variable naming the automation output file
pub const OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Publish the changed-component list, returning the emitted line
pub fn publish_changed(components: &[String]) -> Result<String, CoreError> {
    let json = serde_json::to_string(components)?;
    let line = format!("addons={json}");

    match env::var(OUTPUT_ENV) {
        Ok(path) if !path.is_empty() => {
            debug!(path = %path, "appending to automation output");
            let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
            writeln!(file, "{line}")?;
        }
        _ => println!("{line}"),
    }

    Ok(line)
}
