use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};

use crate::types::LogLevel;

/// Where diagnostic output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// The TUI owns the terminal; stderr would tear the alternate screen
    Discard,
}

impl LogTarget {
    pub fn for_command(interactive: bool, log_file: Option<PathBuf>) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Discard,
            (None, false) => LogTarget::Stderr,
        }
    }
}

/// Install the global `tracing` subscriber.
pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level.as_tracing_level())
        .with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| anyhow!("Failed to initialise logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_selection() {
        assert_eq!(LogTarget::for_command(false, None), LogTarget::Stderr);
        assert_eq!(LogTarget::for_command(true, None), LogTarget::Discard);
        assert_eq!(
            LogTarget::for_command(true, Some(PathBuf::from("catview.log"))),
            LogTarget::File(PathBuf::from("catview.log"))
        );
    }
}
