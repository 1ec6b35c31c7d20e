//! Command-line argument parsing for coversheet-demo.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//! - Environment variable parsing (handled by `coversheet_config`).

use clap::Parser;
use coversheet_config::ColorTheme;
use std::path::PathBuf;

/// Command-line arguments for coversheet-demo.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --reveal-delay-ms, --theme)
/// 2. Environment variables (e.g., COVERSHEET_REVEAL_DELAY_MS)
/// 3. Configuration file (--config-path or COVERSHEET_CONFIG_PATH)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "coversheet-demo",
    about = "Half and quarter cover sheets over a terminal screen",
    version,
    after_help = "Examples:\n  coversheet-demo\n  coversheet-demo --theme dark\n  coversheet-demo --reveal-delay-ms 400 --dismiss-delay-ms 400\n  coversheet-demo --config-path ./coversheet.json --log-dir /tmp/coversheet --no-mouse\n"
)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Delay between the backdrop appearing and the content sliding in
    #[arg(long, value_name = "MS")]
    pub reveal_delay_ms: Option<u64>,

    /// Delay between the content sliding out and the backdrop unmounting
    #[arg(long, value_name = "MS")]
    pub dismiss_delay_ms: Option<u64>,

    /// Color theme (default, light, dark, high-contrast, monochrome)
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<ColorTheme>,
}

fn parse_theme(value: &str) -> Result<ColorTheme, String> {
    ColorTheme::parse_name(value).ok_or_else(|| format!("unknown theme '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["coversheet-demo"]);
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
        assert!(!cli.no_mouse);
        assert!(cli.config_path.is_none());
        assert!(cli.reveal_delay_ms.is_none());
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_delay_flags() {
        let cli = Cli::parse_from([
            "coversheet-demo",
            "--reveal-delay-ms",
            "400",
            "--dismiss-delay-ms",
            "300",
        ]);
        assert_eq!(cli.reveal_delay_ms, Some(400));
        assert_eq!(cli.dismiss_delay_ms, Some(300));
    }

    #[test]
    fn test_theme_flag() {
        let cli = Cli::parse_from(["coversheet-demo", "--theme", "high-contrast"]);
        assert_eq!(cli.theme, Some(ColorTheme::HighContrast));
    }

    #[test]
    fn test_unknown_theme_rejected() {
        assert!(Cli::try_parse_from(["coversheet-demo", "--theme", "neon"]).is_err());
    }

    #[test]
    fn test_no_mouse_and_paths() {
        let cli = Cli::parse_from([
            "coversheet-demo",
            "--no-mouse",
            "--log-dir",
            "/tmp/logs",
            "--config-path",
            "/tmp/coversheet.json",
        ]);
        assert!(cli.no_mouse);
        assert_eq!(cli.log_dir, PathBuf::from("/tmp/logs"));
        assert_eq!(cli.config_path, Some(PathBuf::from("/tmp/coversheet.json")));
    }
}
