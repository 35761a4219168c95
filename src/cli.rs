use std::str::FromStr;

use clap::Parser;
use clap::builder::TypedValueParser;

use crate::overlay::Orientation;
use crate::overlay::config::DEFAULT_LINE_COUNT;
use crate::ui::PanelState;
use crate::ui::state::MAX_LINES;

/// Draw colored lines over the whole screen.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Line colors, cycled in order (green, purple)
    #[arg(long, value_delimiter = ',', default_value = "green")]
    pub colors: Vec<String>,

    /// Number of lines
    #[arg(long, default_value_t = DEFAULT_LINE_COUNT,
          value_parser = clap::value_parser!(u16).range(1..=MAX_LINES as i64).map(usize::from))]
    pub lines: usize,

    /// Axis the lines are spread along
    #[arg(long, value_parser = Orientation::from_str, default_value_t = Orientation::Vertical)]
    pub orientation: Orientation,

    /// Extend the overlay under the taskbar
    #[arg(long)]
    pub cover_taskbar: bool,

    /// Show the overlay right away instead of waiting for the panel
    #[arg(long)]
    pub start: bool,

    /// Enable debug logging (honours RUST_LOG)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Initial control panel state.
    ///
    /// The panel only offers green and purple; other names are dropped with a
    /// warning.
    pub fn panel(&self) -> PanelState {
        let mut panel = PanelState::default();
        panel.green = false;
        panel.purple = false;
        panel.horizontal = self.orientation == Orientation::Horizontal;
        panel.line_count = self.lines;
        panel.cover_taskbar = self.cover_taskbar;
        for color in &self.colors {
            match color.trim() {
                "green" => panel.green = true,
                "purple" => panel.purple = true,
                other => tracing::warn!("ignoring unsupported color `{other}`"),
            }
        }
        panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_panel_defaults() {
        let cli = Cli::try_parse_from(["line-overlay"]).unwrap();
        assert_eq!(cli.panel(), PanelState::default());
        assert!(!cli.start);
    }

    #[test]
    fn parses_full_command_line() {
        let cli = Cli::try_parse_from([
            "line-overlay",
            "--colors",
            "purple,green",
            "--lines",
            "3",
            "--orientation",
            "horizontal",
            "--cover-taskbar",
            "--start",
        ])
        .unwrap();

        let panel = cli.panel();
        assert!(panel.green && panel.purple && panel.horizontal && panel.cover_taskbar);
        assert_eq!(panel.line_count, 3);
        assert!(cli.start);
    }

    #[test]
    fn unknown_colors_are_dropped() {
        let cli = Cli::try_parse_from(["line-overlay", "--colors", "teal"]).unwrap();
        assert!(cli.panel().colors().is_empty());
    }

    #[test]
    fn line_count_is_bounded() {
        assert!(Cli::try_parse_from(["line-overlay", "--lines", "0"]).is_err());
        assert!(Cli::try_parse_from(["line-overlay", "--lines", "51"]).is_err());
        let err = Cli::try_parse_from(["line-overlay", "--orientation", "diagonal"]).unwrap_err();
        assert!(err.to_string().contains("unknown orientation `diagonal`"));
    }
}
