use std::fmt;
use std::str::FromStr;

/// Axis the lines are drawn along.
///
/// Vertical lines are distributed across the width of the surface, horizontal
/// lines across its height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Length of the main axis for a surface of the given size.
    pub fn extent(self, width: i32, height: i32) -> i32 {
        match self {
            Orientation::Vertical => width,
            Orientation::Horizontal => height,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        })
    }
}

/// Returned when a string names neither `vertical` nor `horizontal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrientationError(String);

impl fmt::Display for ParseOrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown orientation `{}`", self.0)
    }
}

impl std::error::Error for ParseOrientationError {}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Orientation::Vertical),
            "horizontal" => Ok(Orientation::Horizontal),
            other => Err(ParseOrientationError(other.to_string())),
        }
    }
}

/// A 32-bit ARGB color as painted onto the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineColor(pub u32);

impl LineColor {
    pub const TRANSPARENT: LineColor = LineColor(0x0000_0000);
    pub const GREEN: LineColor = LineColor(0xFF00_FF00);
    pub const MAGENTA: LineColor = LineColor(0xFFFF_00FF);

    /// Resolve a color identifier from a start request.
    ///
    /// Unknown identifiers resolve to [`LineColor::TRANSPARENT`] rather than
    /// failing, so a typo simply produces an invisible line.
    pub fn resolve(name: &str) -> Self {
        match name {
            "green" => LineColor::GREEN,
            "purple" => LineColor::MAGENTA,
            _ => LineColor::TRANSPARENT,
        }
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn is_transparent(self) -> bool {
        self.alpha() == 0
    }

    /// `(r, g, b)` components.
    pub fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

/// Parameters of a single start request.
///
/// Once handed to a [`LineRenderer`](crate::overlay::render::LineRenderer)
/// the config is never mutated; a new request builds a new config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayConfig {
    /// Color identifiers, cycled over the lines in order.
    pub colors: Vec<String>,
    /// Number of lines to draw.
    pub line_count: usize,
    /// Main axis of the lines.
    pub orientation: Orientation,
    /// Place lines at random sorted offsets instead of evenly spaced ones.
    pub randomize: bool,
    /// Cover the whole screen including the taskbar instead of the work area.
    pub cover_taskbar: bool,
}

/// Line count used when a request does not specify one.
pub const DEFAULT_LINE_COUNT: usize = 10;

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            colors: Vec::new(),
            line_count: DEFAULT_LINE_COUNT,
            orientation: Orientation::Vertical,
            randomize: false,
            cover_taskbar: false,
        }
    }
}

impl OverlayConfig {
    /// Color of line `index`, cycling through [`OverlayConfig::colors`].
    pub fn color_of(&self, index: usize) -> LineColor {
        if self.colors.is_empty() {
            return LineColor::TRANSPARENT;
        }
        LineColor::resolve(&self.colors[index % self.colors.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_parses_known_names() {
        assert_eq!("vertical".parse(), Ok(Orientation::Vertical));
        assert_eq!("horizontal".parse(), Ok(Orientation::Horizontal));
        let err = "diagonal".parse::<Orientation>().unwrap_err();
        assert_eq!(err.to_string(), "unknown orientation `diagonal`");
    }

    #[test]
    fn extent_follows_main_axis() {
        assert_eq!(Orientation::Vertical.extent(1920, 1080), 1920);
        assert_eq!(Orientation::Horizontal.extent(1920, 1080), 1080);
    }

    #[test]
    fn unknown_colors_are_transparent() {
        assert_eq!(LineColor::resolve("green"), LineColor::GREEN);
        assert_eq!(LineColor::resolve("purple"), LineColor::MAGENTA);
        assert!(LineColor::resolve("teal").is_transparent());
        assert!(LineColor::resolve("Green").is_transparent());
        assert!(!LineColor::GREEN.is_transparent());
        assert_eq!(LineColor::MAGENTA.rgb(), (0xFF, 0x00, 0xFF));
    }

    #[test]
    fn colors_cycle_over_lines() {
        let cfg = OverlayConfig {
            colors: vec!["green".into(), "purple".into()],
            line_count: 5,
            ..Default::default()
        };
        let got: Vec<_> = (0..5).map(|i| cfg.color_of(i)).collect();
        assert_eq!(
            got,
            vec![
                LineColor::GREEN,
                LineColor::MAGENTA,
                LineColor::GREEN,
                LineColor::MAGENTA,
                LineColor::GREEN,
            ]
        );
    }

    #[test]
    fn default_request_matches_documented_defaults() {
        let cfg = OverlayConfig::default();
        assert_eq!(cfg.line_count, 10);
        assert_eq!(cfg.orientation, Orientation::Vertical);
        assert!(!cfg.randomize);
    }
}
