use anyhow::Result;
use tracing::error;

use crate::overlay::config::DEFAULT_LINE_COUNT;
use crate::overlay::manager::Compositor;
use crate::overlay::{Orientation, OverlayConfig, OverlayManager, StartOutcome};

/// Largest line count the panel offers.
pub const MAX_LINES: usize = 50;

/// Everything the control panel lets the user choose.
///
/// The selection is locked while the overlay runs; only Randomize and Stop
/// are available then.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelState {
    pub green: bool,
    pub purple: bool,
    pub horizontal: bool,
    pub line_count: usize,
    pub cover_taskbar: bool,
    running: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            green: true,
            purple: false,
            horizontal: false,
            line_count: DEFAULT_LINE_COUNT,
            cover_taskbar: false,
            running: false,
        }
    }
}

/// Summary line shown next to the start/stop switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelStatus {
    Running { lines: usize },
    NoColors,
    Ready { colors: usize },
}

impl PanelStatus {
    pub fn text(&self) -> String {
        match self {
            PanelStatus::Running { lines } => format!("Showing {lines} line(s)"),
            PanelStatus::NoColors => "Select a color to enable".to_string(),
            PanelStatus::Ready { colors } => format!("{colors} color(s) selected"),
        }
    }
}

impl PanelState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Selected color identifiers, green before purple.
    pub fn colors(&self) -> Vec<String> {
        let mut colors = Vec::new();
        if self.green {
            colors.push("green".to_string());
        }
        if self.purple {
            colors.push("purple".to_string());
        }
        colors
    }

    pub fn orientation(&self) -> Orientation {
        if self.horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Build a start request from the current selection.
    pub fn request(&self, randomize: bool) -> OverlayConfig {
        OverlayConfig {
            colors: self.colors(),
            line_count: self.line_count,
            orientation: self.orientation(),
            randomize,
            cover_taskbar: self.cover_taskbar,
        }
    }

    pub fn status(&self) -> PanelStatus {
        if self.running {
            return PanelStatus::Running {
                lines: self.line_count,
            };
        }
        match self.colors().len() {
            0 => PanelStatus::NoColors,
            n => PanelStatus::Ready { colors: n },
        }
    }

    pub fn toggle_green(&mut self) {
        if !self.running {
            self.green = !self.green;
        }
    }

    pub fn toggle_purple(&mut self) {
        if !self.running {
            self.purple = !self.purple;
        }
    }

    pub fn toggle_horizontal(&mut self) {
        if !self.running {
            self.horizontal = !self.horizontal;
        }
    }

    pub fn toggle_cover_taskbar(&mut self) {
        if !self.running {
            self.cover_taskbar = !self.cover_taskbar;
        }
    }

    /// Move the line count by `delta`, clamped to `1..=MAX_LINES`.
    pub fn step_lines(&mut self, delta: isize) {
        if self.running {
            return;
        }
        self.line_count = self
            .line_count
            .saturating_add_signed(delta)
            .clamp(1, MAX_LINES);
    }

    /// Start/stop switch: stop a running overlay, otherwise start one.
    pub fn toggle<C: Compositor>(&mut self, overlays: &mut OverlayManager<C>) {
        if self.running {
            overlays.stop();
            self.running = false;
        } else {
            self.start(overlays, false);
        }
    }

    /// Re-create the running overlay with fresh random line offsets.
    pub fn randomize<C: Compositor>(&mut self, overlays: &mut OverlayManager<C>) {
        if self.running {
            self.start(overlays, true);
        }
    }

    fn start<C: Compositor>(&mut self, overlays: &mut OverlayManager<C>, randomize: bool) {
        if let Err(e) = overlays.start(self.request(randomize)) {
            error!("failed to start overlay: {e:#}");
        }
        self.running = overlays.is_active();
    }

    /// Start immediately, as requested from the command line.
    pub fn start_now<C: Compositor>(&mut self, overlays: &mut OverlayManager<C>) -> Result<StartOutcome> {
        let outcome = overlays.start(self.request(false));
        self.running = overlays.is_active();
        outcome
    }
}
