use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use super::config::{LineColor, OverlayConfig};
use super::layout::{LineLayout, Rect};

/// Drawing target for a [`LineRenderer`].
///
/// Implemented by the Win32 GDI surface and by recording canvases in tests.
pub trait Canvas {
    /// Current surface size in pixels as `(width, height)`.
    fn size(&self) -> (i32, i32);

    /// Fill `rect` with an opaque `color`. Canvases may skip transparent colors.
    fn fill_rect(&mut self, rect: Rect, color: LineColor);
}

/// A single line ready to be painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub rect: Rect,
    pub color: LineColor,
}

/// Draws the configured lines onto an overlay surface.
///
/// The layout is computed lazily on the first [`resize`](Self::resize) with a
/// non-zero size and then stays fixed for the lifetime of the renderer.
/// Later size changes are ignored, so lines keep their original offsets after
/// a display resolution or rotation change.
pub struct LineRenderer<R = StdRng> {
    config: OverlayConfig,
    rng: R,
    layout: Option<LineLayout>,
}

impl LineRenderer<StdRng> {
    /// Create a renderer seeded from operating-system randomness.
    pub fn new(config: OverlayConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> LineRenderer<R> {
    /// Create a renderer drawing its layout from `rng`.
    pub fn with_rng(config: OverlayConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            layout: None,
        }
    }

    #[cfg(test)]
    pub fn layout(&self) -> Option<&LineLayout> {
        self.layout.as_ref()
    }

    #[cfg(test)]
    pub fn is_initialized(&self) -> bool {
        self.layout.is_some()
    }

    /// Notify the renderer of the surface size.
    ///
    /// Returns `true` if this call computed the layout.
    pub fn resize(&mut self, width: i32, height: i32) -> bool {
        if self.layout.is_some() {
            debug!(width, height, "surface resized; keeping existing line layout");
            return false;
        }
        if width <= 0 || height <= 0 {
            return false;
        }

        let layout = LineLayout::compute(&self.config, width, height, &mut self.rng);
        debug!(
            width,
            height,
            lines = layout.len(),
            randomize = self.config.randomize,
            "computed line layout"
        );
        self.layout = Some(layout);
        true
    }

    /// Lines to paint on a `width` x `height` surface. Empty until initialized.
    pub fn lines(&self, width: i32, height: i32) -> Vec<Line> {
        let Some(layout) = &self.layout else {
            return Vec::new();
        };

        layout
            .thicknesses
            .iter()
            .enumerate()
            .map(|(i, &thickness)| Line {
                rect: Rect::line(
                    self.config.orientation,
                    layout.offset(i),
                    thickness,
                    width,
                    height,
                ),
                color: self.config.color_of(i),
            })
            .collect()
    }

    /// Paint every line onto `canvas`. Does nothing before the first resize.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let (width, height) = canvas.size();
        for line in self.lines(width, height) {
            canvas.fill_rect(line.rect, line.color);
        }
    }
}
