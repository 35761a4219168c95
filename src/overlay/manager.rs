use anyhow::Result;
use tracing::{debug, info, warn};

use crate::overlay::config::OverlayConfig;

/// Platform window system that can host overlay surfaces.
///
/// A surface is full-screen, translucent, placed above normal application
/// windows, and never takes focus or input.
pub trait Compositor {
    /// Handle to an attached surface.
    type Surface;

    /// Whether the user has allowed this process to draw over other windows.
    fn can_draw_overlays(&self) -> bool {
        true
    }

    /// Create a surface, register it with the window system and hand it `config`.
    fn attach(&mut self, config: &OverlayConfig) -> Result<Self::Surface>;

    /// Remove a previously attached surface.
    fn detach(&mut self, surface: Self::Surface);
}

/// Result of [`OverlayManager::start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new surface is showing the requested lines.
    Started,
    /// The request named no colors; no overlay is shown.
    NoColors,
    /// The request asked for zero lines; no overlay is shown.
    NoLines,
    /// Drawing over other windows is not allowed; the current overlay stays.
    PermissionRequired,
}

/// Controls the lifecycle of the single overlay surface.
///
/// At most one surface is active at a time: each successful
/// [`start`](Self::start) replaces the previous one.
pub struct OverlayManager<C: Compositor> {
    compositor: C,
    active: Option<C::Surface>,
}

impl<C: Compositor> OverlayManager<C> {
    pub fn new(compositor: C) -> Self {
        Self {
            compositor,
            active: None,
        }
    }

    /// Show the overlay described by `config`, replacing any existing one.
    ///
    /// The previous overlay is removed even when the request turns out to have
    /// nothing to draw. Only a missing permission leaves it in place.
    pub fn start(&mut self, config: OverlayConfig) -> Result<StartOutcome> {
        if !self.compositor.can_draw_overlays() {
            warn!("drawing over other windows is not permitted; overlay not started");
            return Ok(StartOutcome::PermissionRequired);
        }

        self.stop();

        if config.colors.is_empty() {
            debug!("start request without colors; no overlay shown");
            return Ok(StartOutcome::NoColors);
        }
        if config.line_count == 0 {
            debug!("start request without lines; no overlay shown");
            return Ok(StartOutcome::NoLines);
        }

        let surface = self.compositor.attach(&config)?;
        info!(
            colors = ?config.colors,
            lines = config.line_count,
            orientation = %config.orientation,
            randomize = config.randomize,
            "overlay started"
        );
        self.active = Some(surface);
        Ok(StartOutcome::Started)
    }

    /// Remove the active overlay, if any.
    pub fn stop(&mut self) {
        if let Some(surface) = self.active.take() {
            self.compositor.detach(surface);
            info!("overlay stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[cfg(test)]
    pub fn compositor(&self) -> &C {
        &self.compositor
    }
}

impl<C: Compositor> Drop for OverlayManager<C> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use anyhow::bail;

    use super::*;

    #[derive(Default)]
    struct FakeCompositor {
        denied: bool,
        fail: bool,
        next_id: u32,
        attached: Vec<u32>,
        detached: Vec<u32>,
        configs: Vec<OverlayConfig>,
    }

    impl FakeCompositor {
        fn live(&self) -> usize {
            self.attached.len() - self.detached.len()
        }
    }

    impl Compositor for FakeCompositor {
        type Surface = u32;

        fn can_draw_overlays(&self) -> bool {
            !self.denied
        }

        fn attach(&mut self, config: &OverlayConfig) -> Result<u32> {
            if self.fail {
                bail!("window creation failed");
            }
            self.configs.push(config.clone());
            self.next_id += 1;
            self.attached.push(self.next_id);
            Ok(self.next_id)
        }

        fn detach(&mut self, surface: u32) {
            self.detached.push(surface);
        }
    }

    fn request(colors: &[&str]) -> OverlayConfig {
        OverlayConfig {
            colors: colors.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn second_start_replaces_first_surface() {
        let mut mgr = OverlayManager::new(FakeCompositor::default());
        assert_eq!(mgr.start(request(&["green"])).unwrap(), StartOutcome::Started);
        assert_eq!(mgr.start(request(&["purple"])).unwrap(), StartOutcome::Started);

        let c = mgr.compositor();
        assert_eq!(c.attached, vec![1, 2]);
        assert_eq!(c.detached, vec![1]);
        assert_eq!(c.live(), 1);
        assert_eq!(c.configs[1].colors, vec!["purple".to_string()]);
    }

    #[test]
    fn empty_colors_start_nothing() {
        let mut mgr = OverlayManager::new(FakeCompositor::default());
        assert_eq!(mgr.start(request(&[])).unwrap(), StartOutcome::NoColors);
        assert!(!mgr.is_active());
        assert!(mgr.compositor().attached.is_empty());
    }

    #[test]
    fn empty_colors_remove_running_surface() {
        let mut mgr = OverlayManager::new(FakeCompositor::default());
        mgr.start(request(&["green"])).unwrap();

        assert_eq!(mgr.start(request(&[])).unwrap(), StartOutcome::NoColors);
        assert!(!mgr.is_active());
        assert_eq!(mgr.compositor().attached, vec![1]);
        assert_eq!(mgr.compositor().detached, vec![1]);
        assert_eq!(mgr.compositor().live(), 0);
    }

    #[test]
    fn zero_lines_start_nothing() {
        let mut mgr = OverlayManager::new(FakeCompositor::default());
        let cfg = OverlayConfig {
            line_count: 0,
            ..request(&["green"])
        };
        assert_eq!(mgr.start(cfg).unwrap(), StartOutcome::NoLines);
        assert!(!mgr.is_active());
    }

    #[test]
    fn missing_permission_leaves_state_untouched() {
        let mut mgr = OverlayManager::new(FakeCompositor::default());
        mgr.start(request(&["green"])).unwrap();
        mgr.compositor.denied = true;

        assert_eq!(
            mgr.start(request(&["purple"])).unwrap(),
            StartOutcome::PermissionRequired
        );
        assert!(mgr.is_active());
        assert_eq!(mgr.compositor().attached, vec![1]);
        assert!(mgr.compositor().detached.is_empty());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut mgr = OverlayManager::new(FakeCompositor::default());
        mgr.stop();
        mgr.start(request(&["green"])).unwrap();
        mgr.stop();
        mgr.stop();
        assert!(!mgr.is_active());
        assert_eq!(mgr.compositor().detached, vec![1]);
    }

    #[test]
    fn attach_failure_leaves_no_surface() {
        let mut mgr = OverlayManager::new(FakeCompositor::default());
        mgr.start(request(&["green"])).unwrap();
        mgr.compositor.fail = true;

        assert!(mgr.start(request(&["green"])).is_err());
        assert!(!mgr.is_active());
        assert_eq!(mgr.compositor().live(), 0);
    }
}
