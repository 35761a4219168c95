mod cli;
mod logging;
// Only the Win32 front end drives these; other targets just parse the CLI.
#[cfg_attr(not(windows), allow(dead_code))]
mod overlay;
#[cfg_attr(not(windows), allow(dead_code))]
mod ui;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);
    tracing::info!("=== Line Overlay ===");

    run(cli)
}

#[cfg(windows)]
fn run(cli: Cli) -> Result<()> {
    use anyhow::Context;
    use gpui::{AppContext, Application, WindowOptions};

    use crate::overlay::{OverlayManager, StartOutcome, Win32Compositor};
    use crate::ui::Controller;

    // Register the Win32 overlay window class (once, before any windows are created).
    overlay::window::register_overlay_class().context("overlay window class")?;

    let mut panel = cli.panel();
    let mut overlays = OverlayManager::new(Win32Compositor);
    if cli.start {
        match panel.start_now(&mut overlays) {
            Ok(StartOutcome::Started) => {}
            Ok(other) => tracing::warn!(?other, "overlay not started from the command line"),
            Err(e) => tracing::error!("failed to start overlay: {e:#}"),
        }
    }

    // Launch the GPUI control window.
    Application::new().run(move |app: &mut gpui::App| {
        let opened = app.open_window(
            WindowOptions {
                titlebar: Some(gpui::TitlebarOptions {
                    title: Some("Line Overlay".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |_, cx| cx.new(move |_| Controller::new(panel, overlays)),
        );
        if let Err(e) = opened {
            tracing::error!("failed to open control panel: {e:#}");
            app.quit();
        }
    });

    Ok(())
}

#[cfg(not(windows))]
fn run(cli: Cli) -> Result<()> {
    let panel = cli.panel();
    tracing::debug!(?panel, "parsed panel settings");
    anyhow::bail!("the screen overlay needs Win32 layered windows; this platform is not supported")
}
