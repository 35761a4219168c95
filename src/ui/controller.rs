use gpui::prelude::*;
use gpui::{FontWeight, div, px, rgb};

use crate::overlay::{OverlayManager, Win32Compositor};
use crate::ui::components::{button, line_stepper, switch};
use crate::ui::option_list::{PanelOption, option_list};
use crate::ui::state::{PanelState, PanelStatus};

/// Central application controller.
///
/// Owns the panel selection and the [`OverlayManager`] that drives the Win32
/// overlay window.
pub struct Controller {
    /// Colors, orientation and line count chosen in the panel.
    pub panel: PanelState,
    /// Manages the lifecycle of the overlay window.
    pub overlays: OverlayManager<Win32Compositor>,
}

impl Controller {
    pub fn new(panel: PanelState, overlays: OverlayManager<Win32Compositor>) -> Self {
        Self { panel, overlays }
    }
}

impl Render for Controller {
    fn render(
        &mut self,
        _window: &mut gpui::Window,
        cx: &mut gpui::Context<Self>,
    ) -> impl IntoElement {
        let running = self.panel.is_running();
        let status = self.panel.status();

        // ── Colors ───────────────────────────────────────────────────────
        let colors = option_list(
            vec![
                PanelOption {
                    label: "Green",
                    detail: "Bright green lines",
                    accent: 0x00FF00,
                    checked: self.panel.green,
                    toggle: PanelState::toggle_green,
                },
                PanelOption {
                    label: "Purple",
                    detail: "Magenta lines",
                    accent: 0xFF00FF,
                    checked: self.panel.purple,
                    toggle: PanelState::toggle_purple,
                },
            ],
            running,
            cx,
        );

        // ── Layout options ───────────────────────────────────────────────
        let layout = option_list(
            vec![
                PanelOption {
                    label: "Horizontal lines",
                    detail: "Spread lines top to bottom instead of left to right",
                    accent: 0x8E24AA,
                    checked: self.panel.horizontal,
                    toggle: PanelState::toggle_horizontal,
                },
                PanelOption {
                    label: "Cover taskbar",
                    detail: "Extend the overlay under the taskbar",
                    accent: 0x8E24AA,
                    checked: self.panel.cover_taskbar,
                    toggle: PanelState::toggle_cover_taskbar,
                },
            ],
            running,
            cx,
        );

        let stepper = line_stepper(self.panel.line_count, running, cx);

        // ── Activation panel ─────────────────────────────────────────────
        let activation_panel = div()
            .flex()
            .items_center()
            .justify_between()
            .w_full()
            .max_w(px(500.0))
            .px_4()
            .py_4()
            .rounded(px(12.0))
            .bg(if running { rgb(0x2e1a1a) } else { rgb(0x1e1e1e) })
            .border_1()
            .border_color(if running { rgb(0xE53935) } else { rgb(0x333333) })
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(2.0))
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .text_color(rgb(0xffffff))
                            .child(if running { "Stop overlay" } else { "Start overlay" }),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(match status {
                                PanelStatus::Running { .. } => rgb(0xEF9A9A),
                                PanelStatus::NoColors => rgb(0xFFB74D),
                                PanelStatus::Ready { .. } => rgb(0x888888),
                            })
                            .child(status.text()),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(button(
                        "Randomize",
                        running,
                        cx.listener(|this, _, _window, cx| {
                            this.panel.randomize(&mut this.overlays);
                            cx.notify();
                        }),
                    ))
                    .child(switch(
                        running,
                        cx.listener(|this, _, _window, cx| {
                            this.panel.toggle(&mut this.overlays);
                            cx.notify();
                        }),
                    )),
            );

        let sep = || div().w_full().max_w(px(500.0)).h(px(1.0)).bg(rgb(0x333333));
        let header = |text: &'static str| {
            div()
                .w_full()
                .max_w(px(500.0))
                .text_lg()
                .font_weight(FontWeight::MEDIUM)
                .text_color(rgb(0xcccccc))
                .child(text)
        };

        // ── Assemble the full layout ─────────────────────────────────────
        div()
            .flex()
            .flex_col()
            .gap_5()
            .size_full()
            .p_6()
            .items_center()
            .bg(rgb(0x0e0e0e))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_1()
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(rgb(0xffffff))
                            .child("Line Overlay"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(0x888888))
                            .child(if running {
                                "🔒 Settings locked while the overlay is shown"
                            } else {
                                "Draw colored lines over the whole screen"
                            }),
                    ),
            )
            .child(sep())
            .child(header("Colors"))
            .child(colors)
            .child(sep())
            .child(header("Layout"))
            .child(layout)
            .child(stepper)
            .child(sep())
            .child(activation_panel)
    }
}
