use gpui::prelude::*;
use gpui::{FontWeight, MouseButton, div, px, rgb};

use crate::ui::controller::Controller;
use crate::ui::state::MAX_LINES;

/// Line count picker: `−` / value / `+`, locked while the overlay runs.
pub fn line_stepper(
    line_count: usize,
    locked: bool,
    cx: &mut gpui::Context<Controller>,
) -> impl IntoElement + use<> {
    div()
        .flex()
        .items_center()
        .justify_between()
        .w_full()
        .max_w(px(500.0))
        .child(
            div()
                .text_base()
                .font_weight(FontWeight::MEDIUM)
                .text_color(rgb(0xcccccc))
                .child("Number of lines:"),
        )
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .child(step_btn("−", -1, !locked && line_count > 1, cx))
                .child(
                    div()
                        .w(px(48.0))
                        .py_1()
                        .flex()
                        .justify_center()
                        .bg(rgb(0x2a2a2a))
                        .rounded(px(6.0))
                        .font_weight(FontWeight::BOLD)
                        .text_color(if locked { rgb(0x888888) } else { rgb(0xffffff) })
                        .child(line_count.to_string()),
                )
                .child(step_btn("+", 1, !locked && line_count < MAX_LINES, cx)),
        )
}

fn step_btn(
    label: &'static str,
    delta: isize,
    enabled: bool,
    cx: &mut gpui::Context<Controller>,
) -> impl IntoElement + use<> {
    div()
        .flex()
        .items_center()
        .justify_center()
        .w(px(28.0))
        .h(px(28.0))
        .rounded(px(6.0))
        .bg(if enabled { rgb(0x333333) } else { rgb(0x1e1e1e) })
        .text_color(if enabled { rgb(0xffffff) } else { rgb(0x555555) })
        .when(enabled, |el| el.cursor_pointer())
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |this, _, _window, cx| {
                if enabled {
                    this.panel.step_lines(delta);
                    cx.notify();
                }
            }),
        )
        .child(label)
}
