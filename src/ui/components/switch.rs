use gpui::prelude::*;
use gpui::{MouseButton, div, px, rgb};

/// Start/stop switch for the overlay.
///
/// A pill-shaped track whose knob sits left while stopped and right while
/// running. The running track turns red, matching the "stop" action it offers.
pub fn switch(
    running: bool,
    on_toggle: impl Fn(&bool, &mut gpui::Window, &mut gpui::App) + 'static,
) -> impl IntoElement {
    let (track, border) = if running {
        (rgb(0xE53935), rgb(0xE53935))
    } else {
        (rgb(0x6A1B9A), rgb(0x8E24AA))
    };

    div()
        .flex()
        .items_center()
        .w(px(48.0))
        .h(px(26.0))
        .rounded(px(13.0))
        .bg(track)
        .border_1()
        .border_color(border)
        .cursor_pointer()
        .on_mouse_down(MouseButton::Left, move |_, window, cx| {
            on_toggle(&running, window, cx);
        })
        .child(
            div()
                .w(px(18.0))
                .h(px(18.0))
                .rounded_full()
                .bg(rgb(0xffffff))
                .ml(if running { px(24.0) } else { px(4.0) }),
        )
}
