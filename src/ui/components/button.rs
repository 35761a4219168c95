use gpui::prelude::*;
use gpui::{MouseButton, div, px, rgb};

/// A text button that only reacts while `enabled`.
pub fn button(
    label: &'static str,
    enabled: bool,
    on_click: impl Fn(&bool, &mut gpui::Window, &mut gpui::App) + 'static,
) -> impl IntoElement {
    div()
        .px_4()
        .py_2()
        .rounded(px(8.0))
        .bg(if enabled { rgb(0x6A1B9A) } else { rgb(0x2a2a2a) })
        .text_color(if enabled { rgb(0xffffff) } else { rgb(0x666666) })
        .when(enabled, |el| el.cursor_pointer())
        .on_mouse_down(MouseButton::Left, move |_, window, cx| {
            if enabled {
                on_click(&enabled, window, cx);
            }
        })
        .child(label)
}
