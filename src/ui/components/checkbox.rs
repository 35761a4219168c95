use gpui::prelude::*;
use gpui::{MouseButton, div, px, rgb};

/// A checkbox tinted with `accent` when checked.
///
/// Greyed out and inert while `locked`. Stops mouse event propagation so the
/// parent row does not also fire its handler.
pub fn checkbox(
    checked: bool,
    locked: bool,
    accent: u32,
    on_click: impl Fn(&bool, &mut gpui::Window, &mut gpui::App) + 'static,
) -> impl IntoElement {
    let fill = match (checked, locked) {
        (true, false) => rgb(accent),
        (true, true) => rgb(0x555555),
        (false, _) => rgb(0x2a2a2a),
    };

    div()
        .flex()
        .items_center()
        .justify_center()
        .w(px(22.0))
        .h(px(22.0))
        .rounded(px(4.0))
        .bg(fill)
        .border_1()
        .border_color(if checked { fill } else { rgb(0x666666) })
        .when(!locked, |el| el.cursor_pointer())
        .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
            cx.stop_propagation();
            if !locked {
                on_click(&checked, window, cx);
            }
        })
        .child(
            div()
                .text_color(rgb(0xffffff))
                .child(if checked { "✓" } else { "" }),
        )
}
