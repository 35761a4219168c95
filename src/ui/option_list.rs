use gpui::prelude::*;
use gpui::{FontWeight, MouseButton, div, px, rgb};

use crate::ui::components::checkbox;
use crate::ui::controller::Controller;
use crate::ui::state::PanelState;

/// One selectable panel option.
pub struct PanelOption {
    pub label: &'static str,
    pub detail: &'static str,
    /// Checkbox tint and swatch color.
    pub accent: u32,
    pub checked: bool,
    pub toggle: fn(&mut PanelState),
}

/// Build a vertical stack of option rows.
///
/// Clicking a row or its checkbox runs the option's toggle. While the overlay
/// runs the rows are dimmed and [`PanelState`] ignores the toggles anyway.
pub fn option_list(
    options: Vec<PanelOption>,
    locked: bool,
    cx: &mut gpui::Context<Controller>,
) -> impl IntoElement + use<> {
    let mut list = div().flex().flex_col().gap_2().w_full().max_w(px(500.0));

    for opt in options {
        let toggle = opt.toggle;
        let row = div()
            .flex()
            .items_center()
            .gap_3()
            .px_4()
            .py_3()
            .w_full()
            .rounded(px(8.0))
            .bg(if opt.checked {
                rgb(0x251a2e)
            } else {
                rgb(0x1e1e1e)
            })
            .border_1()
            .border_color(if opt.checked && !locked {
                rgb(opt.accent)
            } else {
                rgb(0x333333)
            })
            .when(!locked, |el| el.cursor_pointer())
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _, _window, cx| {
                    toggle(&mut this.panel);
                    cx.notify();
                }),
            )
            .child(checkbox(
                opt.checked,
                locked,
                opt.accent,
                cx.listener(move |this, _, _window, cx| {
                    toggle(&mut this.panel);
                    cx.notify();
                }),
            ))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(2.0))
                    .flex_grow()
                    .child(
                        div()
                            .text_color(if locked { rgb(0x888888) } else { rgb(0xffffff) })
                            .font_weight(FontWeight::MEDIUM)
                            .child(opt.label),
                    )
                    .child(div().text_sm().text_color(rgb(0x666666)).child(opt.detail)),
            )
            .child(
                div()
                    .w(px(6.0))
                    .h(px(28.0))
                    .rounded(px(2.0))
                    .bg(rgb(opt.accent)),
            );

        list = list.child(row);
    }

    list
}
