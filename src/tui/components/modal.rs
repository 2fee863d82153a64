//! Centered modal box drawn over the current screen

use iocraft::prelude::*;

use crate::tui::theme::theme;

pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

#[derive(Default, Props)]
pub struct ModalProps<'a> {
    pub title: Option<String>,
    /// Defaults to the focused border color
    pub border_color: Option<Color>,
    pub footer_text: Option<String>,
    pub width: Option<u32>,
    pub children: Vec<AnyElement<'a>>,
}

#[component]
pub fn Modal<'a>(props: &mut ModalProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let border_color = props.border_color.unwrap_or(theme.border_focused);
    let title = props.title.clone();
    let footer_text = props.footer_text.clone();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
        ) {
            View(
                width: Size::Length(props.width.unwrap_or(60)),
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Double,
                border_color: border_color,
                background_color: MODAL_BACKDROP,
                padding_left: 1,
                padding_right: 1,
            ) {
                #(title.map(|title| element! {
                    View(margin_bottom: 1) {
                        Text(content: title, color: border_color, weight: Weight::Bold)
                    }
                }))
                #(std::mem::take(&mut props.children))
                #(footer_text.map(|text| element! {
                    View(margin_top: 1) {
                        Text(content: text, color: theme.text_dimmed)
                    }
                }))
            }
        }
    }
}
