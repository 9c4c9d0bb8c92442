// SPDX-License-Identifier: MPL-2.0
//! Image slot component: renders a catalog image reference in any state.

use crate::catalog::ImageSlot;
use crate::ui::design_tokens::{palette, sizing};
use crate::ui::icons;
use iced::widget::{container, image};
use iced::{Color, ContentFit, Element, Length};

/// Renders an image slot at a fixed height.
///
/// Loaded slots draw the photo with the given fit; loading and missing slots
/// draw a neutral placeholder frame so the layout never jumps.
pub fn view<'a, Message: 'a + 'static>(
    slot: ImageSlot,
    height: f32,
    fit: ContentFit,
) -> Element<'a, Message> {
    match slot {
        ImageSlot::Loaded(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(fit)
            .into(),
        ImageSlot::Loading => placeholder(height, palette::GRAY_700),
        ImageSlot::Missing => placeholder(height, palette::GRAY_400),
    }
}

fn placeholder<'a, Message: 'a + 'static>(height: f32, tint: Color) -> Element<'a, Message> {
    container(icons::tinted(
        icons::sized(icons::image_placeholder(), sizing::ICON_XL),
        tint,
    ))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(height))
    .into()
}
