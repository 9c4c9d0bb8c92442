// SPDX-License-Identifier: MPL-2.0
//! Rendering for the product detail screen.
//!
//! The screen is a two-column layout (gallery on the left, order details on
//! the right) with the lightbox stacked over the whole window when open.

use super::{Message, State};
use crate::catalog::{format_money, ImageSlot, ImageStore, Product};
use crate::i18n::fluent::I18n;
use crate::ui::components::image_slot;
use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, sizing, spacing, typography,
};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::svg::Svg;
use iced::widget::{
    button, container, image, mouse_area, scrollable, text, Column, Container, Row, Stack,
};
use iced::{ContentFit, Element, Length};

/// Contextual data needed to render the detail screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub product: &'a Product,
    pub images: &'a ImageStore,
}

/// Render the detail screen.
#[must_use]
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::arrow_left(), sizing::ICON_SM))
            .push(text(ctx.i18n.tr("back-to-catalog")).size(typography::BODY)),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::button::link)
    .on_press(Message::BackPressed);

    let columns = Row::new()
        .spacing(spacing::LG)
        .push(Container::new(gallery(state, &ctx)).width(Length::FillPortion(3)))
        .push(Container::new(info_column(&ctx)).width(Length::FillPortion(2)));

    let page = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(back_button)
        .push(columns);

    let base: Element<'a, Message> = scrollable(page).into();

    // The lightbox covers the entire window, including the back button.
    match state.lightbox().image_ref() {
        Some(reference) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(lightbox_overlay(reference, &ctx))
            .into(),
        None => base,
    }
}

/// Build the gallery: current photo, navigation arrows, position counter.
fn gallery<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let Some(reference) = state.current_image_ref() else {
        // Product without photos: a static placeholder, no controls.
        return image_slot::view(
            ImageSlot::Missing,
            sizing::GALLERY_IMAGE_HEIGHT,
            ContentFit::Contain,
        );
    };

    let info = state.gallery_info();

    let photo = mouse_area(image_slot::view(
        ctx.images.slot(reference),
        sizing::GALLERY_IMAGE_HEIGHT,
        ContentFit::Contain,
    ))
    .on_press(Message::PhotoPressed);

    let current = (info.current_index + 1).to_string();
    let total = info.total_count.to_string();
    let counter = container(
        text(ctx.i18n.tr_with_args(
            "gallery-position",
            &[("current", &current), ("total", &total)],
        ))
        .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::indicator(radius::FULL));

    Stack::new()
        .width(Length::Fill)
        .push(photo)
        .push(
            Container::new(nav_button(
                icons::chevron_left(),
                Message::PreviousPressed,
                !info.at_first,
            ))
            .height(Length::Fixed(sizing::GALLERY_IMAGE_HEIGHT))
            .padding(spacing::SM)
            .align_y(Vertical::Center),
        )
        .push(
            Container::new(nav_button(
                icons::chevron_right(),
                Message::NextPressed,
                !info.at_last,
            ))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::GALLERY_IMAGE_HEIGHT))
            .padding(spacing::SM)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Center),
        )
        .push(
            Container::new(counter)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::GALLERY_IMAGE_HEIGHT))
                .padding(spacing::SM)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom),
        )
        .into()
}

/// Circular arrow button over the photo. Arrows at the gallery bounds keep
/// their place but are rendered inert, so the layout never shifts.
fn nav_button<'a>(icon: Svg<'static>, message: Message, enabled: bool) -> Element<'a, Message> {
    let tint = if enabled { WHITE } else { palette::GRAY_400 };
    let glyph = icons::sized(icons::tinted(icon, tint), sizing::ICON_MD);
    let base = button(glyph).padding(spacing::XS);

    if enabled {
        base.style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(message)
        .into()
    } else {
        base.style(styles::button::disabled()).into()
    }
}

/// Build the right-hand column: name, code, prices, order actions.
fn info_column<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let product = ctx.product;

    let name = text(&product.name).size(typography::TITLE_LG);

    let code_chip = container(
        text(ctx.i18n.tr_with_args("product-code", &[("code", product.id.as_str())]))
            .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::chip);

    let copy_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::copy(), sizing::ICON_SM))
            .push(text(ctx.i18n.tr("copy-code")).size(typography::BODY)),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::secondary)
    .on_press(Message::CopyCodePressed);

    let code_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(code_chip)
        .push(copy_button);

    let single = format_money(product.price);
    let bulk = format_money(product.price2);
    let prices = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(
                text(ctx.i18n.tr_with_args("price-single", &[("price", &single)]))
                    .size(typography::TITLE_MD)
                    .color(palette::PRIMARY_500),
            )
            .push(
                text(ctx.i18n.tr_with_args("price-bulk", &[("price", &bulk)]))
                    .size(typography::BODY_LG),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::panel);

    let whatsapp_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::sized(
                icons::tinted(icons::chat_bubble(), WHITE),
                sizing::ICON_MD,
            ))
            .push(text(ctx.i18n.tr("whatsapp-buy")).size(typography::BODY_LG)),
    )
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary)
    .on_press(Message::WhatsAppPressed);

    Column::new()
        .spacing(spacing::LG)
        .push(name)
        .push(code_row)
        .push(prices)
        .push(whatsapp_button)
        .into()
}

/// Full-window lightbox layer: dark backdrop, centered photo, close control.
///
/// The close button sits inside the `mouse_area` but captures its press
/// first, so a single click never dismisses twice.
fn lightbox_overlay<'a>(reference: &'a str, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let photo: Element<'static, Message> = match ctx.images.slot(reference) {
        ImageSlot::Loaded(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        ImageSlot::Loading | ImageSlot::Missing => container(icons::tinted(
            icons::sized(icons::image_placeholder(), sizing::ICON_XL),
            palette::GRAY_400,
        ))
        .center(Length::Fill)
        .into(),
    };

    let close_button = button(icons::sized(
        icons::tinted(icons::cross(), WHITE),
        sizing::ICON_MD,
    ))
    .padding(spacing::XS)
    .style(styles::button::overlay(
        WHITE,
        opacity::OVERLAY_SUBTLE,
        opacity::OVERLAY_MEDIUM,
    ))
    .on_press(Message::LightboxDismissed);

    let layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(photo)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XL),
        )
        .push(
            Container::new(close_button)
                .width(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Right),
        );

    mouse_area(
        Container::new(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::LightboxDismissed)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;

    fn mask() -> Product {
        Product {
            id: ProductId::from("M01"),
            name: "Calavera".to_string(),
            price: 15000.0,
            price2: 25000.0,
            images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
        }
    }

    #[test]
    fn detail_view_renders() {
        let i18n = I18n::default();
        let product = mask();
        let images = ImageStore::unavailable();
        let state = State::new(&product);

        let _element = view(
            &state,
            ViewContext {
                i18n: &i18n,
                product: &product,
                images: &images,
            },
        );
    }

    #[test]
    fn detail_view_renders_with_lightbox_open() {
        let i18n = I18n::default();
        let product = mask();
        let images = ImageStore::unavailable();
        let mut state = State::new(&product);
        state.update(&Message::PhotoPressed);

        let _element = view(
            &state,
            ViewContext {
                i18n: &i18n,
                product: &product,
                images: &images,
            },
        );
    }

    #[test]
    fn detail_view_renders_without_photos() {
        let i18n = I18n::default();
        let product = Product {
            images: Vec::new(),
            ..mask()
        };
        let images = ImageStore::unavailable();
        let state = State::new(&product);

        let _element = view(
            &state,
            ViewContext {
                i18n: &i18n,
                product: &product,
                images: &images,
            },
        );
    }
}
