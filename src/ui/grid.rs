// SPDX-License-Identifier: MPL-2.0
//! Catalog grid screen: the storefront landing page.
//!
//! Every product renders as a summary card (thumbnail, name, prices, code)
//! laid out in fixed-width columns. Cards are clickable as a whole and open
//! the detail screen; the copy control on each card captures its own click
//! before the card does.

use crate::catalog::{format_money, Catalog, ImageSlot, ImageStore, Product, ProductId};
use crate::i18n::fluent::I18n;
use crate::ui::components::image_slot;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, mouse_area, scrollable, text, Column, Container, Row};
use iced::{ContentFit, Element, Length};

/// Contextual data needed to render the grid screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub images: &'a ImageStore,
    /// Cards per row, from display configuration.
    pub columns: usize,
}

/// Messages emitted by the grid screen.
#[derive(Debug, Clone)]
pub enum Message {
    ProductPressed(ProductId),
    CopyCodePressed(ProductId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Open the detail screen for a product.
    OpenProduct(ProductId),
    /// Put a product code on the clipboard.
    CopyCode(ProductId),
}

/// Process a grid screen message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ProductPressed(id) => Event::OpenProduct(id),
        Message::CopyCodePressed(id) => Event::CopyCode(id),
    }
}

/// Render the grid screen.
///
/// An empty catalog renders the header over zero cards; load failures are
/// reported through notifications, never on the grid itself.
#[must_use]
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = text(ctx.i18n.tr("window-title")).size(typography::TITLE_LG);

    let per_row = ctx.columns.max(1);
    let mut rows = Column::new().spacing(spacing::LG);
    for chunk in ctx.catalog.products().chunks(per_row) {
        let mut row = Row::new().spacing(spacing::LG);
        for product in chunk {
            row = row.push(card(product, &ctx));
        }
        rows = rows.push(row);
    }

    let page = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .push(header)
        .push(rows);

    scrollable(page).into()
}

/// Build one product card.
fn card<'a>(product: &'a Product, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let slot = match product.first_image() {
        Some(reference) => ctx.images.slot(reference),
        None => ImageSlot::Missing,
    };
    let thumbnail = image_slot::view(slot, sizing::CARD_IMAGE_HEIGHT, ContentFit::Cover);

    let name = text(&product.name).size(typography::TITLE_MD);

    let single = format_money(product.price);
    let bulk = format_money(product.price2);
    let price_single = text(ctx.i18n.tr_with_args("price-single", &[("price", &single)]))
        .size(typography::BODY_LG)
        .color(palette::PRIMARY_500);
    let price_bulk =
        text(ctx.i18n.tr_with_args("price-bulk", &[("price", &bulk)])).size(typography::BODY);

    let code_chip = container(
        text(ctx.i18n.tr_with_args("product-code", &[("code", product.id.as_str())]))
            .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::chip);

    let copy_button = button(icons::sized(icons::copy(), sizing::ICON_SM))
        .padding(spacing::XXS)
        .style(styles::button::secondary)
        .on_press(Message::CopyCodePressed(product.id.clone()));

    let code_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(code_chip)
        .push(copy_button);

    let body = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .push(name)
        .push(price_single)
        .push(price_bulk)
        .push(code_row);

    let content = Container::new(Column::new().push(thumbnail).push(body))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card);

    mouse_area(content)
        .on_press(Message::ProductPressed(product.id.clone()))
        .into()
}
