// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::catalog::{Catalog, ImageStore};
use crate::i18n::fluent::I18n;
use crate::ui::detail::{self, ViewContext as DetailViewContext};
use crate::ui::grid::{self, ViewContext as GridViewContext};
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub catalog: &'a Catalog,
    pub images: &'a ImageStore,
    pub detail: Option<&'a detail::State>,
    pub grid_columns: usize,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Grid => view_grid(ctx.i18n, ctx.catalog, ctx.images, ctx.grid_columns),
        Screen::Detail => view_detail(
            ctx.detail,
            ctx.i18n,
            ctx.catalog,
            ctx.images,
            ctx.grid_columns,
        ),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.notifications.has_notifications() {
        let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);
        Stack::new().push(base).push(toasts).into()
    } else {
        base.into()
    }
}

fn view_grid<'a>(
    i18n: &'a I18n,
    catalog: &'a Catalog,
    images: &'a ImageStore,
    columns: usize,
) -> Element<'a, Message> {
    grid::view(GridViewContext {
        i18n,
        catalog,
        images,
        columns,
    })
    .map(Message::Grid)
}

fn view_detail<'a>(
    detail: Option<&'a detail::State>,
    i18n: &'a I18n,
    catalog: &'a Catalog,
    images: &'a ImageStore,
    columns: usize,
) -> Element<'a, Message> {
    let state_and_product =
        detail.and_then(|state| catalog.find(state.product_id()).map(|product| (state, product)));

    if let Some((state, product)) = state_and_product {
        detail::view(
            state,
            DetailViewContext {
                i18n,
                product,
                images,
            },
        )
        .map(Message::Detail)
    } else {
        // Fallback if the detail state or its product is missing
        view_grid(i18n, catalog, images, columns)
    }
}
