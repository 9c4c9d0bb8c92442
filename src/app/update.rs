// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers `App::update`
//! dispatches to. Screens report what happened through their `Event` enums;
//! the side effects (clipboard, browser, downloads, toasts, diagnostics)
//! all live here.

use super::{Message, Screen};
use crate::catalog::{images, whatsapp, Catalog, ImageBase, ImageStore, Origin, Product, ProductId};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, UserAction};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::detail::{self, Event as DetailEvent};
use crate::ui::grid::{self, Event as GridEvent};
use crate::ui::notifications::{self, Notification};
use iced::widget::image;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub catalog: &'a mut Catalog,
    pub origin: &'a mut Origin,
    pub images: &'a mut ImageStore,
    pub detail: &'a mut Option<detail::State>,
    pub pending_product: &'a mut Option<ProductId>,
    pub whatsapp_number: &'a str,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a DiagnosticsHandle,
}

/// Handles grid messages.
pub fn handle_grid_message(ctx: &mut UpdateContext<'_>, message: grid::Message) -> Task<Message> {
    match grid::update(message) {
        GridEvent::OpenProduct(id) => open_product(ctx, &id),
        GridEvent::CopyCode(id) => copy_code(ctx, &id),
    }
}

/// Handles detail screen messages.
pub fn handle_detail_message(
    ctx: &mut UpdateContext<'_>,
    message: &detail::Message,
) -> Task<Message> {
    let Some(state) = ctx.detail.as_mut() else {
        return Task::none();
    };
    let event = state.update(message);
    let product_id = state.product_id().clone();

    match event {
        DetailEvent::None => Task::none(),
        DetailEvent::BackToCatalog => {
            ctx.diagnostics.log_action(UserAction::ReturnToCatalog);
            *ctx.detail = None;
            *ctx.screen = Screen::Grid;
            Task::none()
        }
        DetailEvent::CopyCode => copy_code(ctx, &product_id),
        DetailEvent::OpenWhatsApp => open_whatsapp(ctx, &product_id),
        DetailEvent::LightboxOpened => {
            ctx.diagnostics.log_action(UserAction::OpenLightbox);
            Task::none()
        }
        DetailEvent::LightboxClosed => {
            ctx.diagnostics.log_action(UserAction::CloseLightbox);
            Task::none()
        }
        DetailEvent::GalleryMovedNext => {
            ctx.diagnostics.log_action(UserAction::GalleryNext);
            Task::none()
        }
        DetailEvent::GalleryMovedPrevious => {
            ctx.diagnostics.log_action(UserAction::GalleryPrevious);
            Task::none()
        }
    }
}

/// Handles the catalog snapshot arriving.
///
/// The image store is rebound to the snapshot's origin so relative photo
/// references resolve next to wherever the document came from. Thumbnails
/// for every product are requested up front so the grid fills in as
/// downloads land. A pending deep link is resolved here once the catalog is
/// known; an unknown code stays on the grid.
pub fn handle_catalog_loaded(
    ctx: &mut UpdateContext<'_>,
    catalog: Catalog,
    origin: Origin,
) -> Task<Message> {
    *ctx.images = ImageStore::new(ImageBase::for_origin(&origin));
    *ctx.catalog = catalog;
    *ctx.origin = origin;

    let thumbnails: Vec<&str> = ctx
        .catalog
        .products()
        .iter()
        .filter_map(Product::first_image)
        .collect();
    let mut tasks = vec![fetch_images(ctx.images.request(thumbnails))];

    if let Some(id) = ctx.pending_product.take() {
        tasks.push(open_product(ctx, &id));
    }

    Task::batch(tasks)
}

/// Handles a finished photo download.
pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    reference: &str,
    result: Result<image::Handle, Error>,
) -> Task<Message> {
    match result {
        Ok(handle) => ctx.images.insert(reference, handle),
        Err(error) => {
            ctx.images.mark_failed(reference);
            ctx.diagnostics.log_error(ErrorEvent::new(
                error_type_for(&error),
                format!("image fetch failed for {reference}: {error}"),
            ));
        }
    }
    Task::none()
}

/// Handles toast interactions (the close button).
pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

/// Opens a product's detail screen and requests its photos.
fn open_product(ctx: &mut UpdateContext<'_>, id: &ProductId) -> Task<Message> {
    let Some(product) = ctx.catalog.find(id) else {
        return Task::none();
    };

    ctx.diagnostics
        .log_action_with_details(UserAction::OpenProduct, Some(id.to_string()));

    *ctx.detail = Some(detail::State::new(product));
    *ctx.screen = Screen::Detail;

    let references: Vec<&str> = product.images.iter().map(String::as_str).collect();
    fetch_images(ctx.images.request(references))
}

/// Copies a product code to the system clipboard and confirms with a toast.
fn copy_code(ctx: &mut UpdateContext<'_>, id: &ProductId) -> Task<Message> {
    ctx.diagnostics
        .log_action_with_details(UserAction::CopyCode, Some(id.to_string()));
    ctx.notifications
        .push(Notification::success("notification-code-copied"));
    iced::clipboard::write(id.as_str().to_string())
}

/// Builds the localized order message and hands the `wa.me` link to the OS.
fn open_whatsapp(ctx: &mut UpdateContext<'_>, id: &ProductId) -> Task<Message> {
    let Some(product) = ctx.catalog.find(id) else {
        return Task::none();
    };

    let message = ctx.i18n.tr_with_args(
        "whatsapp-message",
        &[("name", product.name.as_str()), ("code", product.id.as_str())],
    );
    let link = whatsapp::order_link(ctx.whatsapp_number, &message);

    ctx.diagnostics
        .log_action_with_details(UserAction::OpenWhatsApp, Some(id.to_string()));

    if let Err(error) = open::that(&link) {
        ctx.diagnostics.log_error(ErrorEvent::new(
            ErrorType::Other,
            format!("whatsapp link failed to open: {error}"),
        ));
        ctx.notifications
            .push(Notification::error("notification-whatsapp-error"));
    }
    Task::none()
}

/// Spawns one download task per reference the store could not resolve locally.
fn fetch_images(to_fetch: Vec<(String, String)>) -> Task<Message> {
    Task::batch(to_fetch.into_iter().map(|(reference, url)| {
        Task::perform(images::fetch(url), move |result| Message::ImageFetched {
            reference: reference.clone(),
            result,
        })
    }))
}

fn error_type_for(error: &Error) -> ErrorType {
    match error {
        Error::Io(_) => ErrorType::IoError,
        Error::Parse(_) => ErrorType::ParseError,
        Error::ImageDecode(_) => ErrorType::DecodeError,
        Error::Http(_) | Error::Config(_) => ErrorType::Other,
    }
}
