// SPDX-License-Identifier: MPL-2.0
//! Product detail screen: photo gallery, lightbox, and order actions.
//!
//! This module follows a "state down, messages up" pattern similar to the
//! grid screen. [`State`] owns only what the screen needs to navigate (the
//! gallery cursor and the lightbox); [`State::update`] reduces messages into
//! [`Event`]s, and the application layer performs the side effects they
//! describe (clipboard writes, opening WhatsApp, diagnostics logging).

use crate::catalog::{Product, ProductId};

pub mod gallery;
pub mod lightbox;
mod view;

pub use lightbox::Lightbox;
pub use view::{view, ViewContext};

/// Local UI state for the detail screen.
#[derive(Debug, Clone)]
pub struct State {
    product_id: ProductId,
    /// Ordered image references, snapshotted from the product at entry.
    /// The catalog is read-only for the whole session, so the snapshot
    /// cannot drift from the source document.
    images: Vec<String>,
    gallery: gallery::State,
    lightbox: Lightbox,
}

/// Messages emitted by the detail screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackPressed,
    PreviousPressed,
    NextPressed,
    /// The gallery photo itself was clicked.
    PhotoPressed,
    /// The lightbox backdrop or its close control was clicked.
    LightboxDismissed,
    CopyCodePressed,
    WhatsAppPressed,
    EscapePressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Leave the detail screen and show the grid again.
    BackToCatalog,
    /// Put the product code on the clipboard.
    CopyCode,
    /// Open a WhatsApp conversation pre-filled for this product.
    OpenWhatsApp,
    LightboxOpened,
    LightboxClosed,
    GalleryMovedNext,
    GalleryMovedPrevious,
}

impl State {
    /// Open the detail screen for a product.
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            images: product.images.clone(),
            gallery: gallery::State::new(product.images.len()),
            lightbox: Lightbox::default(),
        }
    }

    /// Identifier of the product being shown.
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Image reference under the gallery cursor, if the product has photos.
    pub fn current_image_ref(&self) -> Option<&str> {
        self.images
            .get(self.gallery.current_index())
            .map(String::as_str)
    }

    /// All image references of the product, in gallery order.
    pub fn image_refs(&self) -> &[String] {
        &self.images
    }

    /// Read-only gallery position snapshot for rendering.
    pub fn gallery_info(&self) -> gallery::NavigationInfo {
        self.gallery.info()
    }

    /// Current lightbox state.
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Process a detail screen message and return the corresponding event.
    ///
    /// Gallery navigation is frozen while the lightbox is open, so the
    /// enlarged photo cannot change underneath the overlay. `Escape` closes
    /// the lightbox first and only leaves the screen once it is closed.
    pub fn update(&mut self, message: &Message) -> Event {
        match message {
            Message::BackPressed => Event::BackToCatalog,
            Message::PreviousPressed => {
                if self.lightbox.is_open() {
                    return Event::None;
                }
                if self.gallery.previous() {
                    Event::GalleryMovedPrevious
                } else {
                    Event::None
                }
            }
            Message::NextPressed => {
                if self.lightbox.is_open() {
                    return Event::None;
                }
                if self.gallery.next() {
                    Event::GalleryMovedNext
                } else {
                    Event::None
                }
            }
            Message::PhotoPressed => {
                let Some(reference) = self.current_image_ref().map(str::to_owned) else {
                    return Event::None;
                };
                self.lightbox.open(reference);
                Event::LightboxOpened
            }
            Message::LightboxDismissed => {
                if self.lightbox.is_open() {
                    self.lightbox.close();
                    Event::LightboxClosed
                } else {
                    Event::None
                }
            }
            Message::CopyCodePressed => Event::CopyCode,
            Message::WhatsAppPressed => Event::OpenWhatsApp,
            Message::EscapePressed => {
                if self.lightbox.is_open() {
                    self.lightbox.close();
                    Event::LightboxClosed
                } else {
                    Event::BackToCatalog
                }
            }
        }
    }
}
