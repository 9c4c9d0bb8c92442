// SPDX-License-Identifier: MPL-2.0
//! Catalog domain: products, the snapshot document, and everything derived
//! from it.
//!
//! The catalog is a single JSON document loaded once per session from the
//! first source that yields a parseable result. Everything else in this
//! module works off that immutable snapshot: price formatting, WhatsApp
//! order links, and image reference resolution.

pub mod images;
pub mod loader;
pub mod money;
pub mod product;
pub mod snapshot;
pub mod whatsapp;

pub use images::{ImageBase, ImageSlot, ImageStore};
pub use loader::{Origin, Source};
pub use money::format_money;
pub use product::{Product, ProductId};
pub use snapshot::Catalog;
pub use whatsapp::order_link;
