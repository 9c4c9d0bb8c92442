// SPDX-License-Identifier: MPL-2.0
//! `mascarada` is a seasonal Halloween mask catalog browser built with the
//! Iced GUI framework.
//!
//! It renders a storefront's product snapshot as a browsable grid with a
//! per-product photo gallery, and hands purchases off to WhatsApp instead of
//! carrying a checkout of its own. Along the way it demonstrates
//! internationalization with Fluent, TOML preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/mascarada/0.1.0")]

pub mod app;
pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;
