// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::{Catalog, Origin};
use crate::error::Error;
use crate::ui::detail;
use crate::ui::grid;
use crate::ui::notifications;
use iced::widget::image;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Grid(grid::Message),
    Detail(detail::Message),
    Notification(notifications::NotificationMessage),
    /// The catalog snapshot finished loading (always succeeds, possibly empty).
    CatalogLoaded {
        catalog: Catalog,
        origin: Origin,
    },
    /// A product photo finished downloading or decoding.
    ImageFetched {
        reference: String,
        result: Result<image::Handle, Error>,
    },
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional product code to open directly on startup.
    pub product: Option<String>,
    /// Optional path to a `products.json` snapshot, overriding the config.
    pub catalog: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MASCARADA_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
