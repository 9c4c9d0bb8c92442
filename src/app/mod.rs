// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog screens.
//!
//! The `App` struct wires together the domains (catalog, localization, image
//! cache) and translates screen events into side effects like clipboard
//! writes or the WhatsApp hand-off. This file intentionally keeps policy
//! decisions (window sizing, deep-link resolution, theme selection) close to
//! the main update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::{loader, Catalog, ImageStore, Origin, ProductId};
use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::fluent::I18n;
use crate::ui::detail;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges the two screens, localization,
/// and the toast and diagnostics plumbing.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    catalog: Catalog,
    origin: Origin,
    /// Decoded product photos, keyed by catalog reference.
    images: ImageStore,
    /// Detail screen state, present only while a product is open.
    detail: Option<detail::State>,
    /// Product code requested on the command line, resolved after load.
    pending_product: Option<ProductId>,
    theme_mode: ThemeMode,
    grid_columns: usize,
    whatsapp_number: String,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// In-session activity buffer behind the notification manager.
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("products", &self.catalog.len())
            .field("detail_open", &self.detail.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Grid,
            catalog: Catalog::default(),
            origin: Origin::Empty,
            images: ImageStore::unavailable(),
            detail: None,
            pending_product: None,
            theme_mode: ThemeMode::default(),
            grid_columns: config::DEFAULT_GRID_COLUMNS,
            whatsapp_number: config::DEFAULT_WHATSAPP_NUMBER.to_string(),
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsCollector::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the asynchronous catalog
    /// load based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.grid_columns = config.display.grid_columns();
        app.whatsapp_number = config.contact.whatsapp_number.clone();
        app.pending_product = flags.product.map(ProductId::new);

        app.notifications.set_diagnostics(app.diagnostics.handle());

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let chain = loader::source_chain(
            flags.catalog.map(PathBuf::from),
            config.catalog.path.map(PathBuf::from),
            config.catalog.url,
        );
        let task = Task::perform(
            loader::load(chain, app.diagnostics.handle()),
            |(catalog, origin)| Message::CatalogLoaded { catalog, origin },
        );

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        if self.screen == Screen::Detail {
            let product_name = self
                .detail
                .as_ref()
                .and_then(|state| self.catalog.find(state.product_id()))
                .map(|product| product.name.clone());
            if let Some(name) = product_name {
                return format!("{name} | {app_name}");
            }
        }

        app_name
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let diagnostics = self.diagnostics.handle();
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            catalog: &mut self.catalog,
            origin: &mut self.origin,
            images: &mut self.images,
            detail: &mut self.detail,
            pending_product: &mut self.pending_product,
            whatsapp_number: &self.whatsapp_number,
            notifications: &mut self.notifications,
            diagnostics: &diagnostics,
        };

        match message {
            Message::Grid(grid_message) => update::handle_grid_message(&mut ctx, grid_message),
            Message::Detail(detail_message) => {
                update::handle_detail_message(&mut ctx, &detail_message)
            }
            Message::CatalogLoaded { catalog, origin } => {
                update::handle_catalog_loaded(&mut ctx, catalog, origin)
            }
            Message::ImageFetched { reference, result } => {
                update::handle_image_fetched(&mut ctx, &reference, result)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::Tick(_instant) => {
                // Auto-dismiss expired toasts and drain async diagnostics
                self.notifications.tick();
                self.diagnostics.process_pending();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            catalog: &self.catalog,
            images: &self.images,
            detail: self.detail.as_ref(),
            grid_columns: self.grid_columns,
            notifications: &self.notifications,
        })
    }
}
