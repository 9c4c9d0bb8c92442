// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock` for optimal performance. The set is a single
//! neutral-stroke family; callers tint it per theme at render time with
//! [`tinted`].
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let close_button = button(icons::sized(icons::cross(), sizing::ICON_MD));
//! let branded = icons::tinted(icons::chat_bubble(), colors.brand_primary);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_lightbox`).

use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(
    chevron_left,
    "chevron-left.svg",
    "Chevron left: single arrow pointing left."
);
define_icon!(
    chevron_right,
    "chevron-right.svg",
    "Chevron right: single arrow pointing right."
);
define_icon!(
    arrow_left,
    "arrow-left.svg",
    "Arrow left: full arrow with tail, for back navigation."
);

// =============================================================================
// Action Icons
// =============================================================================

define_icon!(cross, "cross.svg", "Cross icon: X shape.");
define_icon!(copy, "copy.svg", "Copy icon: two overlapping rectangles.");
define_icon!(
    chat_bubble,
    "chat-bubble.svg",
    "Chat bubble icon: rounded speech balloon."
);

// =============================================================================
// Status Icons
// =============================================================================

define_icon!(checkmark, "checkmark.svg", "Checkmark icon: single tick.");
define_icon!(
    warning,
    "warning.svg",
    "Warning icon: triangle with exclamation mark."
);
define_icon!(info, "info.svg", "Info icon: circle with lowercase i.");

// =============================================================================
// Placeholder Icons
// =============================================================================

define_icon!(
    image_placeholder,
    "image-placeholder.svg",
    "Image placeholder: frame with mountain and sun."
);

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Creates an icon that fills its container.
pub fn fill(icon: Svg<'static>) -> Svg<'static> {
    icon.width(Length::Fill).height(Length::Fill)
}

/// Tints a whole icon with a single color.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme, _status| iced::widget::svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn all_icons_load_successfully() {
        // These calls verify that all include_bytes! paths are valid
        let _ = chevron_left();
        let _ = chevron_right();
        let _ = arrow_left();
        let _ = cross();
        let _ = copy();
        let _ = chat_bubble();
        let _ = checkmark();
        let _ = warning();
        let _ = info();
        let _ = image_placeholder();
    }

    #[test]
    fn sized_helper_works() {
        let icon = sized(cross(), 32.0);
        // Just verify it compiles and returns an Svg
        let _ = icon;
    }

    #[test]
    fn fill_helper_works() {
        let icon = fill(image_placeholder());
        let _ = icon;
    }

    #[test]
    fn tinted_helper_works() {
        let icon = tinted(chat_bubble(), palette::PRIMARY_500);
        let _ = icon;
    }
}
