// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Contact**: WhatsApp ordering channel
//! - **Display**: Catalog grid layout bounds

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Default WhatsApp number orders are sent to, in international format
/// without the leading `+` (as `wa.me` links expect).
pub const DEFAULT_WHATSAPP_NUMBER: &str = "573246052525";

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default number of product cards per grid row.
pub const DEFAULT_GRID_COLUMNS: usize = 3;

/// Minimum number of product cards per grid row.
pub const MIN_GRID_COLUMNS: usize = 1;

/// Maximum number of product cards per grid row.
pub const MAX_GRID_COLUMNS: usize = 6;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Grid column validation
    assert!(MIN_GRID_COLUMNS > 0);
    assert!(MAX_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);

    // The default number must have digits only (wa.me links embed it verbatim)
    let number = DEFAULT_WHATSAPP_NUMBER.as_bytes();
    assert!(!number.is_empty());
    let mut i = 0;
    while i < number.len() {
        assert!(number[i].is_ascii_digit());
        i += 1;
    }
};
