// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the various types of events that can be captured
//! during a browsing session for diagnostic purposes.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions that can be captured for diagnostics.
///
/// These actions represent meaningful interactions with the catalog that
/// help understand what the user was doing when issues occurred.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Open a product's detail screen from the grid.
    OpenProduct,

    /// Return from the detail screen to the catalog grid.
    ReturnToCatalog,

    /// Advance the detail gallery to the next photo.
    GalleryNext,

    /// Step the detail gallery back to the previous photo.
    GalleryPrevious,

    /// Open the lightbox over the detail screen.
    OpenLightbox,

    /// Close the lightbox.
    CloseLightbox,

    /// Copy a product code to the clipboard.
    CopyCode,

    /// Open the WhatsApp order link in the external browser.
    OpenWhatsApp,
}

/// Categories of warnings that can occur while browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A requested file was not found.
    FileNotFound,
    /// A network-related issue occurred.
    NetworkError,
    /// A configuration issue was detected.
    ConfigurationIssue,
    /// A product image could not be resolved or decoded.
    MissingImage,
    /// Other warning type not covered by specific categories.
    Other,
}

/// Categories of errors that can occur while browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Input/output error (file read failures).
    IoError,
    /// Catalog document could not be parsed.
    ParseError,
    /// Image decoding error.
    DecodeError,
    /// Other error type not covered by specific categories.
    Other,
}

/// A warning with its category and human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    /// Category of the warning.
    pub warning_type: WarningType,
    /// Brief description of what went wrong.
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error with its category and human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEvent {
    /// Category of the error.
    pub error_type: ErrorType,
    /// Brief description of what failed.
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
///
/// Each event captures a specific type of activity or fault in the
/// application, along with when it occurred.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// User-initiated action.
    /// Captures what the user was doing for diagnostic correlation.
    UserAction {
        /// The specific action performed.
        action: UserAction,
        /// Optional additional details (e.g., product code).
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// Non-critical issue that was absorbed by a fallback.
    Warning {
        /// The warning and its category.
        event: WarningEvent,
    },

    /// Fault that left the session in a degraded state.
    Error {
        /// The error and its category.
        event: ErrorEvent,
    },
}
