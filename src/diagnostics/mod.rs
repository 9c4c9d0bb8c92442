// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for capturing in-session activity.
//!
//! This module provides infrastructure for capturing diagnostic events during
//! a browsing session and storing them in a memory-bounded circular buffer.
//! Faults that the catalog absorbs silently (a source that failed over, an
//! image that would not decode) land here instead of on the screen.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with fixed capacity
//! - [`DiagnosticEvent`]: Timestamped event with its [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Owns the buffer and drains the event channel
//! - [`DiagnosticsHandle`]: Cheap-to-clone sender for async tasks

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
