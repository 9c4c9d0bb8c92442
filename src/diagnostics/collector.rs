// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! This module provides the central collector that receives events from
//! various parts of the application and stores them in a circular buffer.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction, WarningEvent,
};

/// Default capacity of the in-memory event buffer.
const DEFAULT_BUFFER_CAPACITY: usize = 1000;

/// Channel capacity for event buffering.
/// This allows some buffering without excessive memory usage.
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a user action event.
    ///
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    /// Logs a user action event with optional details.
    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action, details });
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a warning event.
    ///
    /// This method is non-blocking.
    pub fn log_warning(&self, warning_event: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event: warning_event,
        });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an error event.
    ///
    /// This method is non-blocking.
    pub fn log_error(&self, error_event: ErrorEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event: error_event });
        let _ = self.event_tx.try_send(event);
    }
}

/// Central collector for diagnostic events.
///
/// The collector receives events through a channel and stores them in a
/// memory-bounded circular buffer. Old events are automatically evicted
/// when the buffer reaches capacity.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    /// Circular buffer storing diagnostic events.
    buffer: CircularBuffer<DiagnosticEvent>,
    /// Receiver for incoming events.
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the default buffer capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY)
    }

    /// Creates a new diagnostics collector with a specific buffer capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(EVENT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    ///
    /// Handles are cheap to clone and can be distributed to different
    /// parts of the application.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Processes all pending events from the channel.
    ///
    /// Call this periodically (e.g., on each UI tick) to drain the
    /// event channel and store events in the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs an action directly to the buffer (bypassing the channel).
    ///
    /// Use this for synchronous logging when you have direct access
    /// to the collector (e.g., in the main update loop).
    pub fn log_action(&mut self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    /// Logs an action with details directly to the buffer.
    pub fn log_action_with_details(&mut self, action: UserAction, details: Option<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action, details });
        self.buffer.push(event);
    }

    /// Returns the number of events currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over stored events in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Clears all stored events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};

    #[test]
    fn collector_log_action_stores_event() {
        let mut collector = DiagnosticsCollector::with_capacity(10);

        collector.log_action(UserAction::OpenProduct);

        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn collector_log_action_with_details_stores_event() {
        let mut collector = DiagnosticsCollector::with_capacity(10);

        collector.log_action_with_details(UserAction::CopyCode, Some("M03".to_string()));

        let event = collector.iter().next().expect("one event");
        match &event.kind {
            DiagnosticEventKind::UserAction { action, details } => {
                assert_eq!(*action, UserAction::CopyCode);
                assert_eq!(details.as_deref(), Some("M03"));
            }
            other => panic!("expected user action, got {other:?}"),
        }
    }

    #[test]
    fn handle_log_action_sends_to_collector() {
        let mut collector = DiagnosticsCollector::with_capacity(10);
        let handle = collector.handle();

        handle.log_action(UserAction::GalleryNext);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn handle_log_warning_carries_its_category() {
        let mut collector = DiagnosticsCollector::with_capacity(10);
        let handle = collector.handle();

        handle.log_warning(WarningEvent::new(
            WarningType::MissingImage,
            "img/calavera-frente.jpg could not be decoded",
        ));
        collector.process_pending();

        let event = collector.iter().next().expect("one event");
        match &event.kind {
            DiagnosticEventKind::Warning { event } => {
                assert_eq!(event.warning_type, WarningType::MissingImage);
            }
            other => panic!("expected warning, got {other:?}"),
        }
    }

    #[test]
    fn handle_log_error_sends_to_collector() {
        let mut collector = DiagnosticsCollector::with_capacity(10);
        let handle = collector.handle();

        handle.log_error(ErrorEvent::new(ErrorType::ParseError, "malformed catalog"));
        collector.process_pending();

        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn cloned_handles_feed_the_same_collector() {
        let mut collector = DiagnosticsCollector::with_capacity(10);
        let first = collector.handle();
        let second = first.clone();

        first.log_action(UserAction::OpenLightbox);
        second.log_action(UserAction::CloseLightbox);
        collector.process_pending();

        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::with_capacity(1000);
        let handle = collector.handle();

        for _ in 0..EVENT_CHANNEL_CAPACITY + 50 {
            handle.log_action(UserAction::GalleryNext);
        }
        collector.process_pending();

        assert_eq!(collector.len(), EVENT_CHANNEL_CAPACITY);
    }

    #[test]
    fn buffer_capacity_bounds_stored_events() {
        let mut collector = DiagnosticsCollector::with_capacity(3);

        for _ in 0..5 {
            collector.log_action(UserAction::GalleryNext);
        }

        assert_eq!(collector.len(), 3);
    }
}
