// SPDX-License-Identifier: MPL-2.0
//! Bounded gallery navigation state for the detail screen.
//!
//! The gallery walks a product's photo list by position. Navigation is
//! clamped at both ends: there is no wrap-around, matching the storefront's
//! carousel where the previous control goes dead on the first photo and the
//! next control on the last.

/// Navigation state information for UI rendering.
///
/// A snapshot of the gallery position, so the view can render the
/// controls without access to the state itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether the current photo is the first.
    pub at_first: bool,
    /// Whether the current photo is the last.
    pub at_last: bool,
    /// Current position (0-indexed).
    pub current_index: usize,
    /// Total number of photos.
    pub total_count: usize,
}

/// Position within a product's photo list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    current_index: usize,
    total_count: usize,
}

impl State {
    /// Creates a gallery over `total_count` photos, starting at the first.
    #[must_use]
    pub fn new(total_count: usize) -> Self {
        Self {
            current_index: 0,
            total_count,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Advances to the next photo. Returns `false` when already at the last.
    pub fn next(&mut self) -> bool {
        if self.current_index + 1 < self.total_count {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Steps back to the previous photo. Returns `false` when already at the first.
    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Returns a snapshot of the navigation state for rendering.
    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        NavigationInfo {
            at_first: self.current_index == 0,
            at_last: self.current_index + 1 >= self.total_count,
            current_index: self.current_index,
            total_count: self.total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_starts_at_first_photo() {
        let state = State::new(4);
        assert_eq!(state.current_index(), 0);
        assert!(state.info().at_first);
        assert!(!state.info().at_last);
    }

    #[test]
    fn next_stops_at_the_last_photo() {
        let mut state = State::new(3);

        assert!(state.next());
        assert!(state.next());
        assert_eq!(state.current_index(), 2);
        assert!(state.info().at_last);

        // No wrap-around
        assert!(!state.next());
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn previous_stops_at_the_first_photo() {
        let mut state = State::new(3);
        state.next();

        assert!(state.previous());
        assert_eq!(state.current_index(), 0);

        assert!(!state.previous());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn single_photo_gallery_is_pinned() {
        let mut state = State::new(1);

        let info = state.info();
        assert!(info.at_first);
        assert!(info.at_last);

        assert!(!state.next());
        assert!(!state.previous());
    }

    #[test]
    fn empty_gallery_reports_both_bounds() {
        let state = State::new(0);

        let info = state.info();
        assert!(info.at_first);
        assert!(info.at_last);
        assert_eq!(info.total_count, 0);
    }
}
