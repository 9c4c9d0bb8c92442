// SPDX-License-Identifier: MPL-2.0
//! Lightbox state for full-size photo display.

/// Full-window photo overlay.
///
/// Opens over the detail screen with the photo that was clicked; closing is
/// idempotent, so a close control press and a backdrop click in the same
/// frame cannot double-fire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open {
        /// Image reference of the photo on display.
        image_ref: String,
    },
}

impl Lightbox {
    /// Opens the lightbox on the given photo, replacing any previous one.
    pub fn open(&mut self, image_ref: impl Into<String>) {
        *self = Lightbox::Open {
            image_ref: image_ref.into(),
        };
    }

    /// Closes the lightbox. Closing an already-closed lightbox is a no-op.
    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    /// Returns the displayed photo reference, if open.
    #[must_use]
    pub fn image_ref(&self) -> Option<&str> {
        match self {
            Lightbox::Open { image_ref } => Some(image_ref),
            Lightbox::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightbox_starts_closed() {
        let lightbox = Lightbox::default();
        assert!(!lightbox.is_open());
        assert!(lightbox.image_ref().is_none());
    }

    #[test]
    fn open_records_the_photo_reference() {
        let mut lightbox = Lightbox::default();
        lightbox.open("img/calavera-frente.jpg");

        assert!(lightbox.is_open());
        assert_eq!(lightbox.image_ref(), Some("img/calavera-frente.jpg"));
    }

    #[test]
    fn reopening_replaces_the_photo() {
        let mut lightbox = Lightbox::default();
        lightbox.open("img/a.jpg");
        lightbox.open("img/b.jpg");

        assert_eq!(lightbox.image_ref(), Some("img/b.jpg"));
    }

    #[test]
    fn close_is_idempotent() {
        let mut lightbox = Lightbox::default();
        lightbox.open("img/a.jpg");

        lightbox.close();
        assert!(!lightbox.is_open());

        lightbox.close();
        assert!(!lightbox.is_open());
    }
}
