// SPDX-License-Identifier: MPL-2.0
//! Product image resolution and caching.
//!
//! Catalog documents carry image references relative to wherever the document
//! lives: a sibling directory for local files, the document's URL base for
//! remote catalogs. Local references become file-backed handles directly;
//! remote references are fetched once, decoded to RGBA, and cached for the
//! session. A reference that cannot be resolved or decoded degrades to a
//! placeholder slot, never to an error screen.

use super::loader::Origin;
use crate::error::Result;
use iced::widget::image;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Base location image references resolve against.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageBase {
    Directory(PathBuf),
    RemoteRoot(String),
    Unavailable,
}

impl ImageBase {
    /// Derives the base from the origin of the loaded catalog document.
    ///
    /// The embedded snapshot resolves against the working directory, matching
    /// how the storefront's pages resolved relative paths against the site
    /// root.
    #[must_use]
    pub fn for_origin(origin: &Origin) -> Self {
        match origin {
            Origin::File(path) => match path.parent() {
                Some(dir) => ImageBase::Directory(dir.to_path_buf()),
                None => ImageBase::Unavailable,
            },
            Origin::Remote(url) => match url.rsplit_once('/') {
                Some((root, _)) => ImageBase::RemoteRoot(root.to_string()),
                None => ImageBase::Unavailable,
            },
            Origin::Embedded => ImageBase::Directory(PathBuf::from(".")),
            Origin::Empty => ImageBase::Unavailable,
        }
    }

    fn resolve(&self, reference: &str) -> Resolved {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return Resolved::Url(reference.to_string());
        }
        match self {
            ImageBase::Directory(dir) => Resolved::Path(dir.join(reference)),
            ImageBase::RemoteRoot(root) => Resolved::Url(format!("{root}/{reference}")),
            ImageBase::Unavailable => Resolved::Unresolvable,
        }
    }
}

enum Resolved {
    Path(PathBuf),
    Url(String),
    Unresolvable,
}

/// Display state of one image reference.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSlot {
    /// Decoded and ready to draw.
    Loaded(image::Handle),
    /// A fetch is in flight (or not yet requested).
    Loading,
    /// Resolution or decoding failed; draw the placeholder.
    Missing,
}

/// Session-scoped image handle cache.
///
/// `request` is the only entry point that starts work: it resolves new
/// references against the base, caches local paths immediately, and hands
/// back the remote URLs the caller should fetch. Fetch results come back via
/// `insert` / `mark_failed`.
#[derive(Debug)]
pub struct ImageStore {
    base: ImageBase,
    cache: HashMap<String, image::Handle>,
    pending: HashSet<String>,
    failed: HashSet<String>,
}

impl ImageStore {
    #[must_use]
    pub fn new(base: ImageBase) -> Self {
        Self {
            base,
            cache: HashMap::new(),
            pending: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    /// Store with no resolvable base; every reference degrades to `Missing`.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(ImageBase::Unavailable)
    }

    /// Registers references for display and returns `(reference, url)` pairs
    /// the caller must fetch. Local references are cached on the spot;
    /// already-known references are skipped.
    pub fn request<'a>(
        &mut self,
        references: impl IntoIterator<Item = &'a str>,
    ) -> Vec<(String, String)> {
        let mut to_fetch = Vec::new();
        for reference in references {
            if self.cache.contains_key(reference)
                || self.pending.contains(reference)
                || self.failed.contains(reference)
            {
                continue;
            }
            match self.base.resolve(reference) {
                Resolved::Path(path) => {
                    if path.is_file() {
                        self.cache
                            .insert(reference.to_string(), image::Handle::from_path(path));
                    } else {
                        self.failed.insert(reference.to_string());
                    }
                }
                Resolved::Url(url) => {
                    self.pending.insert(reference.to_string());
                    to_fetch.push((reference.to_string(), url));
                }
                Resolved::Unresolvable => {
                    self.failed.insert(reference.to_string());
                }
            }
        }
        to_fetch
    }

    /// Stores a fetched and decoded handle.
    pub fn insert(&mut self, reference: &str, handle: image::Handle) {
        self.pending.remove(reference);
        self.failed.remove(reference);
        self.cache.insert(reference.to_string(), handle);
    }

    /// Marks a reference as failed; it renders as a placeholder from now on.
    pub fn mark_failed(&mut self, reference: &str) {
        self.pending.remove(reference);
        self.failed.insert(reference.to_string());
    }

    /// Current display state for a reference.
    #[must_use]
    pub fn slot(&self, reference: &str) -> ImageSlot {
        if let Some(handle) = self.cache.get(reference) {
            ImageSlot::Loaded(handle.clone())
        } else if self.failed.contains(reference) {
            ImageSlot::Missing
        } else {
            ImageSlot::Loading
        }
    }
}

/// Fetches a remote image and decodes it into a widget handle.
pub async fn fetch(url: String) -> Result<image::Handle> {
    let response = reqwest::get(&url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    decode(&bytes)
}

fn decode(bytes: &[u8]) -> Result<image::Handle> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(image::Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_handle() -> image::Handle {
        image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn base_for_local_file_is_its_directory() {
        let origin = Origin::File(PathBuf::from("/data/catalog/products.json"));
        assert_eq!(
            ImageBase::for_origin(&origin),
            ImageBase::Directory(PathBuf::from("/data/catalog"))
        );
    }

    #[test]
    fn base_for_remote_document_is_its_url_root() {
        let origin = Origin::Remote("https://tienda.test/catalogo/products.json".to_string());
        assert_eq!(
            ImageBase::for_origin(&origin),
            ImageBase::RemoteRoot("https://tienda.test/catalogo".to_string())
        );
    }

    #[test]
    fn base_for_empty_origin_is_unavailable() {
        assert_eq!(ImageBase::for_origin(&Origin::Empty), ImageBase::Unavailable);
    }

    #[test]
    fn remote_references_are_returned_for_fetching_once() {
        let mut store = ImageStore::new(ImageBase::RemoteRoot("https://t.test".to_string()));

        let first = store.request(["img/a.jpg", "img/b.jpg"]);
        assert_eq!(
            first,
            vec![
                ("img/a.jpg".to_string(), "https://t.test/img/a.jpg".to_string()),
                ("img/b.jpg".to_string(), "https://t.test/img/b.jpg".to_string()),
            ]
        );

        // Second request while pending starts nothing new.
        assert!(store.request(["img/a.jpg"]).is_empty());
        assert_eq!(store.slot("img/a.jpg"), ImageSlot::Loading);
    }

    #[test]
    fn absolute_url_references_bypass_the_base() {
        let mut store = ImageStore::new(ImageBase::Directory(PathBuf::from("/nowhere")));
        let fetches = store.request(["https://cdn.test/a.jpg"]);
        assert_eq!(
            fetches,
            vec![(
                "https://cdn.test/a.jpg".to_string(),
                "https://cdn.test/a.jpg".to_string()
            )]
        );
    }

    #[test]
    fn missing_local_file_degrades_to_missing_slot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = ImageStore::new(ImageBase::Directory(dir.path().to_path_buf()));

        assert!(store.request(["nope.jpg"]).is_empty());
        assert_eq!(store.slot("nope.jpg"), ImageSlot::Missing);
    }

    #[test]
    fn present_local_file_is_cached_immediately() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("mask.jpg"), b"not really a jpg").expect("write");
        let mut store = ImageStore::new(ImageBase::Directory(dir.path().to_path_buf()));

        assert!(store.request(["mask.jpg"]).is_empty());
        assert!(matches!(store.slot("mask.jpg"), ImageSlot::Loaded(_)));
    }

    #[test]
    fn insert_and_mark_failed_flip_slot_state() {
        let mut store = ImageStore::new(ImageBase::RemoteRoot("https://t.test".to_string()));
        store.request(["a.jpg"]);

        store.mark_failed("a.jpg");
        assert_eq!(store.slot("a.jpg"), ImageSlot::Missing);

        store.insert("a.jpg", sample_handle());
        assert!(matches!(store.slot("a.jpg"), ImageSlot::Loaded(_)));
    }

    #[test]
    fn unavailable_store_fails_every_reference() {
        let mut store = ImageStore::unavailable();
        assert!(store.request(["a.jpg"]).is_empty());
        assert_eq!(store.slot("a.jpg"), ImageSlot::Missing);
    }

    #[test]
    fn decode_round_trips_an_encoded_png() {
        let img = image_rs::DynamicImage::new_rgba8(2, 3);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode png");

        assert!(decode(&bytes).is_ok());
    }

    #[test]
    fn decode_rejects_garbage_bytes() {
        assert!(decode(b"definitely not an image").is_err());
    }
}
