// SPDX-License-Identifier: MPL-2.0
//! Product records as supplied by the storefront catalog document.
//!
//! Products are externally authored and read-only inside the application:
//! the catalog document is the single source of truth and nothing here
//! mutates it after load.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identifier.
///
/// Doubles as the customer-facing code printed on cards and quoted in
/// WhatsApp order messages, and as the lookup key for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// A single mask listing.
///
/// `price` is the single-unit price, `price2` the per-unit price when buying
/// two or more. Amounts are plain numbers in the catalog document; formatting
/// into storefront currency strings happens in [`crate::catalog::money`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub price2: f64,
    /// Ordered image references, resolved relative to the catalog source.
    /// Non-empty for any product the storefront expects to be browsable.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// First image reference, used for the grid card thumbnail.
    #[must_use]
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_round_trips_through_serde_as_plain_string() {
        let id: ProductId = serde_json::from_str("\"M01\"").expect("parse id");
        assert_eq!(id.as_str(), "M01");
        assert_eq!(serde_json::to_string(&id).expect("serialize id"), "\"M01\"");
    }

    #[test]
    fn product_parses_from_catalog_document_shape() {
        let json = r#"{
            "id": "M01",
            "name": "Calavera",
            "price": 15000,
            "price2": 25000,
            "images": ["a.jpg", "b.jpg"]
        }"#;
        let product: Product = serde_json::from_str(json).expect("parse product");

        assert_eq!(product.id, ProductId::from("M01"));
        assert_eq!(product.name, "Calavera");
        assert_eq!(product.price, 15000.0);
        assert_eq!(product.price2, 25000.0);
        assert_eq!(product.first_image(), Some("a.jpg"));
    }

    #[test]
    fn missing_images_default_to_empty() {
        let json = r#"{ "id": "X", "name": "Sin fotos", "price": 1, "price2": 2 }"#;
        let product: Product = serde_json::from_str(json).expect("parse product");
        assert!(product.images.is_empty());
        assert_eq!(product.first_image(), None);
    }
}
