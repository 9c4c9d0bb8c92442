// SPDX-License-Identifier: MPL-2.0
//! Immutable catalog snapshot.
//!
//! The catalog is loaded once per session and never mutated afterwards; every
//! screen reads from the same snapshot. Its serde shape matches the document
//! the storefront publishes: `{ "products": [ ... ] }`.

use super::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// The in-memory collection of all products for the current session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a snapshot from already-parsed products. Used by tests and by
    /// the loader after deserializing a source document.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Looks up a product by identifier.
    ///
    /// Duplicate identifiers are undefined input: the first match in document
    /// order wins, matching how the storefront's published data behaves.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// All products in document order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        serde_json::from_str(
            r#"{
                "products": [
                    { "id": "M01", "name": "Calavera", "price": 15000, "price2": 25000,
                      "images": ["a.jpg", "b.jpg"] },
                    { "id": "M02", "name": "Bruja", "price": 18000, "price2": 30000,
                      "images": ["c.jpg"] }
                ]
            }"#,
        )
        .expect("parse sample catalog")
    }

    #[test]
    fn find_returns_matching_product() {
        let catalog = sample();
        let product = catalog.find(&ProductId::from("M02")).expect("M02 exists");
        assert_eq!(product.name, "Bruja");
    }

    #[test]
    fn find_misses_unknown_id() {
        let catalog = sample();
        assert!(catalog.find(&ProductId::from("nope")).is_none());
    }

    #[test]
    fn find_uses_first_match_for_duplicate_ids() {
        let catalog = Catalog::from_products(vec![
            Product {
                id: ProductId::from("DUP"),
                name: "Primera".into(),
                price: 1.0,
                price2: 2.0,
                images: vec![],
            },
            Product {
                id: ProductId::from("DUP"),
                name: "Segunda".into(),
                price: 3.0,
                price2: 4.0,
                images: vec![],
            },
        ]);

        assert_eq!(
            catalog.find(&ProductId::from("DUP")).map(|p| p.name.as_str()),
            Some("Primera")
        );
    }

    #[test]
    fn empty_document_parses_to_empty_catalog() {
        let catalog: Catalog = serde_json::from_str(r#"{ "products": [] }"#).expect("parse");
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn document_without_products_key_is_empty() {
        let catalog: Catalog = serde_json::from_str("{}").expect("parse");
        assert!(catalog.is_empty());
    }
}
