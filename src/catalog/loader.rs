// SPDX-License-Identifier: MPL-2.0
//! Catalog loading with silent degradation.
//!
//! The loader's contract is deliberate: it never fails. Sources are tried in
//! order (local file, remote document, embedded snapshot) and every captured
//! fault is routed to diagnostics instead of the caller; when the whole chain
//! is exhausted the result is simply an empty catalog. Downstream rendering
//! treats emptiness as "zero cards", not as an error state.

use super::snapshot::Catalog;
use crate::diagnostics::{
    DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType,
};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::path::PathBuf;

/// Embedded snapshot of the storefront catalog, the last data source before
/// giving up to empty.
#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Snapshot;

const SNAPSHOT_FILE: &str = "products.json";

/// A catalog document source. Sources are attempted in chain order.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// JSON document on the local filesystem.
    File(PathBuf),
    /// JSON document fetched over HTTP.
    Remote(String),
    /// Snapshot compiled into the binary.
    Embedded,
}

/// Where the resolved catalog actually came from.
///
/// `Empty` means every source in the chain failed; image references have no
/// base to resolve against in that case.
#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    File(PathBuf),
    Remote(String),
    Embedded,
    Empty,
}

/// Builds the source chain for a session: CLI path override first, then the
/// configured path, then the configured URL, then the embedded snapshot.
#[must_use]
pub fn source_chain(
    cli_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    config_url: Option<String>,
) -> Vec<Source> {
    let mut chain = Vec::new();
    if let Some(path) = cli_path {
        chain.push(Source::File(path));
    }
    if let Some(path) = config_path {
        chain.push(Source::File(path));
    }
    if let Some(url) = config_url {
        chain.push(Source::Remote(url));
    }
    chain.push(Source::Embedded);
    chain
}

/// Resolves the catalog from the first source in `chain` that yields a
/// parseable document.
///
/// Never fails: faults are logged through `diagnostics` and the next source
/// is tried; an exhausted chain yields `(Catalog::default(), Origin::Empty)`.
pub async fn load(chain: Vec<Source>, diagnostics: DiagnosticsHandle) -> (Catalog, Origin) {
    for source in chain {
        match try_source(&source).await {
            Ok(catalog) => {
                let origin = match source {
                    Source::File(path) => Origin::File(path),
                    Source::Remote(url) => Origin::Remote(url),
                    Source::Embedded => Origin::Embedded,
                };
                return (catalog, origin);
            }
            Err(err) => {
                diagnostics.log_warning(warning_for(&source, &err));
            }
        }
    }

    diagnostics.log_error(ErrorEvent::new(
        ErrorType::Other,
        "every catalog source failed; session starts with an empty catalog",
    ));
    (Catalog::default(), Origin::Empty)
}

async fn try_source(source: &Source) -> Result<Catalog> {
    match source {
        Source::File(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        Source::Remote(url) => {
            let response = reqwest::get(url).await?.error_for_status()?;
            let text = response.text().await?;
            Ok(serde_json::from_str(&text)?)
        }
        Source::Embedded => {
            let file = Snapshot::get(SNAPSHOT_FILE)
                .ok_or_else(|| Error::Io("embedded catalog snapshot missing".to_string()))?;
            let text = std::str::from_utf8(file.data.as_ref())
                .map_err(|e| Error::Parse(e.to_string()))?;
            Ok(serde_json::from_str(text)?)
        }
    }
}

fn warning_for(source: &Source, err: &Error) -> WarningEvent {
    let warning_type = match err {
        Error::Http(_) => WarningType::NetworkError,
        Error::Io(_) => WarningType::FileNotFound,
        _ => WarningType::Other,
    };
    WarningEvent::new(
        warning_type,
        format!("catalog source {source:?} skipped: {err}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use std::io::Write;

    #[tokio::test]
    async fn embedded_snapshot_is_the_default_source() {
        let collector = DiagnosticsCollector::new();
        let (catalog, origin) = load(source_chain(None, None, None), collector.handle()).await;

        assert_eq!(origin, Origin::Embedded);
        assert!(!catalog.is_empty());
        assert!(catalog.find(&"M01".into()).is_some());
    }

    #[tokio::test]
    async fn local_file_takes_precedence_over_embedded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("products.json");
        let mut file = std::fs::File::create(&path).expect("create file");
        write!(
            file,
            r#"{{ "products": [ {{ "id": "L01", "name": "Local", "price": 1, "price2": 2, "images": [] }} ] }}"#
        )
        .expect("write file");

        let collector = DiagnosticsCollector::new();
        let chain = source_chain(Some(path.clone()), None, None);
        let (catalog, origin) = load(chain, collector.handle()).await;

        assert_eq!(origin, Origin::File(path));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find(&"L01".into()).is_some());
    }

    #[tokio::test]
    async fn missing_file_falls_through_to_embedded_with_a_warning() {
        let mut collector = DiagnosticsCollector::new();
        let chain = source_chain(Some(PathBuf::from("/no/such/catalog.json")), None, None);
        let (catalog, origin) = load(chain, collector.handle()).await;

        assert_eq!(origin, Origin::Embedded);
        assert!(!catalog.is_empty());

        collector.process_pending();
        let warnings = collector
            .iter()
            .filter(|e| matches!(e.kind, DiagnosticEventKind::Warning { .. }))
            .count();
        assert_eq!(warnings, 1);
    }

    #[tokio::test]
    async fn malformed_file_falls_through_to_embedded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ this is not json").expect("write file");

        let collector = DiagnosticsCollector::new();
        let chain = source_chain(Some(path), None, None);
        let (_, origin) = load(chain, collector.handle()).await;

        assert_eq!(origin, Origin::Embedded);
    }

    #[tokio::test]
    async fn exhausted_chain_yields_empty_catalog_and_an_error_event() {
        let mut collector = DiagnosticsCollector::new();
        let chain = vec![Source::File(PathBuf::from("/no/such/catalog.json"))];
        let (catalog, origin) = load(chain, collector.handle()).await;

        assert_eq!(origin, Origin::Empty);
        assert!(catalog.is_empty());

        collector.process_pending();
        let errors = collector
            .iter()
            .filter(|e| matches!(e.kind, DiagnosticEventKind::Error { .. }))
            .count();
        assert_eq!(errors, 1);
    }

    #[test]
    fn chain_orders_cli_before_config_before_url() {
        let chain = source_chain(
            Some(PathBuf::from("cli.json")),
            Some(PathBuf::from("config.json")),
            Some("https://example.test/products.json".to_string()),
        );

        assert_eq!(
            chain,
            vec![
                Source::File(PathBuf::from("cli.json")),
                Source::File(PathBuf::from("config.json")),
                Source::Remote("https://example.test/products.json".to_string()),
                Source::Embedded,
            ]
        );
    }
}
