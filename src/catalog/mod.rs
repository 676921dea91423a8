//! Remote template catalog collaborator
//!
//! The engine only depends on the narrow [`Catalog`] contract: given
//! `(kind, id, version?)`, return a bundle manifest of
//! `(directory, filename, contents)` triples to materialize verbatim
//! into the template store. The HTTP implementation lives in
//! [`http::HttpCatalog`]; tests substitute their own.

pub mod http;

pub use http::HttpCatalog;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::template::TemplateKind;

/// One file of a fetched bundle, relative to the store root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub directory: String,
    pub filename: String,
    pub contents: String,
}

/// A fetched bundle: the files to materialize into the store
pub type Manifest = Vec<ManifestEntry>;

/// Catalog fetch contract
pub trait Catalog {
    /// Fetch the bundle manifest for a template, optionally pinned to a
    /// version.
    fn fetch(&self, kind: TemplateKind, id: &str, version: Option<&str>) -> Result<Manifest>;

    /// Fetch the catalog listing for a kind: template name -> description
    fn fetch_list(&self, kind: TemplateKind) -> Result<BTreeMap<String, String>>;
}
