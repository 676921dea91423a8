//! HTTP catalog client (blocking)

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use super::{Catalog, Manifest};
use crate::error::{Result, ShipwrightError};
use crate::template::TemplateKind;

/// Default catalog base URL; override with `SHIPWRIGHT_CATALOG_URL`.
pub const DEFAULT_CATALOG_URL: &str = "https://catalog.shipwright.dev";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpCatalog {
    base_url: String,
    client: reqwest::blocking::Client,
}

/// Catalog wire envelope: transport-level 200 with an application-level
/// status and either an error message or the manifest data.
#[derive(Deserialize)]
struct ApiResponse<T> {
    status: u16,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Option<T>,
}

impl HttpCatalog {
    pub fn new() -> Result<Self> {
        let base_url = std::env::var("SHIPWRIGHT_CATALOG_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn get_envelope<T: serde::de::DeserializeOwned + Default>(
        &self,
        path: &str,
        what: &str,
        not_found: Option<ShipwrightError>,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self.client.get(&url).send()?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            if let Some(err) = not_found {
                return Err(err);
            }
        }
        if !response.status().is_success() {
            return Err(ShipwrightError::FetchFailed {
                what: what.to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let envelope: ApiResponse<T> = response.json()?;
        if envelope.status != 200 {
            return Err(ShipwrightError::FetchFailed {
                what: what.to_string(),
                reason: envelope
                    .error
                    .unwrap_or_else(|| format!("catalog status {}", envelope.status)),
            });
        }

        envelope.data.ok_or_else(|| ShipwrightError::FetchFailed {
            what: what.to_string(),
            reason: "catalog returned an empty manifest".to_string(),
        })
    }
}

impl Catalog for HttpCatalog {
    fn fetch(&self, kind: TemplateKind, id: &str, version: Option<&str>) -> Result<Manifest> {
        let path = match version {
            Some(version) => format!("docker/{kind}/{id}/{version}"),
            None => format!("docker/{kind}/{id}"),
        };
        let what = format!("{id} {kind}");
        self.get_envelope(
            &path,
            &what,
            Some(ShipwrightError::TemplateNotFound {
                kind: kind.to_string(),
                id: id.to_string(),
            }),
        )
    }

    fn fetch_list(&self, kind: TemplateKind) -> Result<BTreeMap<String, String>> {
        let path = format!("list/docker/{kind}");
        let what = format!("{kind} list");
        self.get_envelope(&path, &what, None)
    }
}
