use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::auth::RequestSigner;
use crate::error::{Error, Result};
use crate::record::RawZone;
use crate::wrapper::http::{Client, Header, HeaderKey};

use super::ZoneFetcher;

const ZONES_PATH: &str = "/config-dns/v1/zones";

/// Reads zones from the FastDNS configuration API.
///
/// A single signed GET per zone. Failures are returned as is, nothing is
/// retried.
pub struct FastDnsFetcher<S> {
    base_url: String,
    signer: S,
    cli: Client,
}

impl<S: RequestSigner> FastDnsFetcher<S> {
    pub fn new(base_url: impl Into<String>, signer: S, timeout: Duration) -> Result<Self> {
        let mut cli = Client::new(timeout)?;
        cli.set_default_headers(vec![Header::new(
            HeaderKey::Accept,
            "application/json".to_string(),
        )]);

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            signer,
            cli,
        })
    }

    pub fn zone_url(&self, zone: &str) -> Result<Url> {
        let url = format!("{}{}/{}", self.base_url, ZONES_PATH, zone);
        Url::parse(&url).map_err(|e| Error::Config(format!("invalid zone url {}: {}", url, e)))
    }

    pub async fn fetch_zone(&self, zone: &str) -> Result<RawZone> {
        if zone.is_empty() {
            return Err(Error::Config("zone must not be empty".to_string()));
        }

        let url = self.zone_url(zone)?;
        let auth = self.signer.authorization("GET", &url)?;
        let headers = vec![Header::new(HeaderKey::Authorization, auth)];

        let resp = self.cli.get(url.as_str(), Some(headers)).await?;
        let status = resp.status;
        let body = resp.into_body()?;

        // An unreadable body is a failed fetch, same as a bad status.
        let raw = RawZone::from_json(&body).map_err(|e| match e {
            Error::Parse(detail) => Error::fetch_status(status, detail),
            other => other,
        })?;

        log::info!("fetched zone {} ({} entries)", raw.name, raw.entries.len());
        Ok(raw)
    }
}

#[async_trait]
impl<S: RequestSigner + Send + Sync> ZoneFetcher for FastDnsFetcher<S> {
    async fn fetch_zone(&self, zone: &str) -> Result<RawZone> {
        self.fetch_zone(zone).await
    }
}
