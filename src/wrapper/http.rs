use std::time::Duration;

use crate::error::{Error, Result};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

// Error bodies can be whole HTML pages.
const MAX_BODY_IN_ERROR: usize = 512;

#[derive(Debug, Clone)]
pub enum HeaderKey {
    Authorization,
    Accept,
}

impl HeaderKey {
    fn as_str(&self) -> &'static str {
        match self {
            HeaderKey::Authorization => "Authorization",
            HeaderKey::Accept => "Accept",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Header {
    key: HeaderKey,
    value: String,
}

impl Header {
    pub fn new(key: HeaderKey, value: String) -> Self {
        Self { key, value }
    }
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn into_body(self) -> Result<String> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(Error::fetch_status(self.status, truncate(&self.body)))
        }
    }
}

fn truncate(body: &str) -> String {
    match body.char_indices().nth(MAX_BODY_IN_ERROR) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

pub struct Client {
    cli: reqwest::Client,
    dft_headers: Vec<Header>,
}

impl Client {
    pub fn new(timeout: Duration) -> Result<Self> {
        let cli = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("cannot build http client: {}", e)))?;

        Ok(Self {
            cli,
            dft_headers: vec![],
        })
    }

    pub fn set_default_headers(&mut self, headers: Vec<Header>) {
        self.dft_headers = headers;
    }

    pub async fn get(&self, url: &str, headers: Option<Vec<Header>>) -> Result<Response> {
        log::debug!("GET {}", url);

        let mut builder = self.cli.get(url);
        builder = self.add_headers(builder, headers);

        let response = builder.send().await?;
        let status = response.status().as_u16();
        log::debug!("GET {} -> {}", url, status);

        Ok(Response {
            status,
            body: response.text().await?,
        })
    }

    fn add_headers(
        &self,
        mut builder: reqwest::RequestBuilder,
        headers: Option<Vec<Header>>,
    ) -> reqwest::RequestBuilder {
        let mut hdrs = self.dft_headers.clone();
        if let Some(headers) = headers {
            hdrs.extend(headers);
        }

        for header in hdrs {
            builder = builder.header(header.key.as_str(), header.value.as_str());
        }

        builder
    }
}
