use crate::error::SearchError;
use reqwest::header;
use tracing::debug;

/// Issues a GET request and hands back the response body.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, SearchError>;
}

impl<T: Fetch + ?Sized> Fetch for &T {
    fn get(&self, url: &str) -> Result<String, SearchError> {
        (**self).get(url)
    }
}

/// Blocking reqwest-backed fetcher used by the binary.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, SearchError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("stacksearch/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::blocking::Client::builder().default_headers(headers).build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, SearchError> {
        debug!("Requesting URL: {}", url);
        let resp = self.client.get(url).send()?;
        if !resp.status().is_success() {
            return Err(SearchError::from_status(resp.status()));
        }

        Ok(resp.text()?)
    }
}
