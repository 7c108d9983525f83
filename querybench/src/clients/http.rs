use super::{QueryClient, Row};
use crate::error::QueryError;
use futures_util::future::BoxFuture;
use url::Url;

/// Adapter for HTTP endpoints serving `GET {base}/rows/{bound}` as a
/// JSON array of objects.
///
/// The base URL should end with a trailing slash; relative joins drop
/// the last path segment otherwise.
#[derive(Debug)]
pub struct HttpQueryClient {
    name: String,
    base_url: Url,
    http: reqwest::Client,
}

impl HttpQueryClient {
    pub fn new(name: &str, base_url: &str) -> Result<Self, QueryError> {
        Ok(Self {
            name: name.to_string(),
            base_url: Url::parse(base_url)?,
            http: reqwest::Client::new(),
        })
    }
}

impl QueryClient for HttpQueryClient {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute_query(&self, row_bound: u64) -> BoxFuture<'_, Result<Vec<Row>, QueryError>> {
        Box::pin(async move {
            let url = self.base_url.join(&format!("rows/{row_bound}"))?;
            let response = self.http.get(url).send().await?.error_for_status()?;
            let rows: Vec<Row> = response.json().await?;
            Ok(rows)
        })
    }
}
