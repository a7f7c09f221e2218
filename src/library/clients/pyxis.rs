//! Live client for the Konkuk University Library Pyxis API.
//!
//! The chart endpoint is a single unauthenticated GET:
//! `/pyxis-api/1/biblio-type-popular-charged-books`. It counts loans of the
//! listed biblio types within an acquisition-date window and returns the most
//! borrowed titles for one classification class.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::library::client::{BookSearch, SearchError};
use crate::library::types::{Book, BookListPage, Category, Envelope, SearchWindow};

/// Path of the popularity chart endpoint.
const CHART_PATH: &str = "/pyxis-api/1/biblio-type-popular-charged-books";

/// Biblio types counted by the chart. The set is fixed by the screen, not
/// user-selectable.
const BIBLIO_TYPES: &str = "1,5,6,9,10,19,25,26,13,14";

/// Page size. The screen is a top-10, so the chart length is fixed.
const MAX_RESULTS: &str = "10";

/// Live catalog client.
pub struct PyxisClient {
    base_url: String,
    window: SearchWindow,
    client: reqwest::Client,
}

impl PyxisClient {
    pub fn new(base_url: Option<String>, window: SearchWindow) -> Self {
        let env_url = std::env::var("LIBRARY_BASE_URL").ok();
        let final_url = base_url
            .or(env_url)
            .unwrap_or_else(|| "https://library.konkuk.ac.kr".to_string());

        Self {
            base_url: final_url,
            window,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BookSearch for PyxisClient {
    fn name(&self) -> &str {
        "pyxis"
    }

    async fn search_top_books(&self, category: Category) -> Result<Vec<Book>, SearchError> {
        info!(
            "Pyxis chart request: category={} (classNo={}), window={}..{}",
            category.label(),
            category.class_no(),
            self.window.from,
            self.window.to
        );

        let class_no = category.class_no().to_string();
        let response = self
            .client
            .get(format!("{}{}", self.base_url, CHART_PATH))
            .query(&[
                ("max", MAX_RESULTS),
                ("biblioType", BIBLIO_TYPES),
                ("classNo", class_no.as_str()),
                ("fromDateReceived", self.window.from.as_str()),
                ("toDateReceived", self.window.to.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        debug!("Pyxis response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Pyxis API error: {} - {}", status, err_body);
            return Err(SearchError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let envelope: Envelope<BookListPage> = serde_json::from_str(&body).map_err(|e| {
            warn!("Pyxis body failed to decode: {} (body starts: {:.120})", e, body);
            SearchError::Decode(e.to_string())
        })?;

        // The flag is catalog-side bookkeeping; the chart is served either way.
        if !envelope.success {
            warn!(
                "Pyxis envelope flagged failure: code={}, message={}",
                envelope.code, envelope.message
            );
        }

        info!(
            "Chart received: {} of {} titles for {}",
            envelope.data.list.len(),
            envelope.data.total_count,
            category.label()
        );

        Ok(envelope.data.list)
    }
}
