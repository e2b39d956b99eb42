//! Assignment feed and report sink backed by a sheet web endpoint.
//!
//! The endpoint is an Apps Script style exec URL: a GET on the fetch URL
//! returns the assignment table as a JSON array, a GET on the update URL
//! with `?action=clear` wipes published rows, and a POST on the update
//! URL with a JSON array of rows replaces the report.

use reqwest::blocking::Client;

use crate::config::{Config, ENV_FETCH_URL, ENV_UPDATE_URL};
use crate::ports::{AssignmentFeed, FeedEntry, ReportSink};
use crate::report::ReportRow;

/// Blocking HTTP client for the sheet endpoint, serving both the
/// assignment feed and the report sink.
#[derive(Clone)]
pub struct SheetsClient {
    client: Client,
    fetch_url: String,
    update_url: String,
}

impl SheetsClient {
    /// Creates a client for the endpoints in `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            fetch_url: config.fetch_url.clone(),
            update_url: config.update_url.clone(),
        }
    }
}

impl AssignmentFeed for SheetsClient {
    fn fetch(&self) -> Result<Vec<FeedEntry>, Box<dyn std::error::Error + Send + Sync>> {
        if self.fetch_url.is_empty() {
            return Err(format!("assignment feed URL not configured (set {ENV_FETCH_URL})").into());
        }
        let response = self.client.get(&self.fetch_url).send()?.error_for_status()?;
        Ok(response.json()?)
    }
}

impl ReportSink for SheetsClient {
    fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.update_url.is_empty() {
            return Err(format!("report sink URL not configured (set {ENV_UPDATE_URL})").into());
        }
        let url = format!("{}?action=clear", self.update_url);
        let response = self.client.get(&url).send()?.error_for_status()?;
        println!("Cleared past report data: {}", response.text()?);
        Ok(())
    }

    fn replace(&self, rows: &[ReportRow]) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.update_url.is_empty() {
            return Err(format!("report sink URL not configured (set {ENV_UPDATE_URL})").into());
        }
        let response = self.client.post(&self.update_url).json(rows).send()?.error_for_status()?;
        println!("Report published: {}", response.text()?);
        Ok(())
    }
}
