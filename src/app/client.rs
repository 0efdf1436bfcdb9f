//! HTTP client for the puzzle site
//!
//! A thin authenticated GET wrapper: every request carries the stored session
//! token as a `Cookie: session=<value>` header and nothing else. There is no
//! retry, no configured timeout, and no status-code inspection; whatever body
//! the site returns is handed back as text, error pages included.

use reqwest::header::COOKIE;
use reqwest::Client;
use url::Url;

use crate::app::models::Coordinate;
use crate::constants::aoc;
use crate::errors::{FetchError, FetchResult};

/// Authenticated client for the two puzzle-site endpoints
#[derive(Debug, Clone)]
pub struct AocClient {
    client: Client,
    base_url: Url,
    session: String,
}

impl AocClient {
    /// Client against the real puzzle site
    pub fn new(session: String) -> FetchResult<Self> {
        let base_url = Url::parse(aoc::BASE_URL).expect("base URL constant is valid");
        Self::with_base_url(session, base_url)
    }

    /// Client against an explicit base URL
    pub fn with_base_url(session: String, base_url: Url) -> FetchResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    /// URL of the description page for a puzzle
    pub fn page_url(&self, coordinate: Coordinate) -> FetchResult<Url> {
        self.base_url
            .join(&format!("{}/day/{}", coordinate.year, coordinate.day))
            .map_err(|source| FetchError::InvalidUrl { coordinate, source })
    }

    /// URL of the raw input endpoint for a puzzle
    pub fn input_url(&self, coordinate: Coordinate) -> FetchResult<Url> {
        self.base_url
            .join(&format!(
                "{}/day/{}/input",
                coordinate.year, coordinate.day
            ))
            .map_err(|source| FetchError::InvalidUrl { coordinate, source })
    }

    /// Fetch the raw puzzle input for a coordinate
    pub async fn fetch_input(&self, coordinate: Coordinate) -> FetchResult<String> {
        let url = self.input_url(coordinate)?;
        self.get_text(url).await
    }

    /// Fetch the HTML description page for a coordinate
    pub async fn fetch_page(&self, coordinate: Coordinate) -> FetchResult<String> {
        let url = self.page_url(coordinate)?;
        self.get_text(url).await
    }

    /// Single authenticated GET, body returned as text regardless of status
    async fn get_text(&self, url: Url) -> FetchResult<String> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(COOKIE, format!("{}={}", aoc::SESSION_COOKIE, self.session))
            .send()
            .await?;
        tracing::debug!("Response status: {}", response.status());
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_url_matches_site_layout() {
        let client = AocClient::new("abc123".to_string()).unwrap();
        let url = client.input_url(Coordinate::new(2023, 5)).unwrap();
        assert_eq!(url.as_str(), "https://adventofcode.com/2023/day/5/input");
    }

    #[test]
    fn test_page_url_matches_site_layout() {
        let client = AocClient::new("abc123".to_string()).unwrap();
        let url = client.page_url(Coordinate::new(2015, 1)).unwrap();
        assert_eq!(url.as_str(), "https://adventofcode.com/2015/day/1");
    }

    #[test]
    fn test_base_url_override() {
        let base = Url::parse("http://localhost:8080/").unwrap();
        let client = AocClient::with_base_url("abc".to_string(), base).unwrap();
        let url = client.input_url(Coordinate::new(2024, 12)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/2024/day/12/input");
    }
}
