use crate::model::FetchError;

#[async_trait::async_trait]
pub trait Scraper: Send + Sync {
    /// Performs a GET on `url` and returns the body of a 2xx response.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
