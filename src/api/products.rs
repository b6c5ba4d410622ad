//! HTTP client for the products endpoint

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client};

use crate::config::DashboardConfig;
use crate::domain::product::Product;
use crate::metrics::Metrics;

use super::error::{ProductApiError, ProductApiResult};

/// Client for `GET {base}/Products`
#[derive(Clone)]
pub struct ProductClient {
    client: Client,
    base_url: String,
    metrics: Option<Arc<Metrics>>,
}

impl ProductClient {
    /// Create a client from configuration
    pub fn new(config: &DashboardConfig) -> ProductApiResult<Self> {
        if !config.products_url.starts_with("http://") && !config.products_url.starts_with("https://") {
            return Err(ProductApiError::InvalidUrl(config.products_url.clone()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.products_url.clone(),
            metrics: None,
        })
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Full URL of the products listing
    pub fn products_url(&self) -> String {
        format!("{}/Products", self.base_url.trim_end_matches('/'))
    }

    /// Fetch all products
    pub async fn get_products(&self) -> ProductApiResult<Vec<Product>> {
        let url = self.products_url();
        tracing::debug!(url = %url, "Fetching products");

        let result = self.fetch(&url).await;

        if let Some(metrics) = &self.metrics {
            metrics.record_product_fetch(result.is_ok());
        }
        match &result {
            Ok(products) => tracing::info!(count = products.len(), "Products fetched"),
            Err(e) => tracing::error!(error = %e, url = %url, "Error fetching products"),
        }
        result
    }

    async fn fetch(&self, url: &str) -> ProductApiResult<Vec<Product>> {
        let response = self
            .client
            .get(url)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ProductApiError::Status { status, body });
        }

        response.json().await.map_err(Into::into)
    }
}
