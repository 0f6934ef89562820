use crate::core::{ConfigProvider, Pipeline, RawPages, ResultsBundle, Storage};
use crate::scrape;
use crate::utils::error::Result;
use chrono::Utc;
use reqwest::header::USER_AGENT;
use reqwest::Client;

pub struct ResultsPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> ResultsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.config.user_agent())
            .send()
            .await?;

        tracing::debug!("GET {} -> {}", url, response.status());

        // Error statuses are not special: an error page parses to zero rows.
        let body = response.text().await?;
        tracing::debug!("Buffered {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ResultsPipeline<S, C> {
    async fn extract(&self) -> Result<RawPages> {
        tracing::debug!("Fetching pools page from {}", self.config.pools_url());
        tracing::debug!("Fetching lotto page from {}", self.config.lotto_url());

        // Neither page depends on the other, so both fetches go out at once.
        let (pools_html, lotto_html) = tokio::join!(
            self.fetch_page(self.config.pools_url()),
            self.fetch_page(self.config.lotto_url())
        );

        Ok(RawPages {
            pools_html: pools_html?,
            lotto_html: lotto_html?,
        })
    }

    async fn transform(&self, pages: RawPages) -> Result<ResultsBundle> {
        let hk_pools = scrape::pools::parse_doc(&pages.pools_html);
        let hk_lotto = scrape::lotto::parse_doc(&pages.lotto_html);

        tracing::debug!(
            "Extracted {} pools entries and {} lotto entries",
            hk_pools.len(),
            hk_lotto.len()
        );

        Ok(ResultsBundle {
            last_updated: Utc::now(),
            hk_pools,
            hk_lotto,
        })
    }

    async fn load(&self, bundle: ResultsBundle) -> Result<String> {
        let json = serde_json::to_string_pretty(&bundle)?;

        tracing::debug!(
            "Writing {} bytes of JSON to {}",
            json.len(),
            self.config.output_file()
        );
        self.storage
            .write_file(self.config.output_file(), json.as_bytes())
            .await?;

        let output_path = format!(
            "{}/{}",
            self.config.output_path(),
            self.config.output_file()
        );
        Ok(output_path)
    }
}
