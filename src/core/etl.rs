use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ScrapeEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ScrapeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting result scrape...");

        // Extract
        println!("Fetching source pages...");
        let pages = self.pipeline.extract().await?;
        println!(
            "Fetched {} bytes (pools) and {} bytes (lotto)",
            pages.pools_html.len(),
            pages.lotto_html.len()
        );
        self.monitor.log_stats("extract");

        // Transform
        println!("Parsing result tables...");
        let bundle = self.pipeline.transform(pages).await?;
        println!(
            "Parsed {} pools entries and {} lotto entries",
            bundle.hk_pools.len(),
            bundle.hk_lotto.len()
        );
        self.monitor.log_stats("transform");

        // Load
        println!("Writing output...");
        let output_path = self.pipeline.load(bundle).await?;
        println!("Output saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
