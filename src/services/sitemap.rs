use crate::domain::SiteConfig;
use crate::error::{Result, SwitchError};
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

pub const USER_AGENT: &str = "SitemapSubmissionTool/1.0";

/// Ping endpoints for the search engines we know about. Yahoo rides on
/// Bing's index and Yandex needs webmaster registration, so both stay
/// disabled.
pub struct SearchEngine {
    pub name: &'static str,
    pub submit_url: &'static str,
    pub enabled: bool,
}

pub const SEARCH_ENGINES: [SearchEngine; 4] = [
    SearchEngine {
        name: "Google",
        submit_url: "https://www.google.com/ping?sitemap=",
        enabled: true,
    },
    SearchEngine {
        name: "Bing",
        submit_url: "https://www.bing.com/ping?sitemap=",
        enabled: true,
    },
    SearchEngine {
        name: "Yahoo",
        submit_url: "https://search.yahoo.com/ping?sitemap=",
        enabled: false,
    },
    SearchEngine {
        name: "Yandex",
        submit_url: "https://webmaster.yandex.com/ping?sitemap=",
        enabled: false,
    },
];

#[derive(Debug, Clone)]
pub struct SubmissionResult {
    pub engine: String,
    pub success: bool,
    pub message: String,
}

/// Renders the sitemap for the configured site: a single home page entry
/// under the canonical base.
pub fn render(config: &SiteConfig) -> String {
    let base = config.seo.canonical_base.trim_end_matches('/');
    let lastmod = Utc::now().format("%Y-%m-%d");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
         \x20 <url>\n\
         \x20   <loc>{base}/</loc>\n\
         \x20   <lastmod>{lastmod}</lastmod>\n\
         \x20   <changefreq>daily</changefreq>\n\
         \x20   <priority>1.0</priority>\n\
         \x20 </url>\n\
         </urlset>\n"
    )
}

/// Checks the basic XML structure of a sitemap document and returns the
/// number of `<url>` entries. A sitemap without entries is invalid.
pub fn validate(content: &str) -> Result<usize> {
    if !content.contains("<?xml") || !content.contains("<urlset") {
        return Err(SwitchError::Validation(
            "invalid sitemap format".to_string(),
        ));
    }

    let url_count = content.matches("<url>").count();
    if url_count == 0 {
        return Err(SwitchError::Validation(
            "no URLs found in sitemap".to_string(),
        ));
    }

    Ok(url_count)
}

/// Submits a sitemap URL to every enabled search engine, one at a time
/// with a fixed delay to stay under rate limits. Failures are recorded per
/// engine, never propagated.
pub struct SitemapSubmitter {
    client: Client,
}

impl SitemapSubmitter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn submit_all(&self, sitemap_url: &str) -> Vec<SubmissionResult> {
        let mut results = Vec::new();

        for engine in SEARCH_ENGINES.iter().filter(|engine| engine.enabled) {
            info!("Submitting to {}", engine.name);
            results.push(self.submit(engine, sitemap_url).await);
            sleep(Duration::from_secs(1)).await;
        }

        results
    }

    async fn submit(&self, engine: &SearchEngine, sitemap_url: &str) -> SubmissionResult {
        let ping_url = format!("{}{}", engine.submit_url, urlencoding::encode(sitemap_url));

        match self.client.get(&ping_url).send().await {
            Ok(response) if response.status().is_success() => SubmissionResult {
                engine: engine.name.to_string(),
                success: true,
                message: format!("successfully submitted to {}", engine.name),
            },
            Ok(response) => SubmissionResult {
                engine: engine.name.to_string(),
                success: false,
                message: format!(
                    "failed to submit to {} (HTTP {})",
                    engine.name,
                    response.status()
                ),
            },
            Err(error) => SubmissionResult {
                engine: engine.name.to_string(),
                success: false,
                message: format!("error submitting to {}: {error}", engine.name),
            },
        }
    }
}
