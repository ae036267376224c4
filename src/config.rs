// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

/// Fixed values for one scrape run: target site, report naming, and the
/// browser session parameters.
pub struct ScrapeConfig {
    pub origin: String,
    pub sheet_name: String,
    pub file_prefix: String,
    /// Explicit Chrome/Chromium binary. `None` lets the automation layer
    /// discover one on the system.
    pub browser_path: Option<PathBuf>,
    pub headless: bool,
    /// Upper bound on how long to wait for listing rows to render.
    pub render_timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            origin: "https://remoteok.com".to_string(),
            sheet_name: "RemoteOK Jobs".to_string(),
            file_prefix: "RemoteOK".to_string(),
            browser_path: None,
            headless: true,
            render_timeout: Duration::from_secs(5),
        }
    }
}

impl ScrapeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_browser_path(mut self, path: PathBuf) -> Self {
        self.browser_path = Some(path);
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_render_timeout(mut self, timeout: Duration) -> Self {
        self.render_timeout = timeout;
        self
    }

    /// Search URL for a slugged job title, e.g. `software+engineer` ->
    /// `https://remoteok.com/remote-software+engineer-jobs`.
    pub fn jobs_url(&self, title_slug: &str) -> String {
        format!("{}/remote-{}-jobs", self.origin, title_slug)
    }

    /// Report filename embeds the job title as typed (trimmed, not slugged).
    /// An existing file of the same name gets overwritten.
    pub fn report_filename(&self, title_display: &str) -> String {
        format!("{}_{}_Jobs.xlsx", self.file_prefix, title_display)
    }
}
