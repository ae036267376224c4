// src/fetch.rs
use crate::config::ScrapeConfig;
use crate::extract::LISTING_SELECTOR;
use anyhow::{anyhow, Context, Result};
use headless_chrome::{Browser, LaunchOptionsBuilder};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Drives one browser session per fetch. The only hard failure here is the
/// browser itself refusing to launch; a page that fails to load or render is
/// captured as-is and read as a zero-listing page downstream.
pub struct PageFetcher {
    browser_path: Option<PathBuf>,
    headless: bool,
    render_timeout: Duration,
}

impl PageFetcher {
    pub fn new(config: &ScrapeConfig) -> Self {
        Self {
            browser_path: config.browser_path.clone(),
            headless: config.headless,
            render_timeout: config.render_timeout,
        }
    }

    /// Navigate to `url`, wait (bounded) for listing rows to render, and
    /// return the materialized page markup. The browser process is torn down
    /// when the `Browser` handle drops, on every exit path.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let options = LaunchOptionsBuilder::default()
            .headless(self.headless)
            .path(self.browser_path.clone())
            .build()
            .map_err(|e| anyhow!("Failed to build browser launch options: {e}"))?;

        let browser = Browser::new(options).context("Failed to launch browser")?;
        let tab = browser.new_tab().context("Failed to open browser tab")?;

        info!("Fetching job listings: {}", url);
        if let Err(err) = tab.navigate_to(url).and_then(|tab| tab.wait_until_navigated()) {
            warn!("Navigation did not complete cleanly: {err:#}");
        }

        // Listings are populated client-side; poll for the first row instead
        // of sleeping a fixed duration. A timeout is not an error: the page
        // may legitimately contain no listings.
        if tab
            .wait_for_element_with_custom_timeout(LISTING_SELECTOR, self.render_timeout)
            .is_err()
        {
            warn!(
                "No listing rows appeared within {:?}, capturing page as-is",
                self.render_timeout
            );
        }

        let html = match tab.get_content() {
            Ok(html) => html,
            Err(err) => {
                warn!("Failed to capture page content: {err:#}");
                String::new()
            }
        };
        Ok(html)
    }
}
