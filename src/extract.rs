// src/extract.rs
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One listing row: `tr` with the `job` class and a `data-id` attribute
/// (any value).
pub const LISTING_SELECTOR: &str = "tr.job[data-id]";

/// Placeholder written into the report when a field lookup yields nothing.
pub const SENTINEL: &str = "N/A";

const TITLE_SELECTOR: &str = r#"h2[itemprop="title"]"#;
const COMPANY_SELECTOR: &str = r#"h3[itemprop="name"]"#;
const LOCATION_SELECTOR: &str = r#"div.location"#;
const LINK_SELECTOR: &str = r#"a[itemprop="url"]"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
}

impl JobListing {
    /// Missing-field policy lives here: any absent lookup becomes the
    /// sentinel, each field independently.
    pub fn from_parts(
        title: Option<String>,
        company: Option<String>,
        location: Option<String>,
        link: Option<String>,
    ) -> Self {
        let or_sentinel = |field: Option<String>| field.unwrap_or_else(|| SENTINEL.to_string());
        Self {
            title: or_sentinel(title),
            company: or_sentinel(company),
            location: or_sentinel(location),
            link: or_sentinel(link),
        }
    }

    /// Report column order.
    pub fn fields(&self) -> [&str; 4] {
        [&self.title, &self.company, &self.location, &self.link]
    }
}

fn select_text(row: ElementRef, selector_str: &str) -> Option<String> {
    let selector = Selector::parse(selector_str).ok()?;
    let element = row.select(&selector).next()?;
    Some(element.text().collect::<String>().trim().to_string())
}

/// Absolute link from the row's anchor: fixed origin + raw relative href,
/// no re-encoding. `None` when the anchor or its href is missing.
fn select_link(row: ElementRef, origin: &str) -> Option<String> {
    let selector = Selector::parse(LINK_SELECTOR).ok()?;
    let anchor = row.select(&selector).next()?;
    let href = anchor.value().attr("href")?;
    Some(format!("{origin}{href}"))
}

/// Parse rendered markup into listings, in document order. Zero matches is a
/// valid outcome, never an error; malformed rows degrade to sentinel fields.
pub fn extract_listings(html: &str, origin: &str) -> Vec<JobListing> {
    let document = Html::parse_document(html);
    let Ok(row_selector) = Selector::parse(LISTING_SELECTOR) else {
        return Vec::new();
    };

    let listings: Vec<JobListing> = document
        .select(&row_selector)
        .map(|row| {
            JobListing::from_parts(
                select_text(row, TITLE_SELECTOR),
                select_text(row, COMPANY_SELECTOR),
                select_text(row, LOCATION_SELECTOR),
                select_link(row, origin),
            )
        })
        .collect();

    info!("Extracted {} listing(s)", listings.len());
    listings
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://remoteok.com";

    // Field elements must sit inside a cell: the parser foster-parents
    // anything else out of the table.
    fn row(inner: &str) -> String {
        format!(r#"<table><tr class="job" data-id="1"><td>{inner}</td></tr></table>"#)
    }

    const FULL_ROW: &str = r#"
        <a itemprop="url" href="/remote-jobs/100-rust-dev">
            <h2 itemprop="title"> Rust Developer </h2>
        </a>
        <h3 itemprop="name">Acme</h3>
        <div class="location">Remote - US</div>"#;

    #[test]
    fn test_extracts_all_fields() {
        let jobs = extract_listings(&row(FULL_ROW), ORIGIN);
        assert_eq!(
            jobs,
            vec![JobListing {
                title: "Rust Developer".to_string(),
                company: "Acme".to_string(),
                location: "Remote - US".to_string(),
                link: "https://remoteok.com/remote-jobs/100-rust-dev".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_page_yields_no_listings() {
        assert!(extract_listings("<html><body></body></html>", ORIGIN).is_empty());
        assert!(extract_listings("", ORIGIN).is_empty());
    }

    #[test]
    fn test_row_without_data_id_is_skipped() {
        let html = r#"<table><tr class="job"><td><h2 itemprop="title">x</h2></td></tr></table>"#;
        assert!(extract_listings(html, ORIGIN).is_empty());
    }

    #[test]
    fn test_missing_title_gets_sentinel() {
        let html = row(
            r#"<h3 itemprop="name">Acme</h3>
               <div class="location">Remote - US</div>
               <a itemprop="url" href="/j/1"></a>"#,
        );
        let jobs = extract_listings(&html, ORIGIN);
        assert_eq!(jobs[0].title, SENTINEL);
        assert_eq!(jobs[0].company, "Acme");
        assert_eq!(jobs[0].location, "Remote - US");
        assert_eq!(jobs[0].link, "https://remoteok.com/j/1");
    }

    #[test]
    fn test_anchor_without_href_gets_sentinel() {
        let html = row(
            r#"<h2 itemprop="title">Dev</h2>
               <h3 itemprop="name">Acme</h3>
               <div class="location">Remote</div>
               <a itemprop="url"></a>"#,
        );
        let jobs = extract_listings(&html, ORIGIN);
        assert_eq!(jobs[0].link, SENTINEL);
        assert_eq!(jobs[0].title, "Dev");
    }

    #[test]
    fn test_fully_empty_row_is_all_sentinels() {
        let jobs = extract_listings(&row(""), ORIGIN);
        assert_eq!(
            jobs[0].fields(),
            [SENTINEL, SENTINEL, SENTINEL, SENTINEL]
        );
    }

    #[test]
    fn test_document_order_preserved() {
        let html = r#"<table>
            <tr class="job" data-id="a"><td><h2 itemprop="title">First</h2></td></tr>
            <tr class="job" data-id="b"><td><h2 itemprop="title">Second</h2></td></tr>
        </table>"#;
        let jobs = extract_listings(html, ORIGIN);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "First");
        assert_eq!(jobs[1].title, "Second");
    }
}
