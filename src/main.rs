use anyhow::Result;
use jobsheet::{config::ScrapeConfig, extract, fetch::PageFetcher, input, report};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ScrapeConfig::default();
    let query = input::read_query()?;

    println!("Loading jobs for '{}'...", query.title_display);
    let html = PageFetcher::new(&config).fetch(&config.jobs_url(&query.title_slug))?;

    let jobs = extract::extract_listings(&html, &config.origin);
    println!("\nTotal jobs found: {}", jobs.len());

    let path = report::write_report(&jobs, &query.location_filter, &config, &query.title_display)?;
    println!("\n✅ Excel report created: {}", path.display());

    Ok(())
}
