pub mod config;
pub mod extract;
pub mod fetch;
pub mod input;
pub mod report;

pub use config::ScrapeConfig;
pub use extract::JobListing;
pub use input::UserQuery;
