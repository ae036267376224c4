// src/input.rs
use anyhow::{Context, Result};
use std::io::{self, Write};

/// The two operator-supplied values, normalized for the rest of the run.
#[derive(Debug, Clone)]
pub struct UserQuery {
    /// Title as typed, trimmed. Used for console messages and the filename.
    pub title_display: String,
    /// Title with spaces replaced by `+`, for the search URL path.
    pub title_slug: String,
    /// Lowercased location substring used for row highlighting.
    pub location_filter: String,
}

impl UserQuery {
    pub fn new(title: &str, location: &str) -> Self {
        let title_display = title.trim().to_string();
        Self {
            title_slug: title_display.replace(' ', "+"),
            title_display,
            location_filter: location.trim().to_lowercase(),
        }
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line)
}

/// Blocking interactive prompts. No validation: an empty title is passed
/// through and the remote site decides what to do with it.
pub fn read_query() -> Result<UserQuery> {
    let title = prompt("Enter job title: ")?;
    let location = prompt("Enter remote location: ")?;
    Ok(UserQuery::new(&title, &location))
}
