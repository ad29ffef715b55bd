//! Coverage command.

use console::style;

use crate::cli::helpers::load_with_spinner;
use crate::config::Settings;

/// Print the date range the feed covers.
pub async fn cmd_coverage(settings: &Settings) -> anyhow::Result<()> {
    let gallery = load_with_spinner(settings).await?;
    let coverage = gallery.coverage();

    println!("{}", style("Feed coverage").bold());
    println!("  {:<14} {}", "First day:", coverage.min());
    println!("  {:<14} {}", "Last day:", coverage.max());
    println!("  {:<14} {}", "Latest start:", coverage.latest_start());
    println!("  {:<14} {}", "Entries:", gallery.len());

    Ok(())
}
