//! Terminal rendering of a window.

use console::style;

use crate::cli::helpers::load_with_spinner;
use crate::config::Settings;
use crate::dates::DayKey;
use crate::facts::fact_line;
use crate::gallery::{coverage_note, DaySlot};

/// Print the window starting at `start` (clamped), or the latest one.
pub async fn cmd_show(
    settings: &Settings,
    start: Option<DayKey>,
    json: bool,
) -> anyhow::Result<()> {
    let gallery = load_with_spinner(settings).await?;
    let view = gallery.view(start)?;

    if json {
        let summary = view.summary(&settings.fallback_image);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", style(fact_line()).dim());
    println!();
    println!(
        "{} {} → {}",
        style("APOD").bold().cyan(),
        view.window().start().long_display(),
        view.window().end().long_display()
    );
    if view.was_clamped() {
        if let Some(requested) = view.requested() {
            println!(
                "  {} Start {} moved to {} to stay inside the feed",
                style("!").yellow(),
                requested,
                view.window().start()
            );
        }
    }
    println!();

    for slot in view.slots() {
        match slot {
            DaySlot::Present(record) => {
                let kind = if record.is_video() {
                    style("video").magenta()
                } else {
                    style("image").green()
                };
                println!(
                    "  {}  {:<5}  {}",
                    style(record.date).bold(),
                    kind,
                    record.card_title()
                );
                println!(
                    "              {}",
                    style(record.card_image(&settings.fallback_image)).dim()
                );
            }
            DaySlot::Missing(day) => {
                println!(
                    "  {}  {}",
                    style(day).bold(),
                    style("No APOD entry in mirror feed").dim()
                );
            }
        }
    }

    println!();
    println!("{}", view.status_note());
    if start.is_none() {
        println!("{}", style(coverage_note(gallery.coverage())).dim());
    }

    Ok(())
}
