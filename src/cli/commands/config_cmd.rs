//! Configuration display command.

use console::style;

use crate::config::{Config, Settings};

/// Print where configuration came from and the resolved settings.
pub fn cmd_config(settings: &Settings, config: &Config) -> anyhow::Result<()> {
    match config.source_path {
        Some(ref path) => println!("{} Config file: {}", style("→").cyan(), path.display()),
        None => println!(
            "{} No config file found, using defaults",
            style("!").yellow()
        ),
    }
    println!();
    print!("{}", toml::to_string_pretty(settings)?);

    Ok(())
}
