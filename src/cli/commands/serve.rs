//! Web server command.

use console::style;

use crate::cli::helpers::load_with_spinner;
use crate::config::Settings;
use crate::server::AppState;

/// Load the feed once and start the web server.
///
/// A failed load does not stop the server; every page then reports the
/// failure instead of a gallery.
pub async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    let state = match load_with_spinner(settings).await {
        Ok(gallery) => {
            println!(
                "  {} Loaded {} entries ({} → {})",
                style("✓").green(),
                gallery.len(),
                gallery.coverage().min(),
                gallery.coverage().max()
            );
            AppState::new(gallery, settings)
        }
        Err(e) => {
            eprintln!("  {} Could not load APOD data: {}", style("✗").red(), e);
            tracing::warn!("Serving without a gallery: {}", e);
            AppState::unavailable(settings)
        }
    };

    println!(
        "{} Starting APOD gallery at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(state, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "3030" -> 127.0.0.1:3030
/// - Just a host: "0.0.0.0" -> 0.0.0.0:3030
/// - Host and port: "0.0.0.0:3030" -> 0.0.0.0:3030
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    let bind = bind.trim();
    if bind.is_empty() {
        anyhow::bail!("Bind address is empty");
    }

    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use default port
    Ok((bind.to_string(), 3030))
}
