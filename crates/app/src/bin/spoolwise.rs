// Spoolwise - workshop report
//
// Prints the JSON report for one owner: `spoolwise [owner_id]`.

use anyhow::Context;
use tracing::{error, info, warn};

use spoolwise_app::Workshop;
use spoolwise_common::{Config, UserId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with_writer(std::io::stderr)
        .init();

    let owner_id = match std::env::args().nth(1) {
        Some(raw) => UserId(
            raw.parse()
                .with_context(|| format!("owner id must be an integer, got '{}'", raw))?,
        ),
        None => UserId(1),
    };

    info!(database_url = %config.database_url, "Opening workshop");

    let workshop = Workshop::connect(&config).await.map_err(|e| {
        error!("Failed to open workshop: {}", e);
        anyhow::anyhow!("Database connection failed: {}", e)
    })?;

    let report = workshop.report(owner_id).await?;
    for alert in &report.low_stock {
        warn!(
            filament = %alert.filament.display_name(),
            remaining_percent = alert.remaining_percent,
            severity = ?alert.severity,
            "Low stock"
        );
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
