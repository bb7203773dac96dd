use anyhow::{Context, Result};
use regform::config::Config;
use regform::logger::Logger;
use regform::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = Config::load()?;

    let logger = Logger::from_config(&config.logging)?;
    if let Some(level) = config.logging.level_filter() {
        logger.install(level)?;
    }
    log::info!("regform starting");

    // Run the TUI application
    let form = ui::run_app(&config, logger.clone()).await?;

    if let Some(values) = form.submitted_values() {
        let json = serde_json::to_string_pretty(&values).context("Failed to serialize submission")?;
        println!("{json}");
    } else {
        eprintln!("No registration submitted.");
    }

    if let Some(path) = logger.log_file() {
        eprintln!("Log written to {}", path.display());
    }

    Ok(())
}
