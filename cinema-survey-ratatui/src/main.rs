use std::fs::{self, OpenOptions};
use std::sync::Arc;

use anyhow::Result;
use cinema_survey::{Config, MemoryStore, PocketBaseStore, RecordStore, SurveyController, admin, config};
use cinema_survey_ratatui::SurveyTui;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: cinema-survey [--list | --dry-run]

  --list      Print every stored response and exit
  --dry-run   Keep responses in memory instead of saving them";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to file (~/.cinema-survey/logs/cinema-survey.log)
    fs::create_dir_all(config::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let arg = std::env::args().nth(1);
    let config = Config::load()?;

    match arg.as_deref() {
        None => {
            let store: Arc<dyn RecordStore> = Arc::new(PocketBaseStore::new(&config.store)?);
            tracing::info!(url = %config.store.records_url(), "Starting survey");
            SurveyTui::new().run(SurveyController::new(), store).await?;
        }
        Some("--dry-run") => {
            SurveyTui::new()
                .run(SurveyController::new(), Arc::new(MemoryStore::new()))
                .await?;
        }
        Some("--list") => {
            let store = PocketBaseStore::new(&config.store)?;
            let records = admin::list_responses(&store).await?;
            print!("{}", admin::render_table(&records));
        }
        Some("-h" | "--help") => println!("{USAGE}"),
        Some(other) => anyhow::bail!("unknown argument `{other}`\n\n{USAGE}"),
    }

    Ok(())
}

/// `RUST_LOG` replaces the default `warn` level entirely, bare levels included.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn rust_log_overrides_default_level() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("error")).max_level_hint(),
            Some(LevelFilter::ERROR)
        );
    }
}
