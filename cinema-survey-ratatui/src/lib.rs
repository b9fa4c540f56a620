//! # cinema-survey-ratatui
//!
//! Ratatui front end for the cinema survey.
//!
//! Questions are shown one at a time with a progress bar, step dots and
//! keyboard navigation. Completing the last question saves the answers in
//! the background and shows a summary of the movie night.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cinema_survey::{Config, PocketBaseStore, SurveyController};
//! use cinema_survey_ratatui::SurveyTui;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let store = Arc::new(PocketBaseStore::new(&config.store)?);
//!     SurveyTui::new().run(SurveyController::new(), store).await?;
//!     Ok(())
//! }
//! ```

mod backend;
mod draw;
mod state;

pub use backend::{MIN_HEIGHT, MIN_WIDTH, SurveyTui, Theme, TuiError};
pub use draw::{RESULTS_TITLE, SAVED_MESSAGE, SAVING_LABEL};
