//! # cinema-survey
//!
//! A multi-step movie-night survey: answer collection, forward/back
//! navigation, and persistence of the completed answers to a PocketBase
//! collection.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cinema_survey::{PocketBaseStore, Step, StoreConfig, SurveyController};
//! use cinema_survey::movie_night::{MOVIE_TYPE, SNACK_CHOICE};
//!
//! let store = PocketBaseStore::new(&StoreConfig::default())?;
//! let mut survey = SurveyController::new();
//!
//! survey.select_answer(MOVIE_TYPE, "comedy");
//! assert_eq!(survey.advance(&store).await, Step::Moved(1));
//! survey.select_answer(SNACK_CHOICE, "pizza");
//! // ... answer the rest, then advance on the last question to save.
//! ```
//!
//! ## Stores
//!
//! Stores implement `RecordStore`:
//! - `PocketBaseStore` - the PocketBase REST API
//! - `MemoryStore` - in-process, with injectable failures for tests
//!
//! The terminal front end lives in `cinema-survey-ratatui`.

// Re-export all types from cinema-survey-types
pub use cinema_survey_types::*;

pub mod admin;
pub mod config;
pub mod movie_night;

mod controller;
pub use controller::{Advance, Phase, SAVE_FAILED_MESSAGE, Step, StepStatus, SurveyController};

mod error;
pub use error::{ConfigError, PersistenceError};

mod memory_store;
pub use memory_store::MemoryStore;

mod pocketbase;
pub use pocketbase::PocketBaseStore;

mod record;
pub use record::{ANSWER_FIELDS, RECORD_FIELDS, StoredRecord, SurveyRecord};

mod store;
pub use store::{RecordStore, save};

mod summary;
pub use summary::{FREE_TEXT_ICON, SummaryAnswer, SummaryEntry, summarize};

pub use config::{Config, StoreConfig};
pub use movie_night::movie_night;
