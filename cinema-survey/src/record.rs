//! The flattened record persisted for each completed survey.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::Answers;
use crate::movie_night::{
    BEVERAGE_CHOICE, CANDY_CHOICE, CANDY_CUSTOM, COMFORT_SETUP, EMAIL, LIGHTING_PREFERENCE,
    MOVIE_TYPE, SNACK_CHOICE,
};

/// Field names of a stored record, in schema order.
pub const RECORD_FIELDS: [&str; 9] = [
    "email",
    "movie_type",
    "snack_choice",
    "candy_choice",
    "candy_custom",
    "beverage_choice",
    "lighting_preference",
    "comfort_setup",
    "completed_at",
];

/// Record fields filled from answers; `completed_at` is stamped on save.
pub const ANSWER_FIELDS: [&str; 8] = [
    RECORD_FIELDS[0],
    RECORD_FIELDS[1],
    RECORD_FIELDS[2],
    RECORD_FIELDS[3],
    RECORD_FIELDS[4],
    RECORD_FIELDS[5],
    RECORD_FIELDS[6],
    RECORD_FIELDS[7],
];

/// One completed survey in the shape the remote collection expects.
///
/// Every field is always present. Unanswered questions are sent as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub email: String,
    pub movie_type: String,
    pub snack_choice: String,
    pub candy_choice: String,
    #[serde(default)]
    pub candy_custom: String,
    pub beverage_choice: String,
    pub lighting_preference: String,
    pub comfort_setup: String,
    /// ISO-8601 completion time, e.g. `2026-10-19T18:30:00.000Z`.
    pub completed_at: String,
}

impl SurveyRecord {
    /// Flatten the answers into a record stamped with `completed_at`.
    pub fn from_answers(answers: &Answers, completed_at: DateTime<Utc>) -> Self {
        let field = |id: &str| answers.get_or_empty(id).to_string();
        Self {
            email: field(EMAIL),
            movie_type: field(MOVIE_TYPE),
            snack_choice: field(SNACK_CHOICE),
            candy_choice: field(CANDY_CHOICE),
            candy_custom: field(CANDY_CUSTOM),
            beverage_choice: field(BEVERAGE_CHOICE),
            lighting_preference: field(LIGHTING_PREFERENCE),
            comfort_setup: field(COMFORT_SETUP),
            completed_at: completed_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Field values in the order of [`RECORD_FIELDS`].
    pub fn values(&self) -> [&str; 9] {
        [
            self.email.as_str(),
            self.movie_type.as_str(),
            self.snack_choice.as_str(),
            self.candy_choice.as_str(),
            self.candy_custom.as_str(),
            self.beverage_choice.as_str(),
            self.lighting_preference.as_str(),
            self.comfort_setup.as_str(),
            self.completed_at.as_str(),
        ]
    }
}

/// A record as returned by the store, with its server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: String,
    #[serde(flatten)]
    pub record: SurveyRecord,
}
