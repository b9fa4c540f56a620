//! Survey session state: answers, navigation, and submission.
//!
//! The controller is synchronous apart from the single persistence call.
//! Front ends that must keep drawing while a save is in flight use the
//! two-step form ([`SurveyController::begin_advance`] then
//! [`SurveyController::finish_submit`]); everyone else can await
//! [`SurveyController::advance`].

use crate::{
    ANSWER_FIELDS, Answers, DefinitionError, OTHER_VALUE, PersistenceError, Question, RecordStore,
    StoredRecord, SurveyDefinition, movie_night, save,
};

/// Message shown when a submission fails.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save your responses. Please try again.";

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing the question at the current index.
    Answering,
    /// The completed answers are being persisted.
    Submitting,
    /// The answers were saved; the summary is shown until reset.
    Complete,
}

/// Result of [`SurveyController::begin_advance`].
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// The current question does not allow moving on yet.
    Blocked,
    /// Moved to the question at this index.
    Moved(usize),
    /// The last question was answered; persist these answers and report back
    /// through [`SurveyController::finish_submit`].
    Submit(Answers),
}

/// Result of [`SurveyController::advance`] and [`SurveyController::finish_submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Blocked,
    Moved(usize),
    Completed(StoredRecord),
    SaveFailed,
}

/// How a question relates to the current position, for step indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Current,
    Pending,
}

/// State of one survey session.
#[derive(Debug, Clone)]
pub struct SurveyController {
    definition: SurveyDefinition,
    index: usize,
    answers: Answers,
    /// Text typed for the "other" option; mirrored into `answers` when non-blank.
    custom_candy_text: String,
    /// Text typed for the free-text question; mirrored into `answers` when non-blank.
    email_text: String,
    phase: Phase,
    save_error: Option<String>,
}

impl Default for SurveyController {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyController {
    /// Start a session over the built-in movie-night survey.
    pub fn new() -> Self {
        Self::from_valid(movie_night())
    }

    /// Start a session over a custom definition.
    ///
    /// Every question id and other-entry key must name a field of the stored
    /// record, so no answer is lost on save.
    pub fn with_definition(definition: SurveyDefinition) -> Result<Self, DefinitionError> {
        definition.validate()?;
        definition.validate_fields(&ANSWER_FIELDS)?;
        Ok(Self::from_valid(definition))
    }

    fn from_valid(definition: SurveyDefinition) -> Self {
        Self {
            definition,
            index: 0,
            answers: Answers::new(),
            custom_candy_text: String::new(),
            email_text: String::new(),
            phase: Phase::Answering,
            save_error: None,
        }
    }

    pub fn definition(&self) -> &SurveyDefinition {
        &self.definition
    }

    /// Zero-based position of the current question.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn custom_candy_text(&self) -> &str {
        &self.custom_candy_text
    }

    pub fn email_text(&self) -> &str {
        &self.email_text
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_saving(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Whether the last submission failed.
    pub fn save_failed(&self) -> bool {
        self.save_error.is_some()
    }

    /// User-facing message for the last failed submission.
    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    pub fn current_question(&self) -> &Question {
        &self.definition.questions()[self.index]
    }

    /// The stored answer for the current question.
    pub fn current_answer(&self) -> Option<&str> {
        self.answers.get(self.current_question().id().as_str())
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.definition.len()
    }

    /// One-based position and total, e.g. `(1, 7)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, self.definition.len())
    }

    /// Progress through the survey as a rounded percentage.
    pub fn progress_percent(&self) -> u16 {
        let (current, total) = self.progress();
        (current as f64 / total as f64 * 100.0).round() as u16
    }

    pub fn step_status(&self, index: usize) -> StepStatus {
        match index.cmp(&self.index) {
            std::cmp::Ordering::Less => StepStatus::Done,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    /// Whether the custom text input for the "other" option is shown.
    pub fn shows_custom_entry(&self) -> bool {
        let question = self.current_question();
        question.other_entry().is_some() && self.current_answer() == Some(OTHER_VALUE)
    }

    /// Record `value` as the answer to `question_id`.
    ///
    /// Picking anything but "other" on the question with a custom entry
    /// clears the custom text buffer. The stored custom text itself is kept.
    pub fn select_answer(&mut self, question_id: &str, value: &str) {
        tracing::debug!(question = question_id, value, "Answer selected");
        self.answers.insert(question_id, value);

        let has_custom_entry = self
            .definition
            .find(question_id)
            .is_some_and(|q| q.other_entry().is_some());
        if has_custom_entry && value != OTHER_VALUE {
            self.custom_candy_text.clear();
        }
    }

    /// Update the custom "other" text.
    ///
    /// Non-blank text selects "other" and stores the text under the
    /// question's other-entry key. Blank text only updates the buffer, so an
    /// earlier "other" answer stays selected.
    pub fn set_custom_candy_text(&mut self, text: &str) {
        self.custom_candy_text = text.to_string();
        if text.trim().is_empty() {
            return;
        }

        if let Some(question) = self.definition.other_entry_question()
            && let Some(key) = question.other_entry()
        {
            self.answers.insert(question.id(), OTHER_VALUE);
            self.answers.insert(key, text);
        }
    }

    /// Update the free-text answer. Non-blank text is stored verbatim.
    pub fn set_email_text(&mut self, text: &str) {
        self.email_text = text.to_string();
        if text.trim().is_empty() {
            return;
        }

        if let Some(question) = self.definition.free_text_question() {
            self.answers.insert(question.id(), text);
        }
    }

    /// Whether the current question allows moving forward.
    pub fn can_advance(&self) -> bool {
        if self.phase != Phase::Answering {
            return false;
        }

        let question = self.current_question();
        if question.is_free_text() {
            return !self.email_text.trim().is_empty();
        }

        match self.current_answer() {
            None => false,
            Some(OTHER_VALUE) if question.other_entry().is_some() => {
                !self.custom_candy_text.trim().is_empty()
            }
            Some(_) => true,
        }
    }

    /// Move forward, or start submitting when on the last question.
    pub fn begin_advance(&mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Blocked;
        }

        if !self.is_last() {
            self.index += 1;
            tracing::debug!(index = self.index, "Advanced");
            return Advance::Moved(self.index);
        }

        tracing::debug!("Submitting answers");
        self.phase = Phase::Submitting;
        self.save_error = None;
        Advance::Submit(self.answers.clone())
    }

    /// Apply the outcome of a submission started by [`Self::begin_advance`].
    ///
    /// Success completes the session. Failure returns to the last question
    /// with the error flag set and all answers intact.
    pub fn finish_submit(&mut self, result: Result<StoredRecord, PersistenceError>) -> Step {
        if self.phase != Phase::Submitting {
            tracing::warn!(phase = ?self.phase, "Submission result arrived outside of a submission");
            return Step::Blocked;
        }

        match result {
            Ok(stored) => {
                self.phase = Phase::Complete;
                Step::Completed(stored)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Submission failed");
                self.phase = Phase::Answering;
                self.save_error = Some(SAVE_FAILED_MESSAGE.to_string());
                Step::SaveFailed
            }
        }
    }

    /// Move forward; on the last question, persist the answers to `store`.
    pub async fn advance<S: RecordStore + ?Sized>(&mut self, store: &S) -> Step {
        match self.begin_advance() {
            Advance::Blocked => Step::Blocked,
            Advance::Moved(index) => Step::Moved(index),
            Advance::Submit(answers) => {
                let result = save(store, &answers).await;
                self.finish_submit(result)
            }
        }
    }

    /// Move back one question. Returns `false` at the first question or while
    /// not answering.
    pub fn retreat(&mut self) -> bool {
        if self.phase != Phase::Answering || self.index == 0 {
            return false;
        }
        self.index -= 1;
        tracing::debug!(index = self.index, "Retreated");
        true
    }

    /// Discard every answer and return to the first question.
    pub fn reset(&mut self) {
        tracing::debug!("Survey reset");
        self.index = 0;
        self.answers.clear();
        self.custom_candy_text.clear();
        self.email_text.clear();
        self.phase = Phase::Answering;
        self.save_error = None;
    }
}
