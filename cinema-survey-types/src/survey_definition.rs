use std::collections::HashSet;

use crate::{DefinitionError, Question};

/// The top-level structure containing all questions and metadata for a survey.
///
/// Questions are asked in order. The definition is static for the lifetime
/// of a session; collected values live in `Answers`.
#[derive(Debug, Clone)]
pub struct SurveyDefinition {
    /// Title shown above every question.
    pub title: String,

    /// Optional message shown under the title while answering.
    pub prelude: Option<String>,

    /// All questions in the survey, in the order they are asked.
    pub questions: Vec<Question>,

    /// Optional message shown with the summary after completion.
    pub epilogue: Option<String>,
}

impl SurveyDefinition {
    /// Create a new survey definition with the given questions.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            prelude: None,
            questions,
            epilogue: None,
        }
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the question at the given position.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Find a question by id.
    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id().as_str() == id)
    }

    /// Position of the question with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id().as_str() == id)
    }

    /// The free-text question, if the survey has one.
    pub fn free_text_question(&self) -> Option<&Question> {
        self.questions.iter().find(|q| q.is_free_text())
    }

    /// The question whose "other" option is backed by free text, if any.
    pub fn other_entry_question(&self) -> Option<&Question> {
        self.questions.iter().find(|q| q.other_entry().is_some())
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check the structural rules every definition must satisfy.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.questions.is_empty() {
            return Err(DefinitionError::Empty);
        }

        let mut ids = HashSet::new();
        let mut free_text_seen = false;
        for question in &self.questions {
            if !ids.insert(question.id().as_str()) {
                return Err(DefinitionError::DuplicateQuestion(question.id().clone()));
            }

            if question.is_free_text() {
                if free_text_seen {
                    return Err(DefinitionError::MultipleFreeText(question.id().clone()));
                }
                free_text_seen = true;
            }

            let mut values = HashSet::new();
            for choice in question.choices() {
                if !values.insert(choice.value.as_str()) {
                    return Err(DefinitionError::DuplicateChoice {
                        question: question.id().clone(),
                        value: choice.value.clone(),
                    });
                }
            }

            if question.other_entry().is_some() && !question.choices().iter().any(|c| c.is_other())
            {
                return Err(DefinitionError::MissingOtherChoice(question.id().clone()));
            }
        }

        for question in &self.questions {
            if let Some(key) = question.other_entry()
                && ids.contains(key.as_str())
            {
                return Err(DefinitionError::OtherEntryCollision(key.clone()));
            }
        }

        Ok(())
    }

    /// Check that every question and other-entry key maps onto one of
    /// `fields` through [`QuestionId::record_field`].
    pub fn validate_fields(&self, fields: &[&str]) -> Result<(), DefinitionError> {
        let keys = self
            .questions
            .iter()
            .flat_map(|q| std::iter::once(q.id()).chain(q.other_entry()));
        for key in keys {
            let field = key.record_field();
            if !fields.contains(&field.as_str()) {
                return Err(DefinitionError::UnknownField {
                    question: key.clone(),
                    field,
                });
            }
        }
        Ok(())
    }
}
