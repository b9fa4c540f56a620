use crate::QuestionId;

/// Error type for a malformed survey definition.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    /// The survey has no questions.
    #[error("Survey has no questions")]
    Empty,

    /// Two questions share an id.
    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    /// Two options of one question share a value.
    #[error("Duplicate option value '{value}' in question '{question}'")]
    DuplicateChoice { question: QuestionId, value: String },

    /// More than one question takes free text.
    #[error("Only one free-text question is supported, found a second one: {0}")]
    MultipleFreeText(QuestionId),

    /// An other-entry key is declared on a question without an "other" option.
    #[error("Question '{0}' declares an other-entry key but has no \"other\" option")]
    MissingOtherChoice(QuestionId),

    /// An other-entry key collides with a question id.
    #[error("Other-entry key '{0}' collides with a question id")]
    OtherEntryCollision(QuestionId),

    /// A question id or other-entry key has no field in the stored record.
    #[error("Question '{question}' has no record field '{field}'")]
    UnknownField { question: QuestionId, field: String },
}

impl DefinitionError {
    /// The question the error refers to, if any.
    pub fn question(&self) -> Option<&QuestionId> {
        match self {
            Self::Empty => None,
            Self::DuplicateQuestion(id)
            | Self::MultipleFreeText(id)
            | Self::MissingOtherChoice(id)
            | Self::OtherEntryCollision(id) => Some(id),
            Self::DuplicateChoice { question, .. } | Self::UnknownField { question, .. } => {
                Some(question)
            }
        }
    }
}
