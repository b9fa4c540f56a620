use crate::QuestionId;

/// The option value that marks a free-text "other" answer.
///
/// When a question declares an other-entry key, picking this value means the
/// real answer is the text stored under that key.
pub const OTHER_VALUE: &str = "other";

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The key of this question's answer in the `Answers` map.
    id: QuestionId,

    /// The prompt text shown to the user.
    prompt: String,

    /// Selectable options. Empty for a free-text question.
    choices: Vec<Choice>,

    /// Key under which the free text for the [`OTHER_VALUE`] option is stored.
    other_entry: Option<QuestionId>,

    /// Hint shown in an empty text input.
    placeholder: Option<String>,
}

impl Question {
    /// Create a new multiple-choice question.
    pub fn new(id: impl Into<QuestionId>, prompt: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            choices,
            other_entry: None,
            placeholder: None,
        }
    }

    /// Create a free-text question (no options).
    pub fn free_text(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, Vec::new())
    }

    /// Store the text for the [`OTHER_VALUE`] option under `key`.
    pub fn with_other_entry(mut self, key: impl Into<QuestionId>) -> Self {
        self.other_entry = Some(key.into());
        self
    }

    /// Set the hint shown in an empty text input.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Get the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the options.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Find the option with the given value.
    pub fn choice(&self, value: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.value == value)
    }

    /// Position of the option with the given value.
    pub fn choice_index(&self, value: &str) -> Option<usize> {
        self.choices.iter().position(|c| c.value == value)
    }

    /// The key holding free text for the [`OTHER_VALUE`] option, if any.
    pub fn other_entry(&self) -> Option<&QuestionId> {
        self.other_entry.as_ref()
    }

    /// The hint for an empty text input, if any.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Check if this question takes free text instead of a selection.
    pub fn is_free_text(&self) -> bool {
        self.choices.is_empty()
    }
}

/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// Emoji shown next to the label.
    pub icon: String,

    /// Display text.
    pub label: String,

    /// Token stored in the answers when this option is picked.
    pub value: String,
}

impl Choice {
    /// Create a new option.
    pub fn new(icon: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            value: value.into(),
        }
    }

    /// Check if this is the free-text "other" option.
    pub fn is_other(&self) -> bool {
        self.value == OTHER_VALUE
    }
}
