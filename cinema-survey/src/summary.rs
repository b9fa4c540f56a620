//! Read-only view of a finished survey.

use crate::{Answers, SurveyDefinition};

/// Icon shown next to the free-text answer.
pub const FREE_TEXT_ICON: &str = "📧";

/// One line of the results view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry<'a> {
    /// The question as it was asked.
    pub prompt: &'a str,
    /// The displayed answer. `None` when a choice question was left unanswered.
    pub answer: Option<SummaryAnswer<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryAnswer<'a> {
    pub icon: &'a str,
    pub text: &'a str,
}

/// Render every question of `definition` against `answers`.
///
/// Choice answers show the option's icon and label; the "other" option shows
/// the custom text instead. The free-text answer falls back to
/// "No email provided".
pub fn summarize<'a>(definition: &'a SurveyDefinition, answers: &'a Answers) -> Vec<SummaryEntry<'a>> {
    definition
        .questions()
        .iter()
        .map(|question| {
            let id = question.id().as_str();
            let answer = if question.is_free_text() {
                Some(SummaryAnswer {
                    icon: FREE_TEXT_ICON,
                    text: answers.get(id).unwrap_or("No email provided"),
                })
            } else {
                answers
                    .get(id)
                    .and_then(|value| question.choice(value))
                    .map(|choice| {
                        let text = match question.other_entry() {
                            Some(key) if choice.is_other() => {
                                answers.get(key.as_str()).unwrap_or("Other candy")
                            }
                            _ => choice.label.as_str(),
                        };
                        SummaryAnswer {
                            icon: &choice.icon,
                            text,
                        }
                    })
            };
            SummaryEntry {
                prompt: question.prompt(),
                answer,
            }
        })
        .collect()
}
