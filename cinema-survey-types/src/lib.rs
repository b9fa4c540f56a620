//! Core types for the cinema-survey crate.
//!
//! This crate provides the foundational types for defining surveys:
//! - `SurveyDefinition` - The ordered list of questions plus title and messages
//! - `Question` and `Choice` - Individual questions and their selectable options
//! - `Answers` and `QuestionId` - Collected values and their keys

mod question_id;
pub use question_id::QuestionId;

mod answers;
pub use answers::Answers;

mod question;
pub use question::{Choice, OTHER_VALUE, Question};

mod survey_definition;
pub use survey_definition::SurveyDefinition;

mod error;
pub use error::DefinitionError;
