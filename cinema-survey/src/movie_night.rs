//! The built-in movie-night survey.

use crate::{Choice, OTHER_VALUE, Question, SurveyDefinition};

pub const MOVIE_TYPE: &str = "movie-type";
pub const SNACK_CHOICE: &str = "snack-choice";
pub const CANDY_CHOICE: &str = "candy-choice";
/// Synthetic key holding the free text for the "other" candy option.
pub const CANDY_CUSTOM: &str = "candy-custom";
pub const BEVERAGE_CHOICE: &str = "beverage-choice";
pub const LIGHTING_PREFERENCE: &str = "lighting-preference";
pub const COMFORT_SETUP: &str = "comfort-setup";
pub const EMAIL: &str = "email";

/// Build the movie-night survey definition.
pub fn movie_night() -> SurveyDefinition {
    SurveyDefinition::new(
        "Cinema Survey",
        vec![
            Question::new(
                MOVIE_TYPE,
                "What type of movie are you feeling?",
                vec![
                    Choice::new("🎭", "Drama", "drama"),
                    Choice::new("😂", "Comedy", "comedy"),
                    Choice::new("😱", "Thriller", "thriller"),
                    Choice::new("💕", "Romance", "romance"),
                    Choice::new("🎬", "Action", "action"),
                    Choice::new("🌌", "Star Wars (assuming we're caught up)", "starwars"),
                    Choice::new("🎲", "Surprise me", "surprise"),
                ],
            ),
            Question::new(
                SNACK_CHOICE,
                "Pick your top snack choice:",
                vec![
                    Choice::new("🍿", "Classic buttered popcorn", "popcorn"),
                    Choice::new("🍕", "Pizza", "pizza"),
                    Choice::new("👨‍🍳", "Brennen can chef something up", "brennen"),
                    Choice::new("🥡", "Other Takeout", "takeout"),
                ],
            ),
            Question::new(
                CANDY_CHOICE,
                "Go-to candy for a movie night:",
                vec![
                    Choice::new("🍪", "Cookie dough bites", "cookiedough"),
                    Choice::new("🍬", "Sour candy", "sour"),
                    Choice::new("🍭", "Gummy bears", "gummy"),
                    Choice::new("🍡", "Licorice", "licorice"),
                    Choice::new("🍫", "Peanut M&M's", "peanutmms"),
                    Choice::new("✏️", "Other (fill in)", OTHER_VALUE),
                    Choice::new("🚫", "No candy for me", "none"),
                ],
            )
            .with_other_entry(CANDY_CUSTOM)
            .with_placeholder("What's your favorite candy?"),
            Question::new(
                BEVERAGE_CHOICE,
                "What's your beverage of choice?",
                vec![
                    Choice::new("🥤", "Soda (Coke, Sprite, etc.)", "soda"),
                    Choice::new("🍷", "Wine", "wine"),
                    Choice::new("🍺", "Beer", "beer"),
                    Choice::new("🍹", "Fun mocktail/cocktail", "cocktail"),
                    Choice::new("☕️", "Coffee/Tea", "coffee"),
                    Choice::new("💧", "Water (keeping it clean)", "water"),
                ],
            ),
            Question::new(
                LIGHTING_PREFERENCE,
                "Lights on, lights dim, or full theater darkness?",
                vec![
                    Choice::new("💡", "Lights on", "on"),
                    Choice::new("🌘", "Dim mood lighting", "dim"),
                    Choice::new("🌑", "Total darkness, let's immerse", "dark"),
                ],
            ),
            Question::new(
                COMFORT_SETUP,
                "Pillow and blanket situation?",
                vec![
                    Choice::new("🛋", "One of each, please", "both"),
                    Choice::new("🧣", "Just a blanket", "blanket"),
                    Choice::new("🪑", "I'm good as is", "none"),
                    Choice::new("🧸", "I'm bringing my own cozy gear", "own"),
                ],
            ),
            Question::free_text(EMAIL, "What's your email address?")
                .with_placeholder("your.email@example.com"),
        ],
    )
    .with_prelude("Tell us about your perfect movie night")
    .with_epilogue("Here's your personalized cinema experience")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_is_valid() {
        assert_eq!(movie_night().validate(), Ok(()));
        assert_eq!(movie_night().validate_fields(&crate::ANSWER_FIELDS), Ok(()));
    }

    #[test]
    fn question_order() {
        let survey = movie_night();
        let ids: Vec<_> = survey.questions().iter().map(|q| q.id().as_str()).collect();
        assert_eq!(
            ids,
            vec![
                MOVIE_TYPE,
                SNACK_CHOICE,
                CANDY_CHOICE,
                BEVERAGE_CHOICE,
                LIGHTING_PREFERENCE,
                COMFORT_SETUP,
                EMAIL,
            ]
        );
    }

    #[test]
    fn email_is_the_only_free_text_question() {
        let survey = movie_night();
        assert_eq!(survey.free_text_question().unwrap().id().as_str(), EMAIL);
        assert_eq!(
            survey.other_entry_question().unwrap().other_entry().unwrap().as_str(),
            CANDY_CUSTOM
        );
    }
}
