//! Integration tests for cinema-survey

use cinema_survey::movie_night::{
    BEVERAGE_CHOICE, CANDY_CHOICE, CANDY_CUSTOM, COMFORT_SETUP, EMAIL, LIGHTING_PREFERENCE,
    MOVIE_TYPE, SNACK_CHOICE,
};
use cinema_survey::{
    Advance, MemoryStore, OTHER_VALUE, Phase, SAVE_FAILED_MESSAGE, Step, SurveyController,
    summarize,
};

/// Answer the current question and move on, asserting the move happened.
async fn answer_and_advance(
    controller: &mut SurveyController,
    store: &MemoryStore,
    question: &str,
    value: &str,
) {
    controller.select_answer(question, value);
    let step = controller.advance(store).await;
    assert!(matches!(step, Step::Moved(_)), "expected a move, got {step:?}");
}

/// Drive the scenario from the first question up to the email question.
async fn fill_until_email(controller: &mut SurveyController, store: &MemoryStore) {
    answer_and_advance(controller, store, MOVIE_TYPE, "comedy").await;
    answer_and_advance(controller, store, SNACK_CHOICE, "pizza").await;

    controller.select_answer(CANDY_CHOICE, OTHER_VALUE);
    controller.set_custom_candy_text("red vines");
    assert!(matches!(controller.advance(store).await, Step::Moved(3)));

    answer_and_advance(controller, store, BEVERAGE_CHOICE, "water").await;
    answer_and_advance(controller, store, LIGHTING_PREFERENCE, "dim").await;
    answer_and_advance(controller, store, COMFORT_SETUP, "blanket").await;
    assert_eq!(controller.current_question().id().as_str(), EMAIL);
}

#[tokio::test]
async fn test_full_scenario_produces_expected_record() {
    let store = MemoryStore::new();
    let mut controller = SurveyController::new();

    fill_until_email(&mut controller, &store).await;
    controller.set_email_text("a@b.com");
    let step = controller.advance(&store).await;

    let Step::Completed(stored) = step else {
        panic!("expected completion, got {step:?}");
    };
    assert!(controller.is_complete());
    assert_eq!(store.create_calls(), 1);

    let record = &stored.record;
    assert_eq!(record.email, "a@b.com");
    assert_eq!(record.movie_type, "comedy");
    assert_eq!(record.snack_choice, "pizza");
    assert_eq!(record.candy_choice, "other");
    assert_eq!(record.candy_custom, "red vines");
    assert_eq!(record.beverage_choice, "water");
    assert_eq!(record.lighting_preference, "dim");
    assert_eq!(record.comfort_setup, "blanket");
    assert!(!record.completed_at.is_empty());
    assert_eq!(store.records(), vec![stored.clone()]);
}

#[tokio::test]
async fn test_record_matches_answers_and_summary() {
    let store = MemoryStore::new();
    let mut controller = SurveyController::new();

    fill_until_email(&mut controller, &store).await;
    controller.set_email_text("a@b.com");
    let Step::Completed(stored) = controller.advance(&store).await else {
        panic!("expected completion");
    };

    let answers = controller.answers();
    let json = serde_json::to_value(&stored.record).unwrap();
    for (id, value) in answers.iter() {
        let field = id.record_field();
        assert_eq!(json[field.as_str()], value, "field {field}");
    }

    let summary = summarize(controller.definition(), answers);
    let texts: Vec<_> = summary
        .iter()
        .map(|e| e.answer.as_ref().map(|a| a.text).unwrap_or_default())
        .collect();
    assert_eq!(
        texts,
        vec![
            "Comedy",
            "Pizza",
            "red vines",
            "Water (keeping it clean)",
            "Dim mood lighting",
            "Just a blanket",
            "a@b.com",
        ]
    );
}

#[tokio::test]
async fn test_retreat_then_advance_keeps_answers() {
    let store = MemoryStore::new();
    let mut controller = SurveyController::new();
    fill_until_email(&mut controller, &store).await;
    let before = controller.answers().clone();

    for _ in 0..4 {
        assert!(controller.retreat());
    }
    assert_eq!(controller.index(), 2);
    for _ in 0..4 {
        assert!(matches!(controller.advance(&store).await, Step::Moved(_)));
    }

    assert_eq!(controller.answers(), &before);
    assert_eq!(controller.index(), 6);
    assert_eq!(store.create_calls(), 0);
}

#[test]
fn test_other_candy_requires_custom_text() {
    let mut controller = SurveyController::new();
    controller.select_answer(MOVIE_TYPE, "drama");
    controller.begin_advance();
    controller.select_answer(SNACK_CHOICE, "popcorn");
    controller.begin_advance();

    controller.select_answer(CANDY_CHOICE, OTHER_VALUE);
    assert!(controller.shows_custom_entry());
    assert!(!controller.can_advance());

    controller.set_custom_candy_text("red vines");
    assert!(controller.can_advance());

    // Clearing the text closes the gate again but keeps "other" selected.
    controller.set_custom_candy_text("");
    assert!(!controller.can_advance());
    assert_eq!(controller.current_answer(), Some(OTHER_VALUE));
    assert_eq!(controller.answers().get(CANDY_CUSTOM), Some("red vines"));

    // Re-selecting "other" keeps the buffer; picking another option resets it.
    controller.set_custom_candy_text("twizzlers");
    controller.select_answer(CANDY_CHOICE, OTHER_VALUE);
    assert!(controller.can_advance());
    controller.select_answer(CANDY_CHOICE, "licorice");
    controller.select_answer(CANDY_CHOICE, OTHER_VALUE);
    assert!(!controller.can_advance());

    assert_eq!(controller.begin_advance(), Advance::Blocked);
}

#[tokio::test]
async fn test_failed_save_then_retry() {
    let store = MemoryStore::new().failing(1);
    let mut controller = SurveyController::new();
    fill_until_email(&mut controller, &store).await;
    controller.set_email_text("a@b.com");
    let before = controller.answers().clone();

    let step = controller.advance(&store).await;
    assert_eq!(step, Step::SaveFailed);
    assert_eq!(controller.phase(), Phase::Answering);
    assert!(controller.is_last());
    assert!(controller.save_failed());
    assert!(!controller.is_saving());
    assert_eq!(controller.save_error(), Some(SAVE_FAILED_MESSAGE));
    assert_eq!(controller.answers(), &before);
    assert!(store.records().is_empty());

    let step = controller.advance(&store).await;
    assert!(matches!(step, Step::Completed(_)));
    assert!(controller.is_complete());
    assert!(!controller.save_failed());
    assert_eq!(store.create_calls(), 2);
    assert_eq!(store.records().len(), 1);
}

#[test]
fn test_saving_blocks_navigation() {
    let mut controller = SurveyController::new();
    for question in controller.definition().questions().to_vec() {
        if question.is_free_text() {
            controller.set_email_text("a@b.com");
        } else {
            controller.select_answer(question.id().as_str(), &question.choices()[0].value);
        }
        if !controller.is_last() {
            controller.begin_advance();
        }
    }

    let Advance::Submit(answers) = controller.begin_advance() else {
        panic!("expected a submission");
    };
    assert_eq!(&answers, controller.answers());
    assert!(controller.is_saving());
    assert!(!controller.can_advance());
    assert_eq!(controller.begin_advance(), Advance::Blocked);
    assert!(!controller.retreat());
}

#[tokio::test]
async fn test_reset_after_complete_starts_fresh() {
    let store = MemoryStore::new();
    let mut controller = SurveyController::new();
    fill_until_email(&mut controller, &store).await;
    controller.set_email_text("a@b.com");
    assert!(matches!(controller.advance(&store).await, Step::Completed(_)));

    controller.reset();
    assert_eq!(controller.index(), 0);
    assert_eq!(controller.phase(), Phase::Answering);
    assert!(controller.answers().is_empty());
    assert_eq!(controller.email_text(), "");
    assert_eq!(controller.custom_candy_text(), "");

    answer_and_advance(&mut controller, &store, MOVIE_TYPE, "action").await;
    answer_and_advance(&mut controller, &store, SNACK_CHOICE, "takeout").await;
    answer_and_advance(&mut controller, &store, CANDY_CHOICE, "none").await;
    answer_and_advance(&mut controller, &store, BEVERAGE_CHOICE, "beer").await;
    answer_and_advance(&mut controller, &store, LIGHTING_PREFERENCE, "dark").await;
    answer_and_advance(&mut controller, &store, COMFORT_SETUP, "own").await;
    controller.set_email_text("c@d.com");
    assert!(matches!(controller.advance(&store).await, Step::Completed(_)));

    let records = store.records();
    assert_eq!(records.len(), 2);
    assert_ne!(records[0].id, records[1].id);
    assert_eq!(records[1].record.movie_type, "action");
    assert_eq!(records[1].record.candy_custom, "");
    assert_eq!(records[1].record.email, "c@d.com");
}
