//! View state and key handling layered over the survey controller.

use std::time::{Duration, Instant};

use cinema_survey::{Advance, Answers, PersistenceError, Step, StoredRecord, SurveyController};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// How long content stays dimmed after moving between questions.
pub const TRANSITION: Duration = Duration::from_millis(300);

/// What the event loop should do after a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Continue,
    /// Persist these answers and report back through [`AppState::finish_save`].
    Submit(Answers),
    Quit,
}

/// Which text buffer receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    Email,
    CustomCandy,
}

/// Everything the front end draws from.
#[derive(Debug)]
pub struct AppState {
    pub controller: SurveyController,
    /// Highlighted option of the current question.
    pub cursor: usize,
    /// Id of the record created by the last successful save.
    pub saved_id: Option<String>,
    transition_until: Option<Instant>,
}

impl AppState {
    pub fn new(controller: SurveyController) -> Self {
        let mut state = Self {
            controller,
            cursor: 0,
            saved_id: None,
            transition_until: None,
        };
        state.sync_cursor();
        state
    }

    /// Whether the between-questions dim is still showing at `now`.
    pub fn in_transition(&self, now: Instant) -> bool {
        self.transition_until.is_some_and(|until| now < until)
    }

    /// The buffer typed characters go to, if any.
    ///
    /// The custom candy buffer only takes input while the "other" option is
    /// both selected and highlighted, so Space still selects other options.
    pub fn text_target(&self) -> Option<TextTarget> {
        let question = self.controller.current_question();
        if question.is_free_text() {
            return Some(TextTarget::Email);
        }
        let on_other = question
            .choices()
            .get(self.cursor)
            .is_some_and(|choice| choice.is_other());
        (self.controller.shows_custom_entry() && on_other).then_some(TextTarget::CustomCandy)
    }

    /// Key hints for the bottom bar.
    pub fn help_text(&self) -> &'static str {
        if self.controller.is_complete() {
            return "r: Restart  Esc/q: Quit";
        }
        match self.text_target() {
            Some(TextTarget::Email) => "Type your email  Enter/→: Next  ←: Back  Esc: Quit",
            Some(TextTarget::CustomCandy) => {
                "Type your candy  ↑/↓: Move  Enter/→: Next  ←: Back  Esc: Quit"
            }
            None => "↑/↓: Move  Enter/Space: Select  Enter/→: Next  ←: Back  Esc: Quit",
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        if self.controller.is_complete() {
            return match key.code {
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.restart();
                    Flow::Continue
                }
                KeyCode::Esc | KeyCode::Char('q') => Flow::Quit,
                _ => Flow::Continue,
            };
        }

        if key.code == KeyCode::Esc {
            return Flow::Quit;
        }
        if self.controller.is_saving() {
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                let last = self.controller.current_question().choices().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last);
            }
            KeyCode::Right | KeyCode::Tab => return self.advance(),
            KeyCode::Left | KeyCode::BackTab => self.retreat(),
            KeyCode::Enter => return self.confirm(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) => self.type_char(c),
            _ => {}
        }
        Flow::Continue
    }

    /// Apply the outcome of a save started by [`Flow::Submit`].
    pub fn finish_save(&mut self, result: Result<StoredRecord, PersistenceError>) -> Step {
        let step = self.controller.finish_submit(result);
        match &step {
            Step::Completed(stored) => {
                tracing::info!(id = %stored.id, "Survey saved");
                self.saved_id = Some(stored.id.clone());
            }
            Step::SaveFailed => tracing::warn!("Survey save failed"),
            _ => {}
        }
        step
    }

    fn confirm(&mut self) -> Flow {
        let question = self.controller.current_question();
        let highlighted = question.choices().get(self.cursor).map(|c| c.value.as_str());
        if highlighted.is_some() && highlighted != self.controller.current_answer() {
            self.select_highlighted();
            return Flow::Continue;
        }
        self.advance()
    }

    fn select_highlighted(&mut self) {
        let question = self.controller.current_question();
        let Some(choice) = question.choices().get(self.cursor) else {
            return;
        };
        let id = question.id().as_str().to_owned();
        let value = choice.value.clone();
        self.controller.select_answer(&id, &value);
    }

    fn advance(&mut self) -> Flow {
        match self.controller.begin_advance() {
            Advance::Blocked => Flow::Continue,
            Advance::Moved(_) => {
                self.enter_question();
                Flow::Continue
            }
            Advance::Submit(answers) => Flow::Submit(answers),
        }
    }

    fn retreat(&mut self) {
        if self.controller.retreat() {
            self.enter_question();
        }
    }

    fn restart(&mut self) {
        self.controller.reset();
        self.saved_id = None;
        self.enter_question();
    }

    fn backspace(&mut self) {
        let Some(target) = self.text_target() else {
            self.retreat();
            return;
        };
        let mut text = self.text(target).to_owned();
        if text.pop().is_none() {
            self.retreat();
            return;
        }
        self.set_text(target, &text);
    }

    fn type_char(&mut self, c: char) {
        match self.text_target() {
            Some(target) => {
                let mut text = self.text(target).to_owned();
                text.push(c);
                self.set_text(target, &text);
            }
            None if c == ' ' => self.select_highlighted(),
            None => {}
        }
    }

    fn text(&self, target: TextTarget) -> &str {
        match target {
            TextTarget::Email => self.controller.email_text(),
            TextTarget::CustomCandy => self.controller.custom_candy_text(),
        }
    }

    fn set_text(&mut self, target: TextTarget, text: &str) {
        match target {
            TextTarget::Email => self.controller.set_email_text(text),
            TextTarget::CustomCandy => self.controller.set_custom_candy_text(text),
        }
    }

    fn enter_question(&mut self) {
        self.sync_cursor();
        self.transition_until = Some(Instant::now() + TRANSITION);
    }

    fn sync_cursor(&mut self) {
        let question = self.controller.current_question();
        let cursor = self
            .controller
            .current_answer()
            .and_then(|value| question.choice_index(value))
            .unwrap_or(0);
        self.cursor = cursor;
    }
}
