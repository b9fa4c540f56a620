//! Terminal setup and the event loop driving the survey.
//!
//! Questions are shown one at a time with progress tracking and keyboard
//! navigation. The save on the last question runs on a tokio task so the
//! screen keeps redrawing while it is in flight.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use cinema_survey::{Answers, PersistenceError, RecordStore, StoredRecord, SurveyController, save};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend, style::Color};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::draw;
use crate::state::{AppState, Flow};

/// Redraw interval of the event loop.
const TICK: Duration = Duration::from_millis(16);

/// Smallest terminal the layout fits in.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 24;

/// Error type for the terminal front end.
#[derive(Debug, Error)]
pub enum TuiError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal cannot fit the layout.
    #[error(
        "Terminal too small: need at least {min_width}x{min_height}, got {width}x{height}",
        min_width = MIN_WIDTH,
        min_height = MIN_HEIGHT
    )]
    TooSmall { width: u16, height: u16 },
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Yellow,
            secondary: Color::LightRed,
            background: Color::Reset,
            text: Color::White,
            highlight: Color::LightYellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::DarkGray,
        }
    }
}

/// Messages from background tasks to the event loop.
#[derive(Debug)]
enum AppEvent {
    Saved(Result<StoredRecord, PersistenceError>),
}

/// Ratatui front end for the movie-night survey.
#[derive(Debug, Clone)]
pub struct SurveyTui {
    /// Title shown at the top of every question.
    title: Option<String>,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for SurveyTui {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyTui {
    pub fn new() -> Self {
        Self {
            title: None,
            theme: Theme::default(),
        }
    }

    /// Override the survey's own title in the header.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the survey until the user quits, saving each completed run to `store`.
    pub async fn run(
        &self,
        controller: SurveyController,
        store: Arc<dyn RecordStore>,
    ) -> Result<(), TuiError> {
        let mut terminal = self.setup_terminal()?;
        let result = self.event_loop(&mut terminal, controller, store).await;
        self.restore_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), TuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    async fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        controller: SurveyController,
        store: Arc<dyn RecordStore>,
    ) -> Result<(), TuiError> {
        let size = terminal.size()?;
        if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
            return Err(TuiError::TooSmall {
                width: size.width,
                height: size.height,
            });
        }

        let title = self
            .title
            .clone()
            .unwrap_or_else(|| controller.definition().title.clone());
        let mut state = AppState::new(controller);
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        loop {
            terminal.draw(|frame| draw::render(frame, &state, &self.theme, &title))?;

            tokio::select! {
                _ = tokio::time::sleep(TICK) => {
                    if !event::poll(Duration::ZERO)? {
                        continue;
                    }
                    let Event::Key(key) = event::read()? else {
                        continue;
                    };
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match state.handle_key(key) {
                        Flow::Continue => {}
                        Flow::Quit => break,
                        Flow::Submit(answers) => {
                            spawn_save(Arc::clone(&store), answers, event_tx.clone());
                        }
                    }
                }

                Some(event) = event_rx.recv() => match event {
                    AppEvent::Saved(result) => {
                        state.finish_save(result);
                    }
                },
            }
        }

        Ok(())
    }
}

fn spawn_save(
    store: Arc<dyn RecordStore>,
    answers: Answers,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        let result = save(store.as_ref(), &answers).await;
        // The loop may already have exited.
        let _ = event_tx.send(AppEvent::Saved(result));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinema_survey::{MemoryStore, Step};

    #[test]
    fn tui_creation() {
        let _tui = SurveyTui::new();
        let _with_title = SurveyTui::new().with_title("Test");
        let _with_theme = SurveyTui::new().with_theme(Theme::default());
    }

    #[test]
    fn error_types() {
        let err = TuiError::TooSmall {
            width: 30,
            height: 10,
        };
        assert_eq!(
            err.to_string(),
            "Terminal too small: need at least 60x24, got 30x10"
        );

        let err = TuiError::from(io::Error::other("boom"));
        assert_eq!(err.to_string(), "I/O error: boom");
    }

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Yellow);
        assert_eq!(theme.error, Color::Red);
        assert_eq!(theme.success, Color::Green);
    }

    #[tokio::test]
    async fn spawned_save_reports_back() {
        let store = Arc::new(MemoryStore::new());
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let answers: Answers = [("email", "a@b.com")].into_iter().collect();

        let mut controller = SurveyController::new();
        controller.set_email_text("a@b.com");
        let mut state = AppState::new(controller);
        for question in state.controller.definition().questions().to_vec() {
            if !question.is_free_text() {
                state
                    .controller
                    .select_answer(question.id().as_str(), &question.choices()[0].value);
                state.controller.begin_advance();
            }
        }
        assert!(matches!(
            state.controller.begin_advance(),
            cinema_survey::Advance::Submit(_)
        ));

        spawn_save(store.clone(), answers, event_tx);
        let Some(AppEvent::Saved(result)) = event_rx.recv().await else {
            panic!("save task sent nothing");
        };
        assert!(matches!(state.finish_save(result), Step::Completed(_)));
        assert_eq!(store.records()[0].record.email, "a@b.com");
    }
}
