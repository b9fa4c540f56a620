//! Rendering for the question and results screens.

use std::time::Instant;

use cinema_survey::{StepStatus, summarize};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::Theme;
use crate::state::{AppState, TextTarget};

/// Title of the results screen.
pub const RESULTS_TITLE: &str = "Your Perfect Movie Night";

/// Label shown in place of the key hints while a save is in flight.
pub const SAVING_LABEL: &str = "Saving...";

/// Confirmation shown on the results screen once the record is stored.
pub const SAVED_MESSAGE: &str = "✅ Your responses have been saved successfully!";

/// Draw whichever screen the state calls for.
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, title: &str) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        frame.area(),
    );
    if state.controller.is_complete() {
        draw_results(frame, state, theme);
    } else {
        draw_survey(frame, state, theme, title);
    }
}

fn draw_survey(frame: &mut Frame, state: &AppState, theme: &Theme, title: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Progress bar
            Constraint::Length(1), // Step dots
            Constraint::Min(8),    // Question
            Constraint::Length(1), // Save error
            Constraint::Length(2), // Help
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], state, theme, title);
    draw_progress(frame, chunks[1], state, theme);
    draw_steps(frame, chunks[2], state, theme);
    draw_question(frame, chunks[3], state, theme);

    if state.in_transition(Instant::now()) {
        frame
            .buffer_mut()
            .set_style(chunks[3], Style::default().add_modifier(Modifier::DIM));
    }

    if let Some(error) = state.controller.save_error() {
        let banner = Paragraph::new(error)
            .style(Style::default().fg(theme.error).bold())
            .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[4]);
    }

    let help = if state.controller.is_saving() {
        Paragraph::new(SAVING_LABEL).style(Style::default().fg(theme.highlight).bold())
    } else {
        Paragraph::new(state.help_text()).style(Style::default().fg(theme.border))
    };
    let help = help.alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(help, chunks[5]);
}

fn draw_header(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, title: &str) {
    let mut lines = vec![Line::from(Span::styled(
        title,
        Style::default().fg(theme.primary).bold(),
    ))];
    if let Some(prelude) = &state.controller.definition().prelude {
        lines.push(Line::from(Span::styled(
            prelude.as_str(),
            Style::default().fg(theme.secondary),
        )));
    }

    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(header, area);
}

/// Thin bar with "Question i of n" and the percentage underneath.
fn draw_progress(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let (current, total) = state.controller.progress();
    let text = format!(
        " Question {current} of {total}  {}% ",
        state.controller.progress_percent()
    );

    let bar_width = area.width.saturating_sub(2);
    let text_width = (text.chars().count() as u16).min(bar_width);
    let filled_width = (current as f32 / total as f32 * bar_width as f32) as u16;
    let bar_x = area.x + 1;

    let track = Paragraph::new("─".repeat(bar_width as usize))
        .style(Style::default().fg(theme.border));
    frame.render_widget(track, Rect::new(bar_x, area.y, bar_width, 1));

    if filled_width > 0 {
        let filled = Paragraph::new("━".repeat(filled_width as usize))
            .style(Style::default().fg(theme.primary));
        frame.render_widget(filled, Rect::new(bar_x, area.y, filled_width, 1));
    }

    if area.height > 1 {
        let text_x = bar_x + bar_width.saturating_sub(text_width) / 2;
        let label = Paragraph::new(text).style(Style::default().fg(theme.secondary));
        frame.render_widget(label, Rect::new(text_x, area.y + 1, text_width, 1));
    }
}

fn draw_steps(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let dots: Vec<Span> = (0..state.controller.definition().len())
        .map(|index| match state.controller.step_status(index) {
            StepStatus::Done => Span::styled("● ", Style::default().fg(theme.success)),
            StepStatus::Current => Span::styled("◉ ", Style::default().fg(theme.highlight).bold()),
            StepStatus::Pending => Span::styled("○ ", Style::default().fg(theme.border)),
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        area,
    );
}

fn draw_question(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let controller = &state.controller;
    let question = controller.current_question();
    let target = state.text_target();

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(3)];
    if controller.shows_custom_entry() {
        constraints.push(Constraint::Length(3));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let prompt = Paragraph::new(question.prompt())
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Question ")
                .title_style(Style::default().fg(theme.highlight)),
        );
    frame.render_widget(prompt, rows[0]);

    if question.is_free_text() {
        let input_area = Rect {
            height: rows[1].height.min(3),
            ..rows[1]
        };
        let input = TextInput {
            label: " Email ",
            text: controller.email_text(),
            placeholder: question.placeholder(),
            focused: target == Some(TextTarget::Email),
        };
        input.render(frame, input_area, theme);
        return;
    }

    let answer = controller.current_answer();
    let items: Vec<ListItem> = question
        .choices()
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            let chosen = answer == Some(choice.value.as_str());
            let marker = if chosen { "✓" } else { " " };
            let style = if i == state.cursor {
                Style::default().fg(theme.highlight).bold()
            } else if chosen {
                Style::default().fg(theme.success)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(format!("{marker} {} {}", choice.icon, choice.label)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Select Option ")
                .title_style(Style::default().fg(theme.secondary)),
        )
        .highlight_symbol("► ");
    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor));
    frame.render_stateful_widget(list, rows[1], &mut list_state);

    if controller.shows_custom_entry() {
        let input = TextInput {
            label: " Your candy ",
            text: controller.custom_candy_text(),
            placeholder: question.placeholder(),
            focused: target == Some(TextTarget::CustomCandy),
        };
        input.render(frame, rows[2], theme);
    }
}

/// A single-line bordered text field.
struct TextInput<'a> {
    label: &'a str,
    text: &'a str,
    placeholder: Option<&'a str>,
    focused: bool,
}

impl TextInput<'_> {
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border = if self.focused { theme.primary } else { theme.border };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(self.label)
            .title_style(Style::default().fg(theme.secondary));

        let line = if self.text.is_empty() {
            Line::from(Span::styled(
                self.placeholder.unwrap_or_default(),
                Style::default().fg(theme.border).italic(),
            ))
        } else {
            Line::from(Span::styled(self.text, Style::default().fg(theme.text)))
        };
        frame.render_widget(Paragraph::new(line).block(block), area);

        if self.focused && area.width > 2 {
            let max_x = area.x + area.width - 2;
            let cursor_x = (area.x + 1 + self.text.chars().count() as u16).min(max_x);
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

fn draw_results(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success))
        .title(format!(" {RESULTS_TITLE} "))
        .title_style(Style::default().fg(theme.success).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let definition = state.controller.definition();
    let mut lines = Vec::new();
    if let Some(epilogue) = &definition.epilogue {
        lines.push(Line::from(Span::styled(
            epilogue.as_str(),
            Style::default().fg(theme.secondary).italic(),
        )));
        lines.push(Line::default());
    }

    for entry in summarize(definition, state.controller.answers()) {
        lines.push(Line::from(Span::styled(
            entry.prompt,
            Style::default().fg(theme.border),
        )));
        lines.push(match entry.answer {
            Some(answer) => Line::from(vec![
                Span::raw(format!("  {} ", answer.icon)),
                Span::styled(answer.text, Style::default().fg(theme.text).bold()),
            ]),
            None => Line::from(Span::styled(
                "  Not answered",
                Style::default().fg(theme.border).italic(),
            )),
        });
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        SAVED_MESSAGE,
        Style::default().fg(theme.success).bold(),
    )));
    if let Some(id) = &state.saved_id {
        lines.push(Line::from(Span::styled(
            format!("Saved as {id}"),
            Style::default().fg(theme.border),
        )));
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), rows[0]);
    frame.render_widget(
        Paragraph::new(state.help_text())
            .style(Style::default().fg(theme.border))
            .alignment(Alignment::Center),
        rows[1],
    );
}
