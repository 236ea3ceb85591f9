//! Ratatui surface implementation for the QuizSurface trait.
//!
//! Shows one question at a time with a progress bar, keyboard navigation,
//! drag-to-swap ranking and a date/time entry form. An optional side panel
//! draws the shared line store.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{self, Stdout};
use thiserror::Error;
use travel_quiz::{QuestionKind, QuizController, QuizError, QuizSurface};

use crate::LinesPanel;

/// Error type for the Ratatui surface.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User cancelled the quiz (e.g., pressed Esc).
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RatatuiError> for QuizError {
    fn from(err: RatatuiError) -> Self {
        match err {
            RatatuiError::Cancelled => QuizError::Cancelled,
            other => QuizError::surface(other),
        }
    }
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub highlight: Color,
    pub dragging: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            text: Color::White,
            highlight: Color::Yellow,
            dragging: Color::Magenta,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Ratatui-based TUI surface.
///
/// Presents questions one at a time in a styled terminal UI with progress
/// tracking and keyboard navigation. All quiz state lives in the
/// [`QuizController`]; this type only owns presentation settings.
#[derive(Debug, Clone)]
pub struct RatatuiSurface {
    /// Title shown at the top of the quiz.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
    /// Side panel showing the line store, if any.
    lines: Option<LinesPanel>,
}

impl Default for RatatuiSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiSurface {
    /// Create a new Ratatui surface with default settings.
    pub fn new() -> Self {
        Self {
            title: "Quiz".to_string(),
            theme: Theme::default(),
            lines: None,
        }
    }

    /// Set the title shown at the top of the quiz.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Show a line store next to the questions.
    ///
    /// F2 clears the store and F3 restores its initial segments.
    pub fn with_lines(mut self, lines: LinesPanel) -> Self {
        self.lines = Some(lines);
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Which date/time text field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateTimeField {
    Date,
    TimeRange,
}

/// One-line feedback under the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Status {
    pub(crate) text: String,
    pub(crate) is_error: bool,
}

impl Status {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// How the key loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Finished,
    Cancelled,
}

/// Presentation state layered over the controller.
///
/// Holds only what the controller does not: the highlighted row, whether a
/// ranking option is picked up, and the date/time text being typed.
#[derive(Debug)]
pub(crate) struct SurfaceState {
    /// Highlighted option row.
    pub(crate) highlighted: usize,
    /// A ranking option is picked up and waiting to be dropped.
    pub(crate) dragging: bool,
    /// Date text, passed to the controller verbatim.
    pub(crate) date_input: String,
    /// Time range text such as `09:00-17:00`.
    pub(crate) time_input: String,
    pub(crate) focus: DateTimeField,
    pub(crate) status: Option<Status>,
    /// The epilogue screen is showing.
    pub(crate) complete: bool,
    pub(crate) outcome: Option<Outcome>,
}

impl SurfaceState {
    pub(crate) fn new(quiz: &QuizController) -> Self {
        let mut state = Self {
            highlighted: 0,
            dragging: false,
            date_input: String::new(),
            time_input: String::new(),
            focus: DateTimeField::Date,
            status: None,
            complete: false,
            outcome: None,
        };
        state.enter_question(quiz);
        state
    }

    /// Reset per-question state after the cursor moved, restoring a
    /// previously recorded date/time answer into the inputs.
    fn enter_question(&mut self, quiz: &QuizController) {
        self.highlighted = 0;
        self.dragging = false;
        self.focus = DateTimeField::Date;
        self.date_input.clear();
        self.time_input.clear();
        if quiz.is_date_time_question()
            && let Ok(previous) = quiz.answers().get_date_time(quiz.cursor())
        {
            self.date_input = previous.date.clone();
            self.time_input = previous.time_range.join("-");
        }
    }

    fn option_count(quiz: &QuizController) -> usize {
        quiz.current_question().options().map_or(0, <[String]>::len)
    }

    fn go_to_previous(&mut self, quiz: &mut QuizController) {
        let before = quiz.cursor();
        quiz.go_to_previous();
        if quiz.cursor() != before {
            self.status = None;
            self.enter_question(quiz);
        }
    }

    fn go_to_next(&mut self, quiz: &mut QuizController) {
        if quiz.is_last_question() {
            self.complete = true;
            return;
        }
        quiz.go_to_next();
        self.status = None;
        self.enter_question(quiz);
    }

    /// Hand the typed date and range to the controller the way a picker
    /// would: the date first, then the range.
    fn submit_date_time(&mut self, quiz: &mut QuizController) {
        quiz.select_date(self.date_input.trim());
        let range: Vec<String> = self
            .time_input
            .split('-')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();
        quiz.select_time_range(range);
        self.status = Some(Status::info(format!(
            "Saved {} {}",
            self.date_input.trim(),
            self.time_input.trim()
        )));
    }

    fn toggle_drag(&mut self, quiz: &mut QuizController) {
        if self.dragging {
            let swapped = quiz.drop_onto(self.highlighted);
            self.dragging = false;
            self.status = if swapped {
                None
            } else {
                Some(Status::error("Nothing to drop here"))
            };
        } else {
            quiz.start_drag(self.highlighted);
            self.dragging = true;
            if let Some(option) = quiz
                .current_question()
                .options()
                .and_then(|options| options.get(self.highlighted))
            {
                self.status = Some(Status::info(format!("Moving \"{option}\" - Space to drop")));
            }
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            DateTimeField::Date => &mut self.date_input,
            DateTimeField::TimeRange => &mut self.time_input,
        }
    }

    pub(crate) fn handle_key(
        &mut self,
        key: KeyCode,
        quiz: &mut QuizController,
        lines: Option<&LinesPanel>,
    ) {
        if self.complete {
            match key {
                KeyCode::Enter => self.outcome = Some(Outcome::Finished),
                KeyCode::Esc => self.outcome = Some(Outcome::Cancelled),
                KeyCode::Left => self.complete = false,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Esc => self.outcome = Some(Outcome::Cancelled),
            KeyCode::F(2) => {
                if let Some(lines) = lines {
                    lines.clear();
                }
            }
            KeyCode::F(3) => {
                if let Some(lines) = lines {
                    lines.reset();
                }
            }
            KeyCode::Left => self.go_to_previous(quiz),
            KeyCode::Right => self.go_to_next(quiz),
            _ if quiz.is_date_time_question() => self.handle_date_time_key(key, quiz),
            KeyCode::Enter => self.go_to_next(quiz),
            KeyCode::Backspace => self.go_to_previous(quiz),
            KeyCode::Up => {
                self.highlighted = self.highlighted.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.highlighted + 1 < Self::option_count(quiz) {
                    self.highlighted += 1;
                }
            }
            KeyCode::Char(' ') if quiz.current_question().kind().is_ranking() => {
                self.toggle_drag(quiz);
            }
            _ => {}
        }
    }

    fn handle_date_time_key(&mut self, key: KeyCode, quiz: &mut QuizController) {
        match key {
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    DateTimeField::Date => DateTimeField::TimeRange,
                    DateTimeField::TimeRange => DateTimeField::Date,
                };
            }
            KeyCode::Char(c) => self.focused_input().push(c),
            KeyCode::Backspace => {
                self.focused_input().pop();
            }
            KeyCode::Enter => {
                self.submit_date_time(quiz);
                self.go_to_next(quiz);
            }
            _ => {}
        }
    }
}

fn draw_ui(
    frame: &mut Frame,
    state: &SurfaceState,
    quiz: &QuizController,
    title: &str,
    theme: &Theme,
    lines: Option<&LinesPanel>,
) {
    let area = frame.area();

    let (quiz_area, lines_area) = if lines.is_some() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        (columns[0], Some(columns[1]))
    } else {
        (area, None)
    };

    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Progress bar
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Help
        ])
        .split(quiz_area);

    // Header
    let header_text = match &quiz.definition().prelude {
        Some(prelude) => format!("{title}\n{prelude}"),
        None => title.to_string(),
    };
    let header = Paragraph::new(header_text)
        .style(Style::default().fg(theme.primary).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, chunks[0]);

    draw_progress(frame, chunks[1], quiz, theme);

    // Content area
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Question prompt
            Constraint::Min(5),    // Answer area
            Constraint::Length(2), // Status line
        ])
        .split(chunks[2]);

    let question = quiz.current_question();
    let prompt = Paragraph::new(question.text().to_string())
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Question ")
                .title_style(Style::default().fg(theme.highlight)),
        );
    frame.render_widget(prompt, content_chunks[0]);

    match question.kind() {
        QuestionKind::DateTime(_) => draw_date_time(frame, content_chunks[1], state, theme),
        kind => {
            let options = question.options().unwrap_or_default();
            let block_title = match kind {
                QuestionKind::Ranking(_) if state.dragging => " Rank (drop onto a slot) ",
                QuestionKind::Ranking(_) => " Rank ",
                QuestionKind::Dropdown(_) => " Dropdown ",
                _ => " Select Option ",
            };
            let dragged = quiz.drag_source().filter(|_| state.dragging);
            let items: Vec<ListItem> = options
                .iter()
                .enumerate()
                .map(|(i, opt)| {
                    let style = if Some(i) == dragged {
                        Style::default().fg(theme.dragging).bold()
                    } else if i == state.highlighted {
                        Style::default().fg(theme.highlight).bold()
                    } else {
                        Style::default().fg(theme.text)
                    };
                    let label = if kind.is_ranking() {
                        format!("  {}. {}", i + 1, opt)
                    } else {
                        format!("  {opt}")
                    };
                    ListItem::new(label).style(style)
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.border))
                        .title(block_title)
                        .title_style(Style::default().fg(theme.secondary)),
                )
                .highlight_symbol("► ");

            let mut list_state = ListState::default();
            list_state.select(Some(state.highlighted));
            frame.render_stateful_widget(list, content_chunks[1], &mut list_state);
        }
    }

    if let Some(status) = &state.status {
        let color = if status.is_error {
            theme.error
        } else {
            theme.success
        };
        let status_widget = Paragraph::new(status.text.clone())
            .style(Style::default().fg(color))
            .alignment(Alignment::Center);
        frame.render_widget(status_widget, content_chunks[2]);
    }

    // Help bar
    let help_text = match question.kind() {
        QuestionKind::DateTime(_) => "Tab: Switch field  Enter: Save & next  ←/→: Back/Skip  Esc: Cancel",
        QuestionKind::Ranking(_) => {
            "↑/↓: Move  Space: Pick up/Drop  Enter: Next  ←/Bksp: Back  Esc: Cancel"
        }
        _ => "↑/↓: Select  Enter: Next  ←/Bksp: Back  Esc: Cancel",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(help, chunks[3]);

    if let (Some(lines), Some(lines_area)) = (lines, lines_area) {
        lines.draw(frame, lines_area, theme);
    }
}

fn draw_progress(frame: &mut Frame, area: Rect, quiz: &QuizController, theme: &Theme) {
    let progress_text = format!(" {} ", quiz.progress_label());
    let bar_width = area.width.saturating_sub(2);
    let text_width = progress_text.chars().count() as u16;
    let filled_width = (quiz.progress_fraction() * f64::from(bar_width)) as u16;

    let bar_y = area.y;
    let bar_x = area.x + 1;

    // Background track
    let track = "─".repeat(bar_width as usize);
    let track_widget = Paragraph::new(track).style(Style::default().fg(theme.border));
    frame.render_widget(track_widget, Rect::new(bar_x, bar_y, bar_width, 1));

    // Filled portion
    if filled_width > 0 {
        let filled = "━".repeat(filled_width as usize);
        let filled_widget = Paragraph::new(filled).style(Style::default().fg(theme.primary));
        frame.render_widget(filled_widget, Rect::new(bar_x, bar_y, filled_width, 1));
    }

    let text_x = bar_x + (bar_width.saturating_sub(text_width)) / 2;
    let text_widget = Paragraph::new(progress_text).style(Style::default().fg(theme.secondary));
    frame.render_widget(text_widget, Rect::new(text_x, bar_y + 1, text_width, 1));
}

fn draw_date_time(frame: &mut Frame, area: Rect, state: &SurfaceState, theme: &Theme) {
    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let field_block = |title: &'static str, focused: bool| {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                theme.highlight
            } else {
                theme.border
            }))
            .title(title)
            .title_style(Style::default().fg(theme.secondary))
    };

    let date_focused = state.focus == DateTimeField::Date;
    let date = Paragraph::new(state.date_input.clone())
        .style(Style::default().fg(theme.text))
        .block(field_block(" Date (YYYY-MM-DD) ", date_focused));
    frame.render_widget(date, fields[0]);

    let time = Paragraph::new(state.time_input.clone())
        .style(Style::default().fg(theme.text))
        .block(field_block(" Time range (HH:MM-HH:MM) ", !date_focused));
    frame.render_widget(time, fields[1]);

    let (field_area, input) = if date_focused {
        (fields[0], &state.date_input)
    } else {
        (fields[1], &state.time_input)
    };
    let cursor_x = field_area.x + 1 + input.chars().count() as u16;
    frame.set_cursor_position((cursor_x, field_area.y + 1));
}

fn draw_completion(frame: &mut Frame, quiz: &QuizController, theme: &Theme) {
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success))
        .title(" Complete ")
        .title_style(Style::default().fg(theme.success).bold());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let answered = quiz.answers().answered_count();
    let text = match &quiz.definition().epilogue {
        Some(epilogue) => format!("{epilogue}\n\n{answered} answer(s) recorded.\nPress Enter to finish."),
        None => format!("All questions seen!\n\n{answered} answer(s) recorded.\nPress Enter to finish."),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Min(3),
            Constraint::Percentage(40),
        ])
        .split(inner);

    frame.render_widget(paragraph, centered[1]);
}

impl QuizSurface for RatatuiSurface {
    type Error = RatatuiError;

    fn run(&self, quiz: &mut QuizController) -> Result<(), Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let mut state = SurfaceState::new(quiz);
        tracing::info!(questions = quiz.len(), "ratatui surface started");

        let result = loop {
            let drawn = terminal.draw(|frame| {
                if state.complete {
                    draw_completion(frame, quiz, &self.theme);
                } else {
                    draw_ui(frame, &state, quiz, &self.title, &self.theme, self.lines.as_ref());
                }
            });
            if let Err(err) = drawn {
                break Err(RatatuiError::Io(err));
            }

            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    state.handle_key(key.code, quiz, self.lines.as_ref());
                }
                Ok(_) => {}
                Err(err) => break Err(RatatuiError::Io(err)),
            }

            match state.outcome {
                Some(Outcome::Finished) => break Ok(()),
                Some(Outcome::Cancelled) => break Err(RatatuiError::Cancelled),
                None => {}
            }
        };

        self.restore_terminal(&mut terminal)?;
        tracing::info!(
            cursor = quiz.cursor(),
            answered = quiz.answers().answered_count(),
            cancelled = matches!(result, Err(RatatuiError::Cancelled)),
            "ratatui surface finished"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use travel_quiz::{LineStore, Question, QuizDefinition, travel};

    use super::*;

    fn press(state: &mut SurfaceState, quiz: &mut QuizController, keys: &[KeyCode]) {
        for key in keys {
            state.handle_key(*key, quiz, None);
        }
    }

    fn travel_quiz() -> (SurfaceState, QuizController) {
        let quiz = QuizController::new(travel::definition()).unwrap();
        (SurfaceState::new(&quiz), quiz)
    }

    #[test]
    fn surface_creation() {
        let _surface = RatatuiSurface::new();
        let _with_title = RatatuiSurface::new().with_title("Test");
        let _with_theme = RatatuiSurface::new().with_theme(Theme::default());
    }

    #[test]
    fn error_types() {
        let err = RatatuiError::Cancelled;
        assert_eq!(err.to_string(), "Quiz cancelled by user");
        assert!(QuizError::from(err).is_cancelled());

        let err = RatatuiError::Io(io::Error::other("broken pipe"));
        assert_eq!(err.to_string(), "I/O error: broken pipe");
        assert!(matches!(QuizError::from(err), QuizError::Surface(_)));
    }

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.error, Color::Red);
        assert_eq!(theme.success, Color::Green);
    }

    #[test]
    fn space_picks_up_and_drops_ranking_option() {
        let (mut state, mut quiz) = travel_quiz();
        press(
            &mut state,
            &mut quiz,
            &[KeyCode::Char(' '), KeyCode::Down, KeyCode::Down, KeyCode::Char(' ')],
        );
        assert!(!state.dragging);
        assert_eq!(
            &quiz.current_question().options().unwrap()[..3],
            ["History", "Art", "Nature"]
        );
    }

    #[test]
    fn drop_with_no_options_shows_error_status() {
        let mut quiz = QuizController::new(QuizDefinition::new(vec![Question::ranking(
            "Rank",
            Vec::<String>::new(),
        )]))
        .unwrap();
        let mut state = SurfaceState::new(&quiz);

        press(&mut state, &mut quiz, &[KeyCode::Char(' '), KeyCode::Char(' ')]);
        assert!(!state.dragging);
        assert_eq!(state.status, Some(Status::error("Nothing to drop here")));
    }

    #[test]
    fn successful_drop_clears_status() {
        let (mut state, mut quiz) = travel_quiz();
        press(&mut state, &mut quiz, &[KeyCode::Char(' ')]);
        assert!(state.status.as_ref().is_some_and(|s| !s.is_error));
        press(&mut state, &mut quiz, &[KeyCode::Down, KeyCode::Char(' ')]);
        assert_eq!(state.status, None);
    }

    #[test]
    fn backspace_goes_back_outside_date_time() {
        let (mut state, mut quiz) = travel_quiz();
        press(&mut state, &mut quiz, &[KeyCode::Enter]);
        assert_eq!(quiz.cursor(), 1);
        press(&mut state, &mut quiz, &[KeyCode::Backspace]);
        assert_eq!(quiz.cursor(), 0);
    }

    #[test]
    fn backspace_edits_date_time_input() {
        let (mut state, mut quiz) = travel_quiz();
        press(&mut state, &mut quiz, &[KeyCode::Enter, KeyCode::Enter]);
        press(
            &mut state,
            &mut quiz,
            &[KeyCode::Char('2'), KeyCode::Char('0'), KeyCode::Backspace],
        );
        assert_eq!(quiz.cursor(), 2);
        assert_eq!(state.date_input, "2");
    }

    #[test]
    fn highlight_stays_within_options() {
        let (mut state, mut quiz) = travel_quiz();
        press(&mut state, &mut quiz, &[KeyCode::Up]);
        assert_eq!(state.highlighted, 0);
        press(&mut state, &mut quiz, &[KeyCode::Down; 20]);
        assert_eq!(state.highlighted, 6);
    }

    #[test]
    fn navigation_resets_highlight() {
        let (mut state, mut quiz) = travel_quiz();
        press(&mut state, &mut quiz, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(quiz.cursor(), 1);
        assert_eq!(state.highlighted, 0);
        press(&mut state, &mut quiz, &[KeyCode::Left, KeyCode::Left]);
        assert_eq!(quiz.cursor(), 0);
    }

    #[test]
    fn typed_date_time_is_recorded() {
        let (mut state, mut quiz) = travel_quiz();
        press(&mut state, &mut quiz, &[KeyCode::Enter, KeyCode::Enter]);
        assert!(quiz.is_date_time_question());

        let mut keys: Vec<KeyCode> = "2024-05-01".chars().map(KeyCode::Char).collect();
        keys.push(KeyCode::Tab);
        keys.extend("09:00-17:00".chars().map(KeyCode::Char));
        keys.push(KeyCode::Enter);
        press(&mut state, &mut quiz, &keys);

        assert_eq!(quiz.cursor(), 3);
        let dt = quiz.answers().get_date_time(2).unwrap();
        assert_eq!(dt.date, "2024-05-01");
        assert_eq!(dt.time_range, ["09:00", "17:00"]);
    }

    #[test]
    fn returning_to_date_time_restores_inputs() {
        let (mut state, mut quiz) = travel_quiz();
        press(&mut state, &mut quiz, &[KeyCode::Right, KeyCode::Right]);
        quiz.record_date_time_answer("2024-06-02", ["08:00", "12:00"]);
        press(&mut state, &mut quiz, &[KeyCode::Right, KeyCode::Left]);
        assert_eq!(state.date_input, "2024-06-02");
        assert_eq!(state.time_input, "08:00-12:00");
    }

    #[test]
    fn enter_on_last_question_completes_then_finishes() {
        let (mut state, mut quiz) = travel_quiz();
        press(&mut state, &mut quiz, &[KeyCode::Right; 7]);
        assert!(quiz.is_last_question());

        press(&mut state, &mut quiz, &[KeyCode::Enter]);
        assert!(state.complete);
        assert_eq!(state.outcome, None);

        press(&mut state, &mut quiz, &[KeyCode::Enter]);
        assert_eq!(state.outcome, Some(Outcome::Finished));
    }

    #[test]
    fn escape_cancels() {
        let (mut state, mut quiz) = travel_quiz();
        press(&mut state, &mut quiz, &[KeyCode::Esc]);
        assert_eq!(state.outcome, Some(Outcome::Cancelled));
    }

    #[test]
    fn function_keys_replace_lines() {
        let store = Rc::new(RefCell::new(LineStore::initialize()));
        let panel = LinesPanel::attach(Rc::clone(&store));
        let (mut state, mut quiz) = travel_quiz();

        state.handle_key(KeyCode::F(2), &mut quiz, Some(&panel));
        assert!(panel.segments().is_empty());

        state.handle_key(KeyCode::F(3), &mut quiz, Some(&panel));
        assert_eq!(panel.segments(), LineStore::initial_segments());
    }
}
