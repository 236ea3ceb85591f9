use travel_quiz_types::{Answers, DateTimeAnswer, Question, QuizDefinition, QuizError, QuizEvent};

use crate::QuizSurface;

/// State machine behind a multi-step quiz.
///
/// Owns the questions, the cursor (index of the displayed question), one
/// answer slot per question and the pending ranking drag. Every operation is
/// total: moving past either end is a no-op and the cursor is always a valid
/// index into the questions.
#[derive(Debug, Clone)]
pub struct QuizController {
    definition: QuizDefinition,
    cursor: usize,
    answers: Answers,
    /// Last date emitted by the picker, combined with the next time range.
    pending_date: String,
    /// Option index a ranking drag started on.
    pub(crate) drag_source: Option<usize>,
}

impl QuizController {
    /// Create a controller positioned on the first question.
    ///
    /// Fails with [`QuizError::NoQuestions`] for an empty definition, since
    /// there would be no current question.
    pub fn new(definition: QuizDefinition) -> Result<Self, QuizError> {
        if definition.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        let answers = Answers::new(definition.len());
        tracing::debug!(questions = definition.len(), "quiz controller created");
        Ok(Self {
            definition,
            cursor: 0,
            answers,
            pending_date: String::new(),
            drag_source: None,
        })
    }

    /// Step back one question. No-op on the first question.
    pub fn go_to_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            tracing::debug!(cursor = self.cursor, "moved to previous question");
        }
    }

    /// Step forward one question. No-op on the last question.
    ///
    /// Advancing does not require the current question to be answered.
    pub fn go_to_next(&mut self) {
        if self.cursor < self.len() - 1 {
            self.cursor += 1;
            tracing::debug!(cursor = self.cursor, "moved to next question");
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.definition.questions[self.cursor]
    }

    pub(crate) fn current_question_mut(&mut self) -> &mut Question {
        &mut self.definition.questions[self.cursor]
    }

    pub fn is_first_question(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last_question(&self) -> bool {
        self.cursor == self.len() - 1
    }

    pub fn is_date_time_question(&self) -> bool {
        self.current_question().kind().is_date_time()
    }

    /// `(cursor + 1) / len`, in `(0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        (self.cursor + 1) as f64 / self.len() as f64
    }

    /// [`progress_fraction`](Self::progress_fraction) scaled to `(0, 100]`.
    pub fn progress_percentage(&self) -> f64 {
        self.progress_fraction() * 100.0
    }

    /// `"<cursor + 1> / <len>"`, e.g. `"3 / 8"`.
    pub fn progress_label(&self) -> String {
        format!("{} / {}", self.cursor + 1, self.len())
    }

    /// Store a date and time range as the answer to the current question.
    ///
    /// Both values are stored as given, never validated or rejected.
    pub fn record_date_time_answer<I, S>(&mut self, date: impl Into<String>, time_range: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let answer = DateTimeAnswer::new(date, time_range);
        tracing::debug!(
            cursor = self.cursor,
            date = %answer.date,
            time_range = ?answer.time_range,
            well_formed = answer.looks_well_formed(),
            "recorded date/time answer"
        );
        // cursor < len == answers.len() always holds
        if let Err(err) = self.answers.set(self.cursor, answer) {
            tracing::warn!(error = %err, "answer slot missing");
        }
    }

    /// Remember the date the picker emitted. Nothing is recorded until the
    /// time range arrives.
    pub fn select_date(&mut self, date: impl Into<String>) {
        self.pending_date = date.into();
        tracing::debug!(date = %self.pending_date, "selected date");
    }

    /// Record the pending date together with this time range as the answer
    /// to the current question.
    pub fn select_time_range<I, S>(&mut self, time_range: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let time_range: Vec<String> = time_range.into_iter().map(Into::into).collect();
        tracing::debug!(time_range = ?time_range, "selected time range");
        let date = self.pending_date.clone();
        self.record_date_time_answer(date, time_range);
    }

    /// The date last passed to [`select_date`](Self::select_date).
    pub fn pending_date(&self) -> &str {
        &self.pending_date
    }

    /// Apply one surface event.
    pub fn dispatch(&mut self, event: QuizEvent) {
        match event {
            QuizEvent::Previous => self.go_to_previous(),
            QuizEvent::Next => self.go_to_next(),
            QuizEvent::StartDrag(source) => self.start_drag(source),
            QuizEvent::DropOnto(target) => {
                self.drop_onto(target);
            }
            QuizEvent::SelectDate(date) => self.select_date(date),
            QuizEvent::SelectTimeRange(range) => self.select_time_range(range),
            QuizEvent::RecordDateTime { date, time_range } => {
                self.record_date_time_answer(date, time_range)
            }
        }
    }

    /// Hand the controller to a surface and return the answers once the
    /// surface finishes.
    pub fn run<S: QuizSurface>(&mut self, surface: S) -> Result<&Answers, QuizError> {
        surface.run(self).map_err(Into::into)?;
        Ok(&self.answers)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of questions. Never zero.
    pub fn len(&self) -> usize {
        self.definition.len()
    }

    pub fn questions(&self) -> &[Question] {
        self.definition.questions()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn definition(&self) -> &QuizDefinition {
        &self.definition
    }

    /// Consume the controller, returning the definition (with any ranking
    /// reorder applied) and the answers.
    pub fn into_parts(self) -> (QuizDefinition, Answers) {
        (self.definition, self.answers)
    }
}
