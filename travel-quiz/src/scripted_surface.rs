//! Scripted surface for running quizzes without user interaction.
//!
//! `ScriptedSurface` replays a fixed sequence of [`QuizEvent`]s against a
//! controller. This is useful for testing quiz flows end to end.
//!
//! # Example
//!
//! ```rust
//! use travel_quiz::{QuizController, ScriptedSurface, travel};
//!
//! let mut quiz = QuizController::new(travel::definition()).unwrap();
//! let answers = quiz
//!     .run(
//!         ScriptedSurface::new()
//!             .click_next()
//!             .click_next()
//!             .date_time("2024-05-01", ["09:00", "17:00"]),
//!     )
//!     .unwrap();
//!
//! assert_eq!(answers.get_date_time(2).unwrap().date, "2024-05-01");
//! ```

use travel_quiz_types::{QuizError, QuizEvent};

use crate::{QuizController, QuizSurface};

/// A surface that replays pre-configured events.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSurface {
    events: Vec<QuizEvent>,
    cancel: bool,
    require_finished: bool,
}

/// Error type for ScriptedSurface.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Script cancelled after {applied} events")]
    Cancelled { applied: usize },

    #[error("Script ended on question {cursor} of {len}, not the last one")]
    Unfinished { cursor: usize, len: usize },
}

impl From<ScriptError> for QuizError {
    fn from(err: ScriptError) -> Self {
        match err {
            ScriptError::Cancelled { .. } => QuizError::Cancelled,
            other => QuizError::surface(other),
        }
    }
}

impl ScriptedSurface {
    /// Create a new empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary event.
    pub fn event(mut self, event: QuizEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Append several events.
    pub fn events(mut self, events: impl IntoIterator<Item = QuizEvent>) -> Self {
        self.events.extend(events);
        self
    }

    /// Append a "Next" click.
    pub fn click_next(self) -> Self {
        self.event(QuizEvent::Next)
    }

    /// Append a "Back" click.
    pub fn click_back(self) -> Self {
        self.event(QuizEvent::Previous)
    }

    /// Append a drag from `source` dropped onto `target`.
    pub fn drag(self, source: usize, target: usize) -> Self {
        self.event(QuizEvent::StartDrag(source))
            .event(QuizEvent::DropOnto(target))
    }

    /// Append a date pick followed by a time-range pick.
    pub fn date_time<I, S>(self, date: impl Into<String>, time_range: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event(QuizEvent::SelectDate(date.into()))
            .event(QuizEvent::SelectTimeRange(
                time_range.into_iter().map(Into::into).collect(),
            ))
    }

    /// Fail with [`ScriptError::Cancelled`] after replaying the events,
    /// like a user pressing Esc.
    pub fn cancel(mut self) -> Self {
        self.cancel = true;
        self
    }

    /// Fail with [`ScriptError::Unfinished`] unless the script leaves the
    /// controller on the last question.
    pub fn require_finished(mut self) -> Self {
        self.require_finished = true;
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl QuizSurface for ScriptedSurface {
    type Error = ScriptError;

    fn run(&self, controller: &mut QuizController) -> Result<(), Self::Error> {
        for event in &self.events {
            tracing::trace!(?event, cursor = controller.cursor(), "replaying event");
            controller.dispatch(event.clone());
        }

        if self.cancel {
            return Err(ScriptError::Cancelled {
                applied: self.events.len(),
            });
        }

        if self.require_finished && !controller.is_last_question() {
            return Err(ScriptError::Unfinished {
                cursor: controller.cursor(),
                len: controller.len(),
            });
        }

        Ok(())
    }
}
