//! Core types for the travel-quiz crate.
//!
//! This crate provides the foundational types for defining quizzes:
//! - `QuizDefinition` - The ordered questions plus prelude/epilogue
//! - `Question` and `QuestionKind` - Individual questions and their controls
//! - `Answers` and `Answer` - One answer slot per question
//! - `QuizEvent` - Interactions emitted by a rendering surface
//! - `LineSegment` - The values held by the line-segment store

mod answer;
pub use answer::{Answer, DateTimeAnswer};

mod answers;
pub use answers::{AnswerError, Answers};

mod question;
pub use question::{
    ChoiceQuestion, DateTimeQuestion, DropdownQuestion, Question, QuestionKind, RankingQuestion,
};

mod quiz_definition;
pub use quiz_definition::QuizDefinition;

mod event;
pub use event::QuizEvent;

mod line_segment;
pub use line_segment::LineSegment;

mod error;
pub use error::QuizError;
