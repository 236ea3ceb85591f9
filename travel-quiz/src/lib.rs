//! # travel-quiz
//!
//! A multi-step quiz state machine with drag-to-rank options, plus an
//! observable store of line segments. Surface-agnostic.
//!
//! ## Usage
//!
//! ```rust
//! use travel_quiz::{QuizController, travel};
//!
//! let mut quiz = QuizController::new(travel::definition()).unwrap();
//!
//! // Swap "Nature" and "History" by dragging the first option onto the third.
//! quiz.start_drag(0);
//! quiz.drop_onto(2);
//!
//! quiz.go_to_next();
//! quiz.go_to_next();
//! assert!(quiz.is_date_time_question());
//! quiz.record_date_time_answer("2024-05-01", ["09:00", "17:00"]);
//!
//! assert_eq!(quiz.progress_label(), "3 / 8");
//! ```
//!
//! ## Pieces
//!
//! - [`QuizController`] - cursor navigation, progress, answers and ranking drags
//! - [`LineStore`] - whole-list replacement with synchronous subscribers
//! - [`QuizSurface`] - trait for anything that renders a quiz and feeds it events
//! - [`ScriptedSurface`] - replays a fixed list of events, for tests
//!
//! ## Surfaces
//!
//! Surfaces are separate crates that implement `QuizSurface`:
//! - `travel-quiz-ratatui` - TUI wizard with a line canvas

// Re-export all types from travel-quiz-types
pub use travel_quiz_types::*;

mod controller;
pub use controller::QuizController;

mod ranking;

mod line_store;
pub use line_store::{LineStore, SubscriptionId};

mod surface;
pub use surface::QuizSurface;

// Scripted surface for running quizzes without user interaction
mod scripted_surface;
pub use scripted_surface::{ScriptError, ScriptedSurface};

pub mod travel;
