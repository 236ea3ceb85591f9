//! # travel-quiz-ratatui
//!
//! Terminal surface for `travel-quiz`, built on ratatui and crossterm.
//!
//! ```rust,ignore
//! use travel_quiz::{QuizController, travel};
//! use travel_quiz_ratatui::RatatuiSurface;
//!
//! let mut quiz = QuizController::new(travel::definition())?;
//! let answers = quiz.run(RatatuiSurface::new().with_title("Trip planner"))?;
//! ```
//!
//! ## Keys
//! - `↑`/`↓` - move the highlight (or switch date/time field)
//! - `Space` - pick up a ranking option, then drop it onto the highlighted slot
//! - `Enter` - next question (saves typed date/time first)
//! - `←`/`→` - previous / next question without saving
//! - `F2`/`F3` - clear / reset the line panel
//! - `Esc` - cancel

mod backend;
pub use backend::{RatatuiError, RatatuiSurface, Theme};

mod lines;
pub use lines::LinesPanel;
