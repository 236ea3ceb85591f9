//! Travel planner - the built-in questionnaire in the terminal
//!
//! Demonstrates:
//! - Drag-to-swap ranking (Space to pick up, Space to drop)
//! - Dropdown and single-choice questions
//! - Date and time range entry recorded as an answer
//! - A line canvas following a shared store through a subscription
//!
//! Logs go to a daily file under the system temp directory; set `RUST_LOG`
//! to change the filter (default `travel_quiz=debug`).

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use ratatui::style::Color;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use travel_quiz::{Answer, LineStore, QuizController, QuizError, travel};
use travel_quiz_ratatui::{LinesPanel, RatatuiSurface, Theme};

fn init_logging() -> anyhow::Result<(WorkerGuard, PathBuf)> {
    let log_dir = std::env::temp_dir().join("travel-quiz").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "travel-quiz.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("travel_quiz=debug,travel_quiz_ratatui=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");
    Ok((guard, log_dir))
}

fn main() -> anyhow::Result<()> {
    let (_guard, log_dir) = init_logging()?;

    let store = Rc::new(RefCell::new(LineStore::initialize()));
    let panel = LinesPanel::attach(Rc::clone(&store));

    let theme = Theme {
        primary: Color::LightCyan,
        highlight: Color::LightYellow,
        ..Theme::default()
    };
    let surface = RatatuiSurface::new()
        .with_title("Travel Planner")
        .with_theme(theme)
        .with_lines(panel);

    let mut quiz = QuizController::new(travel::definition())?;
    match quiz.run(&surface) {
        Ok(answers) => {
            println!("\n=== Travel Profile ===\n");
            for (index, slot) in answers.iter().enumerate() {
                if let Some(Answer::DateTime(dt)) = slot {
                    println!("Q{}: {} {:?}", index + 1, dt.date, dt.time_range);
                }
            }
            let ranking = quiz.questions()[travel::ACTIVITY_RANKING]
                .options()
                .unwrap_or_default();
            println!("Activity ranking: {}", ranking.join(" > "));
        }
        Err(QuizError::Cancelled) => {
            eprintln!("Quiz cancelled. Logs: {}", log_dir.display());
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    }

    // The panel inside the surface holds the other reference to the store.
    drop(surface);
    let segments = Rc::try_unwrap(store)
        .map(|store| store.into_inner().dispose())
        .unwrap_or_default();
    println!("Lines at exit: {}", segments.len());
    Ok(())
}
