/// Error type for quiz operations.
///
/// Navigation, ranking and answer recording never fail; errors only come
/// from building a controller or from the surface driving it.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// A quiz needs at least one question to have a current question.
    #[error("Quiz has no questions")]
    NoQuestions,

    /// User cancelled the quiz (Esc, closed window, etc.)
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// Surface-specific failure (I/O, terminal crash, etc.)
    #[error("Surface error: {0}")]
    Surface(#[from] anyhow::Error),
}

impl QuizError {
    /// Create a surface error from any error type.
    pub fn surface(err: impl Into<anyhow::Error>) -> Self {
        Self::Surface(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
