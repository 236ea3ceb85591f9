use travel_quiz_types::QuizError;

use crate::QuizController;

/// Trait for rendering surfaces that drive a quiz.
///
/// A surface presents the controller's current question, turns user
/// interaction into controller operations (navigation, drags, picker
/// values) and returns once the user finishes. It decides how to present
/// the quiz (terminal wizard, scripted replay, etc.); the controller owns
/// all state.
pub trait QuizSurface {
    /// The error type for this surface. Cancellation should convert to
    /// [`QuizError::Cancelled`].
    type Error: Into<QuizError>;

    /// Drive `controller` until the user finishes.
    ///
    /// # Returns
    /// * `Ok(())` when the user finished; answers are read from the controller
    /// * `Err` on cancellation or surface failure
    fn run(&self, controller: &mut QuizController) -> Result<(), Self::Error>;
}

impl<S: QuizSurface + ?Sized> QuizSurface for &S {
    type Error = S::Error;

    fn run(&self, controller: &mut QuizController) -> Result<(), Self::Error> {
        (**self).run(controller)
    }
}
