//! Drag-to-swap reordering of the current ranking question's options.
//!
//! Dropping option A onto slot B exchanges A and B; nothing between them
//! shifts. The drag source survives the drop and navigation, and is only
//! replaced by the next [`start_drag`](QuizController::start_drag).

use crate::QuizController;

impl QuizController {
    /// Remember `source` as the option being dragged.
    pub fn start_drag(&mut self, source: usize) {
        self.drag_source = Some(source);
        tracing::debug!(source, "drag started");
    }

    /// Swap the dragged option with the option at `target`.
    ///
    /// Returns `true` if a swap happened. Dropping without a pending drag,
    /// on a question that is not a ranking question, or with an index past
    /// the end of the options is a no-op.
    pub fn drop_onto(&mut self, target: usize) -> bool {
        let Some(source) = self.drag_source else {
            tracing::debug!(target, "drop without a pending drag ignored");
            return false;
        };
        let cursor = self.cursor();
        let Some(options) = self.current_question_mut().ranking_options_mut() else {
            tracing::warn!(cursor, target, "drop on a non-ranking question ignored");
            return false;
        };
        if source >= options.len() || target >= options.len() {
            tracing::warn!(
                source,
                target,
                options = options.len(),
                "drop index out of range ignored"
            );
            return false;
        }
        options.swap(source, target);
        tracing::debug!(source, target, "swapped ranking options");
        true
    }

    /// Option index of the pending drag, if one was started.
    pub fn drag_source(&self) -> Option<usize> {
        self.drag_source
    }
}

#[cfg(test)]
mod tests {
    use travel_quiz_types::{Question, QuizDefinition, QuizEvent};

    use crate::QuizController;

    fn ranking_quiz() -> QuizController {
        QuizController::new(QuizDefinition::new(vec![
            Question::ranking("Rank", ["Nature", "Art", "History"]),
            Question::choice("Pick", ["Indoor", "Outdoor"]),
        ]))
        .unwrap()
    }

    fn options(quiz: &QuizController) -> Vec<String> {
        quiz.questions()[0].options().unwrap().to_vec()
    }

    #[test]
    fn drop_swaps_source_and_target() {
        let mut quiz = ranking_quiz();
        quiz.start_drag(0);
        assert!(quiz.drop_onto(2));
        assert_eq!(options(&quiz), ["History", "Art", "Nature"]);
    }

    #[test]
    fn drop_without_drag_is_noop() {
        let mut quiz = ranking_quiz();
        assert!(!quiz.drop_onto(1));
        assert_eq!(options(&quiz), ["Nature", "Art", "History"]);
    }

    #[test]
    fn drag_source_survives_drop() {
        let mut quiz = ranking_quiz();
        quiz.start_drag(1);
        quiz.drop_onto(0);
        assert_eq!(quiz.drag_source(), Some(1));

        // Second drop reuses the same source slot, which now holds "Nature".
        quiz.drop_onto(2);
        assert_eq!(options(&quiz), ["Art", "History", "Nature"]);
    }

    #[test]
    fn drop_onto_self_keeps_order() {
        let mut quiz = ranking_quiz();
        quiz.start_drag(1);
        assert!(quiz.drop_onto(1));
        assert_eq!(options(&quiz), ["Nature", "Art", "History"]);
    }

    #[test]
    fn drop_on_non_ranking_question_is_noop() {
        let mut quiz = ranking_quiz();
        quiz.start_drag(0);
        quiz.go_to_next();
        assert!(!quiz.drop_onto(1));
        assert_eq!(quiz.questions()[1].options().unwrap(), ["Indoor", "Outdoor"]);
    }

    #[test]
    fn out_of_range_drop_is_noop() {
        let mut quiz = ranking_quiz();
        quiz.start_drag(5);
        assert!(!quiz.drop_onto(0));
        quiz.start_drag(0);
        assert!(!quiz.drop_onto(3));
        assert_eq!(options(&quiz), ["Nature", "Art", "History"]);
    }

    #[test]
    fn events_drive_the_drag() {
        let mut quiz = ranking_quiz();
        quiz.dispatch(QuizEvent::StartDrag(2));
        quiz.dispatch(QuizEvent::DropOnto(0));
        assert_eq!(options(&quiz), ["History", "Art", "Nature"]);
    }
}
