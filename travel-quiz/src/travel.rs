//! The built-in travel-preferences questionnaire.

use travel_quiz_types::{Question, QuizDefinition};

/// Index of the activity ranking question.
pub const ACTIVITY_RANKING: usize = 0;

/// Index of the travel date/time question.
pub const TRAVEL_TIME: usize = 2;

/// Index of the number-of-travelers dropdown.
pub const TRAVELERS: usize = 4;

/// Build the eight-question travel questionnaire.
pub fn definition() -> QuizDefinition {
    QuizDefinition::new(questions())
        .with_prelude("Tell us how you like to travel.")
        .with_epilogue("Thanks! Your travel profile is complete.")
}

/// The questions of [`definition`], without prelude or epilogue.
pub fn questions() -> Vec<Question> {
    vec![
        Question::ranking(
            "What kind of activity do you prefer? (Drag items to rank)",
            [
                "Nature", "Art", "History", "Food", "Religion", "Sport", "Shopping",
            ],
        ),
        Question::choice(
            "Do you prefer indoor or outdoor activities?",
            ["Indoor", "Outdoor", "50/50"],
        ),
        Question::date_time("What is your time of travel?"),
        Question::choice(
            "Any disabilities?",
            ["Blind", "With wheelchair", "Deaf", "No"],
        ),
        Question::dropdown("Total numbers of travelers?", ["1-2", "3-5", "5+"]),
        Question::choice(
            "What is your budget per person?",
            ["Below 50€", "50-100€", "Above 100€"],
        ),
        Question::choice(
            "How do you like to travel?",
            ["Self-driving", "Public transport", "Cycling"],
        ),
        Question::choice("Is this your first time here?", ["Yes", "No"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_questions() {
        assert_eq!(definition().len(), 8);
    }

    #[test]
    fn indexed_kinds() {
        let questions = questions();
        assert!(questions[ACTIVITY_RANKING].kind().is_ranking());
        assert!(questions[TRAVEL_TIME].kind().is_date_time());
        assert_eq!(questions[TRAVELERS].kind().name(), "dropdown");
        assert_eq!(
            questions.iter().filter(|q| q.kind().is_date_time()).count(),
            1
        );
    }
}
