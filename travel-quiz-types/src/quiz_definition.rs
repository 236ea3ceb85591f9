use crate::Question;

/// The ordered questions of a quiz plus the messages around them.
///
/// The definition is surface-agnostic: a terminal wizard, a scripted test
/// run and a browser form all consume the same structure.
#[derive(Debug, Clone, Default)]
pub struct QuizDefinition {
    /// Optional message shown before the first question.
    pub prelude: Option<String>,

    /// All questions, in the order they are presented.
    ///
    /// Edit freely while building. Once the definition is handed to a
    /// controller its length is fixed: the controller only reorders the
    /// options of ranking questions.
    pub questions: Vec<Question>,

    /// Optional message shown after the last question.
    pub epilogue: Option<String>,
}

impl QuizDefinition {
    /// Create a new quiz definition with the given questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            prelude: None,
            questions,
            epilogue: None,
        }
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
