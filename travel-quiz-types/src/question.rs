/// A single question in a quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The prompt text shown to the user.
    text: String,

    /// The kind of question (determines the control and whether options exist).
    kind: QuestionKind,
}

impl Question {
    /// Create a new question.
    pub fn new(text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Create a single-select question.
    pub fn choice<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(text, QuestionKind::Choice(ChoiceQuestion::new(options)))
    }

    /// Create a question whose options are reordered by dragging.
    pub fn ranking<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(text, QuestionKind::Ranking(RankingQuestion::new(options)))
    }

    /// Create a single-select question rendered as a dropdown.
    pub fn dropdown<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(text, QuestionKind::Dropdown(DropdownQuestion::new(options)))
    }

    /// Create a date plus time-range question.
    pub fn date_time(text: impl Into<String>) -> Self {
        Self::new(text, QuestionKind::DateTime(DateTimeQuestion))
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get the options, if this kind has any.
    ///
    /// Date/time questions have no options and return `None`.
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            QuestionKind::Choice(q) => Some(q.options.as_slice()),
            QuestionKind::Ranking(q) => Some(q.options.as_slice()),
            QuestionKind::Dropdown(q) => Some(q.options.as_slice()),
            QuestionKind::DateTime(_) => None,
        }
    }

    /// Get mutable access to the options of a ranking question.
    ///
    /// Ranking is the only kind whose option order may change, so every
    /// other kind returns `None`.
    pub fn ranking_options_mut(&mut self) -> Option<&mut [String]> {
        match &mut self.kind {
            QuestionKind::Ranking(q) => Some(q.options.as_mut_slice()),
            _ => None,
        }
    }
}

/// The kind of question, determining the control used to answer it.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Pick one option from a list.
    Choice(ChoiceQuestion),

    /// Reorder the options by dragging one onto another.
    Ranking(RankingQuestion),

    /// Pick one option from a dropdown.
    Dropdown(DropdownQuestion),

    /// Pick a date and a time range.
    DateTime(DateTimeQuestion),
}

impl QuestionKind {
    /// Check if this is a date/time question.
    pub fn is_date_time(&self) -> bool {
        matches!(self, Self::DateTime(_))
    }

    /// Check if this is a ranking question.
    pub fn is_ranking(&self) -> bool {
        matches!(self, Self::Ranking(_))
    }

    /// Short lowercase tag, used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Choice(_) => "choice",
            Self::Ranking(_) => "ranking",
            Self::Dropdown(_) => "dropdown",
            Self::DateTime(_) => "datetime",
        }
    }
}

/// Configuration for a single-select question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceQuestion {
    /// The options, in display order.
    pub options: Vec<String>,
}

impl ChoiceQuestion {
    /// Create a new choice question with the given options.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Configuration for a drag-to-rank question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingQuestion {
    /// The options, in their current rank order.
    pub options: Vec<String>,
}

impl RankingQuestion {
    /// Create a new ranking question with the given initial order.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Configuration for a dropdown question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownQuestion {
    /// The options, in display order.
    pub options: Vec<String>,
}

impl DropdownQuestion {
    /// Create a new dropdown question with the given options.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Configuration for a date plus time-range question.
///
/// The date and range come from whatever picker the surface provides;
/// nothing about their format is configured here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimeQuestion;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_time_has_no_options() {
        let question = Question::date_time("When?");
        assert!(question.options().is_none());
        assert!(question.kind().is_date_time());
        assert_eq!(question.kind().name(), "datetime");
    }

    #[test]
    fn only_ranking_options_are_mutable() {
        let mut choice = Question::choice("Pick", ["a", "b"]);
        assert!(choice.ranking_options_mut().is_none());

        let mut ranking = Question::ranking("Rank", ["a", "b"]);
        let options = ranking.ranking_options_mut().unwrap();
        options.swap(0, 1);
        assert_eq!(ranking.options().unwrap(), ["b", "a"]);
    }

    #[test]
    fn dropdown_keeps_option_order() {
        let question = Question::dropdown("How many?", ["1-2", "3-5", "5+"]);
        assert_eq!(question.options().unwrap(), ["1-2", "3-5", "5+"]);
        assert_eq!(question.kind().name(), "dropdown");
    }
}
