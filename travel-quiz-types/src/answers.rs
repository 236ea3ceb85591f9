use crate::{Answer, DateTimeAnswer};

/// Error type for answer slot access.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("No answer slot at index {index} (quiz has {len} questions)")]
    OutOfRange { index: usize, len: usize },

    #[error("Question {0} has not been answered")]
    Unanswered(usize),
}

/// Collected answers of a quiz, one slot per question.
///
/// Every slot starts unanswered (`None`). The number of slots is fixed at
/// creation and matches the number of questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    slots: Vec<Option<Answer>>,
}

impl Answers {
    /// Create `len` unanswered slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Store an answer in the given slot, replacing any previous one.
    pub fn set(&mut self, index: usize, answer: impl Into<Answer>) -> Result<(), AnswerError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(AnswerError::OutOfRange { index, len })?;
        *slot = Some(answer.into());
        Ok(())
    }

    /// Get the answer in the given slot, if any.
    pub fn get(&self, index: usize) -> Option<&Answer> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Clear the given slot back to unanswered. Returns the previous answer.
    pub fn clear(&mut self, index: usize) -> Option<Answer> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Number of slots holding an answer.
    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterate over all slots in question order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Answer>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Number of slots (equal to the number of questions).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get the date/time answer in the given slot.
    pub fn get_date_time(&self, index: usize) -> Result<&DateTimeAnswer, AnswerError> {
        match self.slots.get(index) {
            Some(Some(Answer::DateTime(dt))) => Ok(dt),
            Some(None) => Err(AnswerError::Unanswered(index)),
            None => Err(AnswerError::OutOfRange {
                index,
                len: self.slots.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unanswered() {
        let answers = Answers::new(8);
        assert_eq!(answers.len(), 8);
        assert_eq!(answers.answered_count(), 0);
        assert!(answers.iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn set_and_get_date_time() {
        let mut answers = Answers::new(3);
        answers
            .set(2, DateTimeAnswer::new("2024-05-01", ["09:00", "17:00"]))
            .unwrap();

        let dt = answers.get_date_time(2).unwrap();
        assert_eq!(dt.date, "2024-05-01");
        assert_eq!(dt.time_range, ["09:00", "17:00"]);
        assert_eq!(answers.answered_count(), 1);
    }

    #[test]
    fn set_out_of_range() {
        let mut answers = Answers::new(2);
        let result = answers.set(2, DateTimeAnswer::default());
        assert!(matches!(
            result,
            Err(AnswerError::OutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn unanswered_error() {
        let answers = Answers::new(2);
        assert!(matches!(
            answers.get_date_time(1),
            Err(AnswerError::Unanswered(1))
        ));
    }

    #[test]
    fn clear_slot() {
        let mut answers = Answers::new(1);
        answers.set(0, DateTimeAnswer::new("d", ["a", "b"])).unwrap();
        assert!(answers.clear(0).is_some());
        assert!(!answers.is_answered(0));
    }
}
