/// A recorded answer for one question slot.
///
/// Only the date/time picker writes answers today; the enum leaves room for
/// the other kinds without changing the slot type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// A date and time range from the date/time picker.
    DateTime(DateTimeAnswer),
}

impl Answer {
    /// Try to get this answer as a date/time pair.
    pub fn as_date_time(&self) -> Option<&DateTimeAnswer> {
        match self {
            Self::DateTime(dt) => Some(dt),
        }
    }

    /// Get the type name of this answer for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::DateTime(_) => "DateTime",
        }
    }
}

/// The composite value stored for a date/time question.
///
/// Both parts are opaque: they are whatever the picker emitted and are
/// never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTimeAnswer {
    /// The selected date, e.g. `"2024-05-01"`.
    pub date: String,

    /// The selected time range, e.g. `["09:00", "17:00"]`.
    pub time_range: Vec<String>,
}

impl DateTimeAnswer {
    pub fn new<I, S>(date: impl Into<String>, time_range: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            date: date.into(),
            time_range: time_range.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the values look like what a picker normally emits: a
    /// non-empty date and a two-element range.
    ///
    /// Used only to decide whether to log a diagnostic.
    pub fn looks_well_formed(&self) -> bool {
        !self.date.trim().is_empty() && self.time_range.len() == 2
    }
}

impl From<DateTimeAnswer> for Answer {
    fn from(dt: DateTimeAnswer) -> Self {
        Self::DateTime(dt)
    }
}
