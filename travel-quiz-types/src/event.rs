/// An interaction emitted by a rendering surface.
///
/// Surfaces translate clicks, drags and picker callbacks into these and hand
/// them to the controller one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// "Back" was clicked.
    Previous,

    /// "Next" was clicked.
    Next,

    /// A drag started on the ranking option at this index.
    StartDrag(usize),

    /// The dragged ranking option was dropped onto this index.
    DropOnto(usize),

    /// The date picker emitted a date.
    SelectDate(String),

    /// The time-range picker emitted a range.
    SelectTimeRange(Vec<String>),

    /// A picker emitted date and range together.
    RecordDateTime { date: String, time_range: Vec<String> },
}
