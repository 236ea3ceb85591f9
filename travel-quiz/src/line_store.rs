use std::fmt;

use travel_quiz_types::LineSegment;

/// Handle returned by [`LineStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&[LineSegment])>;

/// Session-wide list of line segments, replaced only as a whole.
///
/// The store is an owned value: create it once with
/// [`initialize`](Self::initialize), lend it to whatever needs it, and end it
/// with [`dispose`](Self::dispose). Readers that must follow replacements
/// subscribe and are called synchronously from
/// [`replace_all`](Self::replace_all), so no reader ever polls.
pub struct LineStore {
    segments: Vec<LineSegment>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl LineStore {
    /// The segments a fresh store starts with.
    pub fn initial_segments() -> Vec<LineSegment> {
        vec![
            LineSegment::new(200.0, 200.0, 400.0, 400.0),
            LineSegment::new(400.0, 400.0, 600.0, 600.0),
        ]
    }

    /// Create the store holding the two initial segments.
    pub fn initialize() -> Self {
        let store = Self {
            segments: Self::initial_segments(),
            subscribers: Vec::new(),
            next_id: 0,
        };
        tracing::debug!(segments = store.segments.len(), "line store initialized");
        store
    }

    /// Discard the current segments and store `segments` verbatim, then
    /// notify every subscriber in subscription order.
    pub fn replace_all(&mut self, segments: Vec<LineSegment>) {
        self.segments = segments;
        tracing::debug!(
            segments = self.segments.len(),
            subscribers = self.subscribers.len(),
            "line store replaced"
        );
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.segments);
        }
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Call `subscriber` with the new segments after every replacement.
    ///
    /// The subscriber is not called with the current segments; read them
    /// with [`segments`](Self::segments) when subscribing.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&[LineSegment]) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Stop notifying a subscriber. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// End the store's lifecycle, dropping all subscribers and returning the
    /// last segments.
    pub fn dispose(self) -> Vec<LineSegment> {
        tracing::debug!(
            segments = self.segments.len(),
            subscribers = self.subscribers.len(),
            "line store disposed"
        );
        self.segments
    }
}

impl Default for LineStore {
    fn default() -> Self {
        Self::initialize()
    }
}

impl fmt::Debug for LineStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineStore")
            .field("segments", &self.segments)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn starts_with_two_segments() {
        let store = LineStore::initialize();
        assert_eq!(
            store.segments(),
            [
                LineSegment::new(200.0, 200.0, 400.0, 400.0),
                LineSegment::new(400.0, 400.0, 600.0, 600.0),
            ]
        );
    }

    #[test]
    fn replace_all_does_not_merge() {
        let mut store = LineStore::initialize();
        store.replace_all(Vec::new());
        assert!(store.is_empty());

        store.replace_all(vec![LineSegment::new(0.0, 0.0, 1.0, 1.0)]);
        assert_eq!(store.segments(), [LineSegment::new(0.0, 0.0, 1.0, 1.0)]);
    }

    #[test]
    fn subscribers_see_replacements_synchronously() {
        let mut store = LineStore::initialize();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |segments| sink.borrow_mut().push(segments.len()));

        store.replace_all(Vec::new());
        store.replace_all(vec![LineSegment::default(); 3]);
        assert_eq!(*seen.borrow(), [0, 3]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = LineStore::initialize();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.replace_all(Vec::new());
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.replace_all(Vec::new());
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn dispose_returns_segments_and_drops_subscribers() {
        let mut store = LineStore::initialize();
        let marker = Rc::new(());
        let held = Rc::clone(&marker);
        store.subscribe(move |_| {
            let _ = Rc::strong_count(&held);
        });
        assert_eq!(Rc::strong_count(&marker), 2);

        let segments = store.dispose();
        assert_eq!(segments.len(), 2);
        assert_eq!(Rc::strong_count(&marker), 1);
    }
}
