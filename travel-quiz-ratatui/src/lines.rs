//! Canvas panel that mirrors a [`LineStore`].

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Line as CanvasLine},
    },
};
use travel_quiz::{LineSegment, LineStore, SubscriptionId};

use crate::Theme;

/// Smallest extent drawn on either axis, so the two initial segments fit.
const MIN_EXTENT: f64 = 800.0;

/// A view of a shared line store.
///
/// The panel keeps its own copy of the segments, refreshed by a store
/// subscription, so drawing never borrows the store.
#[derive(Debug, Clone)]
pub struct LinesPanel {
    store: Rc<RefCell<LineStore>>,
    snapshot: Rc<RefCell<Vec<LineSegment>>>,
    subscription: SubscriptionId,
}

impl LinesPanel {
    /// Subscribe to `store` and take an initial copy of its segments.
    pub fn attach(store: Rc<RefCell<LineStore>>) -> Self {
        let snapshot = Rc::new(RefCell::new(store.borrow().segments().to_vec()));
        let sink = Rc::clone(&snapshot);
        let subscription = store.borrow_mut().subscribe(move |segments| {
            *sink.borrow_mut() = segments.to_vec();
        });
        Self {
            store,
            snapshot,
            subscription,
        }
    }

    /// Stop following the store.
    pub fn detach(self) -> bool {
        self.store.borrow_mut().unsubscribe(self.subscription)
    }

    /// The segments as of the last replacement.
    pub fn segments(&self) -> Vec<LineSegment> {
        self.snapshot.borrow().clone()
    }

    /// Replace the store's contents; the snapshot follows via the subscription.
    pub fn replace_all(&self, segments: Vec<LineSegment>) {
        self.store.borrow_mut().replace_all(segments);
    }

    /// Put the store back to its initial two segments.
    pub fn reset(&self) {
        self.replace_all(LineStore::initial_segments());
    }

    pub fn clear(&self) {
        self.replace_all(Vec::new());
    }

    pub(crate) fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let segments = self.snapshot.borrow();
        let (max_x, max_y) = segments.iter().fold((MIN_EXTENT, MIN_EXTENT), |(mx, my), s| {
            (mx.max(s.x1).max(s.x2), my.max(s.y1).max(s.y2))
        });

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border))
                    .title(format!(" Lines ({}) ", segments.len()))
                    .title_style(Style::default().fg(theme.secondary)),
            )
            .x_bounds([0.0, max_x])
            .y_bounds([0.0, max_y])
            .paint(|ctx| {
                for segment in segments.iter() {
                    ctx.draw(&CanvasLine {
                        x1: segment.x1,
                        y1: segment.y1,
                        x2: segment.x2,
                        y2: segment.y2,
                        color: theme.primary,
                    });
                }
            });
        frame.render_widget(canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_follows_store() {
        let store = Rc::new(RefCell::new(LineStore::initialize()));
        let panel = LinesPanel::attach(Rc::clone(&store));
        assert_eq!(panel.segments().len(), 2);

        store
            .borrow_mut()
            .replace_all(vec![LineSegment::new(0.0, 0.0, 1.0, 1.0)]);
        assert_eq!(panel.segments(), [LineSegment::new(0.0, 0.0, 1.0, 1.0)]);

        panel.clear();
        assert!(panel.segments().is_empty());
        assert!(store.borrow().is_empty());

        panel.reset();
        assert_eq!(panel.segments(), LineStore::initial_segments());
    }

    #[test]
    fn detach_unsubscribes() {
        let store = Rc::new(RefCell::new(LineStore::initialize()));
        let panel = LinesPanel::attach(Rc::clone(&store));
        let watcher = panel.clone();
        assert!(panel.detach());

        store.borrow_mut().replace_all(Vec::new());
        assert_eq!(watcher.segments().len(), 2);
        assert_eq!(store.borrow().subscriber_count(), 0);
    }
}
