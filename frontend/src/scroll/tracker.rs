use std::cell::RefCell;
use std::rc::Rc;

use crate::scroll::policy::{NavigationEvent, NavigationKind};

struct Mark {
    kind: NavigationKind,
    path: String,
}

/// Derives the kind of each location change. The router reports the new
/// location only, so history traversals (`popstate`) and in-app replaces are
/// marked just before they happen and matched against the next observed path.
#[derive(Default)]
pub struct NavigationTracker {
    last_path: Option<String>,
    mark: Option<Mark>,
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

impl NavigationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, kind: NavigationKind, path: &str) {
        self.mark = Some(Mark {
            kind,
            path: normalize(path).to_string(),
        });
    }

    /// Returns the navigation event for a newly observed location, or `None`
    /// if the path did not change.
    pub fn observe(&mut self, path: &str) -> Option<NavigationEvent> {
        let path = normalize(path);
        let mark = self.mark.take();

        let kind = match self.last_path.as_deref() {
            // Initial document load: leave any restored position alone.
            None => NavigationKind::Pop,
            Some(last) if last == path => return None,
            Some(_) => match mark {
                Some(mark) if mark.path == path => mark.kind,
                _ => NavigationKind::Push,
            },
        };

        self.last_path = Some(path.to_string());
        Some(NavigationEvent::new(path, kind))
    }
}

/// Shared handle to the app's tracker. Compared by identity.
#[derive(Clone, Default)]
pub struct NavigationMarks(Rc<RefCell<NavigationTracker>>);

impl PartialEq for NavigationMarks {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl NavigationMarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_pop(&self, path: &str) {
        self.0.borrow_mut().mark(NavigationKind::Pop, path);
    }

    pub fn mark_replace(&self, path: &str) {
        self.0.borrow_mut().mark(NavigationKind::Replace, path);
    }

    pub fn observe(&self, path: &str) -> Option<NavigationEvent> {
        self.0.borrow_mut().observe(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_load_is_pop() {
        let mut tracker = NavigationTracker::new();
        let event = tracker.observe("/pricing").unwrap();
        assert_eq!(event, NavigationEvent::new("/pricing", NavigationKind::Pop));
    }

    #[test]
    fn test_unmarked_change_is_push() {
        let mut tracker = NavigationTracker::new();
        tracker.observe("/");
        let event = tracker.observe("/services").unwrap();
        assert_eq!(event.kind, NavigationKind::Push);
    }

    #[test]
    fn test_marked_pop_and_replace() {
        let mut tracker = NavigationTracker::new();
        tracker.observe("/");
        tracker.observe("/pricing");

        tracker.mark(NavigationKind::Pop, "/");
        assert_eq!(tracker.observe("/").unwrap().kind, NavigationKind::Pop);

        tracker.mark(NavigationKind::Replace, "/portfolio");
        assert_eq!(tracker.observe("/portfolio").unwrap().kind, NavigationKind::Replace);
    }

    #[test]
    fn test_same_path_is_not_a_navigation() {
        let mut tracker = NavigationTracker::new();
        tracker.observe("/careers");
        assert!(tracker.observe("/careers/").is_none());
    }

    #[test]
    fn test_mark_for_other_path_is_discarded() {
        let mut tracker = NavigationTracker::new();
        tracker.observe("/");
        // popstate for an in-page anchor never produces a location change
        tracker.mark(NavigationKind::Pop, "/");
        assert!(tracker.observe("/").is_none());

        tracker.mark(NavigationKind::Pop, "/terms");
        assert_eq!(tracker.observe("/contact").unwrap().kind, NavigationKind::Push);
        assert_eq!(tracker.observe("/terms").unwrap().kind, NavigationKind::Push);
    }

    #[test]
    fn test_marks_handle_shares_tracker() {
        let marks = NavigationMarks::new();
        let other = marks.clone();
        assert!(marks == other);
        assert!(marks != NavigationMarks::new());

        marks.observe("/");
        other.mark_pop("/privacy");
        assert_eq!(marks.observe("/privacy").unwrap().kind, NavigationKind::Pop);
    }
}
