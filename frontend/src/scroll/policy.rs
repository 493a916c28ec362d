//! Reset-to-top policy for route transitions.
//!
//! Forward navigations (`Push`, `Replace`) jump the viewport to the top twice:
//! once right after the new route is committed and once more after a short
//! delay, for content that grows the page after first paint. Back/forward
//! (`Pop`) never writes, so the browser's own restoration stays in charge.
//!
//! Every observed navigation advances a [`NavigationId`]. A delayed
//! correction carries the id it was scheduled for and is both cancelled
//! through its [`TaskHandle`] and checked against the latest id before it
//! writes, so a superseded navigation can never move the viewport.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::config::ScrollConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Push,
    Replace,
    Pop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub path: String,
    pub kind: NavigationKind,
}

impl NavigationEvent {
    pub fn new(path: impl Into<String>, kind: NavigationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollIntent {
    ResetToTop,
    PreserveBrowserPosition,
}

impl ScrollIntent {
    pub fn for_kind(kind: NavigationKind) -> Self {
        match kind {
            NavigationKind::Push | NavigationKind::Replace => ScrollIntent::ResetToTop,
            NavigationKind::Pop => ScrollIntent::PreserveBrowserPosition,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyState {
    AtRest,
    Transitioning,
}

/// Sequence number of an observed navigation. Only the latest one may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NavigationId(u64);

impl NavigationId {
    fn next(self) -> Self {
        NavigationId(self.0 + 1)
    }
}

#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("instant scroll options are not supported")]
    Unsupported,
    #[error("scrollTo threw: {0}")]
    Threw(String),
}

/// The page's scroll position and its smooth-scrolling style.
pub trait Viewport {
    /// Inline `scroll-behavior` of the root element, if one is set.
    fn scroll_behavior(&self) -> Option<String>;
    /// Set the inline `scroll-behavior`, or remove it with `None`.
    fn set_scroll_behavior(&self, value: Option<&str>);
    /// Jump without animation using the options form of `scrollTo`.
    fn try_scroll_to_instant(&self, x: f64, y: f64) -> Result<(), ScrollError>;
    /// Plain `scrollTo(x, y)`, available everywhere.
    fn scroll_to(&self, x: f64, y: f64);
}

/// Handle to a scheduled task. Cancelling guarantees the task will not run.
pub trait TaskHandle {
    fn cancel(self);
}

pub trait Scheduler {
    type Handle: TaskHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

struct PendingCorrection<H> {
    id: NavigationId,
    handle: H,
}

struct Inner<V, S: Scheduler> {
    viewport: V,
    scheduler: S,
    config: ScrollConfig,
    latest: Cell<NavigationId>,
    state: Cell<PolicyState>,
    pending: RefCell<Option<PendingCorrection<S::Handle>>>,
}

impl<V: Viewport, S: Scheduler> Inner<V, S> {
    fn advance(&self) -> NavigationId {
        let id = self.latest.get().next();
        self.latest.set(id);
        id
    }

    /// Cancels the outstanding delayed correction. Returns whether one existed.
    fn cancel_pending(&self) -> bool {
        let pending = self.pending.borrow_mut().take();
        match pending {
            Some(pending) => {
                debug!("Cancelling scroll correction for navigation {:?}", pending.id);
                pending.handle.cancel();
                true
            }
            None => false,
        }
    }

    fn reset(&self) {
        let previous = self.viewport.scroll_behavior();
        self.viewport.set_scroll_behavior(Some("auto"));
        if let Err(err) = self.viewport.try_scroll_to_instant(0.0, 0.0) {
            debug!("Instant scroll unavailable ({}), using plain scrollTo", err);
            self.viewport.scroll_to(0.0, 0.0);
        }
        self.viewport.set_scroll_behavior(previous.as_deref());
    }

    fn run_correction(&self, id: NavigationId) {
        if self.latest.get() != id {
            debug!("Dropping stale scroll correction for navigation {:?}", id);
            return;
        }
        self.reset();
        self.pending.borrow_mut().take();
        self.state.set(PolicyState::AtRest);
    }
}

/// Sole programmatic writer of the viewport scroll offset.
pub struct ScrollCoordinator<V, S: Scheduler> {
    inner: Rc<Inner<V, S>>,
}

impl<V, S> ScrollCoordinator<V, S>
where
    V: Viewport + 'static,
    S: Scheduler + 'static,
{
    pub fn new(viewport: V, scheduler: S, config: ScrollConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                viewport,
                scheduler,
                config,
                latest: Cell::new(NavigationId::default()),
                state: Cell::new(PolicyState::AtRest),
                pending: RefCell::new(None),
            }),
        }
    }

    pub fn state(&self) -> PolicyState {
        self.inner.state.get()
    }

    pub fn latest(&self) -> NavigationId {
        self.inner.latest.get()
    }

    /// Applies the policy for one navigation and returns the intent it acted on.
    pub fn on_navigation(&self, event: &NavigationEvent) -> ScrollIntent {
        let id = self.inner.advance();
        let superseded = self.inner.cancel_pending();
        let intent = ScrollIntent::for_kind(event.kind);

        match intent {
            ScrollIntent::PreserveBrowserPosition => {
                debug!("{:?} to {}: leaving scroll to the browser", event.kind, event.path);
                if superseded {
                    self.inner.state.set(PolicyState::AtRest);
                }
            }
            ScrollIntent::ResetToTop => {
                debug!("{:?} to {}: resetting scroll", event.kind, event.path);
                self.inner.state.set(PolicyState::Transitioning);
                self.inner.reset();

                let weak = Rc::downgrade(&self.inner);
                let handle = self.inner.scheduler.schedule(
                    self.inner.config.correction_delay,
                    Box::new(move || {
                        if let Some(inner) = weak.upgrade() {
                            inner.run_correction(id);
                        }
                    }),
                );
                *self.inner.pending.borrow_mut() = Some(PendingCorrection { id, handle });
            }
        }

        intent
    }

    /// Drops any pending correction and settles. Called when the owner unmounts.
    pub fn teardown(&self) {
        self.inner.advance();
        self.inner.cancel_pending();
        self.inner.state.set(PolicyState::AtRest);
    }
}
