use std::time::Duration;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::{CssStyleDeclaration, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::scroll::policy::{Scheduler, ScrollError, TaskHandle, Viewport};

pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    fn root_style(&self) -> Option<CssStyleDeclaration> {
        let root = self.window.document()?.document_element()?;
        root.dyn_into::<HtmlElement>().ok().map(|el| el.style())
    }
}

impl Viewport for WindowViewport {
    fn scroll_behavior(&self) -> Option<String> {
        self.root_style()?
            .get_property_value("scroll-behavior")
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_scroll_behavior(&self, value: Option<&str>) {
        let Some(style) = self.root_style() else {
            return;
        };
        let result = match value {
            Some(value) => style.set_property("scroll-behavior", value),
            None => style.remove_property("scroll-behavior").map(|_| ()),
        };
        if let Err(err) = result {
            debug!("Could not update scroll-behavior: {:?}", err);
        }
    }

    fn try_scroll_to_instant(&self, x: f64, y: f64) -> Result<(), ScrollError> {
        // Called through Reflect so a throwing scrollTo comes back as Err
        // instead of trapping the wasm module.
        let scroll_to = Reflect::get(&self.window, &JsValue::from_str("scrollTo"))
            .map_err(|err| ScrollError::Threw(format!("{:?}", err)))?
            .dyn_into::<Function>()
            .map_err(|_| ScrollError::Unsupported)?;

        let options = ScrollToOptions::new();
        options.set_left(x);
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Instant);

        scroll_to
            .call1(&self.window, &options)
            .map(|_| ())
            .map_err(|err| ScrollError::Threw(format!("{:?}", err)))
    }

    fn scroll_to(&self, x: f64, y: f64) {
        self.window.scroll_to_with_x_and_y(x, y);
    }
}

/// Schedules tasks on the browser's timer queue.
pub struct TimeoutScheduler;

pub struct TimeoutHandle(Timeout);

impl TaskHandle for TimeoutHandle {
    fn cancel(self) {
        let _ = self.0.cancel();
    }
}

impl Scheduler for TimeoutScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimeoutHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        TimeoutHandle(Timeout::new(millis, task))
    }
}
