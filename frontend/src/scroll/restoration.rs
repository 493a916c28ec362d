use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::ScrollConfig;
use crate::scroll::browser::{TimeoutScheduler, WindowViewport};
use crate::scroll::policy::ScrollCoordinator;
use crate::scroll::tracker::NavigationMarks;

/// Marks every history traversal as a `Pop` before the router sees it.
/// Must run before the router mounts so this listener fires first.
pub fn listen_for_popstate(marks: &NavigationMarks) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let marks = marks.clone();
    let listener_window = window.clone();
    let on_popstate = Closure::wrap(Box::new(move || {
        let path = listener_window.location().pathname().unwrap_or_default();
        marks.mark_pop(&path);
    }) as Box<dyn FnMut()>);

    if let Err(err) =
        window.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())
    {
        warn!("Could not listen for popstate: {:?}", err);
        return;
    }
    // Lives as long as the page.
    on_popstate.forget();
}

#[derive(Properties, PartialEq)]
pub struct ScrollRestorationProps {
    pub marks: NavigationMarks,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ScrollRestoration)]
pub fn scroll_restoration(props: &ScrollRestorationProps) -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    let coordinator = use_memo(
        |_| {
            WindowViewport::new()
                .map(|viewport| ScrollCoordinator::new(viewport, TimeoutScheduler, ScrollConfig::default()))
        },
        (),
    );

    {
        let marks = props.marks.clone();
        let coordinator = coordinator.clone();
        use_effect_with_deps(
            move |path: &String| {
                if let Some(event) = marks.observe(path) {
                    match &*coordinator {
                        Some(coordinator) => {
                            let intent = coordinator.on_navigation(&event);
                            debug!(
                                "Navigation {:?} to {}: {:?}, policy {:?}",
                                coordinator.latest(),
                                event.path,
                                intent,
                                coordinator.state()
                            );
                        }
                        None => debug!("No window, skipping scroll policy for {}", event.path),
                    }
                }
                || ()
            },
            path,
        );
    }

    {
        let coordinator = coordinator.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if let Some(coordinator) = &*coordinator {
                        coordinator.teardown();
                    }
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<NavigationMarks> context={props.marks.clone()}>
            { for props.children.iter() }
        </ContextProvider<NavigationMarks>>
    }
}
