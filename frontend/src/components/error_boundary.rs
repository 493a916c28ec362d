use log::error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::registry::LoadError;
use crate::Route;

/// Handed to descendants so they can surface a failure to the nearest boundary.
#[derive(Clone, PartialEq)]
pub struct ErrorReporter(Callback<LoadError>);

impl ErrorReporter {
    pub fn new(callback: Callback<LoadError>) -> Self {
        Self(callback)
    }

    pub fn report(&self, err: LoadError) {
        self.0.emit(err);
    }
}

pub fn fallback_hint(err: &LoadError) -> &'static str {
    match err {
        LoadError::Network { .. } => "Check your connection, then try opening the page again.",
        LoadError::Status { .. } | LoadError::Decode { .. } => {
            "This page is temporarily unavailable. Please try again in a moment."
        }
    }
}

/// What a boundary shows for its current failure state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryView {
    Children,
    Fallback { hint: &'static str },
}

/// Once anything has been reported the boundary stays on its fallback.
pub fn view_for(failure: Option<&LoadError>) -> BoundaryView {
    match failure {
        Some(err) => BoundaryView::Fallback {
            hint: fallback_hint(err),
        },
        None => BoundaryView::Children,
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    #[prop_or_default]
    pub children: Children,
}

/// Renders its children until one of them reports an error, then a generic
/// panel instead. Remount it (e.g. with a `key`) to clear the error.
#[function_component(ErrorBoundary)]
pub fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let failure = use_state(|| None::<LoadError>);
    let reporter = {
        let setter = failure.setter();
        use_memo(
            move |_| {
                ErrorReporter::new(Callback::from(move |err: LoadError| {
                    error!("Error boundary caught: {}", err);
                    setter.set(Some(err));
                }))
            },
            (),
        )
    };

    match view_for((*failure).as_ref()) {
        BoundaryView::Fallback { hint } => html! {
            <div class="error-panel" role="alert">
                <h1>{"Something went wrong"}</h1>
                <p>{hint}</p>
                <Link<Route> to={Route::Home} classes="button primary">
                    {"Back to home"}
                </Link<Route>>
            </div>
        },
        BoundaryView::Children => html! {
            <ContextProvider<ErrorReporter> context={(*reporter).clone()}>
                { for props.children.iter() }
            </ContextProvider<ErrorReporter>>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_reporter_forwards_errors() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let reporter = {
            let seen = seen.clone();
            ErrorReporter::new(Callback::from(move |err: LoadError| seen.borrow_mut().push(err)))
        };
        let err = LoadError::Status {
            what: "careers".to_string(),
            status: 500,
        };

        reporter.report(err.clone());

        assert_eq!(*seen.borrow(), vec![err]);
    }

    #[test]
    fn test_fallback_hint_by_cause() {
        let offline = LoadError::Network {
            what: "pricing".to_string(),
            reason: "Failed to fetch".to_string(),
        };
        let broken = LoadError::Decode {
            what: "pricing".to_string(),
            reason: "expected value".to_string(),
        };
        assert!(fallback_hint(&offline).contains("connection"));
        assert!(fallback_hint(&broken).contains("temporarily unavailable"));
    }

    #[test]
    fn test_boundary_renders_children_until_reported() {
        assert_eq!(view_for(None), BoundaryView::Children);

        let err = LoadError::Network {
            what: "portfolio".to_string(),
            reason: "Failed to fetch".to_string(),
        };
        assert_eq!(
            view_for(Some(&err)),
            BoundaryView::Fallback {
                hint: fallback_hint(&err)
            }
        );
    }
}
