use futures::FutureExt;
use log::{debug, error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::error_boundary::{ErrorBoundary, ErrorReporter};
use crate::components::loading::LoadingIndicator;
use crate::config;
use crate::routing::registry::LoadError;
use crate::routing::table::{redirect_for, PageModule, SiteRoutes};
use crate::scroll::tracker::NavigationMarks;
use crate::seo;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct RouteOutletProps {
    pub routes: SiteRoutes,
}

/// Renders whatever the route table resolves the current path to.
#[function_component(RouteOutlet)]
pub fn route_outlet(props: &RouteOutletProps) -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    if let Some(to) = redirect_for(&path) {
        return html! { <LegacyRedirect {to} /> };
    }

    // Keyed on the path so a failed page does not keep its error panel
    // after the user navigates elsewhere.
    html! {
        <ErrorBoundary key={path.clone()}>
            <LazyRoute routes={props.routes.clone()} path={path.clone()} />
        </ErrorBoundary>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyRouteProps {
    pub routes: SiteRoutes,
    pub path: String,
}

/// Hands a finished load to the page, or its error to the nearest boundary.
pub fn finish_load<M>(
    result: Result<M, LoadError>,
    on_ready: impl FnOnce(M),
    reporter: Option<&ErrorReporter>,
) {
    match result {
        Ok(module) => on_ready(module),
        Err(err) => match reporter {
            Some(reporter) => reporter.report(err),
            None => error!("Page failed to load outside an error boundary: {}", err),
        },
    }
}

/// The page for `path` if it is cached or its loader finishes without waiting.
fn ready_now(routes: &SiteRoutes, path: &str) -> Option<PageModule> {
    let resolved = routes.registry.resolve(path);
    routes
        .cache
        .peek(resolved.index)
        .or_else(|| routes.cache.load(&resolved).now_or_never()?.ok())
}

#[function_component(LazyRoute)]
pub fn lazy_route(props: &LazyRouteProps) -> Html {
    let reporter = use_context::<ErrorReporter>();
    let module = {
        let routes = props.routes.clone();
        let path = props.path.clone();
        use_state(move || ready_now(&routes, &path))
    };

    {
        let module = module.clone();
        let routes = props.routes.clone();
        use_effect_with_deps(
            move |path: &String| {
                let resolved = routes.registry.resolve(path);
                if resolved.is_catch_all() {
                    info!("No route for {}, rendering {}", path, resolved.entry.name);
                } else {
                    info!("Rendering {} for {}", resolved.entry.name, path);
                }
                if let Some(ready) = routes.cache.peek(resolved.index) {
                    if (*module).as_ref() != Some(&ready) {
                        module.set(Some(ready));
                    }
                } else {
                    if routes.cache.is_pending(resolved.index) {
                        debug!("Joining in-flight load of {}", resolved.entry.name);
                    }
                    let mut load = routes.cache.load(&resolved);
                    let setter = module.setter();
                    let finished = (&mut load).now_or_never();
                    match finished {
                        Some(result) => {
                            finish_load(result, |loaded| setter.set(Some(loaded)), reporter.as_ref())
                        }
                        None => spawn_local(async move {
                            let result = load.await;
                            finish_load(result, |loaded| setter.set(Some(loaded)), reporter.as_ref());
                        }),
                    }
                }
                || ()
            },
            props.path.clone(),
        );
    }

    {
        use_effect_with_deps(
            move |module: &Option<PageModule>| {
                if let Some(module) = module {
                    seo::apply(&module.meta, config::site_origin());
                }
                || ()
            },
            (*module).clone(),
        );
    }

    match &*module {
        Some(module) => module.render(),
        None => html! { <LoadingIndicator /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct LegacyRedirectProps {
    pub to: Route,
}

/// Swaps an old path for its replacement without adding a history entry.
#[function_component(LegacyRedirect)]
pub fn legacy_redirect(props: &LegacyRedirectProps) -> Html {
    let navigator = use_navigator();
    let marks = use_context::<NavigationMarks>();

    use_effect_with_deps(
        move |to: &Route| {
            if let Some(marks) = &marks {
                marks.mark_replace(&to.to_path());
            }
            match navigator {
                Some(navigator) => navigator.replace(to),
                None => error!("No router available to redirect to {}", to.to_path()),
            }
            || ()
        },
        props.to.clone(),
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::error_boundary::{view_for, BoundaryView};
    use crate::routing::cache::ModuleCache;
    use crate::routing::registry::RouteRegistry;
    use crate::routing::table::PageView;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_reporter() -> (ErrorReporter, Rc<RefCell<Option<LoadError>>>) {
        let failure = Rc::new(RefCell::new(None));
        let reporter = {
            let failure = failure.clone();
            ErrorReporter::new(Callback::from(move |err: LoadError| {
                *failure.borrow_mut() = Some(err);
            }))
        };
        (reporter, failure)
    }

    #[test]
    fn test_rejected_load_reaches_boundary_fallback() {
        let gate = Rc::new(RefCell::new(None));
        let registry = {
            let gate = gate.clone();
            RouteRegistry::builder()
                .route("careers", "/careers", move || {
                    let (tx, rx) = oneshot::channel::<Result<&'static str, LoadError>>();
                    *gate.borrow_mut() = Some(tx);
                    async move {
                        rx.await.unwrap_or_else(|_| {
                            Err(LoadError::Network {
                                what: "careers".to_string(),
                                reason: "cancelled".to_string(),
                            })
                        })
                    }
                    .boxed_local()
                })
                .catch_all("not-found", || future::ready(Ok("not-found")).boxed_local())
                .build()
                .unwrap()
        };
        let cache = ModuleCache::new(registry.len());
        let load = cache.load(&registry.resolve("/careers"));

        let rejection = LoadError::Status {
            what: "careers".to_string(),
            status: 404,
        };
        let sender = gate.borrow_mut().take().unwrap();
        sender.send(Err(rejection.clone())).unwrap();

        let (reporter, failure) = recording_reporter();
        let rendered = RefCell::new(None);
        finish_load(
            block_on(load),
            |module| *rendered.borrow_mut() = Some(module),
            Some(&reporter),
        );

        assert_eq!(*rendered.borrow(), None);
        assert_eq!(failure.borrow().as_ref(), Some(&rejection));
        assert!(matches!(
            view_for(failure.borrow().as_ref()),
            BoundaryView::Fallback { .. }
        ));
    }

    #[test]
    fn test_finished_load_renders_without_reporting() {
        let (reporter, failure) = recording_reporter();
        let rendered = RefCell::new(None);

        finish_load(Ok("home"), |module| *rendered.borrow_mut() = Some(module), Some(&reporter));

        assert_eq!(*rendered.borrow(), Some("home"));
        assert_eq!(*failure.borrow(), None);
        assert_eq!(view_for(failure.borrow().as_ref()), BoundaryView::Children);
    }

    #[test]
    fn test_static_pages_are_ready_on_first_render() {
        let routes = SiteRoutes::new().unwrap();

        let services = ready_now(&routes, "/services").unwrap();
        assert_eq!(services.view, PageView::Services);
        let missing = ready_now(&routes, "/no-such-page").unwrap();
        assert_eq!(missing.view, PageView::NotFound);

        let index = routes.registry.resolve("/services").index;
        assert_eq!(routes.cache.peek(index), Some(services));
    }
}
