use log::{error, info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

mod config;
mod content;
mod seo;
mod scroll {
    pub mod browser;
    pub mod policy;
    pub mod restoration;
    pub mod tracker;
}
mod routing {
    pub mod cache;
    pub mod outlet;
    pub mod registry;
    pub mod table;
}
mod components {
    pub mod error_boundary;
    pub mod footer;
    pub mod forms;
    pub mod loading;
}
mod pages {
    pub mod careers;
    pub mod contact;
    pub mod home;
    pub mod legal;
    pub mod not_found;
    pub mod portfolio;
    pub mod pricing;
    pub mod services;
    pub mod thanks;
}

use components::footer::Footer;
use routing::outlet::RouteOutlet;
use routing::table::SiteRoutes;
use scroll::restoration::{listen_for_popstate, ScrollRestoration};
use scroll::tracker::NavigationMarks;

/// Typed paths for links. Resolution itself goes through the route table.
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/pricing")]
    Pricing,
    #[at("/portfolio")]
    Portfolio,
    #[at("/careers")]
    Careers,
    #[at("/contact")]
    Contact,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/thanks")]
    Thanks,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLLED_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"fieldwork"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class} onclick={close_menu}>
                    <Link<Route> to={Route::Services} classes="nav-link">
                        {"Services"}
                    </Link<Route>>
                    <Link<Route> to={Route::Portfolio} classes="nav-link">
                        {"Work"}
                    </Link<Route>>
                    <Link<Route> to={Route::Pricing} classes="nav-link">
                        {"Pricing"}
                    </Link<Route>>
                    <Link<Route> to={Route::Careers} classes="nav-link">
                        {"Careers"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="nav-cta">
                        {"Start a project"}
                    </Link<Route>>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub marks: NavigationMarks,
    pub routes: SiteRoutes,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <ScrollRestoration marks={props.marks.clone()}>
                <main class="site-main">
                    <RouteOutlet routes={props.routes.clone()} />
                </main>
            </ScrollRestoration>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    console_log::init_with_level(level).expect("error initializing log");

    let routes = match SiteRoutes::new() {
        Ok(routes) => routes,
        Err(err) => {
            error!("Invalid route table: {}", err);
            return;
        }
    };

    // Registered before the router so history traversals are marked first.
    let marks = NavigationMarks::new();
    listen_for_popstate(&marks);

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { marks, routes }).render();
}
