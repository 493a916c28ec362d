use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::table::{PageModule, PageView};
use crate::seo::PageMeta;
use crate::Route;

pub fn module() -> PageModule {
    PageModule::new(
        PageMeta::new("Page not found", "This page doesn't exist.", "/404").noindex(),
        PageView::NotFound,
    )
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <span class="not-found-code">{"404"}</span>
            <h1>{"We couldn't find that page."}</h1>
            <p>{"It may have moved, or the link might be mistyped."}</p>
            <Link<Route> to={Route::Home} classes="button primary">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
