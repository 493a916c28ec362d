use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::table::{PageModule, PageView};
use crate::seo::PageMeta;
use crate::Route;

pub fn module() -> PageModule {
    PageModule::new(
        PageMeta::new("Thank you", "Your message is on its way to the studio.", "/thanks").noindex(),
        PageView::Thanks,
    )
}

#[function_component(Thanks)]
pub fn thanks() -> Html {
    html! {
        <div class="confirmation-page">
            <h1>{"Thanks, we've got it."}</h1>
            <p>{"Someone from the studio will reply within two working days."}</p>
            <div class="hero-actions">
                <Link<Route> to={Route::Portfolio} classes="button ghost">
                    {"Browse our work meanwhile"}
                </Link<Route>>
                <Link<Route> to={Route::Home} classes="text-link">
                    {"Back to home"}
                </Link<Route>>
            </div>
        </div>
    }
}
