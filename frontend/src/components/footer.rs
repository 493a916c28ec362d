use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::seo::SITE_NAME;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div>
                    <span class="footer-logo">{"fieldwork"}</span>
                    <p>{"Independent creative studio, Helsinki & remote."}</p>
                </div>
                <nav class="footer-links">
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio}>{"Work"}</Link<Route>>
                    <Link<Route> to={Route::Pricing}>{"Pricing"}</Link<Route>>
                    <Link<Route> to={Route::Careers}>{"Careers"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </nav>
                <div class="footer-social">
                    <a href="https://www.instagram.com/fieldwork.studio" target="_blank" rel="noopener noreferrer">
                        {"Instagram"}
                    </a>
                    <a href="https://www.linkedin.com/company/fieldwork-studio" target="_blank" rel="noopener noreferrer">
                        {"LinkedIn"}
                    </a>
                </div>
            </div>
            <div class="legal-links">
                <span>{format!("© {} {}", year, SITE_NAME)}</span>
                <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
            </div>
        </footer>
    }
}
