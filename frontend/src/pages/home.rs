use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::routing::table::{PageModule, PageView};
use crate::seo::{self, PageMeta, SITE_NAME};
use crate::Route;

pub fn module() -> PageModule {
    PageModule::new(
        PageMeta::new(
            SITE_NAME,
            "Fieldwork is an independent creative studio for brand identity, digital products and campaigns that people remember.",
            "/",
        )
        .with_structured_data(seo::organization_schema(config::site_origin())),
        PageView::Home,
    )
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            // Hero
            <section class="hero">
                <p class="eyebrow">{"Independent creative studio"}</p>
                <h1>{"Brands with a point of view, built to last."}</h1>
                <p class="hero-subtitle">
                    {"We help ambitious teams find what makes them different, then design the identity, website and campaigns that make it obvious."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="button primary">
                        {"Start a project"}
                    </Link<Route>>
                    <Link<Route> to={Route::Portfolio} classes="button ghost">
                        {"See our work"}
                    </Link<Route>>
                </div>
            </section>

            <section class="capabilities">
                <h2>{"What we do"}</h2>
                <div class="capabilities-grid">
                    <div class="capability">
                        <h3>{"Brand identity"}</h3>
                        <p>{"Strategy, naming, visual systems and the guidelines that keep them consistent."}</p>
                    </div>
                    <div class="capability">
                        <h3>{"Websites"}</h3>
                        <p>{"Fast, accessible marketing sites your team can actually update."}</p>
                    </div>
                    <div class="capability">
                        <h3>{"Campaigns"}</h3>
                        <p>{"Launch films, social and out-of-home, planned around one clear idea."}</p>
                    </div>
                </div>
                <Link<Route> to={Route::Services} classes="text-link">
                    {"All services →"}
                </Link<Route>>
            </section>

            <section class="process">
                <h2>{"How a project runs"}</h2>
                <ol class="process-steps">
                    <li>
                        <h3>{"Discover"}</h3>
                        <p>{"Two weeks of interviews, audits and workshops to agree on the problem."}</p>
                    </li>
                    <li>
                        <h3>{"Define"}</h3>
                        <p>{"A positioning and creative direction you sign off before we design anything."}</p>
                    </li>
                    <li>
                        <h3>{"Design & build"}</h3>
                        <p>{"Weekly reviews, working prototypes and no big reveal surprises."}</p>
                    </li>
                    <li>
                        <h3>{"Launch"}</h3>
                        <p>{"We stay on for the launch and hand over everything your team needs."}</p>
                    </li>
                </ol>
            </section>

            <section class="footer-cta">
                <h2>{"Have something worth telling people about?"}</h2>
                <p>{"Tell us about it. We reply to every enquiry within two working days."}</p>
                <Link<Route> to={Route::Contact} classes="button primary">
                    {"Get in touch"}
                </Link<Route>>
            </section>
        </div>
    }
}
