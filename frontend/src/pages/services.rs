use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::routing::table::{PageModule, PageView};
use crate::seo::{self, PageMeta};
use crate::Route;

const SERVICES: &[(&str, &str)] = &[
    ("Brand strategy", "Positioning, audience research, naming and messaging frameworks."),
    ("Visual identity", "Logo systems, typography, colour, motion principles and brand guidelines."),
    ("Websites", "Design and development of marketing sites, from one-page launches to multi-language sites."),
    ("Content & campaigns", "Campaign concepts, photography and film direction, social toolkits."),
    ("Design support", "A standing team on retainer for the work that keeps coming."),
];

pub fn module() -> PageModule {
    PageModule::new(
        PageMeta::new(
            "Services",
            "Brand strategy, visual identity, websites and campaigns from one studio team.",
            "/services",
        )
        .with_structured_data(seo::service_schema(config::site_origin(), SERVICES)),
        PageView::Services,
    )
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    index: usize,
    name: &'static str,
    description: &'static str,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class="service-card">
            <span class="service-number">{format!("{:02}", props.index + 1)}</span>
            <h3>{props.name}</h3>
            <p>{props.description}</p>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <section class="page-hero">
                <h1>{"Services"}</h1>
                <p>{"One team from first workshop to launch day. Pick a single discipline or the whole lot."}</p>
            </section>

            <section class="services-grid">
                { for SERVICES.iter().enumerate().map(|(index, &(name, description))| html! {
                    <ServiceCard {index} {name} {description} />
                }) }
            </section>

            <section class="footer-cta">
                <h2>{"Not sure what you need?"}</h2>
                <p>{"Most projects start with a conversation, not a brief."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="button primary">
                        {"Book a call"}
                    </Link<Route>>
                    <Link<Route> to={Route::Pricing} classes="button ghost">
                        {"How we price"}
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}
