use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::PricingTier;
use crate::routing::table::{PageModule, PageView};
use crate::seo::PageMeta;
use crate::Route;

pub fn module(tiers: Vec<PricingTier>) -> PageModule {
    PageModule::new(
        PageMeta::new(
            "Pricing",
            "Fixed-price sprints, full projects and monthly retainers. No hourly billing.",
            "/pricing",
        ),
        PageView::Pricing(Rc::new(tiers)),
    )
}

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub tiers: Rc<Vec<PricingTier>>,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    html! {
        <div class="pricing-page">
            <section class="page-hero">
                <h1>{"Simple, fixed pricing"}</h1>
                <p>{"Every engagement has an agreed scope and price before we start. No timesheets."}</p>
            </section>

            <div class="pricing-grid">
                { for props.tiers.iter().map(|tier| html! {
                    <div class={classes!("pricing-card", tier.featured.then(|| "featured"))}>
                        <div class="card-header">
                            <h3>{&tier.name}</h3>
                            <div class="price">
                                <span class="amount">{&tier.price}</span>
                                {
                                    if let Some(period) = &tier.period {
                                        html! { <span class="period">{format!("/{}", period)}</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                            <p class="tier-summary">{&tier.summary}</p>
                        </div>
                        <ul>
                            { for tier.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                        </ul>
                        <Link<Route> to={Route::Contact} classes="button primary">
                            {"Enquire"}
                        </Link<Route>>
                    </div>
                }) }
            </div>

            <section class="pricing-notes">
                <h2>{"Good to know"}</h2>
                <ul>
                    <li>{"Prices exclude VAT and third-party costs such as licensed fonts or photography."}</li>
                    <li>{"We invoice 50% on kickoff and 50% on delivery for fixed projects."}</li>
                    <li>{"Retainers can be paused or cancelled with one month's notice."}</li>
                </ul>
            </section>
            <style>
                {r#"
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .pricing-card {
                    border: 1px solid rgba(17, 17, 17, 0.12);
                    border-radius: 16px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .pricing-card.featured {
                    background: #111;
                    color: #f5f1ea;
                }
                .pricing-card .amount {
                    font-size: 2.25rem;
                    font-weight: 700;
                }
                .pricing-card ul {
                    flex: 1;
                    padding-left: 1.2rem;
                }
                "#}
            </style>
        </div>
    }
}
