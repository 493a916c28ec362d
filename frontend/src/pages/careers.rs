use std::rc::Rc;

use yew::prelude::*;

use crate::content::Opening;
use crate::routing::table::{PageModule, PageView};
use crate::seo::PageMeta;

pub fn module(openings: Vec<Opening>) -> PageModule {
    PageModule::new(
        PageMeta::new(
            "Careers",
            "Join a small studio that does big work. Open roles in design, development and strategy.",
            "/careers",
        ),
        PageView::Careers(Rc::new(openings)),
    )
}

fn application_link(opening: &Opening) -> String {
    format!(
        "mailto:jobs@fieldwork.studio?subject={}",
        urlencoding::encode(&format!("Application: {}", opening.title))
    )
}

#[derive(Properties, PartialEq)]
pub struct CareersProps {
    pub openings: Rc<Vec<Opening>>,
}

#[function_component(Careers)]
pub fn careers(props: &CareersProps) -> Html {
    html! {
        <div class="careers-page">
            <section class="page-hero">
                <h1>{"Work with us"}</h1>
                <p>{"Twelve people, four countries, one studio. We hire slowly and keep people for a long time."}</p>
            </section>

            <section class="values">
                <div class="value">
                    <h3>{"Four-day weeks"}</h3>
                    <p>{"Fridays are for rest, side projects or nothing at all."}</p>
                </div>
                <div class="value">
                    <h3>{"Remote-first"}</h3>
                    <p>{"Work from anywhere in CET ±2. We meet in person twice a year."}</p>
                </div>
                <div class="value">
                    <h3>{"Learning budget"}</h3>
                    <p>{"€1,500 a year for courses, books and conferences."}</p>
                </div>
            </section>

            <section class="openings" id="open-roles">
                <h2>{"Open roles"}</h2>
                {
                    if props.openings.is_empty() {
                        html! {
                            <p class="no-openings">
                                {"No open roles right now. We still read every speculative application sent to "}
                                <a href="mailto:jobs@fieldwork.studio">{"jobs@fieldwork.studio"}</a>
                                {"."}
                            </p>
                        }
                    } else {
                        html! {
                            <ul class="opening-list">
                                { for props.openings.iter().map(|opening| html! {
                                    <li class="opening">
                                        <div>
                                            <h3>{&opening.title}</h3>
                                            <span class="opening-meta">
                                                {format!("{} · {} · {}", opening.team, opening.location, opening.employment)}
                                            </span>
                                            <p>{&opening.summary}</p>
                                        </div>
                                        <a class="button ghost" href={application_link(opening)}>
                                            {"Apply"}
                                        </a>
                                    </li>
                                }) }
                            </ul>
                        }
                    }
                }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_link_encodes_subject() {
        let opening = Opening {
            title: "Senior Designer & Art Director".to_string(),
            team: "Design".to_string(),
            location: "Remote".to_string(),
            employment: "Full-time".to_string(),
            summary: String::new(),
        };
        assert_eq!(
            application_link(&opening),
            "mailto:jobs@fieldwork.studio?subject=Application%3A%20Senior%20Designer%20%26%20Art%20Director"
        );
    }
}
