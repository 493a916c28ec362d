use std::collections::BTreeSet;
use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::Project;
use crate::routing::table::{PageModule, PageView};
use crate::seo::PageMeta;

pub fn module(projects: Vec<Project>) -> PageModule {
    PageModule::new(
        PageMeta::new(
            "Portfolio",
            "Selected identity, web and campaign work for founders, cultural institutions and global brands.",
            "/portfolio",
        ),
        PageView::Portfolio(Rc::new(projects)),
    )
}

/// Distinct disciplines in first-seen order, for the filter bar.
pub fn disciplines(projects: &[Project]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    projects
        .iter()
        .filter(|project| seen.insert(project.discipline.as_str()))
        .map(|project| project.discipline.clone())
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub projects: Rc<Vec<Project>>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let filter = use_state(|| None::<String>);
    let disciplines = disciplines(&props.projects);

    let select = |value: Option<String>| {
        let filter = filter.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            filter.set(value.clone());
        })
    };

    let visible = props
        .projects
        .iter()
        .filter(|project| match &*filter {
            Some(discipline) => &project.discipline == discipline,
            None => true,
        });

    html! {
        <div class="portfolio-page">
            <section class="page-hero">
                <h1>{"Selected work"}</h1>
                <p>{"A few projects we are proud of. Ask us for the full case studies."}</p>
            </section>

            <nav class="portfolio-filters">
                <button
                    class={classes!("filter", filter.is_none().then(|| "active"))}
                    onclick={select(None)}
                >
                    {"All"}
                </button>
                { for disciplines.into_iter().map(|discipline| {
                    let active = filter.as_deref() == Some(discipline.as_str());
                    let onclick = select(Some(discipline.clone()));
                    html! {
                        <button class={classes!("filter", active.then(|| "active"))} {onclick}>
                            {discipline}
                        </button>
                    }
                }) }
            </nav>

            <section class="project-grid">
                { for visible.map(|project| html! {
                    <article class="project-card" key={project.slug.clone()}>
                        <img src={project.image.clone()} alt={project.title.clone()} loading="lazy" />
                        <div class="project-info">
                            <span class="project-meta">
                                {format!("{} · {} · {}", project.client, project.discipline, project.year)}
                            </span>
                            <h3>{&project.title}</h3>
                            <p>{&project.summary}</p>
                        </div>
                    </article>
                }) }
            </section>
        </div>
    }
}
