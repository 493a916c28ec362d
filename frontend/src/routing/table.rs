use std::rc::Rc;

use futures::future::{self, FutureExt};
use serde::de::DeserializeOwned;
use yew::prelude::*;
use yew_router::Routable;

use crate::content::{fetch_bundle, Opening, PricingTier, Project};
use crate::pages::{
    careers::{self, Careers},
    contact::{self, Contact},
    home::{self, Home},
    legal::{self, PrivacyPolicy, TermsOfService},
    not_found::{self, NotFound},
    portfolio::{self, Portfolio},
    pricing::{self, Pricing},
    services::{self, Services},
    thanks::{self, Thanks},
};
use crate::routing::cache::ModuleCache;
use crate::routing::registry::{LoadFuture, RegistryError, RouteRegistry};
use crate::seo::PageMeta;
use crate::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Home,
    Services,
    Pricing(Rc<Vec<PricingTier>>),
    Portfolio(Rc<Vec<Project>>),
    Careers(Rc<Vec<Opening>>),
    Contact,
    Terms,
    Privacy,
    Thanks,
    NotFound,
}

/// A loaded page: its head tags and what to render.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModule {
    pub meta: PageMeta,
    pub view: PageView,
}

impl PageModule {
    pub fn new(meta: PageMeta, view: PageView) -> Self {
        Self { meta, view }
    }

    pub fn render(&self) -> Html {
        match &self.view {
            PageView::Home => html! { <Home /> },
            PageView::Services => html! { <Services /> },
            PageView::Pricing(tiers) => html! { <Pricing tiers={tiers.clone()} /> },
            PageView::Portfolio(projects) => html! { <Portfolio projects={projects.clone()} /> },
            PageView::Careers(openings) => html! { <Careers openings={openings.clone()} /> },
            PageView::Contact => html! { <Contact /> },
            PageView::Terms => html! { <TermsOfService /> },
            PageView::Privacy => html! { <PrivacyPolicy /> },
            PageView::Thanks => html! { <Thanks /> },
            PageView::NotFound => html! { <NotFound /> },
        }
    }
}

fn ready(module: fn() -> PageModule) -> impl Fn() -> LoadFuture<PageModule> {
    move || future::ready(Ok(module())).boxed_local()
}

fn bundle<T>(name: &'static str, module: fn(Vec<T>) -> PageModule) -> impl Fn() -> LoadFuture<PageModule>
where
    T: DeserializeOwned + 'static,
{
    move || fetch_bundle::<T>(name).map(move |items| items.map(module)).boxed_local()
}

/// The site's route table, most specific paths first and the not-found page last.
pub fn site_registry() -> Result<RouteRegistry<PageModule>, RegistryError> {
    RouteRegistry::builder()
        .route("home", &Route::Home.to_path(), ready(home::module))
        .route("services", &Route::Services.to_path(), ready(services::module))
        .route("pricing", &Route::Pricing.to_path(), bundle("pricing", pricing::module))
        .route("portfolio", &Route::Portfolio.to_path(), bundle("portfolio", portfolio::module))
        .route("careers", &Route::Careers.to_path(), bundle("careers", careers::module))
        .route("contact", &Route::Contact.to_path(), ready(contact::module))
        .route("terms", &Route::Terms.to_path(), ready(legal::terms_module))
        .route("privacy", &Route::Privacy.to_path(), ready(legal::privacy_module))
        .route("thanks", &Route::Thanks.to_path(), ready(thanks::module))
        .catch_all("not-found", ready(not_found::module))
        .build()
}

/// Old paths still linked from elsewhere, replaced in history by their new home.
pub fn redirect_for(path: &str) -> Option<Route> {
    match crate::routing::registry::segments(path).as_slice() {
        ["work"] | ["work", "all"] => Some(Route::Portfolio),
        ["jobs"] => Some(Route::Careers),
        ["book"] | ["start-a-project"] => Some(Route::Contact),
        _ => None,
    }
}

/// Registry and load cache shared by the whole app.
#[derive(Clone)]
pub struct SiteRoutes {
    pub registry: Rc<RouteRegistry<PageModule>>,
    pub cache: ModuleCache<PageModule>,
}

impl PartialEq for SiteRoutes {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry) && self.cache == other.cache
    }
}

impl SiteRoutes {
    pub fn new() -> Result<Self, RegistryError> {
        let registry = site_registry()?;
        let cache = ModuleCache::new(registry.len());
        Ok(Self {
            registry: Rc::new(registry),
            cache,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_every_route_resolves_to_its_page() {
        let registry = site_registry().unwrap();
        let cases = [
            (Route::Home, "home"),
            (Route::Services, "services"),
            (Route::Pricing, "pricing"),
            (Route::Portfolio, "portfolio"),
            (Route::Careers, "careers"),
            (Route::Contact, "contact"),
            (Route::Terms, "terms"),
            (Route::Privacy, "privacy"),
            (Route::Thanks, "thanks"),
        ];
        for (route, name) in cases {
            let path = route.to_path();
            assert_eq!(registry.resolve(&path).entry.name, name, "path {}", path);
        }
    }

    #[test]
    fn test_unknown_paths_resolve_to_not_found() {
        let registry = site_registry().unwrap();
        for path in ["/does-not-exist", "/pricing/enterprise", "/404"] {
            let resolved = registry.resolve(path);
            assert!(resolved.is_catch_all(), "path {}", path);
            assert_eq!(resolved.entry.name, "not-found");
        }
    }

    #[test]
    fn test_static_pages_load_immediately() {
        let registry = site_registry().unwrap();
        let module = block_on(registry.resolve("/services").entry.load()).unwrap();
        assert_eq!(module.view, PageView::Services);
        assert_eq!(module.meta.canonical_path, "/services");

        let missing = block_on(registry.resolve("/nope").entry.load()).unwrap();
        assert_eq!(missing.view, PageView::NotFound);
        assert!(missing.meta.noindex);
    }

    #[test]
    fn test_content_pages_build_from_bundles() {
        let module = pricing::module(vec![PricingTier {
            name: "Sprint".to_string(),
            price: "€6,500".to_string(),
            period: None,
            summary: "Two weeks".to_string(),
            features: vec![],
            featured: false,
        }]);
        match module.view {
            PageView::Pricing(tiers) => assert_eq!(tiers.len(), 1),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_legacy_redirects() {
        assert_eq!(redirect_for("/work"), Some(Route::Portfolio));
        assert_eq!(redirect_for("/work/"), Some(Route::Portfolio));
        assert_eq!(redirect_for("/jobs?team=design"), Some(Route::Careers));
        assert_eq!(redirect_for("/book"), Some(Route::Contact));
        assert_eq!(redirect_for("/portfolio"), None);
        assert_eq!(redirect_for("/"), None);
    }

    #[test]
    fn test_site_routes_compare_by_identity() {
        let routes = SiteRoutes::new().unwrap();
        assert!(routes == routes.clone());
        assert!(routes != SiteRoutes::new().unwrap());
    }
}
