use log::debug;
use serde_json::{json, Value};
use web_sys::{Document, Element};

pub const SITE_NAME: &str = "Fieldwork Studio";

#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_path: String,
    pub structured_data: Option<Value>,
    pub noindex: bool,
}

impl PageMeta {
    pub fn new(title: &str, description: &str, canonical_path: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            canonical_path: canonical_path.to_string(),
            structured_data: None,
            noindex: false,
        }
    }

    pub fn with_structured_data(mut self, data: Value) -> Self {
        self.structured_data = Some(data);
        self
    }

    pub fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }
}

pub fn page_title(title: &str) -> String {
    if title.is_empty() || title == SITE_NAME {
        SITE_NAME.to_string()
    } else {
        format!("{} | {}", title, SITE_NAME)
    }
}

/// Absolute canonical URL. Drops query strings, collapses duplicate slashes
/// and trailing slashes so every page has exactly one canonical form.
pub fn canonical_url(origin: &str, path: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let path = path.split(|c| c == '?' || c == '#').next().unwrap_or("");
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        format!("{}/", origin)
    } else {
        format!("{}/{}", origin, segments.join("/"))
    }
}

pub fn organization_schema(origin: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": SITE_NAME,
        "url": canonical_url(origin, "/"),
        "logo": format!("{}/assets/logo.svg", origin.trim_end_matches('/')),
        "email": "hello@fieldwork.studio",
        "sameAs": [
            "https://www.instagram.com/fieldwork.studio",
            "https://www.linkedin.com/company/fieldwork-studio"
        ]
    })
}

pub fn service_schema(origin: &str, services: &[(&str, &str)]) -> Value {
    let offers: Vec<Value> = services
        .iter()
        .map(|(name, description)| {
            json!({
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": name,
                    "description": description,
                }
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": SITE_NAME,
        "url": canonical_url(origin, "/services"),
        "hasOfferCatalog": {
            "@type": "OfferCatalog",
            "name": "Studio services",
            "itemListElement": offers,
        }
    })
}

/// Writes the page's head tags into the live document.
pub fn apply(meta: &PageMeta, origin: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        debug!("No document, skipping head tags for {}", meta.canonical_path);
        return;
    };

    document.set_title(&page_title(&meta.title));
    set_named_meta(&document, "description", &meta.description);
    if meta.noindex {
        set_named_meta(&document, "robots", "noindex");
    } else {
        remove(&document, "meta[name=\"robots\"]");
    }
    set_canonical(&document, &canonical_url(origin, &meta.canonical_path));
    set_structured_data(&document, meta.structured_data.as_ref());
}

fn find_or_create(document: &Document, selector: &str, tag: &str) -> Option<Element> {
    if let Ok(Some(existing)) = document.query_selector(selector) {
        return Some(existing);
    }
    let element = document.create_element(tag).ok()?;
    document.head()?.append_child(&element).ok()?;
    Some(element)
}

fn set_named_meta(document: &Document, name: &str, content: &str) -> Option<()> {
    let selector = format!("meta[name=\"{}\"]", name);
    let element = find_or_create(document, &selector, "meta")?;
    element.set_attribute("name", name).ok()?;
    element.set_attribute("content", content).ok()
}

fn set_canonical(document: &Document, href: &str) -> Option<()> {
    let element = find_or_create(document, "link[rel=\"canonical\"]", "link")?;
    element.set_attribute("rel", "canonical").ok()?;
    element.set_attribute("href", href).ok()
}

fn set_structured_data(document: &Document, data: Option<&Value>) -> Option<()> {
    let selector = "script#structured-data";
    let Some(data) = data else {
        remove(document, selector);
        return Some(());
    };
    let element = find_or_create(document, selector, "script")?;
    element.set_attribute("type", "application/ld+json").ok()?;
    element.set_id("structured-data");
    element.set_text_content(Some(&data.to_string()));
    Some(())
}

fn remove(document: &Document, selector: &str) {
    if let Ok(Some(element)) = document.query_selector(selector) {
        element.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("Pricing"), "Pricing | Fieldwork Studio");
        assert_eq!(page_title(SITE_NAME), SITE_NAME);
        assert_eq!(page_title(""), SITE_NAME);
    }

    #[test]
    fn test_canonical_url_normalizes() {
        let origin = "https://fieldwork.studio/";
        assert_eq!(canonical_url(origin, "/"), "https://fieldwork.studio/");
        assert_eq!(canonical_url(origin, ""), "https://fieldwork.studio/");
        assert_eq!(
            canonical_url(origin, "//portfolio/?ref=nav"),
            "https://fieldwork.studio/portfolio"
        );
        assert_eq!(
            canonical_url("https://fieldwork.studio", "/careers/#open-roles"),
            "https://fieldwork.studio/careers"
        );
    }

    #[test]
    fn test_organization_schema() {
        let schema = organization_schema("https://fieldwork.studio");
        assert_eq!(schema["@type"], "Organization");
        assert_eq!(schema["name"], SITE_NAME);
        assert_eq!(schema["url"], "https://fieldwork.studio/");
    }

    #[test]
    fn test_service_schema_lists_every_service() {
        let schema = service_schema(
            "https://fieldwork.studio",
            &[("Branding", "Identity systems"), ("Web", "Marketing sites")],
        );
        let offers = schema["hasOfferCatalog"]["itemListElement"].as_array().unwrap();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[1]["itemOffered"]["name"], "Web");
    }

    #[test]
    fn test_meta_builders() {
        let meta = PageMeta::new("Not found", "Missing page", "/404").noindex();
        assert!(meta.noindex);
        assert!(meta.structured_data.is_none());

        let meta = PageMeta::new("Home", "Studio", "/").with_structured_data(json!({"a": 1}));
        assert_eq!(meta.structured_data, Some(json!({"a": 1})));
    }
}
