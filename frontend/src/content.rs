use gloo_net::http::Request;
use log::info;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config;
use crate::routing::registry::LoadError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub period: Option<String>,
    pub summary: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub client: String,
    pub discipline: String,
    pub year: u16,
    pub summary: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Opening {
    pub title: String,
    pub team: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment: String,
    pub summary: String,
}

pub fn parse_bundle<T: DeserializeOwned>(name: &str, body: &str) -> Result<Vec<T>, LoadError> {
    serde_json::from_str(body).map_err(|err| LoadError::Decode {
        what: name.to_string(),
        reason: err.to_string(),
    })
}

/// Fetches and decodes `/content/<name>.json`.
pub async fn fetch_bundle<T: DeserializeOwned>(name: &'static str) -> Result<Vec<T>, LoadError> {
    let url = config::content_url(name);
    let network = |err: gloo_net::Error| LoadError::Network {
        what: name.to_string(),
        reason: err.to_string(),
    };

    let response = Request::get(&url).send().await.map_err(network)?;
    if !response.ok() {
        return Err(LoadError::Status {
            what: name.to_string(),
            status: response.status(),
        });
    }
    let body = response.text().await.map_err(network)?;
    let items = parse_bundle(name, &body)?;
    info!("Loaded {} entries from {}", items.len(), url);
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pricing_bundle() {
        let body = r#"[
            {"name": "Sprint", "price": "€6,500", "summary": "Two weeks", "features": ["Workshop"]},
            {"name": "Retainer", "price": "€9,000", "period": "month", "summary": "Ongoing",
             "features": ["Design", "Build"], "featured": true}
        ]"#;
        let tiers: Vec<PricingTier> = parse_bundle("pricing", body).unwrap();
        assert_eq!(tiers.len(), 2);
        assert!(!tiers[0].featured);
        assert_eq!(tiers[0].period, None);
        assert_eq!(tiers[1].period.as_deref(), Some("month"));
        assert!(tiers[1].featured);
    }

    #[test]
    fn test_parse_opening_renames_type() {
        let body = r#"[{"title": "Designer", "team": "Design", "location": "Remote",
                        "type": "Full-time", "summary": "Shape brands"}]"#;
        let openings: Vec<Opening> = parse_bundle("careers", body).unwrap();
        assert_eq!(openings[0].employment, "Full-time");
    }

    #[test]
    fn test_shipped_bundles_parse() {
        let tiers: Vec<PricingTier> =
            parse_bundle("pricing", include_str!("../content/pricing.json")).unwrap();
        let projects: Vec<Project> =
            parse_bundle("portfolio", include_str!("../content/portfolio.json")).unwrap();
        let openings: Vec<Opening> =
            parse_bundle("careers", include_str!("../content/careers.json")).unwrap();

        assert_eq!(tiers.iter().filter(|tier| tier.featured).count(), 1);
        assert!(!projects.is_empty());
        assert!(!openings.is_empty());
    }

    #[test]
    fn test_malformed_bundle_is_decode_error() {
        let result: Result<Vec<Project>, LoadError> = parse_bundle("portfolio", "{not json");
        match result {
            Err(LoadError::Decode { what, .. }) => assert_eq!(what, "portfolio"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}
