//! Document head management for a practice area page.

use log::warn;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element};
use yew::prelude::*;

use crate::config;
use crate::content::PracticeArea;

const JSON_LD_ID: &str = "practice-area-jsonld";

#[derive(Serialize)]
struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "addressRegion")]
    region: &'static str,
    #[serde(rename = "addressCountry")]
    country: &'static str,
}

#[derive(Serialize)]
struct LegalService {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    description: &'static str,
    url: String,
    telephone: &'static str,
    #[serde(rename = "areaServed")]
    area_served: &'static str,
    address: PostalAddress,
    #[serde(rename = "serviceType")]
    service_type: &'static str,
}

/// JSON-LD block describing the firm's service for `page`.
pub fn structured_data(page: &PracticeArea) -> Option<String> {
    let service = LegalService {
        context: "https://schema.org",
        kind: "LegalService",
        name: format!("{} - {} Lawyers", config::FIRM_NAME, page.name),
        description: page.seo.description,
        url: config::absolute_url(page.seo.canonical),
        telephone: config::PHONE_DISPLAY,
        area_served: "California",
        address: PostalAddress {
            kind: "PostalAddress",
            region: "CA",
            country: "US",
        },
        service_type: page.name,
    };
    match serde_json::to_string(&service) {
        Ok(json) => Some(json),
        Err(e) => {
            warn!("Could not serialize structured data: {}", e);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SeoProps {
    pub page: &'static PracticeArea,
}

/// Writes title, description, canonical link and structured data into the
/// document head. Renders nothing.
#[function_component(SeoHead)]
pub fn seo_head(props: &SeoProps) -> Html {
    let page = props.page;
    use_effect_with_deps(
        move |page: &&'static PracticeArea| {
            let page = *page;
            if let Some(document) = window().and_then(|w| w.document()) {
                apply(&document, page);
            }
            move || {
                if let Some(script) = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id(JSON_LD_ID))
                {
                    script.remove();
                }
            }
        },
        page,
    );
    html! {}
}

fn apply(document: &Document, page: &PracticeArea) {
    document.set_title(page.seo.title);

    if let Some(meta) = head_element(document, "meta[name='description']", "meta") {
        let _ = meta.set_attribute("name", "description");
        let _ = meta.set_attribute("content", page.seo.description);
    }
    if let Some(link) = head_element(document, "link[rel='canonical']", "link") {
        let _ = link.set_attribute("rel", "canonical");
        let _ = link.set_attribute("href", &config::absolute_url(page.seo.canonical));
    }

    if let Some(old) = document.get_element_by_id(JSON_LD_ID) {
        old.remove();
    }
    if !page.seo.structured_data {
        return;
    }
    let Some(json) = structured_data(page) else {
        return;
    };
    if let Some(script) = head_element(document, &format!("#{}", JSON_LD_ID), "script") {
        script.set_id(JSON_LD_ID);
        let _ = script.set_attribute("type", "application/ld+json");
        script.set_text_content(Some(&json));
    }
}

/// Finds the head element matching `selector`, creating a `tag` element in
/// the head when there is none.
fn head_element(document: &Document, selector: &str, tag: &str) -> Option<Element> {
    if let Ok(Some(found)) = document.query_selector(selector) {
        return Some(found);
    }
    let head = document.head()?;
    let element = document.create_element(tag).ok()?;
    match head.append_child(&element) {
        Ok(node) => node.dyn_into::<Element>().ok(),
        Err(_) => {
            warn!("Could not add <{}> to the document head", tag);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn structured_data_describes_the_firm() {
        let page = content::find("bus-accidents").unwrap();
        let json: serde_json::Value = serde_json::from_str(&structured_data(page).unwrap()).unwrap();

        assert_eq!(json["@type"], "LegalService");
        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["url"], page.seo.canonical);
        assert_eq!(json["address"]["addressRegion"], "CA");
        assert_eq!(json["serviceType"], "Bus Accidents");
    }

    #[test]
    fn relative_canonical_is_absolutised() {
        let page = content::find("bicycle-accidents").unwrap();
        let json: serde_json::Value = serde_json::from_str(&structured_data(page).unwrap()).unwrap();
        assert_eq!(
            json["url"],
            format!("{}/practice-areas/bicycle-accidents", config::site_origin())
        );
    }
}
