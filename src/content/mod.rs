//! Static copy for the practice area pages.
//!
//! Every page is one [`PracticeArea`] value. The tab bar is derived from the
//! page's section list, so a tab id is always the id of a rendered section.

use crate::controller::{FieldSpec, SubmitPolicy, Tab, TabTarget};
use crate::icon::Icon;

mod bicycle_accidents;
mod bus_accidents;
mod hearing_loss;
mod medical_devices;
mod pharmaceutical;
mod scaffolding_falls;
mod workplace_injuries;

/// Disclosure key of the panel holding FAQ entries past the preview.
pub const MORE_FAQS_KEY: &str = "more-faqs";

pub static PRACTICE_AREAS: &[&PracticeArea] = &[
    &bicycle_accidents::PAGE,
    &bus_accidents::PAGE,
    &hearing_loss::PAGE,
    &medical_devices::PAGE,
    &pharmaceutical::PAGE,
    &scaffolding_falls::PAGE,
    &workplace_injuries::PAGE,
];

pub fn find(slug: &str) -> Option<&'static PracticeArea> {
    PRACTICE_AREAS.iter().copied().find(|page| page.slug == slug)
}

#[derive(Debug, PartialEq)]
pub struct Seo {
    pub title: &'static str,
    pub description: &'static str,
    /// Absolute URL or site-relative path.
    pub canonical: &'static str,
    /// Emit a `LegalService` JSON-LD block for this page.
    pub structured_data: bool,
}

#[derive(Debug, PartialEq)]
pub struct Hero {
    pub title: &'static str,
    pub tagline: &'static str,
    pub cta: CallToAction,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CallToAction {
    pub label: &'static str,
    /// Opaque destination: a path, a `tel:` or a `mailto:` URI.
    pub href: &'static str,
    pub icon: Option<Icon>,
}

#[derive(Debug, PartialEq)]
pub enum Block {
    Paragraph(&'static str),
    Heading(&'static str),
    Card {
        title: &'static str,
        lines: &'static [&'static str],
    },
}

/// A show-more panel inside a section.
#[derive(Debug, PartialEq)]
pub struct Disclosure {
    pub key: &'static str,
    pub label: &'static str,
    pub blocks: &'static [Block],
}

#[derive(Debug, PartialEq)]
pub struct TabLabel {
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq)]
pub struct FaqSection {
    /// Number of entries shown before the "show more" panel.
    pub preview: Option<usize>,
    pub view_all: Option<CallToAction>,
}

#[derive(Debug, PartialEq)]
pub enum SectionKind {
    Prose,
    /// Prose followed by the page's lead form.
    Evaluation,
    Faq(FaqSection),
    /// Not rendered; its tab leaves the page for this location.
    Elsewhere(&'static str),
}

#[derive(Debug, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub tab: Option<TabLabel>,
    pub heading: &'static str,
    pub kind: SectionKind,
    pub blocks: &'static [Block],
    pub disclosures: &'static [Disclosure],
}

impl Section {
    pub fn is_rendered(&self) -> bool {
        !matches!(self.kind, SectionKind::Elsewhere(_))
    }
}

#[derive(Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct LeadForm {
    pub fields: &'static [FieldSpec],
    pub submit_label: &'static str,
    pub policy: SubmitPolicy,
}

#[derive(Debug, PartialEq)]
pub struct QuickFact {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Sidebar {
    pub blurb: &'static str,
    pub actions: &'static [CallToAction],
    pub facts: &'static [QuickFact],
}

#[derive(Debug, PartialEq)]
pub struct Closing {
    pub heading: &'static str,
    pub text: &'static str,
    pub actions: &'static [CallToAction],
}

#[derive(Debug, PartialEq)]
pub struct PracticeArea {
    pub slug: &'static str,
    /// Short name used on the index page.
    pub name: &'static str,
    pub seo: Seo,
    pub hero: Hero,
    pub sections: &'static [Section],
    pub faqs: &'static [FaqEntry],
    pub lead_form: Option<LeadForm>,
    pub sidebar: Sidebar,
    pub closing: Closing,
    /// Show a floating "Go Back" button once the hero has scrolled away.
    pub go_back: bool,
}

impl PracticeArea {
    pub fn tabs(&self) -> Vec<Tab> {
        self.sections
            .iter()
            .filter_map(|section| {
                let tab = section.tab.as_ref()?;
                let target = match section.kind {
                    SectionKind::Elsewhere(href) => TabTarget::Route(href),
                    _ => TabTarget::Section,
                };
                Some(Tab {
                    id: section.id,
                    label: tab.label,
                    icon: tab.icon,
                    target,
                })
            })
            .collect()
    }

    /// Destination of the tab with `id` when it leaves the page.
    pub fn tab_route(&self, id: &str) -> Option<&'static str> {
        self.sections.iter().find_map(|section| match section.kind {
            SectionKind::Elsewhere(href) if section.id == id && section.tab.is_some() => Some(href),
            _ => None,
        })
    }

    pub fn rendered_sections(&self) -> impl Iterator<Item = &'static Section> {
        let sections: &'static [Section] = self.sections;
        sections.iter().filter(|section| section.is_rendered())
    }

    /// Every disclosure key the page can toggle.
    pub fn disclosure_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        for section in self.rendered_sections() {
            keys.extend(section.disclosures.iter().map(|d| d.key));
            if let SectionKind::Faq(FaqSection {
                preview: Some(shown),
                ..
            }) = section.kind
            {
                if shown < self.faqs.len() {
                    keys.push(MORE_FAQS_KEY);
                }
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{AccordionSelector, FormDraft, NavigationController, Viewport};
    use std::collections::HashSet;

    /// Stands in for the rendered document of one page.
    struct RenderedPage(HashSet<&'static str>);

    impl RenderedPage {
        fn of(page: &PracticeArea) -> Self {
            Self(page.rendered_sections().map(|s| s.id).collect())
        }
    }

    impl Viewport for RenderedPage {
        fn scroll_to(&self, id: &str) -> bool {
            self.0.contains(id)
        }
    }

    #[test]
    fn slugs_are_unique_and_findable() {
        let mut seen = HashSet::new();
        for page in PRACTICE_AREAS {
            assert!(seen.insert(page.slug), "duplicate slug {}", page.slug);
            assert_eq!(find(page.slug), Some(*page));
        }
        assert_eq!(find("no-such-area"), None);
    }

    #[test]
    fn section_ids_are_unique_per_page() {
        for page in PRACTICE_AREAS {
            let mut seen = HashSet::new();
            for section in page.sections {
                assert!(seen.insert(section.id), "{}: duplicate section {}", page.slug, section.id);
            }
        }
    }

    #[test]
    fn every_section_tab_scrolls_to_a_rendered_section() {
        for page in PRACTICE_AREAS {
            let rendered = RenderedPage::of(page);
            let mut nav = NavigationController::new(page.tabs());
            assert_eq!(nav.active(), "overview", "{} opens elsewhere", page.slug);

            for tab in page.tabs() {
                if tab.target == TabTarget::Section {
                    assert!(
                        nav.scroll_to_section(tab.id, &rendered),
                        "{}: tab {} has no section",
                        page.slug,
                        tab.id
                    );
                }
                assert_eq!(nav.active(), tab.id);
            }
        }
    }

    #[test]
    fn disclosure_keys_are_unique_per_page() {
        for page in PRACTICE_AREAS {
            let keys = page.disclosure_keys();
            let unique: HashSet<_> = keys.iter().collect();
            assert_eq!(unique.len(), keys.len(), "{}: repeated disclosure key", page.slug);
        }
    }

    #[test]
    fn faq_lists_are_populated() {
        for page in PRACTICE_AREAS {
            assert!(!page.faqs.is_empty(), "{} has no FAQ", page.slug);
            let faq_sections = page
                .rendered_sections()
                .filter(|s| matches!(s.kind, SectionKind::Faq(_)))
                .count();
            assert_eq!(faq_sections, 1, "{}", page.slug);
            for entry in page.faqs {
                assert!(!entry.question.is_empty() && !entry.answer.is_empty());
            }
        }
    }

    #[test]
    fn faq_accordion_keeps_one_entry_open() {
        for page in PRACTICE_AREAS {
            let last = page.faqs.len() - 1;
            let mut faq: AccordionSelector = AccordionSelector::new();
            faq.select(last);
            faq.select(0);
            let open: Vec<usize> = (0..page.faqs.len()).filter(|i| faq.is_open(i)).collect();
            assert_eq!(open, vec![0], "{}", page.slug);
        }
    }

    #[test]
    fn lead_forms_have_distinct_fields_and_an_evaluation_section() {
        for page in PRACTICE_AREAS {
            let has_evaluation = page
                .rendered_sections()
                .any(|s| s.kind == SectionKind::Evaluation);
            match &page.lead_form {
                Some(form) => {
                    assert!(has_evaluation, "{}: form without evaluation section", page.slug);
                    let names: HashSet<_> = form.fields.iter().map(|f| f.name).collect();
                    assert_eq!(names.len(), form.fields.len(), "{}", page.slug);

                    let mut draft = FormDraft::new(form.fields, form.policy);
                    for field in form.fields {
                        assert!(draft.set_field(field.name, "x"));
                    }
                }
                None => assert!(!has_evaluation, "{}: evaluation section without form", page.slug),
            }
        }
    }

    #[test]
    fn seo_blocks_are_filled_in() {
        for page in PRACTICE_AREAS {
            assert!(!page.seo.title.is_empty());
            assert!(!page.seo.description.is_empty());
            assert!(page.seo.canonical.ends_with(page.slug), "{}", page.seo.canonical);
        }
    }

    #[test]
    fn workplace_evaluation_tab_leaves_the_page() {
        let page = find("workplace-injuries").unwrap();
        let tab = page.tabs().into_iter().find(|t| t.id == "evaluation").unwrap();
        assert_eq!(tab.target, TabTarget::Route("/workplace-injuries-case-evaluation"));
        assert_eq!(page.tab_route("evaluation"), Some("/workplace-injuries-case-evaluation"));
        assert_eq!(page.tab_route("overview"), None);
        assert!(page.lead_form.is_none());
    }

    #[test]
    fn only_scaffolding_offers_go_back() {
        let with_button: Vec<_> = PRACTICE_AREAS
            .iter()
            .filter(|page| page.go_back)
            .map(|page| page.slug)
            .collect();
        assert_eq!(with_button, vec!["scaffolding-falls"]);
    }

    #[test]
    fn scaffolding_faq_previews_ten_entries() {
        let page = find("scaffolding-falls").unwrap();
        assert!(page.disclosure_keys().contains(&MORE_FAQS_KEY));
    }
}
