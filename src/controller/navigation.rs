//! Tab navigation for a practice area page.
//!
//! The controller only remembers which tab is current. Moving the viewport
//! is delegated to a [`Viewport`], so the bookkeeping can be exercised
//! without a browser.

use log::debug;

use crate::icon::Icon;

/// Id every page opens on when its tab list is empty.
pub const DEFAULT_TAB: &str = "overview";

/// Where activating a tab takes the reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabTarget {
    /// Scroll to the section carrying the tab's id.
    Section,
    /// Leave the page for another location.
    Route(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tab {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub target: TabTarget,
}

/// Something that can bring a section into view by its element id.
pub trait Viewport {
    /// Requests a smooth scroll to the element with `id`. Returns `false`
    /// when no element carries that id.
    fn scroll_to(&self, id: &str) -> bool;
}

/// What the caller has to do after a tab was activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Scrolled,
    TargetMissing,
    Leave(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationController {
    tabs: Vec<Tab>,
    active: String,
}

impl NavigationController {
    pub fn new(tabs: Vec<Tab>) -> Self {
        let active = tabs
            .first()
            .map(|tab| tab.id)
            .unwrap_or(DEFAULT_TAB)
            .to_string();
        Self { tabs, active }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    /// Marks `id` as the active tab and asks the viewport to scroll to it.
    ///
    /// The active id is updated even when the viewport has no such element.
    /// Returns whether a scroll was actually requested.
    pub fn scroll_to_section<V>(&mut self, id: &str, viewport: &V) -> bool
    where
        V: Viewport + ?Sized,
    {
        self.active = id.to_string();
        let scrolled = viewport.scroll_to(id);
        if !scrolled {
            debug!("No section with id '{}' to scroll to", id);
        }
        scrolled
    }

    /// Activates the tab with `id`, honoring route tabs.
    pub fn activate<V>(&mut self, id: &str, viewport: &V) -> Activation
    where
        V: Viewport + ?Sized,
    {
        let route = self.tabs.iter().find(|tab| tab.id == id).and_then(|tab| match tab.target {
            TabTarget::Route(href) => Some(href),
            TabTarget::Section => None,
        });

        match route {
            Some(href) => {
                self.active = id.to_string();
                Activation::Leave(href)
            }
            None if self.scroll_to_section(id, viewport) => Activation::Scrolled,
            None => Activation::TargetMissing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingViewport {
        present: Vec<&'static str>,
        requests: RefCell<Vec<String>>,
    }

    impl RecordingViewport {
        fn with(present: &[&'static str]) -> Self {
            Self {
                present: present.to_vec(),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for RecordingViewport {
        fn scroll_to(&self, id: &str) -> bool {
            self.requests.borrow_mut().push(id.to_string());
            self.present.contains(&id)
        }
    }

    fn tab(id: &'static str) -> Tab {
        Tab {
            id,
            label: id,
            icon: Icon::FileText,
            target: TabTarget::Section,
        }
    }

    fn three_tabs() -> NavigationController {
        NavigationController::new(vec![tab("overview"), tab("evaluation"), tab("faq")])
    }

    #[test]
    fn starts_on_first_tab() {
        assert_eq!(three_tabs().active(), "overview");
        assert_eq!(NavigationController::new(Vec::new()).active(), DEFAULT_TAB);
    }

    #[test]
    fn every_tab_becomes_active_when_scrolled_to() {
        let mut nav = three_tabs();
        let viewport = RecordingViewport::with(&[]);
        let ids: Vec<&str> = nav.tabs().iter().map(|t| t.id).collect();
        for id in ids {
            nav.scroll_to_section(id, &viewport);
            assert!(nav.is_active(id));
        }
    }

    #[test]
    fn missing_element_still_updates_active_tab() {
        let mut nav = three_tabs();
        let viewport = RecordingViewport::with(&["overview"]);

        assert!(!nav.scroll_to_section("faq", &viewport));
        assert_eq!(nav.active(), "faq");
        assert_eq!(*viewport.requests.borrow(), vec!["faq".to_string()]);
    }

    #[test]
    fn present_element_is_scrolled() {
        let mut nav = three_tabs();
        let viewport = RecordingViewport::with(&["evaluation"]);

        assert_eq!(nav.activate("evaluation", &viewport), Activation::Scrolled);
        assert_eq!(nav.active(), "evaluation");
    }

    #[test]
    fn unknown_id_is_accepted() {
        let mut nav = three_tabs();
        let viewport = RecordingViewport::with(&[]);

        assert_eq!(nav.activate("nowhere", &viewport), Activation::TargetMissing);
        assert_eq!(nav.active(), "nowhere");
    }

    #[test]
    fn route_tab_leaves_without_scrolling() {
        let mut nav = NavigationController::new(vec![
            tab("overview"),
            Tab {
                id: "evaluation",
                label: "CASE EVALUATION",
                icon: Icon::Scale,
                target: TabTarget::Route("/case-evaluation"),
            },
        ]);
        let viewport = RecordingViewport::with(&["evaluation"]);

        assert_eq!(
            nav.activate("evaluation", &viewport),
            Activation::Leave("/case-evaluation")
        );
        assert_eq!(nav.active(), "evaluation");
        assert!(viewport.requests.borrow().is_empty());
    }
}
