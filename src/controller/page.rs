//! The four per-page containers bundled into one reducer state.
//!
//! Every interaction is an action applied to the latest state, so several
//! events arriving before the next render (an autofill pass, a double click)
//! all land.

use std::rc::Rc;

use log::debug;
use yew::Reducible;

use super::{
    AccordionSelector, DisclosureStore, FieldSpec, FormDraft, NavigationController, SubmitAction,
    SubmitPolicy, Tab, Viewport,
};

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    Activate(&'static str),
    Toggle(&'static str),
    SelectFaq(usize),
    SetField(&'static str, String),
    Submit,
}

#[derive(Clone, Debug)]
pub struct PageState<V> {
    pub nav: NavigationController,
    pub disclosures: DisclosureStore,
    pub faq: AccordionSelector,
    pub draft: Option<FormDraft>,
    submissions: u32,
    last_submit: Option<SubmitAction>,
    viewport: V,
}

impl<V: Viewport> PageState<V> {
    pub fn new(
        tabs: Vec<Tab>,
        form: Option<(&'static [FieldSpec], SubmitPolicy)>,
        viewport: V,
    ) -> Self {
        Self {
            nav: NavigationController::new(tabs),
            disclosures: DisclosureStore::new(),
            faq: AccordionSelector::new(),
            draft: form.map(|(fields, policy)| FormDraft::new(fields, policy)),
            submissions: 0,
            last_submit: None,
            viewport,
        }
    }

    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::Activate(id) => {
                self.nav.activate(id, &self.viewport);
            }
            PageAction::Toggle(key) => {
                self.disclosures.toggle(key);
            }
            PageAction::SelectFaq(index) => {
                self.faq.select(index);
            }
            PageAction::SetField(name, value) => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.set_field(name, value);
                }
            }
            PageAction::Submit => match &self.draft {
                Some(draft) => {
                    self.last_submit = Some(draft.submit());
                    self.submissions += 1;
                }
                None => debug!("Submit on a page without a lead form"),
            },
        }
    }

    /// The latest submission with its sequence number. The number changes on
    /// every submit, so the view can run the side effect once per submit.
    pub fn submission(&self) -> Option<(u32, &SubmitAction)> {
        self.last_submit.as_ref().map(|action| (self.submissions, action))
    }
}

impl<V: Viewport + Clone + 'static> Reducible for PageState<V> {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{FieldKind, TabTarget};
    use crate::icon::Icon;
    use std::cell::RefCell;

    #[derive(Clone, Default)]
    struct RecordingViewport {
        requests: Rc<RefCell<Vec<String>>>,
    }

    impl Viewport for RecordingViewport {
        fn scroll_to(&self, id: &str) -> bool {
            self.requests.borrow_mut().push(id.to_string());
            true
        }
    }

    const FIELDS: &[FieldSpec] = &[
        FieldSpec {
            name: "name",
            label: "Name",
            kind: FieldKind::Text,
            placeholder: "",
            required: true,
        },
        FieldSpec {
            name: "email",
            label: "Email",
            kind: FieldKind::Email,
            placeholder: "",
            required: true,
        },
        FieldSpec {
            name: "phone",
            label: "Phone",
            kind: FieldKind::Tel,
            placeholder: "",
            required: true,
        },
    ];

    fn tabs() -> Vec<Tab> {
        ["overview", "evaluation", "faq"]
            .into_iter()
            .map(|id| Tab {
                id,
                label: id,
                icon: Icon::FileText,
                target: TabTarget::Section,
            })
            .collect()
    }

    fn state(viewport: RecordingViewport) -> Rc<PageState<RecordingViewport>> {
        Rc::new(PageState::new(
            tabs(),
            Some((FIELDS, SubmitPolicy::Navigate("/case-evaluation"))),
            viewport,
        ))
    }

    #[test]
    fn back_to_back_field_updates_all_survive() {
        // Autofill fires one input per field before the next render.
        let state = state(RecordingViewport::default())
            .reduce(PageAction::SetField("name", "Ada".into()))
            .reduce(PageAction::SetField("email", "a@b.com".into()))
            .reduce(PageAction::SetField("phone", "555".into()));

        let draft = state.draft.as_ref().unwrap();
        assert_eq!(draft.get("name"), Some("Ada"));
        assert_eq!(draft.get("email"), Some("a@b.com"));
        assert_eq!(draft.get("phone"), Some("555"));
    }

    #[test]
    fn reduce_leaves_the_previous_state_alone() {
        let before = state(RecordingViewport::default());
        let after = before.clone().reduce(PageAction::Toggle("more-faqs"));
        assert!(!before.disclosures.is_expanded("more-faqs"));
        assert!(after.disclosures.is_expanded("more-faqs"));
    }

    #[test]
    fn activate_scrolls_and_marks_the_tab() {
        let viewport = RecordingViewport::default();
        let state = state(viewport.clone()).reduce(PageAction::Activate("faq"));
        assert_eq!(state.nav.active(), "faq");
        assert_eq!(*viewport.requests.borrow(), vec!["faq".to_string()]);
    }

    #[test]
    fn faq_selection_goes_through_the_accordion() {
        let state = state(RecordingViewport::default())
            .reduce(PageAction::SelectFaq(4))
            .reduce(PageAction::SelectFaq(0));
        assert_eq!(state.faq.open(), Some(&0));
    }

    #[test]
    fn each_submit_gets_a_new_sequence_number() {
        let state = state(RecordingViewport::default());
        assert!(state.submission().is_none());

        let once = state.reduce(PageAction::Submit);
        let twice = once.clone().reduce(PageAction::Submit);
        assert_eq!(
            once.submission(),
            Some((1, &SubmitAction::Navigate("/case-evaluation")))
        );
        assert_eq!(twice.submission().map(|(n, _)| n), Some(2));
    }

    #[test]
    fn page_without_form_ignores_field_and_submit() {
        let state = Rc::new(PageState::new(tabs(), None, RecordingViewport::default()))
            .reduce(PageAction::SetField("email", "a@b.com".into()))
            .reduce(PageAction::Submit);
        assert!(state.draft.is_none());
        assert!(state.submission().is_none());
    }
}
