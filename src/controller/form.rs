//! Lead-capture form draft.
//!
//! The draft only holds what the visitor typed. Validation is left to the
//! browser through the `type` and `required` attributes the schema renders.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    TextArea,
    Select(&'static [SelectOption]),
}

impl FieldKind {
    /// `type` attribute of the `<input>` rendering this field, if it is one.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Tel => Some("tel"),
            FieldKind::Date => Some("date"),
            FieldKind::TextArea | FieldKind::Select(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub required: bool,
}

/// What a page does with a submitted draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPolicy {
    /// Hand off to the intake flow at this path.
    Navigate(&'static str),
    /// Log the draft and show this message in a blocking dialog. This is
    /// how the firm's amusement park injury page behaves; none of the pages
    /// in this crate use it.
    Acknowledge(&'static str),
}

/// Side effect the view performs after suppressing the native submit.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitAction {
    Navigate(&'static str),
    Acknowledge {
        message: &'static str,
        draft: BTreeMap<String, String>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormDraft {
    #[serde(skip)]
    schema: &'static [FieldSpec],
    #[serde(skip)]
    policy: SubmitPolicy,
    values: BTreeMap<String, String>,
}

impl FormDraft {
    /// Starts a draft with every schema field empty.
    pub fn new(schema: &'static [FieldSpec], policy: SubmitPolicy) -> Self {
        let values = schema
            .iter()
            .map(|field| (field.name.to_string(), String::new()))
            .collect();
        Self {
            schema,
            policy,
            values,
        }
    }

    pub fn schema(&self) -> &'static [FieldSpec] {
        self.schema
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Stores `value` under `name`. Names outside the schema are ignored and
    /// reported as `false`.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => {
                warn!("Ignoring value for unknown form field '{}'", name);
                false
            }
        }
    }

    /// Resolves the page's submission policy against the current draft.
    pub fn submit(&self) -> SubmitAction {
        let action = match self.policy {
            SubmitPolicy::Navigate(path) => SubmitAction::Navigate(path),
            SubmitPolicy::Acknowledge(message) => SubmitAction::Acknowledge {
                message,
                draft: self.values.clone(),
            },
        };
        debug!("Lead form submitted: {:?}", action);
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUS_TYPES: &[SelectOption] = &[
        SelectOption { value: "mta", label: "MTA/Public Transit" },
        SelectOption { value: "school", label: "School Bus" },
    ];

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
            name: "busType",
            label: "Type of Bus",
            kind: FieldKind::Select(BUS_TYPES),
            placeholder: "Select bus type...",
            required: false,
        },
    ];

    #[test]
    fn fields_start_empty() {
        let draft = FormDraft::new(FIELDS, SubmitPolicy::Navigate("/next"));
        for field in FIELDS {
            assert_eq!(draft.get(field.name), Some(""));
        }
    }

    #[test]
    fn setting_one_field_leaves_the_rest() {
        let mut draft = FormDraft::new(FIELDS, SubmitPolicy::Navigate("/next"));
        draft.set_field("busType", "school");
        let before = draft.clone();

        assert!(draft.set_field("email", "a@b.com"));
        assert_eq!(draft.get("email"), Some("a@b.com"));
        assert_eq!(draft.get("name"), before.get("name"));
        assert_eq!(draft.get("busType"), Some("school"));
    }

    #[test]
    fn unknown_field_is_ignored() {
        let mut draft = FormDraft::new(FIELDS, SubmitPolicy::Navigate("/next"));
        let before = draft.clone();
        assert!(!draft.set_field("emial", "a@b.com"));
        assert_eq!(draft, before);
    }

    #[test]
    fn navigate_policy_yields_destination() {
        let mut draft = FormDraft::new(FIELDS, SubmitPolicy::Navigate("/bus-accident/case-evaluation"));
        draft.set_field("name", "Ada");
        assert_eq!(
            draft.submit(),
            SubmitAction::Navigate("/bus-accident/case-evaluation")
        );
    }

    #[test]
    fn acknowledge_policy_carries_the_draft() {
        let mut draft = FormDraft::new(FIELDS, SubmitPolicy::Acknowledge("Thank you!"));
        draft.set_field("email", "a@b.com");

        match draft.submit() {
            SubmitAction::Acknowledge { message, draft } => {
                assert_eq!(message, "Thank you!");
                assert_eq!(draft.get("email").map(String::as_str), Some("a@b.com"));
                assert_eq!(draft.len(), FIELDS.len());
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut draft = FormDraft::new(FIELDS, SubmitPolicy::Navigate("/next"));
        draft.set_field("email", "a@b.com");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["busType"], "");
    }

    #[test]
    fn input_types_follow_kind() {
        assert_eq!(FieldKind::Email.input_type(), Some("email"));
        assert_eq!(FieldKind::Date.input_type(), Some("date"));
        assert_eq!(FieldKind::Select(BUS_TYPES).input_type(), None);
    }
}
