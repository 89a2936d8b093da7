//! Thin wrappers over the few browser calls the pages make. Failures are
//! logged and swallowed; nothing here is worth interrupting a visitor for.

use std::collections::BTreeMap;

use log::warn;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::controller::{SubmitAction, Viewport};

/// The live document. Sections are found by element id.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentViewport;

impl Viewport for DocumentViewport {
    fn scroll_to(&self, id: &str) -> bool {
        let element = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id));

        match element {
            Some(element) => {
                let mut options = ScrollIntoViewOptions::new();
                options.behavior(ScrollBehavior::Smooth);
                options.block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

/// Full location change to `href`. Paths, `tel:` and `mailto:` URIs are
/// all handed to the browser as is.
pub fn go_to(href: &str) {
    let Some(window) = window() else {
        return;
    };
    if window.location().set_href(href).is_err() {
        warn!("Browser refused to navigate to {}", href);
    }
}

/// One step back in the session history.
pub fn go_back() {
    let Some(window) = window() else {
        return;
    };
    match window.history() {
        Ok(history) => {
            if history.back().is_err() {
                warn!("Browser refused to go back");
            }
        }
        Err(_) => warn!("Session history is not available"),
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Writes the draft to the console as an object and shows `message` in a
/// blocking dialog.
pub fn acknowledge(message: &str, draft: &BTreeMap<String, String>) {
    match serde_wasm_bindgen::to_value(draft) {
        Ok(value) => gloo_console::log!("Form submitted:", value),
        Err(e) => warn!("Could not convert form draft for logging: {}", e),
    }
    if let Some(window) = window() {
        if window.alert_with_message(message).is_err() {
            warn!("Could not show submission alert");
        }
    }
}

/// Carries out what a lead form submission resolved to.
pub fn perform(action: SubmitAction) {
    match action {
        SubmitAction::Navigate(path) => go_to(path),
        SubmitAction::Acknowledge { message, draft } => acknowledge(message, &draft),
    }
}
