use yew::prelude::*;

use crate::browser;
use crate::components::disclosure::DisclosurePanel;
use crate::content::{CallToAction, FaqEntry};

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: &'static [FaqEntry],
    pub preview: Option<usize>,
    pub view_all: Option<CallToAction>,
    /// Index of the open entry, if any.
    pub open: Option<usize>,
    pub on_select: Callback<usize>,
    pub more_expanded: bool,
    pub on_toggle_more: Callback<()>,
}

/// Splits `len` entries into the always-visible head and the tail hidden
/// behind the "show more" panel.
pub fn preview_split(len: usize, preview: Option<usize>) -> (usize, usize) {
    match preview {
        Some(shown) if shown < len => (shown, len - shown),
        _ => (len, 0),
    }
}

pub fn more_faqs_label(hidden: usize) -> String {
    format!("Show More FAQs ({} Additional Questions)", hidden)
}

/// FAQ accordion. Head and tail share one selector, so at most one entry is
/// open across the whole list.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqProps) -> Html {
    let (shown, hidden) = preview_split(props.entries.len(), props.preview);

    let render_entry = |index: usize, entry: &'static FaqEntry| {
        let is_open = props.open == Some(index);
        let onclick = {
            let on_select = props.on_select.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(index))
        };
        html! {
            <div class={classes!("faq-item", is_open.then(|| "open"))} key={index}>
                <button type="button" class="faq-question" aria-expanded={is_open.to_string()} {onclick}>
                    <span>{ entry.question }</span>
                    <span class="faq-chevron">{ if is_open { "−" } else { "+" } }</span>
                </button>
                if is_open {
                    <div class="faq-answer">
                        <p>{ entry.answer }</p>
                    </div>
                }
            </div>
        }
    };

    let head = props
        .entries
        .iter()
        .enumerate()
        .take(shown)
        .map(|(i, entry)| render_entry(i, entry))
        .collect::<Html>();

    let tail = props
        .entries
        .iter()
        .enumerate()
        .skip(shown)
        .map(|(i, entry)| render_entry(i, entry))
        .collect::<Html>();

    html! {
        <div class="faq-list">
            { head }
            if hidden > 0 {
                <DisclosurePanel
                    label={more_faqs_label(hidden)}
                    expanded={props.more_expanded}
                    on_toggle={props.on_toggle_more.clone()}
                >
                    { tail }
                </DisclosurePanel>
            }
            if let Some(cta) = props.view_all {
                <div class="faq-view-all">
                    <button
                        type="button"
                        class="secondary-button"
                        onclick={Callback::from(move |_: MouseEvent| browser::go_to(cta.href))}
                    >
                        { cta.label }
                    </button>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_list_shows_everything() {
        assert_eq!(preview_split(8, Some(10)), (8, 0));
        assert_eq!(preview_split(10, Some(10)), (10, 0));
        assert_eq!(preview_split(51, None), (51, 0));
    }

    #[test]
    fn long_list_hides_the_tail() {
        assert_eq!(preview_split(51, Some(10)), (10, 41));
    }

    #[test]
    fn more_label_counts_hidden_entries() {
        assert_eq!(
            more_faqs_label(41),
            "Show More FAQs (41 Additional Questions)"
        );
    }
}
