use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::controller::{FieldKind, FieldSpec, FormDraft};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub draft: FormDraft,
    pub submit_label: &'static str,
    pub on_change: Callback<(&'static str, String)>,
    pub on_submit: Callback<()>,
}

/// Lead capture form. Browser validation comes from the `type` and
/// `required` attributes; the native submission is always suppressed.
#[function_component(LeadFormView)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="lead-form" {onsubmit}>
            {
                props.draft.schema().iter().map(|field| {
                    let value = props.draft.get(field.name).unwrap_or_default().to_string();
                    render_field(field, value, props.on_change.clone())
                }).collect::<Html>()
            }
            <button type="submit" class="submit-button">{ props.submit_label }</button>
        </form>
    }
}

fn render_field(field: &'static FieldSpec, value: String, on_change: Callback<(&'static str, String)>) -> Html {
    let name = field.name;
    let control = match field.kind {
        FieldKind::Select(options) => {
            let onchange = Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                on_change.emit((name, select.value()));
            });
            html! {
                <select id={name} name={name} required={field.required} {onchange}>
                    <option value="" selected={value.is_empty()}>{ field.placeholder }</option>
                    {
                        options.iter().map(|option| html! {
                            <option value={option.value} selected={value == option.value}>
                                { option.label }
                            </option>
                        }).collect::<Html>()
                    }
                </select>
            }
        }
        FieldKind::TextArea => {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                on_change.emit((name, input.value()));
            });
            html! {
                <textarea
                    id={name}
                    name={name}
                    rows="4"
                    placeholder={field.placeholder}
                    required={field.required}
                    value={value}
                    {oninput}
                />
            }
        }
        kind => {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_change.emit((name, input.value()));
            });
            html! {
                <input
                    id={name}
                    name={name}
                    type={kind.input_type().unwrap_or("text")}
                    placeholder={field.placeholder}
                    required={field.required}
                    value={value}
                    {oninput}
                />
            }
        }
    };

    html! {
        <div class="form-field" key={name}>
            <label for={name}>
                { field.label }
                if field.required {
                    <span class="required">{ " *" }</span>
                }
            </label>
            { control }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::content::PRACTICE_AREAS;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::{window, Event, EventInit};

    #[wasm_bindgen_test]
    async fn submit_is_suppressed_and_emitted_once() {
        let document = window().unwrap().document().unwrap();
        for page in PRACTICE_AREAS {
            let Some(form) = page.lead_form.as_ref() else {
                continue;
            };
            let root = document.create_element("div").unwrap();
            document.body().unwrap().append_child(&root).unwrap();

            let submits = Rc::new(Cell::new(0u32));
            let props = LeadFormProps {
                draft: FormDraft::new(form.fields, form.policy),
                submit_label: form.submit_label,
                on_change: Callback::from(|_: (&'static str, String)| ()),
                on_submit: {
                    let submits = submits.clone();
                    Callback::from(move |_: ()| submits.set(submits.get() + 1))
                },
            };
            let handle = yew::Renderer::<LeadFormView>::with_root_and_props(root.clone(), props)
                .render();
            TimeoutFuture::new(30).await;

            let form_element = root.query_selector("form").unwrap().unwrap();
            let mut init = EventInit::new();
            init.bubbles(true);
            init.cancelable(true);
            let event = Event::new_with_event_init_dict("submit", &init).unwrap();
            form_element.dispatch_event(&event).unwrap();

            assert!(event.default_prevented(), "{} submitted natively", page.slug);
            assert_eq!(submits.get(), 1, "{} emitted {} submits", page.slug, submits.get());

            handle.destroy();
            root.remove();
        }
    }
}
