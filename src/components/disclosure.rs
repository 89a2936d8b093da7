use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DisclosureProps {
    pub label: AttrValue,
    /// Trigger text while the panel is open.
    #[prop_or(AttrValue::Static("Show Less"))]
    pub expanded_label: AttrValue,
    pub expanded: bool,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// A show-more panel. The body is only rendered while expanded.
#[function_component(DisclosurePanel)]
pub fn disclosure_panel(props: &DisclosureProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("disclosure", props.expanded.then(|| "open"))}>
            <button
                type="button"
                class="disclosure-toggle"
                aria-expanded={props.expanded.to_string()}
                {onclick}
            >
                {
                    if props.expanded {
                        props.expanded_label.clone()
                    } else {
                        props.label.clone()
                    }
                }
                <span class="disclosure-chevron">{ if props.expanded { "▲" } else { "▼" } }</span>
            </button>
            if props.expanded {
                <div class="disclosure-body">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}
