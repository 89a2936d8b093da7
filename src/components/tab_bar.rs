use yew::prelude::*;

use crate::controller::{Tab, TabTarget};

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub tabs: Vec<Tab>,
    pub active: AttrValue,
    pub on_select: Callback<&'static str>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <nav class="tab-bar">
            <div class="tab-bar-inner">
                {
                    for props.tabs.iter().map(|tab| {
                        let id = tab.id;
                        let onclick = {
                            let on_select = props.on_select.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_select.emit(id);
                            })
                        };
                        let is_active = &*props.active == id;
                        let leaves = matches!(tab.target, TabTarget::Route(_));
                        html! {
                            <button
                                type="button"
                                key={id}
                                class={classes!("tab", is_active.then(|| "active"), leaves.then(|| "external"))}
                                aria-current={is_active.then(|| "true")}
                                {onclick}
                            >
                                <span class="tab-icon">{ tab.icon.glyph() }</span>
                                <span class="tab-label">{ tab.label }</span>
                            </button>
                        }
                    })
                }
            </div>
        </nav>
    }
}
