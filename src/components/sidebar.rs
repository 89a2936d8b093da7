use yew::prelude::*;

use crate::browser;
use crate::content::{CallToAction, Closing, Sidebar};

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub cta: CallToAction,
    #[prop_or(AttrValue::Static("cta-button"))]
    pub class: AttrValue,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaProps) -> Html {
    let href = props.cta.href;
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        browser::go_to(href);
    });

    html! {
        <button type="button" class={props.class.to_string()} {onclick}>
            if let Some(icon) = props.cta.icon {
                <span class="cta-icon">{ icon.glyph() }</span>
            }
            { props.cta.label }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub sidebar: &'static Sidebar,
}

#[function_component(SidebarPanel)]
pub fn sidebar_panel(props: &SidebarProps) -> Html {
    let sidebar = props.sidebar;
    html! {
        <aside class="sidebar">
            <div class="sidebar-card">
                <h3>{ format!("{} Ways to Start Your Case", sidebar.actions.len()) }</h3>
                <p>{ sidebar.blurb }</p>
                <div class="sidebar-actions">
                    { for sidebar.actions.iter().map(|cta| html! { <CtaButton cta={*cta} /> }) }
                </div>
            </div>
            <div class="sidebar-card">
                <h3>{ "Quick Facts" }</h3>
                <ul class="quick-facts">
                    {
                        for sidebar.facts.iter().map(|fact| html! {
                            <li>
                                <span class="fact-icon">{ fact.icon.glyph() }</span>
                                <div>
                                    <strong>{ fact.title }</strong>
                                    <p>{ fact.text }</p>
                                </div>
                            </li>
                        })
                    }
                </ul>
            </div>
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClosingProps {
    pub closing: &'static Closing,
}

#[function_component(ClosingBand)]
pub fn closing_band(props: &ClosingProps) -> Html {
    let closing = props.closing;
    html! {
        <section class="closing-cta content-section">
            <h2>{ closing.heading }</h2>
            <p>{ closing.text }</p>
            <div class="closing-actions">
                {
                    for closing.actions.iter().map(|cta| html! {
                        <CtaButton cta={*cta} class="cta-button large" />
                    })
                }
            </div>
        </section>
    }
}
