use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::browser::{self, DocumentViewport};
use crate::components::{
    blocks::render_blocks,
    disclosure::DisclosurePanel,
    entrance::EntranceAnimation,
    faq::FaqList,
    lead_form::LeadFormView,
    seo::SeoHead,
    sidebar::{ClosingBand, CtaButton, SidebarPanel},
    tab_bar::TabBar,
};
use crate::content::{PracticeArea, Section, SectionKind, MORE_FAQS_KEY};
use crate::controller::{PageAction, PageState};

#[derive(Properties, PartialEq)]
pub struct PracticeAreaProps {
    pub page: &'static PracticeArea,
}

/// One practice area page. All interactive state lives in one reducer that
/// is created fresh on mount; the router keys this component by slug.
#[function_component(PracticeAreaPage)]
pub fn practice_area_page(props: &PracticeAreaProps) -> Html {
    let page = props.page;

    let state = use_reducer(|| {
        PageState::new(
            page.tabs(),
            page.lead_form.as_ref().map(|form| (form.fields, form.policy)),
            DocumentViewport,
        )
    });

    use_mount(move || {
        debug!(
            "Mounted practice area '{}' with {} disclosure panels",
            page.slug,
            page.disclosure_keys().len()
        );
        browser::scroll_to_top();
    });

    // Runs once per submit; the sequence number is the dependency.
    {
        let pending = state.submission().map(|(seq, action)| (seq, action.clone()));
        let seq = pending.as_ref().map(|(seq, _)| *seq);
        use_effect_with_deps(
            move |_| {
                if let Some((_, action)) = pending {
                    browser::perform(action);
                }
                || ()
            },
            seq,
        );
    }

    let on_tab = {
        let state = state.clone();
        Callback::from(move |id: &'static str| {
            state.dispatch(PageAction::Activate(id));
            if let Some(href) = page.tab_route(id) {
                browser::go_to(href);
            }
        })
    };

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |key: &'static str| state.dispatch(PageAction::Toggle(key)))
    };

    let on_faq = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(PageAction::SelectFaq(index)))
    };

    let on_field = {
        let state = state.clone();
        Callback::from(move |(name, value): (&'static str, String)| {
            state.dispatch(PageAction::SetField(name, value))
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PageAction::Submit))
    };

    let render_section = |section: &'static Section| {
        let extra = match &section.kind {
            SectionKind::Evaluation => match (page.lead_form.as_ref(), state.draft.clone()) {
                (Some(form), Some(current)) => html! {
                    <LeadFormView
                        draft={current}
                        submit_label={form.submit_label}
                        on_change={on_field.clone()}
                        on_submit={on_submit.clone()}
                    />
                },
                _ => html! {},
            },
            SectionKind::Faq(faq_section) => html! {
                <FaqList
                    entries={page.faqs}
                    preview={faq_section.preview}
                    view_all={faq_section.view_all}
                    open={state.faq.open().copied()}
                    on_select={on_faq.clone()}
                    more_expanded={state.disclosures.is_expanded(MORE_FAQS_KEY)}
                    on_toggle_more={on_toggle.reform(|_: ()| MORE_FAQS_KEY)}
                />
            },
            SectionKind::Prose | SectionKind::Elsewhere(_) => html! {},
        };

        html! {
            <section id={section.id} key={section.id} class="content-section">
                <h2 class="section-heading">{ section.heading }</h2>
                { render_blocks(section.blocks) }
                {
                    for section.disclosures.iter().map(|disclosure| {
                        let key = disclosure.key;
                        html! {
                            <DisclosurePanel
                                label={disclosure.label}
                                expanded={state.disclosures.is_expanded(key)}
                                on_toggle={on_toggle.reform(move |_: ()| key)}
                            >
                                { render_blocks(disclosure.blocks) }
                            </DisclosurePanel>
                        }
                    })
                }
                { extra }
            </section>
        }
    };

    html! {
        <div class="practice-area-page">
            <SeoHead page={page} />
            <section class="hero">
                <div class="hero-content">
                    <h1>{ page.hero.title }</h1>
                    <p class="hero-tagline">{ page.hero.tagline }</p>
                    <CtaButton cta={page.hero.cta} class="cta-button hero-cta" />
                </div>
            </section>
            <TabBar
                tabs={state.nav.tabs().to_vec()}
                active={state.nav.active().to_string()}
                on_select={on_tab}
            />
            <div class="page-body">
                <main class="page-main">
                    { for page.rendered_sections().map(render_section) }
                </main>
                <SidebarPanel sidebar={&page.sidebar} />
            </div>
            <ClosingBand closing={&page.closing} />
            if page.go_back {
                <button
                    type="button"
                    class="go-back-button"
                    onclick={Callback::from(|_: MouseEvent| browser::go_back())}
                >
                    { "\u{2190} Go Back" }
                </button>
            }
            <EntranceAnimation />
        </div>
    }
}
