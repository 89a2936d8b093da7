use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::PRACTICE_AREAS;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(&format!("Practice Areas | {}", config::FIRM_NAME));
            }
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            <section class="hero">
                <div class="hero-content is-visible">
                    <h1>{ "Practice Areas" }</h1>
                    <p class="hero-tagline">{ "Former defense attorneys now fighting for injured Californians" }</p>
                </div>
            </section>
            <ul class="practice-area-index">
                {
                    for PRACTICE_AREAS.iter().map(|page| html! {
                        <li key={page.slug}>
                            <Link<Route> to={Route::PracticeArea { slug: page.slug.to_string() }} classes="practice-area-link">
                                <h2>{ page.name }</h2>
                                <p>{ page.hero.tagline }</p>
                            </Link<Route>>
                        </li>
                    })
                }
            </ul>
            <div class="home-contact">
                <a href={config::PHONE_TEL} class="cta-button">{ format!("Call {}", config::PHONE_DISPLAY) }</a>
                <a href={config::EMAIL_MAILTO} class="secondary-button">{ "Email Us" }</a>
            </div>
        </div>
    }
}
