use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod browser;
mod components;
mod config;
mod content;
mod controller;
mod icon;
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod practice_area;
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use pages::{home::Home, not_found::NotFound, practice_area::PracticeAreaPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/practice-areas/:slug")]
    PracticeArea { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::PracticeArea { slug } => match content::find(&slug) {
            Some(page) => {
                info!("Rendering {} page", page.name);
                // Keyed by slug so moving between areas remounts with fresh state.
                html! { <PracticeAreaPage key={slug} page={page} /> }
            }
            None => {
                info!("Rendering NotFound page for unknown area '{}'", slug);
                html! { <NotFound /> }
            }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|win| {
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                        is_scrolled.set(scroll_y > 80.0);
                    }) as Box<dyn FnMut()>);
                    let _ = win.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    (win, scroll_callback)
                });

                move || {
                    if let Some((win, scroll_callback)) = listener {
                        let _ = win.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { config::FIRM_NAME }
                </Link<Route>>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for content::PRACTICE_AREAS.iter().map(|page| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route>
                                    to={Route::PracticeArea { slug: page.slug.to_string() }}
                                    classes="nav-link"
                                >
                                    { page.name }
                                </Link<Route>>
                            </div>
                        })
                    }
                    <a href={config::PHONE_TEL} class="nav-call-button">
                        { config::PHONE_DISPLAY }
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
