//! Fade-in of page sections as they come into view.
//!
//! Elements with the `content-section` class are hidden by the stylesheet
//! until they get `is-visible`. The same listener shows the floating
//! "Go Back" button once the hero has scrolled away.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Window};
use yew::prelude::*;

const SECTION_SELECTOR: &str = ".content-section:not(.is-visible)";
const HERO_SELECTOR: &str = ".hero-content";
const HERO_SECTION_SELECTOR: &str = ".hero";
const GO_BACK_SELECTOR: &str = ".go-back-button";
const VISIBLE_CLASS: &str = "is-visible";

/// Share of the viewport height a section's top must be above to reveal.
const REVEAL_FRACTION: f64 = 0.8;
const STAGGER_MS: u32 = 100;
/// The go-back button shows once the hero's bottom edge is above this share
/// of the viewport height.
const GO_BACK_FRACTION: f64 = 0.9;

pub fn in_reveal_zone(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_FRACTION
}

pub fn stagger_delay(position: usize) -> u32 {
    position as u32 * STAGGER_MS
}

pub fn go_back_visible(hero_bottom: f64, viewport_height: f64) -> bool {
    hero_bottom <= viewport_height * GO_BACK_FRACTION
}

fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

fn hidden_sections(document: &Document) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(SECTION_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn reveal(element: &Element) {
    let _ = element.class_list().add_1(VISIBLE_CLASS);
}

/// Shows or hides the go-back button against the hero position. Pages
/// without the button are left alone.
fn sync_go_back(document: &Document, height: f64) {
    let Ok(Some(button)) = document.query_selector(GO_BACK_SELECTOR) else {
        return;
    };
    let Ok(Some(hero)) = document.query_selector(HERO_SECTION_SELECTOR) else {
        return;
    };
    let classes = button.class_list();
    let _ = if go_back_visible(hero.get_bounding_client_rect().bottom(), height) {
        classes.add_1(VISIBLE_CLASS)
    } else {
        classes.remove_1(VISIBLE_CLASS)
    };
}

/// Reveals every hidden section already inside the reveal zone.
fn reveal_in_view() {
    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let height = viewport_height(&window);
    for section in hidden_sections(&document) {
        if in_reveal_zone(section.get_bounding_client_rect().top(), height) {
            reveal(&section);
        }
    }
    sync_go_back(&document, height);
}

/// Mount it once per page, after the sections it animates.
#[function_component(EntranceAnimation)]
pub fn entrance_animation() -> Html {
    use_effect_with_deps(
        |_| {
            let mut timers: Vec<Timeout> = Vec::new();
            let mut listener = None;

            if let Some(window) = window() {
                if let Some(document) = window.document() {
                    if let Ok(Some(hero)) = document.query_selector(HERO_SELECTOR) {
                        reveal(&hero);
                    }

                    let height = viewport_height(&window);
                    sync_go_back(&document, height);
                    let initial = hidden_sections(&document)
                        .into_iter()
                        .filter(|s| in_reveal_zone(s.get_bounding_client_rect().top(), height));
                    for (position, section) in initial.enumerate() {
                        timers.push(Timeout::new(stagger_delay(position), move || reveal(&section)));
                    }
                }

                let on_scroll = Closure::wrap(Box::new(reveal_in_view) as Box<dyn FnMut()>);
                if window
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                    .is_ok()
                {
                    listener = Some((window, on_scroll));
                }
            }

            move || {
                // Dropping a Timeout cancels it.
                drop(timers);
                if let Some((window, on_scroll)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_zone_is_upper_eighty_percent() {
        assert!(in_reveal_zone(0.0, 1000.0));
        assert!(in_reveal_zone(799.0, 1000.0));
        assert!(!in_reveal_zone(800.0, 1000.0));
        assert!(!in_reveal_zone(1500.0, 1000.0));
    }

    #[test]
    fn sections_are_staggered_by_a_tenth_of_a_second() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), 100);
        assert_eq!(stagger_delay(4), 400);
    }

    #[test]
    fn go_back_shows_once_hero_bottom_clears_ninety_percent() {
        assert!(!go_back_visible(1000.0, 1000.0));
        assert!(!go_back_visible(901.0, 1000.0));
        assert!(go_back_visible(900.0, 1000.0));
        assert!(go_back_visible(-50.0, 1000.0));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    fn document() -> Document {
        window().unwrap().document().unwrap()
    }

    fn attach(tag: &str, class: &str, style: &str) -> Element {
        let element = document().create_element(tag).unwrap();
        element.set_class_name(class);
        element.set_attribute("style", style).unwrap();
        document().body().unwrap().append_child(&element).unwrap();
        element
    }

    fn scroll() {
        let event = Event::new("scroll").unwrap();
        window().unwrap().dispatch_event(&event).unwrap();
    }

    fn is_visible(element: &Element) -> bool {
        element.class_list().contains(VISIBLE_CLASS)
    }

    #[wasm_bindgen_test]
    async fn scroll_after_unmount_reveals_nothing() {
        let section = attach("section", "content-section", "position:fixed;top:0;height:10px");
        let root = attach("div", "", "");
        let handle = yew::Renderer::<EntranceAnimation>::with_root(root.clone()).render();
        TimeoutFuture::new(30).await;
        assert!(is_visible(&section));

        section.class_list().remove_1(VISIBLE_CLASS).unwrap();
        scroll();
        assert!(is_visible(&section));

        section.class_list().remove_1(VISIBLE_CLASS).unwrap();
        handle.destroy();
        TimeoutFuture::new(30).await;
        scroll();
        assert!(!is_visible(&section));

        section.remove();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn unmount_cancels_pending_stagger() {
        let first = attach("section", "content-section", "position:fixed;top:0;height:10px");
        let second = attach("section", "content-section", "position:fixed;top:20px;height:10px");
        let root = attach("div", "", "");
        let handle = yew::Renderer::<EntranceAnimation>::with_root(root.clone()).render();
        TimeoutFuture::new(30).await;
        handle.destroy();
        TimeoutFuture::new(200).await;
        assert!(!is_visible(&second));

        first.remove();
        second.remove();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn go_back_button_follows_the_hero() {
        let hero = attach("section", "hero", "position:fixed;top:-500px;height:100px;width:10px");
        let button = attach("button", "go-back-button", "");
        let root = attach("div", "", "");
        let handle = yew::Renderer::<EntranceAnimation>::with_root(root.clone()).render();
        TimeoutFuture::new(30).await;
        assert!(is_visible(&button));

        hero.set_attribute("style", "position:fixed;top:0;height:100vh;width:10px")
            .unwrap();
        scroll();
        assert!(!is_visible(&button));

        handle.destroy();
        hero.remove();
        button.remove();
        root.remove();
    }
}
