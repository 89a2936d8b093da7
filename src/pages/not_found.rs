use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{ "Page Not Found" }</h1>
            <p>{ "We couldn't find the practice area you were looking for." }</p>
            <Link<Route> to={Route::Home} classes="cta-button">
                { "See All Practice Areas" }
            </Link<Route>>
        </div>
    }
}
