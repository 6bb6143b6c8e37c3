use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod utils {
    pub mod scroll;
}
mod components {
    pub mod dialog;
    pub mod status_banner;
}
mod portfolio {
    pub mod grid;
    pub mod models;
}
mod contact {
    pub mod form;
    pub mod section;
    pub mod submit;
}
mod pages {
    pub mod dev_overlay;
    pub mod hero;
    pub mod home;
    pub mod not_found;
    pub mod services;
}

use contact::submit::SubmitterHandle;
use pages::dev_overlay::{DevContact, DevPortfolio};
use pages::home::Home;
use pages::not_found::NotFound;
use utils::scroll::ScrollController;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dev/portfolio")]
    DevPortfolio,
    #[at("/dev/contact")]
    DevContact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

const USER_SCROLL_EVENTS: [&str; 2] = ["wheel", "touchstart"];

/// Development routes only exist when the build sets `DEV_ROUTES=true`.
fn is_available(route: &Route, dev_routes: bool) -> bool {
    match route {
        Route::DevPortfolio | Route::DevContact => dev_routes,
        Route::Home | Route::NotFound => true,
    }
}

fn switch(route: Route, scroll: &ScrollController, submitter: &SubmitterHandle, dev_routes: bool) -> Html {
    if !is_available(&route, dev_routes) {
        log::warn!("Route {:?} requested but dev routes are disabled", route);
        return html! { <NotFound /> };
    }
    match route {
        Route::Home => html! {
            <Home scroll={scroll.clone()} submitter={submitter.clone()} />
        },
        Route::DevPortfolio => html! { <DevPortfolio /> },
        Route::DevContact => html! { <DevContact submitter={submitter.clone()} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let scroll = use_state(|| ScrollController::new(config::SCROLL_DURATION_SECS));
    let submitter = use_state(SubmitterHandle::simulated);

    // The scroll controller lives exactly as long as the app root. Manual
    // wheel or touch input cancels any animation in flight.
    {
        let scroll = (*scroll).clone();
        use_effect_with_deps(
            move |_| {
                let interrupt = {
                    let scroll = scroll.clone();
                    Closure::<dyn Fn()>::new(move || scroll.stop())
                };
                let window = web_sys::window();
                if let Some(window) = &window {
                    for event in USER_SCROLL_EVENTS {
                        if let Err(e) = window.add_event_listener_with_callback(event, interrupt.as_ref().unchecked_ref()) {
                            log::warn!("Could not listen for {}: {:?}", event, e);
                        }
                    }
                }
                log::info!("Scroll controller ready");
                move || {
                    if let Some(window) = window {
                        for event in USER_SCROLL_EVENTS {
                            let _ = window.remove_event_listener_with_callback(event, interrupt.as_ref().unchecked_ref());
                        }
                    }
                    scroll.destroy();
                }
            },
            (),
        );
    }

    let render = {
        let scroll = (*scroll).clone();
        let submitter = (*submitter).clone();
        let dev_routes = config::dev_routes_enabled();
        Callback::from(move |route: Route| switch(route, &scroll, &submitter, dev_routes))
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting WebDevStudio site");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_routes_are_gated_by_the_build_flag() {
        assert!(is_available(&Route::Home, false));
        assert!(is_available(&Route::NotFound, false));
        assert!(!is_available(&Route::DevPortfolio, false));
        assert!(!is_available(&Route::DevContact, false));
        assert!(is_available(&Route::DevPortfolio, true));
        assert!(is_available(&Route::DevContact, true));
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::DevPortfolio.to_path(), "/dev/portfolio");
        assert_eq!(Route::DevContact.to_path(), "/dev/contact");
    }
}
