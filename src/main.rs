use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod accordion;
mod config;
mod content;
mod icons;
mod reveal;
mod theme;
mod visibility;
mod components {
    pub mod about;
    pub mod benefits;
    pub mod cta;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod heading;
    pub mod hero;
    pub mod loader;
    pub mod pricing;
    pub mod roadmap;
    pub mod tokenomics;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::loader::Loader;
use pages::{landing::Landing, not_found::NotFound};
use theme::{Theme, ThemeStyle};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing sections={config::sections()} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let theme = use_memo(|_| Theme::anonium(), ());
    let loading = use_state(|| true);

    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::SPLASH_DELAY_MS, move || {
                    info!("Splash dismissed after {}ms", config::SPLASH_DELAY_MS);
                    loading.set(false);
                });
                // Dropping the handle cancels the timer if we unmount first.
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <ContextProvider<Theme> context={(*theme).clone()}>
            <ThemeStyle theme={(*theme).clone()} />
            {
                if *loading {
                    html! { <Loader /> }
                } else {
                    html! {
                        <BrowserRouter>
                            <Switch<Route> render={switch} />
                        </BrowserRouter>
                    }
                }
            }
        </ContextProvider<Theme>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
