use yew::prelude::*;

use crate::components::{
    about::About, benefits::Benefits, cta::CallToAction, faq::Faq, footer::Footer,
    header::Header, hero::Hero, pricing::Pricing, roadmap::Roadmap, tokenomics::Tokenomics,
};
use crate::config::Sections;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub sections: Sections,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let sections = props.sections;

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Header sections={sections} />
            <Hero />
            <About />
            <Benefits />
            { if sections.pricing { html! { <Pricing /> } } else { html! {} } }
            { if sections.tokenomics { html! { <Tokenomics /> } } else { html! {} } }
            <Roadmap />
            { if sections.faq { html! { <Faq /> } } else { html! {} } }
            { if sections.cta { html! { <CallToAction /> } } else { html! {} } }
            <Footer />
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    position: relative;
                    overflow: hidden;
                    background: #000;
                    color: #fff;
                }
                .landing-page section {
                    z-index: 1;
                }
                "#}
            </style>
        </div>
    }
}
