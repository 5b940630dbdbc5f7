use yew::prelude::*;

use crate::content::CTA_PERKS;
use crate::icons::Icon;
use crate::reveal::{Direction, ScrollReveal};

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="cta-section">
            <ScrollReveal direction={Direction::Scale} delay={200}>
                <div class="cta-panel">
                    <h2>
                        <span class="heading-plain">{"READY TO"}</span>
                        <br />
                        <span class="heading-highlight">{"GO PRIVATE?"}</span>
                    </h2>
                    <p>{"Join thousands of users who browse without being watched, on every device they own."}</p>
                    <div class="hero-actions">
                        <button class="btn-primary">
                            { Icon::Wallet.html("btn-icon") }
                            <span class="wide-only">{"Connect Wallet & Start"}</span>
                            <span class="narrow-only">{"Start Now"}</span>
                            { Icon::ArrowRight.html("btn-icon nudge") }
                        </button>
                        <button class="btn-outline">
                            { Icon::Star.html("btn-icon") }
                            <span class="wide-only">{"Read Whitepaper"}</span>
                            <span class="narrow-only">{"Whitepaper"}</span>
                        </button>
                    </div>
                    <div class="cta-perks">
                        { for CTA_PERKS.iter().map(|(icon, label)| html! {
                            <div class="cta-perk" key={*label}>
                                { icon.html("perk-icon") }
                                <span>{*label}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </ScrollReveal>
            <style>
                {r#"
                .cta-section {
                    position: relative;
                    padding: 8rem 2rem;
                }
                .cta-panel {
                    max-width: 72rem;
                    margin: 0 auto;
                    text-align: center;
                    padding: 4rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 0, 58, 0.3);
                    background: linear-gradient(to bottom right, rgba(255, 0, 58, 0.1), rgba(182, 6, 110, 0.1));
                    box-shadow: 0 25px 50px rgba(255, 0, 58, 0.2);
                }
                .cta-panel h2 {
                    font-size: clamp(1.875rem, 5vw, 3.75rem);
                    font-weight: 900;
                    margin-bottom: 2rem;
                }
                .cta-panel > p {
                    color: #d1d5db;
                    font-size: 1.25rem;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                }
                .cta-perks {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .cta-perk {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .perk-icon {
                    width: 16px;
                    height: 16px;
                }
                "#}
            </style>
        </section>
    }
}
